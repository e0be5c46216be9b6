// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::Stream;

/// A lazy sequence exposed as a `futures::Stream`.
///
/// Each poll pulls exactly one element from the wrapped iterator and is always
/// ready; no work is spawned and nothing is buffered.
#[derive(Debug, Clone)]
pub struct SequenceStream<I> {
    iter: I,
}

impl<I> SequenceStream<I> {
    pub const fn new(iter: I) -> Self {
        Self { iter }
    }

    /// Returns the wrapped sequence, positioned after the last polled element.
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I> Stream for SequenceStream<I>
where
    I: Iterator + Unpin,
{
    type Item = I::Item;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Poll::Ready(Pin::into_inner(self).iter.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// A trait for sequences that can be consumed as a `Stream`.
///
/// Blanket-implemented for every `Iterator`, so any operator output can feed
/// an async consumer.
pub trait IntoSequenceStream: Iterator + Sized {
    fn into_sequence_stream(self) -> SequenceStream<Self> {
        SequenceStream::new(self)
    }
}

impl<I: Iterator> IntoSequenceStream for I {}
