// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Operators that need the end of the sequence before yielding anything.
//!
//! Each snapshots its source on the first pull, then drains the selected part
//! of the snapshot. The source must therefore be finite.

use crate::logging::trace;
use std::vec;

fn snapshot<I: Iterator>(source: &mut Option<I>, operation: &str) -> Option<Vec<I::Item>> {
    source.take().map(|iter| {
        let items: Vec<I::Item> = iter.collect();
        trace!("{}: snapshot of {} elements", operation, items.len());
        items
    })
}

/// Index just past the last element failing `predicate`, i.e. the start of the
/// longest suffix satisfying it.
fn suffix_start<T>(items: &[T], mut predicate: impl FnMut(&T) -> bool) -> usize {
    items
        .iter()
        .rposition(|item| !predicate(item))
        .map_or(0, |index| index + 1)
}

/// The last `count` elements.
pub struct TakeLast<I: Iterator> {
    source: Option<I>,
    count: usize,
    drained: vec::IntoIter<I::Item>,
}

impl<I: Iterator> TakeLast<I> {
    pub fn new(iter: I, count: usize) -> Self {
        Self {
            source: Some(iter),
            count,
            drained: Vec::new().into_iter(),
        }
    }
}

impl<I: Iterator> Iterator for TakeLast<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(mut items) = snapshot(&mut self.source, "take_last") {
            let start = items.len().saturating_sub(self.count);
            self.drained = items.split_off(start).into_iter();
        }
        self.drained.next()
    }
}

/// Everything except the last `count` elements.
pub struct DropLast<I: Iterator> {
    source: Option<I>,
    count: usize,
    drained: vec::IntoIter<I::Item>,
}

impl<I: Iterator> DropLast<I> {
    pub fn new(iter: I, count: usize) -> Self {
        Self {
            source: Some(iter),
            count,
            drained: Vec::new().into_iter(),
        }
    }
}

impl<I: Iterator> Iterator for DropLast<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(mut items) = snapshot(&mut self.source, "drop_last") {
            items.truncate(items.len().saturating_sub(self.count));
            self.drained = items.into_iter();
        }
        self.drained.next()
    }
}

/// The longest suffix whose elements all satisfy the predicate.
pub struct TakeLastWhile<I: Iterator, P> {
    source: Option<I>,
    predicate: P,
    drained: vec::IntoIter<I::Item>,
}

impl<I: Iterator, P> TakeLastWhile<I, P> {
    pub fn new(iter: I, predicate: P) -> Self {
        Self {
            source: Some(iter),
            predicate,
            drained: Vec::new().into_iter(),
        }
    }
}

impl<I, P> Iterator for TakeLastWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(mut items) = snapshot(&mut self.source, "take_last_while") {
            let start = suffix_start(&items, &mut self.predicate);
            self.drained = items.split_off(start).into_iter();
        }
        self.drained.next()
    }
}

/// Everything before the longest suffix satisfying the predicate.
pub struct DropLastWhile<I: Iterator, P> {
    source: Option<I>,
    predicate: P,
    drained: vec::IntoIter<I::Item>,
}

impl<I: Iterator, P> DropLastWhile<I, P> {
    pub fn new(iter: I, predicate: P) -> Self {
        Self {
            source: Some(iter),
            predicate,
            drained: Vec::new().into_iter(),
        }
    }
}

impl<I, P> Iterator for DropLastWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(mut items) = snapshot(&mut self.source, "drop_last_while") {
            let end = suffix_start(&items, &mut self.predicate);
            items.truncate(end);
            self.drained = items.into_iter();
        }
        self.drained.next()
    }
}

/// Extension trait providing trailing-context selection for finite iterators.
pub trait TakeLastExt: Iterator + Sized {
    /// ```
    /// use iterflux_iter::TakeLastExt;
    ///
    /// assert_eq!((1..=5).take_last(2).collect::<Vec<_>>(), vec![4, 5]);
    /// assert_eq!((1..=5).drop_last(2).collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    fn take_last(self, count: usize) -> TakeLast<Self> {
        TakeLast::new(self, count)
    }

    fn drop_last(self, count: usize) -> DropLast<Self> {
        DropLast::new(self, count)
    }

    fn take_last_while<P>(self, predicate: P) -> TakeLastWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        TakeLastWhile::new(self, predicate)
    }

    fn drop_last_while<P>(self, predicate: P) -> DropLastWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        DropLastWhile::new(self, predicate)
    }
}

impl<I: Iterator> TakeLastExt for I {}
