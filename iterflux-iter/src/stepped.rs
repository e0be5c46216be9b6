// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::validation::require_positive;
use core::iter::StepBy;
use iterflux_core::Result;

/// Every `step`-th element, starting with the first.
///
/// Behaves as [`Iterator::step_by`], except that a zero step is reported as
/// `InvalidArgument` instead of panicking.
#[derive(Debug, Clone)]
pub struct Stepped<I> {
    inner: StepBy<I>,
}

impl<I: Iterator> Stepped<I> {
    pub fn new(iter: I, step: usize) -> Result<Self> {
        let step = require_positive("step", step)?;

        Ok(Self {
            inner: iter.step_by(step),
        })
    }
}

impl<I: Iterator> Iterator for Stepped<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

pub trait SteppedExt: Iterator + Sized {
    /// Yields the elements at positions `0, step, 2 * step, ...`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `step` is zero.
    fn stepped(self, step: usize) -> Result<Stepped<Self>> {
        Stepped::new(self, step)
    }
}

impl<I: Iterator> SteppedExt for I {}
