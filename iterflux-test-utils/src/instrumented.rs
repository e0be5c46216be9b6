// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Instrumented sequences for observing how operators consume their input.
//!
//! - [`CountingIter`] records every pull so tests can assert laziness and
//!   single-pass consumption
//! - [`SingleShot`] is a deliberately non-`Clone` source that can only be
//!   traversed once
//! - [`Bursts`] is an unfused source that resumes after signalling exhaustion

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Shared view of the number of elements pulled from a [`CountingIter`].
#[derive(Debug, Clone, Default)]
pub struct PullCounter {
    pulls: Rc<Cell<usize>>,
}

impl PullCounter {
    /// Number of elements produced so far (exhaustion signals are not counted).
    #[must_use]
    pub fn get(&self) -> usize {
        self.pulls.get()
    }
}

/// A sequence wrapper that counts the elements pulled through it.
///
/// # Examples
///
/// ```rust
/// use iterflux_test_utils::CountingIter;
///
/// let (mut iter, counter) = CountingIter::new(vec![1, 2, 3].into_iter());
/// assert_eq!(counter.get(), 0);
///
/// iter.next();
/// iter.next();
/// assert_eq!(counter.get(), 2);
/// ```
#[derive(Debug)]
pub struct CountingIter<I> {
    inner: I,
    counter: PullCounter,
}

impl<I> CountingIter<I> {
    /// Wraps `inner`, returning the wrapper and a handle to its pull count.
    pub fn new(inner: I) -> (Self, PullCounter) {
        let counter = PullCounter::default();
        let iter = Self {
            inner,
            counter: counter.clone(),
        };
        (iter, counter)
    }
}

impl<I: Iterator> Iterator for CountingIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next();
        if item.is_some() {
            self.counter.pulls.set(self.counter.pulls.get() + 1);
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// A sequence that can be traversed exactly once.
///
/// It is not `Clone`, so operators that need a fresh traversal cannot obtain
/// one, and once exhausted it stays exhausted.
#[derive(Debug)]
pub struct SingleShot<I> {
    inner: Option<I>,
}

impl<I> SingleShot<I> {
    pub const fn new(inner: I) -> Self {
        Self { inner: Some(inner) }
    }
}

impl<I: Iterator> Iterator for SingleShot<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.as_mut()?.next();
        if item.is_none() {
            self.inner = None;
        }
        item
    }
}

/// An unfused sequence that returns `None` after every burst and then resumes
/// with the next one.
///
/// ```rust
/// use iterflux_test_utils::Bursts;
///
/// let mut iter = Bursts::new(vec![vec![1], vec![2]]);
/// assert_eq!(iter.next(), Some(1));
/// assert_eq!(iter.next(), None);
/// assert_eq!(iter.next(), Some(2));
/// assert_eq!(iter.next(), None);
/// assert_eq!(iter.next(), None);
/// ```
#[derive(Debug)]
pub struct Bursts<T> {
    bursts: VecDeque<VecDeque<T>>,
}

impl<T> Bursts<T> {
    pub fn new(bursts: Vec<Vec<T>>) -> Self {
        Self {
            bursts: bursts.into_iter().map(VecDeque::from).collect(),
        }
    }
}

impl<T> Iterator for Bursts<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let burst = self.bursts.front_mut()?;
        let item = burst.pop_front();
        if item.is_none() {
            self.bursts.pop_front();
        }
        item
    }
}
