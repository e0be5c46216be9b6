// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Predicate-driven slicing into contiguous runs.
//!
//! ```
//! use iterflux_iter::SliceByExt;
//!
//! let runs: Vec<_> = [1, 2, 4, 9, 10, 11, 15]
//!     .into_iter()
//!     .slice_when(|previous, current| previous + 1 != *current)
//!     .collect();
//!
//! assert_eq!(runs, vec![vec![1, 2], vec![4], vec![9, 10, 11], vec![15]]);
//! ```

use core::mem;

/// Ends a slice after every element matching the predicate.
#[derive(Debug, Clone)]
pub struct SliceAfter<I: Iterator, P> {
    iter: I,
    predicate: P,
    slice: Vec<I::Item>,
    done: bool,
}

impl<I: Iterator, P> SliceAfter<I, P> {
    pub fn new(iter: I, predicate: P) -> Self {
        Self {
            iter,
            predicate,
            slice: Vec::new(),
            done: false,
        }
    }
}

impl<I, P> Iterator for SliceAfter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        for element in self.iter.by_ref() {
            let closes = (self.predicate)(&element);
            self.slice.push(element);
            if closes {
                return Some(mem::take(&mut self.slice));
            }
        }

        self.done = true;
        let remainder = mem::take(&mut self.slice);
        (!remainder.is_empty()).then_some(remainder)
    }
}

/// Starts a new slice at every element matching the predicate.
///
/// If the very first element matches, an empty leading slice is yielded.
#[derive(Debug, Clone)]
pub struct SliceBefore<I: Iterator, P> {
    iter: I,
    predicate: P,
    slice: Vec<I::Item>,
    done: bool,
}

impl<I: Iterator, P> SliceBefore<I, P> {
    pub fn new(iter: I, predicate: P) -> Self {
        Self {
            iter,
            predicate,
            slice: Vec::new(),
            done: false,
        }
    }
}

impl<I, P> Iterator for SliceBefore<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        for element in self.iter.by_ref() {
            if (self.predicate)(&element) {
                let completed = mem::replace(&mut self.slice, vec![element]);
                return Some(completed);
            }
            self.slice.push(element);
        }

        self.done = true;
        let remainder = mem::take(&mut self.slice);
        (!remainder.is_empty()).then_some(remainder)
    }
}

/// Breaks between adjacent elements for which the predicate holds.
///
/// The final slice is always yielded, so an empty input produces one empty
/// slice.
#[derive(Debug, Clone)]
pub struct SliceWhen<I: Iterator, P> {
    iter: I,
    predicate: P,
    slice: Vec<I::Item>,
    done: bool,
}

impl<I: Iterator, P> SliceWhen<I, P> {
    pub fn new(iter: I, predicate: P) -> Self {
        Self {
            iter,
            predicate,
            slice: Vec::new(),
            done: false,
        }
    }
}

impl<I, P> Iterator for SliceWhen<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, &I::Item) -> bool,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        for element in self.iter.by_ref() {
            // The running slice is never empty after the first element, and its
            // last entry is the previous element.
            let breaks = self
                .slice
                .last()
                .is_some_and(|previous| (self.predicate)(previous, &element));

            if breaks {
                return Some(mem::replace(&mut self.slice, vec![element]));
            }
            self.slice.push(element);
        }

        self.done = true;
        Some(mem::take(&mut self.slice))
    }
}

/// Extension trait providing predicate slicing for any iterator.
pub trait SliceByExt: Iterator + Sized {
    /// Yields runs that each end with an element satisfying `predicate`,
    /// followed by any non-empty remainder.
    fn slice_after<P>(self, predicate: P) -> SliceAfter<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        SliceAfter::new(self, predicate)
    }

    /// Yields runs that each start with an element satisfying `predicate`.
    fn slice_before<P>(self, predicate: P) -> SliceBefore<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        SliceBefore::new(self, predicate)
    }

    /// Yields runs split wherever `predicate(previous, current)` is true.
    fn slice_when<P>(self, predicate: P) -> SliceWhen<Self, P>
    where
        P: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        SliceWhen::new(self, predicate)
    }
}

impl<I: Iterator> SliceByExt for I {}
