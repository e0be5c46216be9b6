// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// A restartable sequence replayed a fixed number of times.
///
/// Each pass starts from a fresh clone of the original iterator. An empty
/// source ends the replay after its first pass.
#[derive(Debug, Clone)]
pub struct CycleTimes<I> {
    original: I,
    current: Option<I>,
    remaining: usize,
    pass_yielded: bool,
}

impl<I: Iterator + Clone> CycleTimes<I> {
    pub const fn new(iter: I, count: usize) -> Self {
        Self {
            original: iter,
            current: None,
            remaining: count,
            pass_yielded: false,
        }
    }
}

impl<I: Iterator + Clone> Iterator for CycleTimes<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(current) = &mut self.current {
                if let Some(item) = current.next() {
                    self.pass_yielded = true;
                    return Some(item);
                }

                self.current = None;
                if !self.pass_yielded {
                    self.remaining = 0;
                }
            }

            if self.remaining == 0 {
                return None;
            }

            self.remaining -= 1;
            self.pass_yielded = false;
            self.current = Some(self.original.clone());
        }
    }
}

/// Extension trait providing bounded cycling for restartable iterators.
///
/// Unbounded cycling is [`Iterator::cycle`].
pub trait CycleTimesExt: Iterator + Clone + Sized {
    /// ```
    /// use iterflux_iter::CycleTimesExt;
    ///
    /// let replayed: Vec<_> = [1, 2].into_iter().cycle_times(3).collect();
    /// assert_eq!(replayed, vec![1, 2, 1, 2, 1, 2]);
    /// ```
    fn cycle_times(self, count: usize) -> CycleTimes<Self> {
        CycleTimes::new(self, count)
    }
}

impl<I: Iterator + Clone> CycleTimesExt for I {}
