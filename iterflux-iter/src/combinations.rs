// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! k-combinations of a finite sequence.
//!
//! The source is snapshotted on the first pull. Combinations are produced in
//! lexicographic order of the source positions they select, so
//! `"ABCD".combinations(2)` yields `AB AC AD BC BD CD`.
//!
//! ```
//! use iterflux_iter::CombinationsExt;
//!
//! let pairs: Vec<String> = "ABCD"
//!     .chars()
//!     .combinations(2)
//!     .map(|pair| pair.into_iter().collect())
//!     .collect();
//!
//! assert_eq!(pairs, ["AB", "AC", "AD", "BC", "BD", "CD"]);
//! ```

use crate::logging::trace;
use core::mem;

enum CombinationState<I: Iterator> {
    Pending(I),
    Running {
        pool: Vec<I::Item>,
        indices: Vec<usize>,
    },
    Done,
}

/// All `size`-element selections of the snapshotted source, in index order.
///
/// `size == 0` yields a single empty combination; `size` greater than the
/// source length yields nothing.
pub struct Combinations<I: Iterator> {
    size: usize,
    state: CombinationState<I>,
}

impl<I: Iterator> Combinations<I> {
    pub const fn new(iter: I, size: usize) -> Self {
        Self {
            size,
            state: CombinationState::Pending(iter),
        }
    }

    fn start(&mut self) -> Option<Vec<I::Item>>
    where
        I::Item: Clone,
    {
        let CombinationState::Pending(iter) = mem::replace(&mut self.state, CombinationState::Done)
        else {
            return None;
        };

        let pool: Vec<I::Item> = iter.collect();
        trace!("combinations: snapshot of {} elements, size {}", pool.len(), self.size);

        if self.size > pool.len() {
            return None;
        }

        let indices: Vec<usize> = (0..self.size).collect();
        let first = select(&pool, &indices);
        self.state = CombinationState::Running { pool, indices };
        Some(first)
    }
}

fn select<T: Clone>(pool: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&index| pool[index].clone()).collect()
}

impl<I> Iterator for Combinations<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let (pool, indices) = match &mut self.state {
            CombinationState::Pending(_) => return self.start(),
            CombinationState::Running { pool, indices } => (pool, indices),
            CombinationState::Done => return None,
        };

        let n = pool.len();
        let k = indices.len();

        // Rightmost position that can still move forward.
        let Some(position) = (0..k).rev().find(|&i| indices[i] != i + n - k) else {
            self.state = CombinationState::Done;
            return None;
        };

        indices[position] += 1;
        for i in position + 1..k {
            indices[i] = indices[i - 1] + 1;
        }

        Some(select(pool, indices))
    }
}

/// Extension trait providing combinations for any iterator.
pub trait CombinationsExt: Iterator + Sized {
    /// Yields every selection of `size` elements, preserving source order
    /// within each selection.
    fn combinations(self, size: usize) -> Combinations<Self>
    where
        Self::Item: Clone,
    {
        Combinations::new(self, size)
    }
}

impl<I: Iterator> CombinationsExt for I {}
