// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! r-permutations of a finite sequence.
//!
//! Uses the cycle-counter algorithm: an index array over the snapshot plus a
//! countdown per output position. Output order is lexicographic over source
//! positions.

use crate::logging::trace;
use core::mem;

enum PermutationState<I: Iterator> {
    Pending(I),
    Running {
        pool: Vec<I::Item>,
        indices: Vec<usize>,
        cycles: Vec<usize>,
    },
    Done,
}

/// Ordered arrangements of `size` elements drawn from the snapshotted source.
pub struct Permutations<I: Iterator> {
    size: Option<usize>,
    state: PermutationState<I>,
}

impl<I: Iterator> Permutations<I> {
    /// `size` defaults to the full source length when `None`.
    pub const fn new(iter: I, size: Option<usize>) -> Self {
        Self {
            size,
            state: PermutationState::Pending(iter),
        }
    }

    fn start(&mut self) -> Option<Vec<I::Item>>
    where
        I::Item: Clone,
    {
        let PermutationState::Pending(iter) = mem::replace(&mut self.state, PermutationState::Done)
        else {
            return None;
        };

        let pool: Vec<I::Item> = iter.collect();
        let n = pool.len();
        let r = self.size.unwrap_or(n);
        trace!("permutations: snapshot of {} elements, size {}", n, r);

        if r > n {
            return None;
        }

        let indices: Vec<usize> = (0..n).collect();
        let cycles: Vec<usize> = (0..r).map(|i| n - i).collect();
        let first = arrangement(&pool, &indices[..r]);

        self.state = PermutationState::Running {
            pool,
            indices,
            cycles,
        };
        Some(first)
    }
}

fn arrangement<T: Clone>(pool: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&index| pool[index].clone()).collect()
}

impl<I> Iterator for Permutations<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let (pool, indices, cycles) = match &mut self.state {
            PermutationState::Pending(_) => return self.start(),
            PermutationState::Running {
                pool,
                indices,
                cycles,
            } => (pool, indices, cycles),
            PermutationState::Done => return None,
        };

        let n = pool.len();
        let r = cycles.len();

        for i in (0..r).rev() {
            cycles[i] -= 1;

            if cycles[i] == 0 {
                indices[i..].rotate_left(1);
                cycles[i] = n - i;
            } else {
                let j = cycles[i];
                indices.swap(i, n - j);
                return Some(arrangement(pool, &indices[..r]));
            }
        }

        self.state = PermutationState::Done;
        None
    }
}

/// Extension trait providing permutations for any iterator.
pub trait PermutationsExt: Iterator + Sized {
    /// Yields every ordered arrangement of `size` distinct positions, or of
    /// all positions when `size` is `None`.
    ///
    /// `Some(0)` yields one empty arrangement; a size larger than the source
    /// yields nothing.
    fn permutations(self, size: Option<usize>) -> Permutations<Self>
    where
        Self::Item: Clone,
    {
        Permutations::new(self, size)
    }
}

impl<I: Iterator> PermutationsExt for I {}
