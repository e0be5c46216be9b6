// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cartesian product of several sequences.
//!
//! Every input is snapshotted on the first pull, so sources that can only be
//! traversed once are combined correctly. The rightmost input varies fastest.
//!
//! ```
//! use iterflux_iter::cross_join;
//!
//! let pairs: Vec<_> = cross_join(([1, 2], ['a', 'b'])).collect();
//! assert_eq!(pairs, vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
//! ```

use crate::logging::debug;
use core::mem;

/// Sources accepted by [`cross_join`]: tuples of up to six iterables, or a
/// `Vec` of iterables of the same type.
pub trait CrossJoinSources {
    type Pools: CrossJoinPools;

    /// Snapshots every source.
    fn into_pools(self) -> Self::Pools;
}

/// Snapshotted inputs of a cross join.
pub trait CrossJoinPools {
    type Item;

    fn lens(&self) -> Vec<usize>;

    /// Builds the row selecting `indices[i]` from the `i`-th pool.
    fn row(&self, indices: &[usize]) -> Self::Item;
}

macro_rules! impl_cross_join_tuple {
    ($($S:ident $idx:tt),+) => {
        impl<$($S),+> CrossJoinSources for ($($S,)+)
        where
            $($S: IntoIterator, $S::Item: Clone,)+
        {
            type Pools = ($(Vec<$S::Item>,)+);

            fn into_pools(self) -> Self::Pools {
                ($(self.$idx.into_iter().collect::<Vec<_>>(),)+)
            }
        }

        impl<$($S: Clone),+> CrossJoinPools for ($(Vec<$S>,)+) {
            type Item = ($($S,)+);

            fn lens(&self) -> Vec<usize> {
                vec![$(self.$idx.len()),+]
            }

            fn row(&self, indices: &[usize]) -> Self::Item {
                ($(self.$idx[indices[$idx]].clone(),)+)
            }
        }
    };
}

impl_cross_join_tuple!(A 0);
impl_cross_join_tuple!(A 0, B 1);
impl_cross_join_tuple!(A 0, B 1, C 2);
impl_cross_join_tuple!(A 0, B 1, C 2, D 3);
impl_cross_join_tuple!(A 0, B 1, C 2, D 3, E 4);
impl_cross_join_tuple!(A 0, B 1, C 2, D 3, E 4, F 5);

impl<S> CrossJoinSources for Vec<S>
where
    S: IntoIterator,
    S::Item: Clone,
{
    type Pools = Vec<Vec<S::Item>>;

    fn into_pools(self) -> Self::Pools {
        self.into_iter()
            .map(|source| source.into_iter().collect())
            .collect()
    }
}

impl<T: Clone> CrossJoinPools for Vec<Vec<T>> {
    type Item = Vec<T>;

    fn lens(&self) -> Vec<usize> {
        self.iter().map(Vec::len).collect()
    }

    fn row(&self, indices: &[usize]) -> Self::Item {
        indices
            .iter()
            .zip(self)
            .map(|(&index, pool)| pool[index].clone())
            .collect()
    }
}

enum CrossJoinState<S: CrossJoinSources> {
    Pending(S),
    Running {
        pools: S::Pools,
        lens: Vec<usize>,
        indices: Vec<usize>,
    },
    Done,
}

/// Every combination of one element from each source.
///
/// Created by [`cross_join`] and [`cross_join_all`]. Yields nothing when there
/// are no sources or any source is empty.
pub struct CrossJoin<S: CrossJoinSources> {
    state: CrossJoinState<S>,
}

impl<S: CrossJoinSources> CrossJoin<S> {
    pub const fn new(sources: S) -> Self {
        Self {
            state: CrossJoinState::Pending(sources),
        }
    }

    fn start(&mut self) -> Option<<S::Pools as CrossJoinPools>::Item> {
        let CrossJoinState::Pending(sources) = mem::replace(&mut self.state, CrossJoinState::Done)
        else {
            return None;
        };

        let pools = sources.into_pools();
        let lens = pools.lens();
        debug!("cross_join: pool sizes {:?}", lens);

        if lens.is_empty() || lens.contains(&0) {
            return None;
        }

        let indices = vec![0; lens.len()];
        let first = pools.row(&indices);
        self.state = CrossJoinState::Running {
            pools,
            lens,
            indices,
        };
        Some(first)
    }
}

impl<S: CrossJoinSources> Iterator for CrossJoin<S> {
    type Item = <S::Pools as CrossJoinPools>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let (pools, lens, indices) = match &mut self.state {
            CrossJoinState::Pending(_) => return self.start(),
            CrossJoinState::Running {
                pools,
                lens,
                indices,
            } => (pools, lens, indices),
            CrossJoinState::Done => return None,
        };

        // Odometer increment, rightmost digit first.
        for position in (0..indices.len()).rev() {
            indices[position] += 1;
            if indices[position] < lens[position] {
                return Some(pools.row(indices));
            }
            indices[position] = 0;
        }

        self.state = CrossJoinState::Done;
        None
    }
}

/// Cartesian product of a tuple (or `Vec`) of sources.
pub fn cross_join<S: CrossJoinSources>(sources: S) -> CrossJoin<S> {
    CrossJoin::new(sources)
}

/// Cartesian product of any number of sources of the same type.
pub fn cross_join_all<S, I>(sources: I) -> CrossJoin<Vec<S>>
where
    I: IntoIterator<Item = S>,
    S: IntoIterator,
    S::Item: Clone,
{
    CrossJoin::new(sources.into_iter().collect())
}
