// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ahash::{HashSet, HashSetExt};
use core::hash::Hash;

/// Elements of a source sequence that belong to every other sequence.
///
/// Source order and duplicates are preserved. The other sequences are
/// collected into membership sets on the first pull.
pub struct Intersect<I: Iterator, J> {
    source: Option<I>,
    pending: Option<Vec<J>>,
    sets: Vec<HashSet<I::Item>>,
}

impl<I, J> Intersect<I, J>
where
    I: Iterator,
    J: IntoIterator<Item = I::Item>,
    I::Item: Hash + Eq,
{
    pub fn new(source: I, others: Vec<J>) -> Self {
        Self {
            source: Some(source),
            pending: Some(others),
            sets: Vec::new(),
        }
    }

    const fn empty() -> Self {
        Self {
            source: None,
            pending: None,
            sets: Vec::new(),
        }
    }
}

impl<I, J> Iterator for Intersect<I, J>
where
    I: Iterator,
    J: IntoIterator<Item = I::Item>,
    I::Item: Hash + Eq,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(others) = self.pending.take() {
            self.sets = others
                .into_iter()
                .map(|other| {
                    let mut set = HashSet::new();
                    set.extend(other);
                    set
                })
                .collect();
        }

        let source = self.source.as_mut()?;
        let sets = &self.sets;
        let found = source.find(|element| sets.iter().all(|set| set.contains(element)));

        if found.is_none() {
            self.source = None;
            self.sets = Vec::new();
        }
        found
    }
}

/// Extension trait providing multi-way intersection for any iterator.
pub trait IntersectExt: Iterator + Sized {
    /// Keeps elements that also occur in every sequence of `others`.
    ///
    /// ```
    /// use iterflux_iter::IntersectExt;
    ///
    /// let common: Vec<_> = [1, 2, 2, 3, 4]
    ///     .into_iter()
    ///     .intersect([vec![2, 3, 4], vec![4, 2]])
    ///     .collect();
    /// assert_eq!(common, vec![2, 2, 4]);
    /// ```
    fn intersect<J, O>(self, others: O) -> Intersect<Self, J>
    where
        O: IntoIterator<Item = J>,
        J: IntoIterator<Item = Self::Item>,
        Self::Item: Hash + Eq,
    {
        Intersect::new(self, others.into_iter().collect())
    }
}

impl<I: Iterator> IntersectExt for I {}

/// Intersects sequences of one type, taking the first as the ordered source.
///
/// Zero sequences yield nothing; one sequence is yielded unchanged.
pub fn intersect_all<S, T>(sequences: S) -> Intersect<<T as IntoIterator>::IntoIter, T>
where
    S: IntoIterator<Item = T>,
    T: IntoIterator,
    T::Item: Hash + Eq,
{
    let mut sequences = sequences.into_iter();
    match sequences.next() {
        Some(first) => Intersect::new(first.into_iter(), sequences.collect()),
        None => Intersect::empty(),
    }
}
