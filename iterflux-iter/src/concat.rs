// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::iter::Flatten;

/// Sequential chaining of any number of sequences.
///
/// Created by [`concat`]; a named wrapper over [`Iterator::flatten`]. Each
/// inner sequence is opened only once the previous one is exhausted.
pub struct Concat<O>
where
    O: Iterator,
    O::Item: IntoIterator,
{
    inner: Flatten<O>,
}

impl<O> Iterator for Concat<O>
where
    O: Iterator,
    O::Item: IntoIterator,
{
    type Item = <O::Item as IntoIterator>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Yields every element of the first sequence, then of the second, and so on.
///
/// ```
/// use iterflux_iter::concat;
///
/// let chained: Vec<_> = concat([vec![1, 2], vec![], vec![3]]).collect();
/// assert_eq!(chained, vec![1, 2, 3]);
/// ```
pub fn concat<S>(sequences: S) -> Concat<S::IntoIter>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    Concat {
        inner: sequences.into_iter().flatten(),
    }
}
