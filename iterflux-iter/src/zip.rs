// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lockstep traversal of several sequences.
//!
//! All three operators pull one element from every source per step and
//! differ only in how they react when some sources run out before others:
//!
//! - [`zip`] stops at the shortest source
//! - [`zip_longest`] pads exhausted sources with `None` until all are done
//! - [`zip_strict`] yields an [`IterFluxError::LengthMismatch`] item and stops
//!
//! Sources are given as a tuple of up to six iterables with independent item
//! types, or as a `Vec` of iterables of one type. Zero sources yield nothing.
//!
//! ```
//! use iterflux_iter::{zip, zip_longest};
//!
//! let numbers = [1, 2, 3];
//! let letters = ["a", "b", "c", "d"];
//!
//! let zipped: Vec<_> = zip((numbers, letters)).collect();
//! assert_eq!(zipped, vec![(1, "a"), (2, "b"), (3, "c")]);
//!
//! let padded: Vec<_> = zip_longest((numbers, letters)).collect();
//! assert_eq!(padded.last(), Some(&(None, Some("d"))));
//! ```

use crate::logging::warn;
use core::iter::Fuse;
use iterflux_core::{IterFluxError, Result};

/// Outcome of advancing every source by one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row<Full, Padded> {
    /// Every source produced an element.
    Full(Full),
    /// Some, but not all, sources are exhausted.
    Partial(Padded),
    /// Every source is exhausted.
    Exhausted,
}

/// A fixed set of fused sources advanced in lockstep.
pub trait ZipSources {
    /// One element from each source.
    type Item;
    /// One optional element from each source.
    type Padded;

    fn next_row(&mut self) -> Row<Self::Item, Self::Padded>;

    fn pad(item: Self::Item) -> Self::Padded;
}

/// Conversion of a tuple or `Vec` of iterables into [`ZipSources`].
pub trait IntoZipSources {
    type Sources: ZipSources;

    fn into_zip_sources(self) -> Self::Sources;
}

macro_rules! impl_zip_tuple {
    ($($S:ident $idx:tt),+) => {
        impl<$($S: IntoIterator),+> IntoZipSources for ($($S,)+) {
            type Sources = ($(Fuse<$S::IntoIter>,)+);

            fn into_zip_sources(self) -> Self::Sources {
                ($(self.$idx.into_iter().fuse(),)+)
            }
        }

        impl<$($S: Iterator),+> ZipSources for ($(Fuse<$S>,)+) {
            type Item = ($($S::Item,)+);
            type Padded = ($(Option<$S::Item>,)+);

            #[allow(non_snake_case)]
            fn next_row(&mut self) -> Row<Self::Item, Self::Padded> {
                let ($($S,)+) = ($(self.$idx.next(),)+);

                if $($S.is_none())&&+ {
                    return Row::Exhausted;
                }

                match ($($S,)+) {
                    ($(Some($S),)+) => Row::Full(($($S,)+)),
                    padded => Row::Partial(padded),
                }
            }

            fn pad(item: Self::Item) -> Self::Padded {
                ($(Some(item.$idx),)+)
            }
        }
    };
}

impl_zip_tuple!(A 0);
impl_zip_tuple!(A 0, B 1);
impl_zip_tuple!(A 0, B 1, C 2);
impl_zip_tuple!(A 0, B 1, C 2, D 3);
impl_zip_tuple!(A 0, B 1, C 2, D 3, E 4);
impl_zip_tuple!(A 0, B 1, C 2, D 3, E 4, F 5);

impl<S: IntoIterator> IntoZipSources for Vec<S> {
    type Sources = Vec<Fuse<S::IntoIter>>;

    fn into_zip_sources(self) -> Self::Sources {
        self.into_iter().map(|source| source.into_iter().fuse()).collect()
    }
}

impl<I: Iterator> ZipSources for Vec<Fuse<I>> {
    type Item = Vec<I::Item>;
    type Padded = Vec<Option<I::Item>>;

    fn next_row(&mut self) -> Row<Self::Item, Self::Padded> {
        let pulled: Vec<Option<I::Item>> = self.iter_mut().map(Iterator::next).collect();

        if pulled.iter().all(Option::is_none) {
            Row::Exhausted
        } else if pulled.iter().all(Option::is_some) {
            Row::Full(pulled.into_iter().flatten().collect())
        } else {
            Row::Partial(pulled)
        }
    }

    fn pad(item: Self::Item) -> Self::Padded {
        item.into_iter().map(Some).collect()
    }
}

/// Tuples of elements, ending with the shortest source.
#[derive(Debug, Clone)]
pub struct Zip<S> {
    sources: S,
    done: bool,
}

impl<S: ZipSources> Zip<S> {
    pub const fn new(sources: S) -> Self {
        Self {
            sources,
            done: false,
        }
    }
}

impl<S: ZipSources> Iterator for Zip<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.sources.next_row() {
            Row::Full(row) => Some(row),
            Row::Partial(_) | Row::Exhausted => {
                self.done = true;
                None
            }
        }
    }
}

/// Padded tuples, ending with the longest source.
#[derive(Debug, Clone)]
pub struct ZipLongest<S> {
    sources: S,
    done: bool,
}

impl<S: ZipSources> ZipLongest<S> {
    pub const fn new(sources: S) -> Self {
        Self {
            sources,
            done: false,
        }
    }
}

impl<S: ZipSources> Iterator for ZipLongest<S> {
    type Item = S::Padded;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.sources.next_row() {
            Row::Full(row) => Some(S::pad(row)),
            Row::Partial(padded) => Some(padded),
            Row::Exhausted => {
                self.done = true;
                None
            }
        }
    }
}

/// Tuples of elements from sources required to have equal lengths.
///
/// A length mismatch is reported as a single `Err` item, after which the
/// iterator is exhausted.
#[derive(Debug, Clone)]
pub struct ZipStrict<S> {
    sources: S,
    position: usize,
    done: bool,
}

impl<S: ZipSources> ZipStrict<S> {
    pub const fn new(sources: S) -> Self {
        Self {
            sources,
            position: 0,
            done: false,
        }
    }
}

impl<S: ZipSources> Iterator for ZipStrict<S> {
    type Item = Result<S::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.sources.next_row() {
            Row::Full(row) => {
                self.position += 1;
                Some(Ok(row))
            }
            Row::Partial(_) => {
                self.done = true;
                warn!("zip_strict: sources ended at different lengths at position {}", self.position);
                Some(Err(IterFluxError::length_mismatch(self.position)))
            }
            Row::Exhausted => {
                self.done = true;
                None
            }
        }
    }
}

/// Zips sources, stopping as soon as any is exhausted.
pub fn zip<S: IntoZipSources>(sources: S) -> Zip<S::Sources> {
    Zip::new(sources.into_zip_sources())
}

/// Zips sources, padding exhausted ones with `None` until all are exhausted.
pub fn zip_longest<S: IntoZipSources>(sources: S) -> ZipLongest<S::Sources> {
    ZipLongest::new(sources.into_zip_sources())
}

/// Zips sources, failing with `LengthMismatch` when they end at different
/// steps.
pub fn zip_strict<S: IntoZipSources>(sources: S) -> ZipStrict<S::Sources> {
    ZipStrict::new(sources.into_zip_sources())
}

/// Extension trait providing two-way padded and strict zipping.
///
/// Plain two-way zipping is [`Iterator::zip`].
pub trait ZipExt: Iterator + Sized {
    /// Pairs elements with `other`, padding the shorter side with `None`.
    fn zip_longest<J>(self, other: J) -> ZipLongest<(Fuse<Self>, Fuse<J::IntoIter>)>
    where
        J: IntoIterator,
    {
        ZipLongest::new((self.fuse(), other.into_iter().fuse()))
    }

    /// Pairs elements with `other`, failing if the two lengths differ.
    fn zip_strict<J>(self, other: J) -> ZipStrict<(Fuse<Self>, Fuse<J::IntoIter>)>
    where
        J: IntoIterator,
    {
        ZipStrict::new((self.fuse(), other.into_iter().fuse()))
    }
}

impl<I: Iterator> ZipExt for I {}
