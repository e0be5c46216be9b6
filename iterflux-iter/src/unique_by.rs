// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! First-occurrence deduplication by key.
//!
//! Keys are classified by [`UniqueKey`]: floats keep `-0.0` apart from `0.0`,
//! and `Rc`/`Arc`/[`ByIdentity`](iterflux_core::ByIdentity) keys compare by
//! address rather than by value.
//!
//! ```
//! use iterflux_iter::UniqueByExt;
//!
//! let zeros: Vec<f64> = [0.0, -0.0, 0.0, 1.0, 1.0].into_iter().unique().collect();
//! assert_eq!(zeros.len(), 3);
//! assert!(zeros[1].is_sign_negative());
//! ```

use core::iter::Fuse;
use iterflux_core::{SeenKeys, UniqueKey};

/// Elements whose key has not been seen before, in source order.
///
/// The source is fused, so the seen keys can be released once it is
/// exhausted without letting a resuming source repeat earlier keys.
pub struct UniqueBy<I, F, K: UniqueKey> {
    iter: Fuse<I>,
    selector: F,
    seen: SeenKeys<K>,
}

impl<I: Iterator, F, K: UniqueKey> UniqueBy<I, F, K> {
    pub fn new(iter: I, selector: F) -> Self {
        Self {
            iter: iter.fuse(),
            selector,
            seen: SeenKeys::new(),
        }
    }
}

impl<I, F, K> Iterator for UniqueBy<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: UniqueKey,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        for element in self.iter.by_ref() {
            let key = (self.selector)(&element);
            if self.seen.insert(key) {
                return Some(element);
            }
        }

        self.seen.clear();
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

/// Extension trait providing key-based deduplication for any iterator.
pub trait UniqueByExt: Iterator + Sized {
    /// Keeps the first element for every distinct `selector` key.
    fn unique_by<K, F>(self, selector: F) -> UniqueBy<Self, F, K>
    where
        F: FnMut(&Self::Item) -> K,
        K: UniqueKey,
    {
        UniqueBy::new(self, selector)
    }

    /// Keeps the first occurrence of every distinct element.
    #[allow(clippy::type_complexity)]
    fn unique(self) -> UniqueBy<Self, fn(&Self::Item) -> Self::Item, Self::Item>
    where
        Self::Item: UniqueKey + Clone,
    {
        UniqueBy::new(self, <Self::Item as Clone>::clone as fn(&Self::Item) -> Self::Item)
    }
}

impl<I: Iterator> UniqueByExt for I {}
