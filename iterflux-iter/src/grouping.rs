// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Eager map builders keyed by a selector.
//!
//! Every function consumes its whole input and returns an
//! [`ahash::HashMap`]. Groups keep the source order of their members; the maps
//! themselves are unordered. When several elements produce the same key, the
//! `associate*` builders keep the last one.
//!
//! ```
//! use iterflux_iter::grouping::{count_by, group_by};
//!
//! let words = ["a", "abc", "ab", "def", "abcd"];
//!
//! let by_length = group_by(words, |word| word.len());
//! assert_eq!(by_length[&3], vec!["abc", "def"]);
//!
//! let parity = count_by(1..=10, |x| x % 2 == 0);
//! assert_eq!(parity[&true], 5);
//! ```

use crate::logging::trace;
use ahash::{HashMap, HashMapExt};
use core::hash::Hash;

/// Groups elements into vectors under the key returned by `key_selector`.
pub fn group_by<T, K>(
    sequence: impl IntoIterator<Item = T>,
    key_selector: impl FnMut(&T) -> K,
) -> HashMap<K, Vec<T>>
where
    K: Eq + Hash,
{
    group_by_with(sequence, key_selector, |element| element)
}

/// Groups `value_transform(element)` into vectors under the key returned by
/// `key_selector`.
pub fn group_by_with<T, K, V>(
    sequence: impl IntoIterator<Item = T>,
    mut key_selector: impl FnMut(&T) -> K,
    mut value_transform: impl FnMut(T) -> V,
) -> HashMap<K, Vec<V>>
where
    K: Eq + Hash,
{
    let mut groups: HashMap<K, Vec<V>> = HashMap::new();
    for element in sequence {
        let key = key_selector(&element);
        groups.entry(key).or_default().push(value_transform(element));
    }

    trace!("group_by: {} groups", groups.len());
    groups
}

/// Counts how many elements produce each key.
pub fn count_by<T, K>(
    sequence: impl IntoIterator<Item = T>,
    mut key_selector: impl FnMut(&T) -> K,
) -> HashMap<K, usize>
where
    K: Eq + Hash,
{
    let mut counts: HashMap<K, usize> = HashMap::new();
    for element in sequence {
        *counts.entry(key_selector(&element)).or_insert(0) += 1;
    }
    counts
}

/// Builds a map from the key-value pairs returned by `transform`.
///
/// ```
/// use iterflux_iter::grouping::associate;
///
/// let letters = associate([72_u8, 69, 76, 76, 79], |code| (code, char::from(code)));
/// assert_eq!(letters.len(), 4);
/// assert_eq!(letters[&76], 'L');
/// ```
pub fn associate<T, K, V>(
    sequence: impl IntoIterator<Item = T>,
    transform: impl FnMut(T) -> (K, V),
) -> HashMap<K, V>
where
    K: Eq + Hash,
{
    let mut map = HashMap::new();
    map.extend(sequence.into_iter().map(transform));
    map
}

/// Keys every element by `key_selector`.
pub fn associate_by<T, K>(
    sequence: impl IntoIterator<Item = T>,
    key_selector: impl FnMut(&T) -> K,
) -> HashMap<K, T>
where
    K: Eq + Hash,
{
    associate_by_with(sequence, key_selector, |element| element)
}

/// Keys `value_transform(element)` by `key_selector(element)`.
pub fn associate_by_with<T, K, V>(
    sequence: impl IntoIterator<Item = T>,
    mut key_selector: impl FnMut(&T) -> K,
    mut value_transform: impl FnMut(T) -> V,
) -> HashMap<K, V>
where
    K: Eq + Hash,
{
    associate(sequence, |element| {
        (key_selector(&element), value_transform(element))
    })
}

/// Maps every element to the value returned by `value_selector`.
pub fn associate_with<T, V>(
    sequence: impl IntoIterator<Item = T>,
    mut value_selector: impl FnMut(&T) -> V,
) -> HashMap<T, V>
where
    T: Eq + Hash,
{
    associate(sequence, |element| {
        let value = value_selector(&element);
        (element, value)
    })
}
