// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! In-place helpers for caller-owned sets and maps.
//!
//! Every mutating helper changes the collection it is given and returns a
//! reference into that same collection, so calls can be chained. Any hasher
//! is accepted, including `ahash`.

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

/// Inserts every element.
pub fn add_all<T, S>(
    set: &mut HashSet<T, S>,
    elements: impl IntoIterator<Item = T>,
) -> &mut HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    set.extend(elements);
    set
}

/// Removes every element, owned or borrowed; absent elements are ignored.
pub fn delete_all<T, S, B>(
    set: &mut HashSet<T, S>,
    elements: impl IntoIterator<Item = B>,
) -> &mut HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
    B: Borrow<T>,
{
    for element in elements {
        set.remove(element.borrow());
    }
    set
}

/// Removes the elements matching `predicate`.
/// Whether every one of `elements` is in `set`.
pub fn has_all<T, S, B>(set: &HashSet<T, S>, elements: impl IntoIterator<Item = B>) -> bool
where
    T: Eq + Hash,
    S: BuildHasher,
    B: Borrow<T>,
{
    elements
        .into_iter()
        .all(|element| set.contains(element.borrow()))
}

pub fn delete_while<T, S>(
    set: &mut HashSet<T, S>,
    mut predicate: impl FnMut(&T) -> bool,
) -> &mut HashSet<T, S> {
    set.retain(|element| !predicate(element));
    set
}

/// Keeps only the elements matching `predicate`.
pub fn keep_while<T, S>(
    set: &mut HashSet<T, S>,
    predicate: impl FnMut(&T) -> bool,
) -> &mut HashSet<T, S> {
    set.retain(predicate);
    set
}

/// Returns the value stored under `key`, inserting `default` first if absent.
pub fn get_or_set<K, V, S>(map: &mut HashMap<K, V, S>, key: K, default: V) -> &mut V
where
    K: Eq + Hash,
    S: BuildHasher,
{
    map.entry(key).or_insert(default)
}

/// Like [`get_or_set`], but the default is built from the key only when the
/// key is absent.
pub fn get_or_set_with<K, V, S>(
    map: &mut HashMap<K, V, S>,
    key: K,
    default: impl FnOnce(&K) -> V,
) -> &mut V
where
    K: Eq + Hash,
    S: BuildHasher,
{
    map.entry(key).or_insert_with_key(default)
}
