// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Key classification for deduplicating operators.
//!
//! Plain value equality is not enough to decide whether two keys are "the same":
//!
//! - `0.0 == -0.0`, yet negative zero is tracked as its own key
//! - two structurally equal shared objects (`Rc`, `Arc`, borrowed references)
//!   are distinct keys unless they are the same allocation
//!
//! Every key type therefore classifies itself into a [`DedupKey`], and
//! [`SeenKeys`] keeps one membership structure per class.
//!
//! ```
//! use iterflux_core::{DedupKey, UniqueKey};
//! use std::rc::Rc;
//!
//! assert!(matches!((-0.0_f64).dedup_key(), DedupKey::NegativeZero));
//! assert!(matches!(0.0_f64.dedup_key(), DedupKey::Value(_)));
//!
//! let shared = Rc::new("node");
//! assert!(matches!(shared.dedup_key(), DedupKey::Identity(_)));
//! ```

use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};
use core::convert::Infallible;
use core::hash::Hash;
use ordered_float::OrderedFloat;
use std::rc::Rc;
use std::sync::Arc;

/// The membership class a key belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DedupKey<V> {
    /// IEEE-754 negative zero
    NegativeZero,
    /// A reference compared by address
    Identity(usize),
    /// A value compared by equality
    Value(V),
}

/// A key that knows which membership class it belongs to.
pub trait UniqueKey {
    /// The hashable representation used for value equality.
    type Value: Eq + Hash;

    fn dedup_key(&self) -> DedupKey<Self::Value>;

    /// Whether the key refers to an allocation by address, directly or through
    /// a component. [`SeenKeys`] keeps such keys alive.
    fn holds_identity(&self) -> bool {
        false
    }
}

macro_rules! impl_unique_key_by_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl UniqueKey for $t {
                type Value = $t;

                fn dedup_key(&self) -> DedupKey<$t> {
                    DedupKey::Value(self.clone())
                }
            }
        )*
    };
}

impl_unique_key_by_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, (), String,
);

macro_rules! impl_unique_key_float {
    ($($t:ty),*) => {
        $(
            impl UniqueKey for $t {
                type Value = OrderedFloat<$t>;

                fn dedup_key(&self) -> DedupKey<OrderedFloat<$t>> {
                    if *self == 0.0 && self.is_sign_negative() {
                        DedupKey::NegativeZero
                    } else {
                        DedupKey::Value(OrderedFloat(*self))
                    }
                }
            }
        )*
    };
}

impl_unique_key_float!(f32, f64);

impl<'a> UniqueKey for &'a str {
    type Value = &'a str;

    fn dedup_key(&self) -> DedupKey<&'a str> {
        DedupKey::Value(*self)
    }
}

impl<K: UniqueKey> UniqueKey for Option<K> {
    type Value = Option<K::Value>;

    fn dedup_key(&self) -> DedupKey<Self::Value> {
        match self {
            None => DedupKey::Value(None),
            Some(key) => match key.dedup_key() {
                DedupKey::NegativeZero => DedupKey::NegativeZero,
                DedupKey::Identity(address) => DedupKey::Identity(address),
                DedupKey::Value(value) => DedupKey::Value(Some(value)),
            },
        }
    }

    fn holds_identity(&self) -> bool {
        self.as_ref().is_some_and(|key| key.holds_identity())
    }
}

// Composite keys compare component-wise, each component under its own class,
// so `(-0.0, "a")` and `(0.0, "a")` stay distinct.
macro_rules! impl_unique_key_tuple {
    ($($K:ident $idx:tt),+) => {
        impl<$($K: UniqueKey),+> UniqueKey for ($($K,)+) {
            type Value = ($(DedupKey<$K::Value>,)+);

            fn dedup_key(&self) -> DedupKey<Self::Value> {
                DedupKey::Value(($(self.$idx.dedup_key(),)+))
            }

            fn holds_identity(&self) -> bool {
                $(self.$idx.holds_identity())||+
            }
        }
    };
}

impl_unique_key_tuple!(A 0, B 1);
impl_unique_key_tuple!(A 0, B 1, C 2);
impl_unique_key_tuple!(A 0, B 1, C 2, D 3);
impl_unique_key_tuple!(A 0, B 1, C 2, D 3, E 4);
impl_unique_key_tuple!(A 0, B 1, C 2, D 3, E 4, F 5);

impl<K: UniqueKey> UniqueKey for Vec<K> {
    type Value = Vec<DedupKey<K::Value>>;

    fn dedup_key(&self) -> DedupKey<Self::Value> {
        DedupKey::Value(self.iter().map(UniqueKey::dedup_key).collect())
    }

    fn holds_identity(&self) -> bool {
        self.iter().any(UniqueKey::holds_identity)
    }
}

impl<T: ?Sized> UniqueKey for Rc<T> {
    type Value = Infallible;

    fn dedup_key(&self) -> DedupKey<Infallible> {
        DedupKey::Identity(Rc::as_ptr(self).cast::<()>() as usize)
    }

    fn holds_identity(&self) -> bool {
        true
    }
}

impl<T: ?Sized> UniqueKey for Arc<T> {
    type Value = Infallible;

    fn dedup_key(&self) -> DedupKey<Infallible> {
        DedupKey::Identity(Arc::as_ptr(self).cast::<()>() as usize)
    }

    fn holds_identity(&self) -> bool {
        true
    }
}

/// Compares a borrowed value by address instead of by value.
///
/// Zero-sized values may share an address, so they all collapse into one key.
#[derive(Debug)]
pub struct ByIdentity<'a, T: ?Sized>(pub &'a T);

impl<T: ?Sized> Clone for ByIdentity<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for ByIdentity<'_, T> {}

impl<T: ?Sized> UniqueKey for ByIdentity<'_, T> {
    type Value = Infallible;

    fn dedup_key(&self) -> DedupKey<Infallible> {
        DedupKey::Identity((self.0 as *const T).cast::<()>() as usize)
    }

    fn holds_identity(&self) -> bool {
        true
    }
}

/// Keys observed so far, split by membership class.
///
/// Identity keys are retained alongside their address so the referenced
/// allocation stays alive, and its address cannot be handed to a new key,
/// for as long as the set exists. Composite value keys with an identity
/// component are retained the same way.
pub struct SeenKeys<K: UniqueKey> {
    negative_zero: bool,
    identities: HashMap<usize, K>,
    values: HashSet<K::Value>,
    pinned: Vec<K>,
}

impl<K: UniqueKey> SeenKeys<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            negative_zero: false,
            identities: HashMap::new(),
            values: HashSet::new(),
            pinned: Vec::new(),
        }
    }

    /// Records `key`, returning `true` if it had not been seen before.
    pub fn insert(&mut self, key: K) -> bool {
        match key.dedup_key() {
            DedupKey::NegativeZero => !core::mem::replace(&mut self.negative_zero, true),
            DedupKey::Identity(address) => {
                if self.identities.contains_key(&address) {
                    false
                } else {
                    self.identities.insert(address, key);
                    true
                }
            }
            DedupKey::Value(value) => {
                let inserted = self.values.insert(value);
                if inserted && key.holds_identity() {
                    self.pinned.push(key);
                }
                inserted
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.negative_zero) + self.identities.len() + self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forgets every key, releasing retained identities.
    pub fn clear(&mut self) {
        self.negative_zero = false;
        self.identities.clear();
        self.values.clear();
        self.pinned.clear();
    }
}

impl<K: UniqueKey> Default for SeenKeys<K> {
    fn default() -> Self {
        Self::new()
    }
}
