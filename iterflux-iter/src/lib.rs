// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lazy sequence operators for Rust iterators.
//!
//! Every lazy operator is a named iterator struct created through an extension
//! trait (blanket-implemented for all iterators) or, for operators over
//! several sequences, a free function. Nothing is pulled from a source before
//! the first call to `next`.
//!
//! ## Operator Categories
//!
//! ### Windowing
//!
//! - **[`windows`](WindowsExt::windows)**: Fixed-size windows advancing by a step, overlapping or gapped
//! - **[`chunks`](WindowsExt::chunks)**: Non-overlapping groups, incomplete tail dropped
//! - **[`slices`](WindowsExt::slices)**: Non-overlapping groups, incomplete tail kept
//!
//! ### Predicate Slicing
//!
//! - **[`slice_after`](SliceByExt::slice_after)**, **[`slice_before`](SliceByExt::slice_before)**: Split at matching elements
//! - **[`slice_when`](SliceByExt::slice_when)**: Split between matching adjacent pairs
//!
//! ### Combinatorics
//!
//! - **[`combinations`](CombinationsExt::combinations)**, **[`permutations`](PermutationsExt::permutations)**: Snapshot-based selections in index order
//! - **[`cross_join`]**, **[`cross_join_all`]**: Cartesian products
//!
//! ### Deduplication
//!
//! - **[`unique_by`](UniqueByExt::unique_by)**, **[`unique`](UniqueByExt::unique)**: First occurrence per key, `-0.0` and identity aware
//!
//! ### Multi-sequence
//!
//! - **[`zip`]**, **[`zip_longest`]**, **[`zip_strict`]**: Lockstep traversal
//! - **[`concat`]**: Sequential chaining
//! - **[`intersect`](IntersectExt::intersect)**, **[`intersect_all`]**: Ordered membership filtering
//!
//! ### Helpers
//!
//! - **[`separated_by`](SeparatedByExt::separated_by)**, **[`stepped`](SteppedExt::stepped)**, **[`cycle_times`](CycleTimesExt::cycle_times)**, **[`range`]**
//! - **[`take_last`](TakeLastExt::take_last)** and friends: operators that need the end of the sequence
//! - [`aggregate`]: sums, products, reduce, minmax, join and transpose
//! - [`grouping`]: `group_by`, `count_by` and the `associate` map builders
//! - [`collections`]: in-place set and map helpers
//!
//! # Errors
//!
//! Invalid sizes and steps are rejected when the operator is created, before
//! the source is touched:
//!
//! ```
//! use iterflux_iter::WindowsExt;
//!
//! let error = (1..10).chunks(0).unwrap_err();
//! assert!(error.is_invalid_argument());
//! ```
//!
//! Conditions only visible during traversal surface as `Err` items:
//!
//! ```
//! use iterflux_iter::ZipExt;
//!
//! let mut pairs = [1, 2, 3].into_iter().zip_strict(["a", "b"]);
//! assert!(pairs.next().unwrap().is_ok());
//! assert!(pairs.next().unwrap().is_ok());
//! assert!(pairs.next().unwrap().unwrap_err().is_length_mismatch());
//! assert!(pairs.next().is_none());
//! ```

mod logging;
mod validation;

pub mod aggregate;
pub mod collections;
pub mod combinations;
pub mod concat;
pub mod cross_join;
pub mod cycle_times;
pub mod grouping;
pub mod intersect;
pub mod permutations;
pub mod prelude;
pub mod range;
pub mod separated_by;
pub mod slice_by;
pub mod stepped;
pub mod take_last;
pub mod unique_by;
pub mod windows;
pub mod zip;

pub use combinations::{Combinations, CombinationsExt};
pub use concat::{concat, Concat};
pub use cross_join::{cross_join, cross_join_all, CrossJoin, CrossJoinPools, CrossJoinSources};
pub use cycle_times::{CycleTimes, CycleTimesExt};
pub use intersect::{intersect_all, Intersect, IntersectExt};
pub use permutations::{Permutations, PermutationsExt};
pub use range::{range, NumericRange};
pub use separated_by::{SeparatedBy, SeparatedByExt};
pub use slice_by::{SliceAfter, SliceBefore, SliceByExt, SliceWhen};
pub use stepped::{Stepped, SteppedExt};
pub use take_last::{DropLast, DropLastWhile, TakeLast, TakeLastExt, TakeLastWhile};
pub use unique_by::{UniqueBy, UniqueByExt};
pub use windows::{Chunks, Slices, Windows, WindowsExt};
pub use zip::{
    zip, zip_longest, zip_strict, IntoZipSources, Row, Zip, ZipExt, ZipLongest, ZipSources,
    ZipStrict,
};
