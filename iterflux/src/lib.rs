// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Iterflux
//!
//! Lazy sequence utilities for Rust iterators.
//!
//! ## Overview
//!
//! Iterflux extends every `Iterator` with operators that keep internal state
//! across pulls: sliding and gapped windows, predicate slicing, combinations
//! and permutations, key-based deduplication, and lockstep traversal of
//! several sequences. Every lazy operator pulls from its source only when its
//! own `next` is called, so infinite sources compose freely.
//!
//! ## Quick Start
//!
//! ```rust
//! use iterflux::prelude::*;
//!
//! # fn main() -> iterflux::Result<()> {
//! let readings = [3, 4, 4, 9, 10, 2, 2, 2, 7];
//!
//! // Runs of non-decreasing readings, deduplicated within each run.
//! let runs: Vec<Vec<i32>> = readings
//!     .into_iter()
//!     .slice_when(|previous, current| current < previous)
//!     .map(|run| run.into_iter().unique().collect())
//!     .collect();
//! assert_eq!(runs, vec![vec![3, 4, 9, 10], vec![2, 7]]);
//!
//! // Pairwise deltas through overlapping windows.
//! let deltas: Vec<i32> = readings
//!     .into_iter()
//!     .windows(2, 1)?
//!     .map(|pair| pair[1] - pair[0])
//!     .collect();
//! assert_eq!(deltas.len(), readings.len() - 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Crates
//!
//! - `iterflux-core`: [`IterFluxError`], dedup keys, the [`Numeric`] contract and the stream bridge
//! - `iterflux-iter`: the operators themselves
//!
//! ## Features
//!
//! - `async` (default): [`IntoSequenceStream`] turns any operator output into a `futures::Stream`
//! - `tracing`: emits `tracing` events for rejected arguments, snapshots and length mismatches
//! - `bigint`: implements [`Numeric`] for `ibig::IBig`

pub use iterflux_core::{ByIdentity, DedupKey, IterFluxError, Numeric, Result, SeenKeys, UniqueKey};

#[cfg(feature = "async")]
pub use iterflux_core::{IntoSequenceStream, SequenceStream};

pub use iterflux_iter::{aggregate, collections, grouping};
pub use iterflux_iter::{
    concat, cross_join, cross_join_all, intersect_all, range, zip, zip_longest, zip_strict,
};
pub use iterflux_iter::{
    Chunks, Combinations, Concat, CrossJoin, CycleTimes, DropLast, DropLastWhile, Intersect,
    NumericRange, Permutations, SeparatedBy, SliceAfter, SliceBefore, SliceWhen, Slices, Stepped,
    TakeLast, TakeLastWhile, UniqueBy, Windows, Zip, ZipLongest, ZipStrict,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use iterflux_iter::prelude::*;
}
