// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting every operator trait and free function.
//!
//! ```
//! use iterflux_iter::prelude::*;
//!
//! # fn main() -> iterflux_core::Result<()> {
//! let pairs: Vec<_> = (1..=6)
//!     .chunks(2)?
//!     .map(|chunk| chunk.into_iter().separated_by(0).collect::<Vec<_>>())
//!     .collect();
//!
//! assert_eq!(pairs, vec![vec![1, 0, 2], vec![3, 0, 4], vec![5, 0, 6]]);
//! # Ok(())
//! # }
//! ```

pub use crate::aggregate::{
    join, minmax, product, product_strict, reduce, sum, sum_strict, transpose,
};
pub use crate::combinations::CombinationsExt;
pub use crate::concat::concat;
pub use crate::cross_join::{cross_join, cross_join_all};
pub use crate::cycle_times::CycleTimesExt;
pub use crate::grouping::{
    associate, associate_by, associate_by_with, associate_with, count_by, group_by, group_by_with,
};
pub use crate::intersect::{intersect_all, IntersectExt};
pub use crate::permutations::PermutationsExt;
pub use crate::range::range;
pub use crate::separated_by::SeparatedByExt;
pub use crate::slice_by::SliceByExt;
pub use crate::stepped::SteppedExt;
pub use crate::take_last::TakeLastExt;
pub use crate::unique_by::UniqueByExt;
pub use crate::windows::WindowsExt;
pub use crate::zip::{zip, zip_longest, zip_strict, ZipExt};

pub use iterflux_core::{ByIdentity, IterFluxError, Numeric, UniqueKey};

#[cfg(feature = "async")]
pub use iterflux_core::IntoSequenceStream;
