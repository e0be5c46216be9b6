// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types shared by every iterflux operator.
//!
//! - [`IterFluxError`] and the [`Result`] alias: the error taxonomy of the library
//! - [`UniqueKey`] and [`SeenKeys`]: key classification and membership tracking
//!   used by deduplicating operators
//! - [`Numeric`]: the arithmetic contract used by aggregations and `range`
//! - [`IntoSequenceStream`]: adapts any lazy sequence into a `futures::Stream`

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod dedup_key;
pub mod error;
#[cfg(feature = "async")]
pub mod into_stream;
pub mod numeric;

pub use self::dedup_key::{ByIdentity, DedupKey, SeenKeys, UniqueKey};
pub use self::error::{IterFluxError, Result};
#[cfg(feature = "async")]
pub use self::into_stream::{IntoSequenceStream, SequenceStream};
pub use self::numeric::Numeric;
