// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the iterflux sequence library.
//!
//! This crate provides fixture data, instrumented sequences and assertion
//! helpers for testing sequence operators. It is designed for use in
//! development and testing only, not for production code.
//!
//! # Fixtures
//!
//! ```rust
//! use iterflux_test_utils::test_data::{person_alice, TestData};
//!
//! match person_alice() {
//!     TestData::Person(p) => assert_eq!(p.name, "Alice"),
//!     _ => panic!("Expected person"),
//! }
//! ```
//!
//! # Observing consumption
//!
//! ```rust
//! use iterflux_test_utils::{assert_exhausted, CountingIter};
//!
//! let (mut iter, counter) = CountingIter::new(vec!['a'].into_iter());
//! assert_eq!(iter.next(), Some('a'));
//! assert_exhausted(&mut iter);
//! assert_eq!(counter.get(), 1);
//! ```
//!
//! # Module Organization
//!
//! - `test_data` - `TestData` enum, its record types and named fixtures
//! - `instrumented` - Pull-counting, single-shot and resuming sequences
//! - `helpers` - Assertion and utility functions

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod instrumented;
pub mod test_data;

pub use helpers::{assert_exhausted, naturals, unwrap_error, unwrap_value};
pub use instrumented::{Bursts, CountingIter, PullCounter, SingleShot};
pub use test_data::TestData;
