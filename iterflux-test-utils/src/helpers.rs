// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use iterflux_core::{IterFluxError, Result};

/// An infinite sequence `0, 1, 2, ...`.
pub fn naturals() -> impl Iterator<Item = u64> + Clone {
    0..
}

/// Asserts the sequence is exhausted and stays exhausted.
///
/// # Panics
///
/// Panics if the sequence produces another element.
pub fn assert_exhausted<I>(iter: &mut I)
where
    I: Iterator,
    I::Item: Debug,
{
    if let Some(item) = iter.next() {
        panic!("Expected exhausted sequence but got: {item:?}");
    }
    if let Some(item) = iter.next() {
        panic!("Sequence resumed after exhaustion with: {item:?}");
    }
}

/// Unwraps a fallible item, panicking on exhaustion or error.
///
/// # Panics
///
/// Panics if the item is `None` or an error.
pub fn unwrap_value<T: Debug>(item: Option<Result<T>>) -> T {
    match item {
        Some(Ok(value)) => value,
        Some(Err(e)) => panic!("Expected Value but got Error: {e}"),
        None => panic!("Expected Value but sequence ended"),
    }
}

/// Unwraps the error of a fallible item, panicking on exhaustion or value.
///
/// # Panics
///
/// Panics if the item is `None` or a value.
pub fn unwrap_error<T: Debug>(item: Option<Result<T>>) -> IterFluxError {
    match item {
        Some(Err(e)) => e,
        Some(Ok(value)) => panic!("Expected Error but got Value: {value:?}"),
        None => panic!("Expected Error but sequence ended"),
    }
}
