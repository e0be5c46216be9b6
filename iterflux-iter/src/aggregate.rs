// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Eager reductions over finite sequences.
//!
//! The numeric type is picked by the caller through [`Numeric`]; enable the
//! `bigint` feature to aggregate `ibig::IBig` values without overflow.
//!
//! ```
//! use iterflux_iter::aggregate::{product, sum, sum_strict};
//!
//! assert_eq!(sum([1, 2, 3]), 6);
//! assert_eq!(product([2, 4, 6]), 48);
//! assert!(sum_strict(Vec::<i32>::new()).is_err());
//! ```

use crate::logging::warn;
use core::fmt::Display;
use core::ops::{Add, Mul};
use iterflux_core::{IterFluxError, Numeric, Result};

/// Sum of all elements; zero for an empty sequence.
pub fn sum<N: Numeric>(sequence: impl IntoIterator<Item = N>) -> N {
    sequence.into_iter().fold(N::zero(), Add::add)
}

/// Sum of all elements.
///
/// # Errors
///
/// `EmptyInput` when the sequence has no elements.
pub fn sum_strict<N: Numeric>(sequence: impl IntoIterator<Item = N>) -> Result<N> {
    reduce_named(sequence, "sum_strict", Add::add)
}

/// Product of all elements; one for an empty sequence.
pub fn product<N: Numeric>(sequence: impl IntoIterator<Item = N>) -> N {
    sequence.into_iter().fold(N::one(), Mul::mul)
}

/// Product of all elements.
///
/// # Errors
///
/// `EmptyInput` when the sequence has no elements.
pub fn product_strict<N: Numeric>(sequence: impl IntoIterator<Item = N>) -> Result<N> {
    reduce_named(sequence, "product_strict", Mul::mul)
}

/// Folds the sequence using its first element as the accumulator.
///
/// Use [`Iterator::fold`] when a seed is available.
///
/// # Errors
///
/// `EmptyInput` when the sequence has no elements.
pub fn reduce<T>(
    sequence: impl IntoIterator<Item = T>,
    operation: impl FnMut(T, T) -> T,
) -> Result<T> {
    reduce_named(sequence, "reduce", operation)
}

fn reduce_named<T>(
    sequence: impl IntoIterator<Item = T>,
    operation_name: &'static str,
    operation: impl FnMut(T, T) -> T,
) -> Result<T> {
    let mut iter = sequence.into_iter();
    let Some(first) = iter.next() else {
        warn!("{}: empty input", operation_name);
        return Err(IterFluxError::empty_input(operation_name));
    };
    Ok(iter.fold(first, operation))
}

/// The smallest and the largest element, in one pass.
///
/// An element that is not comparable with itself, such as `NaN`, is returned
/// as both bounds as soon as it is reached.
///
/// ```
/// use iterflux_iter::aggregate::minmax;
///
/// # fn main() -> iterflux_core::Result<()> {
/// assert_eq!(minmax([3, 1, 4, 1, 5])?, (1, 5));
/// assert!(minmax([1.0, f64::NAN, 3.0])?.0.is_nan());
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// `EmptyInput` when the sequence has no elements.
pub fn minmax<T>(sequence: impl IntoIterator<Item = T>) -> Result<(T, T)>
where
    T: PartialOrd + Clone,
{
    let mut iter = sequence.into_iter();
    let Some(first) = iter.next() else {
        warn!("minmax: empty input");
        return Err(IterFluxError::empty_input("minmax"));
    };

    let (mut min, mut max) = (first.clone(), first);
    if min.partial_cmp(&max).is_none() {
        return Ok((min, max));
    }

    for element in iter {
        if element.partial_cmp(&element).is_none() {
            return Ok((element.clone(), element));
        }
        if element < min {
            min = element;
        } else if element > max {
            max = element;
        }
    }
    Ok((min, max))
}

/// Concatenates the display form of every element, with `separator` between
/// consecutive elements.
///
/// ```
/// use iterflux_iter::aggregate::join;
///
/// assert_eq!(join([1, 2, 3], ""), "123");
/// assert_eq!(join("abc".chars(), "+"), "a+b+c");
/// ```
pub fn join<T: Display>(sequence: impl IntoIterator<Item = T>, separator: &str) -> String {
    let mut joined = String::new();
    for (index, element) in sequence.into_iter().enumerate() {
        if index > 0 {
            joined.push_str(separator);
        }
        joined.push_str(&element.to_string());
    }
    joined
}

/// Swaps rows and columns of a rectangular matrix.
///
/// ```
/// use iterflux_iter::aggregate::transpose;
///
/// # fn main() -> iterflux_core::Result<()> {
/// let columns = transpose(vec![vec![1, 2, 3], vec![4, 5, 6]])?;
/// assert_eq!(columns, vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// `InvalidArgument` when rows differ in length.
pub fn transpose<T, R>(matrix: impl IntoIterator<Item = R>) -> Result<Vec<Vec<T>>>
where
    R: IntoIterator<Item = T>,
{
    let rows: Vec<Vec<T>> = matrix
        .into_iter()
        .map(|row| row.into_iter().collect())
        .collect();

    let Some(width) = rows.first().map(Vec::len) else {
        return Ok(Vec::new());
    };

    if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
        warn!("transpose: row {} is ragged", index);
        return Err(IterFluxError::invalid_argument(
            "matrix",
            format!("row {index} has {} columns, expected {width}", row.len()),
        ));
    }

    let mut columns: Vec<Vec<T>> = (0..width)
        .map(|_| Vec::with_capacity(rows.len()))
        .collect();
    for row in rows {
        for (column, value) in columns.iter_mut().zip(row) {
            column.push(value);
        }
    }
    Ok(columns)
}
