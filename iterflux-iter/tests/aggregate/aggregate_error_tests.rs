// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use iterflux_core::IterFluxError;
use iterflux_iter::aggregate::{minmax, product_strict, reduce, sum_strict, transpose};

#[test]
fn test_strict_sum_of_empty_input() {
    // Act
    let result = sum_strict(Vec::<i32>::new());

    // Assert
    assert!(matches!(
        result,
        Err(IterFluxError::EmptyInput {
            operation: "sum_strict"
        })
    ));
}

#[test]
fn test_strict_product_of_empty_input() {
    // Act
    let result = product_strict(std::iter::empty::<f64>());

    // Assert
    assert!(result.is_err_and(|e| e.is_empty_input()));
}

#[test]
fn test_reduce_of_empty_input() {
    // Act
    let result = reduce(Vec::<String>::new(), |a, b| a + &b);

    // Assert
    let message = result.err().map(|e| e.to_string());
    assert_eq!(
        message.as_deref(),
        Some("Empty input: 'reduce' requires at least one element")
    );
}

#[test]
fn test_transpose_rejects_ragged_rows() {
    // Act
    let result = transpose(vec![vec![1, 2], vec![3]]);

    // Assert
    let message = result.err().map(|e| e.to_string());
    assert_eq!(
        message.as_deref(),
        Some("Invalid argument 'matrix': row 1 has 1 columns, expected 2")
    );
}

#[test]
fn test_minmax_of_empty_input() {
    // Act
    let result = minmax(Vec::<u8>::new());

    // Assert
    assert!(matches!(
        result,
        Err(IterFluxError::EmptyInput {
            operation: "minmax"
        })
    ));
}
