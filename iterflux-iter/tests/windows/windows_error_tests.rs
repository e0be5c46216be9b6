// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use iterflux_core::IterFluxError;
use iterflux_iter::WindowsExt;
use iterflux_test_utils::CountingIter;

#[test]
fn test_zero_window_size_is_rejected() {
    // Arrange
    let (source, counter) = CountingIter::new(1..=10);

    // Act
    let result = source.windows(0, 1);

    // Assert
    assert!(matches!(
        result,
        Err(IterFluxError::InvalidArgument { name: "size", .. })
    ));
    assert_eq!(counter.get(), 0);
}

#[test]
fn test_zero_window_step_is_rejected() {
    // Arrange
    let (source, counter) = CountingIter::new(1..=10);

    // Act
    let result = source.windows(2, 0);

    // Assert
    assert!(matches!(
        result,
        Err(IterFluxError::InvalidArgument { name: "step", .. })
    ));
    assert_eq!(counter.get(), 0);
}

#[test]
fn test_zero_chunk_size_is_rejected() {
    // Act
    let result = (1..=10).chunks(0);

    // Assert
    let error = result.err().map(|e| e.to_string());
    assert_eq!(
        error.as_deref(),
        Some("Invalid argument 'size': must be greater than 0")
    );
}

#[test]
fn test_zero_slice_size_is_rejected() {
    // Act
    let result = (1..=10).slices(0);

    // Assert
    assert!(result.is_err_and(|e| e.is_invalid_argument()));
}
