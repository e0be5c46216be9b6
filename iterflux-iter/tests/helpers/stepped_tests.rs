// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use iterflux_core::IterFluxError;
use iterflux_iter::SteppedExt;
use iterflux_test_utils::naturals;

#[test]
fn test_every_third_element_from_the_first() -> anyhow::Result<()> {
    // Act
    let result: Vec<_> = (0..10).stepped(3)?.collect();

    // Assert
    assert_eq!(result, vec![0, 3, 6, 9]);

    Ok(())
}

#[test]
fn test_step_one_is_identity() -> anyhow::Result<()> {
    // Act
    let result: Vec<_> = (1..=4).stepped(1)?.collect();

    // Assert
    assert_eq!(result, vec![1, 2, 3, 4]);

    Ok(())
}

#[test]
fn test_stepped_over_infinite_source() -> anyhow::Result<()> {
    // Act
    let result: Vec<_> = naturals().stepped(10)?.take(3).collect();

    // Assert
    assert_eq!(result, vec![0, 10, 20]);

    Ok(())
}

#[test]
fn test_zero_step_is_rejected() {
    // Act
    let result = (0..10).stepped(0);

    // Assert
    assert!(matches!(
        result,
        Err(IterFluxError::InvalidArgument { name: "step", .. })
    ));
}
