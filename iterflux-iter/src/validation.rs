// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::logging::warn;
use iterflux_core::{IterFluxError, Result};

/// Rejects a zero size, step or count before any input is consumed.
pub(crate) fn require_positive(name: &'static str, value: usize) -> Result<usize> {
    if value == 0 {
        warn!("rejecting '{}': must be greater than 0", name);
        return Err(IterFluxError::invalid_argument(
            name,
            "must be greater than 0",
        ));
    }
    Ok(value)
}
