// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the iterflux sequence library
//!
//! Every fallible operation reports one [`IterFluxError`]. Argument validation
//! fails before any input is consumed; traversal-time conditions (such as
//! sources of different lengths in `zip_strict`) surface as an error item at
//! the step where they are detected.
//!
//! # Examples
//!
//! ```
//! use iterflux_core::{IterFluxError, Result};
//!
//! fn window_size(size: usize) -> Result<usize> {
//!     if size == 0 {
//!         return Err(IterFluxError::invalid_argument("size", "must be greater than 0"));
//!     }
//!     Ok(size)
//! }
//!
//! assert!(window_size(0).is_err());
//! ```

/// Root error type for all iterflux operations
#[derive(Debug, thiserror::Error)]
pub enum IterFluxError {
    /// A size, step or count parameter is outside its documented domain
    ///
    /// Raised before the input sequence is traversed.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Name of the offending parameter
        name: &'static str,
        /// What the parameter must satisfy
        reason: String,
    },

    /// A reducer that needs at least one element received none
    #[error("Empty input: '{operation}' requires at least one element")]
    EmptyInput {
        /// The operation that was applied to the empty sequence
        operation: &'static str,
    },

    /// Strictly zipped sources ended at different lengths
    ///
    /// `position` is the zero-based step at which the mismatch was observed;
    /// every tuple before it was yielded normally.
    #[error("Length mismatch: sources ended at different lengths at position {position}")]
    LengthMismatch {
        /// Index of the first step where some, but not all, sources were exhausted
        position: usize,
    },

    /// Custom error from user code
    ///
    /// Wraps errors raised by caller-supplied logic so they can travel
    /// alongside library errors.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IterFluxError {
    /// Create an invalid-argument error for the named parameter
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Create an empty-input error for the named operation
    #[must_use]
    pub const fn empty_input(operation: &'static str) -> Self {
        Self::EmptyInput { operation }
    }

    /// Create a length-mismatch error observed at `position`
    #[must_use]
    pub const fn length_mismatch(position: usize) -> Self {
        Self::LengthMismatch { position }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    #[must_use]
    pub const fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput { .. })
    }

    #[must_use]
    pub const fn is_length_mismatch(&self) -> bool {
        matches!(self, Self::LengthMismatch { .. })
    }
}

/// Specialized Result type for iterflux operations
pub type Result<T> = std::result::Result<T, IterFluxError>;
