//! Harness error types

use std::fmt;

/// Error returned by [`crate::run`]
#[derive(Debug)]
pub enum HarnessError {
    /// Scalar and SIMD results disagreed beyond the allowed ULP distance
    ParityFailed { operations: Vec<&'static str> },
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::ParityFailed { operations } => {
                write!(f, "Scalar/SIMD parity failed for: {}", operations.join(", "))
            }
        }
    }
}

impl std::error::Error for HarnessError {}
