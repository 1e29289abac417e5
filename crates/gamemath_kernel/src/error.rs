//! Kernel error types
//!
//! The numeric hot paths never fail. Errors only come from the checked
//! variants of a few operations and from reading external float buffers.

use std::fmt;

/// Error type for checked kernel operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// The matrix has a zero determinant and cannot be inverted
    SingularMatrix,
    /// An external buffer held the wrong number of floats
    SliceLength { expected: usize, actual: usize },
    /// An external buffer was not aligned to 16 bytes and cannot be borrowed
    /// as vector or matrix lanes
    Misaligned,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::SingularMatrix => write!(f, "Matrix is singular (determinant is zero)"),
            MathError::SliceLength { expected, actual } => {
                write!(f, "Expected {} floats, got {}", expected, actual)
            }
            MathError::Misaligned => write!(f, "Buffer is not 16-byte aligned"),
        }
    }
}

impl std::error::Error for MathError {}
