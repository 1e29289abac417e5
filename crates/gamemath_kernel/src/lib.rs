//! 4-lane Mathematics Kernel
//!
//! Single-precision vector, quaternion and matrix types laid out for direct
//! upload to graphics APIs. Every hot operation has a portable scalar path and
//! a 4-wide SIMD path; see [`lanes`].
//!
//! ## Core Types
//!
//! - [`Vector4`] - 4-component vector, used for both positions (w = 1) and directions (w = 0)
//! - [`Quaternion`] - rotation quaternion sharing the vector's lane layout
//! - [`Matrix4`] - 4x4 column-major matrix
//!
//! ## Errors
//!
//! - [`MathError`] - returned by checked operations and buffer conversions

mod error;
pub mod lanes;
pub mod matrix4;
mod quaternion;
mod vector4;

pub use error::MathError;
pub use lanes::{Active, Lanes, Scalar, Simd};
pub use matrix4::Matrix4;
pub use quaternion::Quaternion;
pub use vector4::Vector4;
