//! Numeric paths for the 4-lane kernel
//!
//! Every hot operation on [`Vector4`] and [`Matrix4`] exists twice:
//!
//! - [`Scalar`] - portable `f32` arithmetic, one lane at a time
//! - [`Simd`] - 4-wide single-precision lanes via `wide::f32x4`
//!
//! [`Active`] is the path the public types dispatch to. It is chosen at build
//! time by the `simd` cargo feature. Both paths are always compiled so they can
//! be checked against each other in the same binary.
//!
//! The two paths use the same association order for every sum (a pairwise
//! fold for dot products, left-to-right column accumulation for matrix
//! products), so on IEEE hardware they agree bit-for-bit. The public contract
//! is looser: results must stay within one ULP of each other.

mod scalar;
mod simd;

pub use scalar::Scalar;
pub use simd::Simd;

use crate::{Matrix4, Vector4};

/// The numeric path used by the public types in this build
#[cfg(feature = "simd")]
pub type Active = Simd;

/// The numeric path used by the public types in this build
#[cfg(not(feature = "simd"))]
pub type Active = Scalar;

/// A vector with +inf in every lane
pub const POSITIVE_INFINITY: Vector4 = Vector4::splat(f32::INFINITY);

/// A vector with -inf in every lane
pub const NEGATIVE_INFINITY: Vector4 = Vector4::splat(f32::NEG_INFINITY);

/// One implementation strategy for the kernel's vector and matrix math.
///
/// Implementations must be observationally equivalent: same inputs, outputs
/// within one ULP, same handling of non-finite values.
pub trait Lanes {
    /// Human-readable name, used in parity and benchmark reports
    const NAME: &'static str;

    /// 4-component dot product
    fn dot(a: Vector4, b: Vector4) -> f32;

    /// 3D cross product of two direction vectors; w of the result is 0
    fn cross(a: Vector4, b: Vector4) -> Vector4;

    /// Euclidean length over all four components
    fn length(v: Vector4) -> f32;

    /// All four components divided by the length
    fn normalized(v: Vector4) -> Vector4;

    /// Normalization through an approximate reciprocal square root.
    ///
    /// Paths without a fast approximation fall back to [`Lanes::normalized`].
    fn normalized_estimated(v: Vector4) -> Vector4;

    /// Lane-wise sum
    fn add(a: Vector4, b: Vector4) -> Vector4;

    /// Lane-wise difference
    fn sub(a: Vector4, b: Vector4) -> Vector4;

    /// All four lanes multiplied by a scalar
    fn scale(v: Vector4, factor: f32) -> Vector4;

    /// All four lanes divided by a scalar
    fn divide(v: Vector4, divisor: f32) -> Vector4;

    /// Lane-wise product
    fn component_mul(a: Vector4, b: Vector4) -> Vector4;

    /// Negates x, y and z; w passes through
    fn negate_xyz(v: Vector4) -> Vector4;

    /// Lane-wise absolute value
    fn absolute(v: Vector4) -> Vector4;

    /// Lane-wise minimum
    fn min(a: Vector4, b: Vector4) -> Vector4;

    /// Lane-wise maximum
    fn max(a: Vector4, b: Vector4) -> Vector4;

    /// `m * v` without homogeneous divide
    fn mul_vector(m: &Matrix4, v: Vector4) -> Vector4;

    /// `m * (x, y, z, 1)`: column 3 is added without a multiply
    fn map_position(m: &Matrix4, v: Vector4) -> Vector4;

    /// `m * (x, y, z, 0)`: column 3 is skipped
    fn map_normal(m: &Matrix4, v: Vector4) -> Vector4;

    /// `a * b`, each result column a linear combination of `a`'s columns
    fn mul_matrix(a: &Matrix4, b: &Matrix4) -> Matrix4 {
        let cols = b.columns();
        Matrix4::from_columns(
            Self::mul_vector(a, cols[0]),
            Self::mul_vector(a, cols[1]),
            Self::mul_vector(a, cols[2]),
            Self::mul_vector(a, cols[3]),
        )
    }

    /// Multiplies columns 0, 1 and 2 in place by the x, y and z of `factors`
    fn scale_columns(m: &mut Matrix4, factors: Vector4);

    /// Slab distances of a ray against an axis-aligned box.
    ///
    /// Returns `(entry, exit)`: the largest per-axis entry distance and the
    /// smallest per-axis exit distance over x, y and z. Lanes that come out
    /// NaN (zero direction component over zero extent) are clamped against
    /// +inf first and then -inf, so they never constrain the interval.
    fn slab_interval(
        origin: Vector4,
        inv_direction: Vector4,
        box_min: Vector4,
        box_max: Vector4,
    ) -> (f32, f32);
}

/// Distance between two floats in units of least precision.
///
/// `+0.0` and `-0.0` are 0 apart. Two NaNs count as equal; NaN against any
/// number is `u32::MAX`.
pub fn ulps_between(a: f32, b: f32) -> u32 {
    if a.is_nan() || b.is_nan() {
        return if a.is_nan() && b.is_nan() { 0 } else { u32::MAX };
    }
    let diff = (ordered_bits(a) - ordered_bits(b)).unsigned_abs();
    u32::try_from(diff).unwrap_or(u32::MAX)
}

/// Maps float bit patterns onto a monotonic integer line
fn ordered_bits(f: f32) -> i64 {
    let bits = f.to_bits();
    let magnitude = i64::from(bits & 0x7fff_ffff);
    if bits >> 31 == 1 {
        -magnitude
    } else {
        magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ulps_identical() {
        assert_eq!(ulps_between(1.0, 1.0), 0);
        assert_eq!(ulps_between(0.0, -0.0), 0);
    }

    #[test]
    fn test_ulps_neighbours() {
        let next = f32::from_bits(1.0f32.to_bits() + 1);
        assert_eq!(ulps_between(1.0, next), 1);
        assert_eq!(ulps_between(next, 1.0), 1);
    }

    #[test]
    fn test_ulps_across_zero() {
        let tiny = f32::from_bits(1);
        assert_eq!(ulps_between(tiny, -tiny), 2);
    }

    #[test]
    fn test_ulps_nan() {
        assert_eq!(ulps_between(f32::NAN, f32::NAN), 0);
        assert_eq!(ulps_between(f32::NAN, 1.0), u32::MAX);
    }

    #[test]
    fn test_ulps_infinity() {
        assert_eq!(ulps_between(f32::INFINITY, f32::INFINITY), 0);
        assert_eq!(ulps_between(f32::MAX, f32::INFINITY), 1);
    }

    #[test]
    fn test_infinity_constants() {
        assert!(POSITIVE_INFINITY.is_infinite());
        assert!(NEGATIVE_INFINITY.is_infinite());
        assert_eq!(NEGATIVE_INFINITY.x, f32::NEG_INFINITY);
    }

    #[test]
    fn test_active_path_is_selected_by_feature() {
        #[cfg(feature = "simd")]
        assert_eq!(Active::NAME, Simd::NAME);
        #[cfg(not(feature = "simd"))]
        assert_eq!(Active::NAME, Scalar::NAME);
    }
}
