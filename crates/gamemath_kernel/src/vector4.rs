//! 4-lane single-precision vector

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::lanes::{self, Active, Lanes};
use crate::MathError;

/// 4-component vector with x, y, z, w lanes.
///
/// By convention w = 1 marks a position and w = 0 a direction; nothing
/// enforces this. The layout is four consecutive `f32` in x, y, z, w order,
/// aligned to 16 bytes so it can be loaded into a SIMD register directly.
/// Equality compares all four lanes exactly.
#[repr(C, align(16))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vector4 {
    pub const ZERO: Self = Self::splat(0.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Create a new Vector4
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Same value in every lane
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// A position (w = 1)
    #[inline]
    pub const fn position(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// A direction (w = 0)
    #[inline]
    pub const fn direction(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 0.0)
    }

    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Borrow the lanes as a flat `[x, y, z, w]` array, e.g. for buffer uploads
    #[inline]
    pub fn as_array(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }

    /// Copy of this vector with w replaced
    #[inline]
    pub const fn with_w(self, w: f32) -> Self {
        Self::new(self.x, self.y, self.z, w)
    }

    /// Dot product over all four lanes.
    ///
    /// Pass directions with w = 0 when only the 3D part should count.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        Active::dot(self, other)
    }

    /// 3D cross product. Both inputs are read as directions; the result has w = 0.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Active::cross(self, other)
    }

    /// Length squared (no square root)
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length over all four lanes
    #[inline]
    pub fn length(self) -> f32 {
        Active::length(self)
    }

    /// Divide all four lanes by the length, in place.
    ///
    /// A zero vector produces NaN lanes. Zero w first for a 3D-only normalize.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Normalized copy; see [`Vector4::normalize`]
    #[inline]
    pub fn normalized(self) -> Self {
        Active::normalized(self)
    }

    /// Normalize through a reciprocal square root estimate, in place.
    ///
    /// On SIMD hardware the estimate carries roughly 12 bits of precision. Use
    /// it only where an almost-unit result is good enough. Without a fast
    /// estimate this is exactly [`Vector4::normalize`].
    #[inline]
    pub fn normalize_estimated(&mut self) -> &mut Self {
        *self = self.normalized_estimated();
        self
    }

    /// Estimated-normalized copy; see [`Vector4::normalize_estimated`]
    #[inline]
    pub fn normalized_estimated(self) -> Self {
        Active::normalized_estimated(self)
    }

    /// Component-wise absolute value
    #[inline]
    pub fn absolute(self) -> Self {
        Active::absolute(self)
    }

    /// True if any lane is +inf or -inf
    #[inline]
    pub fn is_infinite(self) -> bool {
        self.x.is_infinite() || self.y.is_infinite() || self.z.is_infinite() || self.w.is_infinite()
    }

    /// True if every lane is finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    /// Component-wise minimum
    #[inline]
    pub fn min_components(self, other: Self) -> Self {
        Active::min(self, other)
    }

    /// Component-wise maximum
    #[inline]
    pub fn max_components(self, other: Self) -> Self {
        Active::max(self, other)
    }

    /// Component-wise multiplication (Hadamard product)
    #[inline]
    pub fn component_mul(self, other: Self) -> Self {
        Active::component_mul(self, other)
    }

    /// Linear interpolation between two vectors
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self * (1.0 - t) + other * t
    }

    /// Largest ULP distance over the four lanes
    pub fn max_ulps(self, other: Self) -> u32 {
        self.to_array()
            .into_iter()
            .zip(other.to_array())
            .map(|(a, b)| lanes::ulps_between(a, b))
            .max()
            .unwrap_or(0)
    }
}

impl From<[f32; 4]> for Vector4 {
    fn from(a: [f32; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vector4> for [f32; 4] {
    fn from(v: Vector4) -> Self {
        v.to_array()
    }
}

impl TryFrom<&[f32]> for Vector4 {
    type Error = MathError;

    /// Copies exactly four floats; alignment of the source does not matter
    fn try_from(slice: &[f32]) -> Result<Self, MathError> {
        let lanes: [f32; 4] = slice.try_into().map_err(|_| MathError::SliceLength {
            expected: 4,
            actual: slice.len(),
        })?;
        Ok(Self::from_array(lanes))
    }
}

// Operator overloads

impl std::ops::Add for Vector4 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Active::add(self, other)
    }
}

impl std::ops::AddAssign for Vector4 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl std::ops::Sub for Vector4 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Active::sub(self, other)
    }
}

impl std::ops::SubAssign for Vector4 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl std::ops::Mul<f32> for Vector4 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Active::scale(self, scalar)
    }
}

impl std::ops::Mul<Vector4> for f32 {
    type Output = Vector4;
    #[inline]
    fn mul(self, vector: Vector4) -> Vector4 {
        Active::scale(vector, self)
    }
}

impl std::ops::MulAssign<f32> for Vector4 {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        *self = *self * scalar;
    }
}

impl std::ops::Div<f32> for Vector4 {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f32) -> Self {
        Active::divide(self, scalar)
    }
}

/// Negates x, y and z. w is kept so a negated position is still a position.
impl std::ops::Neg for Vector4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Active::negate_xyz(self)
    }
}
