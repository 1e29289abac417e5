//! Rotation quaternion
//!
//! A quaternion shares [`Vector4`]'s lane layout (x, y, z, w with w as the
//! scalar part) and reuses the same numeric path for its component-wise math.
//! Quaternion-by-quaternion composition is not provided; compose
//! rotations as matrices.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::lanes::{Active, Lanes};
use crate::{MathError, Matrix4, Vector4};

/// Rotation quaternion (x, y, z, w).
///
/// Operations that interpret the quaternion as a rotation (`angle`,
/// [`Matrix4::rotation`]) assume unit length. Nothing normalizes implicitly.
#[repr(C, align(16))]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// No rotation
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `angle` radians about the axis (x, y, z).
    ///
    /// Produces `(axis * sin(angle / 2), cos(angle / 2))`. The axis must already
    /// be normalized; an unnormalized axis gives an unnormalized quaternion.
    pub fn from_axis_and_angle(x: f32, y: f32, z: f32, angle: f32) -> Self {
        let (sin_half, cos_half) = (angle * 0.5).sin_cos();
        Self::new(x * sin_half, y * sin_half, z * sin_half, cos_half)
    }

    /// Rotation angle in radians, `2 * acos(w)`.
    ///
    /// Only meaningful for unit quaternions. The arc-cosine runs in `f64`
    /// to keep precision near w = ±1, with w clamped to [-1, 1] so rounding
    /// noise does not turn into NaN.
    pub fn angle(&self) -> f32 {
        (f64::from(self.w).clamp(-1.0, 1.0).acos() * 2.0) as f32
    }

    #[inline]
    fn lanes(self) -> Vector4 {
        bytemuck::cast(self)
    }

    #[inline]
    fn from_lanes(v: Vector4) -> Self {
        bytemuck::cast(v)
    }

    /// Borrow the components as `[x, y, z, w]`
    #[inline]
    pub fn as_array(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }

    /// Dot product over the four raw components
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        Active::dot(self.lanes(), other.lanes())
    }

    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(&self) -> f32 {
        Active::length(self.lanes())
    }

    /// Scale to unit length in place. A zero quaternion yields NaN components.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    #[inline]
    pub fn normalized(&self) -> Self {
        Self::from_lanes(Active::normalized(self.lanes()))
    }

    /// Normalize via the reciprocal square root estimate, in place
    #[inline]
    pub fn normalize_estimated(&mut self) -> &mut Self {
        *self = self.normalized_estimated();
        self
    }

    #[inline]
    pub fn normalized_estimated(&self) -> Self {
        Self::from_lanes(Active::normalized_estimated(self.lanes()))
    }

    /// The rotation matrix for this quaternion; see [`Matrix4::rotation`]
    #[inline]
    pub fn to_matrix(&self) -> Matrix4 {
        Matrix4::rotation(self)
    }
}

impl From<[f32; 4]> for Quaternion {
    fn from(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl From<Quaternion> for [f32; 4] {
    fn from(q: Quaternion) -> Self {
        [q.x, q.y, q.z, q.w]
    }
}

impl TryFrom<&[f32]> for Quaternion {
    type Error = MathError;

    fn try_from(slice: &[f32]) -> Result<Self, MathError> {
        Vector4::try_from(slice).map(Self::from_lanes)
    }
}

impl std::ops::Add for Quaternion {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::from_lanes(Active::add(self.lanes(), other.lanes()))
    }
}

impl std::ops::Sub for Quaternion {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::from_lanes(Active::sub(self.lanes(), other.lanes()))
    }
}

impl std::ops::Mul<f32> for Quaternion {
    type Output = Self;
    #[inline]
    fn mul(self, factor: f32) -> Self {
        Self::from_lanes(Active::scale(self.lanes(), factor))
    }
}

impl std::ops::Mul<Quaternion> for f32 {
    type Output = Quaternion;
    #[inline]
    fn mul(self, q: Quaternion) -> Quaternion {
        q * self
    }
}
