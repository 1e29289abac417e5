//! 4x4 column-major matrix
//!
//! The matrix is stored as four [`Vector4`] columns. `data()` exposes the
//! same memory as sixteen floats in column-major order, ready for a graphics
//! API uniform upload; that ordering is part of the public contract and is
//! identical under both numeric paths.
//!
//! All constructors return new matrices. The only in-place operation is
//! [`Matrix4::scale`], which returns `&mut Self` for chaining.

use std::fmt;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::lanes::{Active, Lanes};
use crate::{MathError, Quaternion, Vector4};

/// 4x4 matrix, column-major
#[repr(C, align(16))]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Matrix4 {
    cols: [Vector4; 4],
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4 {
    /// Identity matrix
    pub const IDENTITY: Self = Self::from_columns(Vector4::X, Vector4::Y, Vector4::Z, Vector4::W);

    /// All elements zero
    pub const ZERO: Self = Self::from_columns(Vector4::ZERO, Vector4::ZERO, Vector4::ZERO, Vector4::ZERO);

    #[inline]
    pub const fn from_columns(c0: Vector4, c1: Vector4, c2: Vector4, c3: Vector4) -> Self {
        Self { cols: [c0, c1, c2, c3] }
    }

    /// Build from sixteen floats in column-major order
    #[inline]
    pub fn from_column_major(data: [f32; 16]) -> Self {
        bytemuck::cast(data)
    }

    #[inline]
    pub fn columns(&self) -> &[Vector4; 4] {
        &self.cols
    }

    /// Borrow column `index` as a vector. Panics if `index > 3`.
    #[inline]
    pub fn column(&self, index: usize) -> &Vector4 {
        &self.cols[index]
    }

    /// Mutable borrow of column `index`. Panics if `index > 3`.
    #[inline]
    pub fn column_mut(&mut self, index: usize) -> &mut Vector4 {
        &mut self.cols[index]
    }

    /// Element at (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self[(row, col)]
    }

    /// The sixteen elements in column-major order
    #[inline]
    pub fn data(&self) -> &[f32; 16] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32; 16] {
        bytemuck::cast_mut(self)
    }

    /// Borrow a flat float buffer as a run of matrices without copying.
    ///
    /// The buffer must hold a multiple of 16 floats and start on a 16-byte
    /// boundary. Misaligned buffers are rejected rather than read through an
    /// unaligned reference; copy them with `Matrix4::try_from` instead.
    pub fn cast_slice(floats: &[f32]) -> Result<&[Matrix4], MathError> {
        if floats.len() % 16 != 0 {
            return Err(MathError::SliceLength {
                expected: floats.len().next_multiple_of(16),
                actual: floats.len(),
            });
        }
        bytemuck::try_cast_slice(floats).map_err(|_| MathError::Misaligned)
    }

    pub fn set_to_identity(&mut self) {
        *self = Self::IDENTITY;
    }

    pub fn set_to_zero(&mut self) {
        *self = Self::ZERO;
    }

    /// Scaling matrix from the x, y and z of `factors`
    pub fn scaling(factors: Vector4) -> Self {
        Self::scaling_xyz(factors.x, factors.y, factors.z)
    }

    pub fn scaling_xyz(sx: f32, sy: f32, sz: f32) -> Self {
        Self::from_columns(
            Vector4::new(sx, 0.0, 0.0, 0.0),
            Vector4::new(0.0, sy, 0.0, 0.0),
            Vector4::new(0.0, 0.0, sz, 0.0),
            Vector4::W,
        )
    }

    /// Translation by the x, y and z of `offset`; w is ignored
    pub fn translation(offset: Vector4) -> Self {
        let mut result = Self::IDENTITY;
        result.cols[3] = offset.with_w(1.0);
        result
    }

    /// Identity plus (x, y, z, w) in column 3, so element (3, 3) becomes `1 + w`
    pub fn translation_xyzw(x: f32, y: f32, z: f32, w: f32) -> Self {
        let mut result = Self::IDENTITY;
        result.cols[3] = Vector4::new(x, y, z, 1.0 + w);
        result
    }

    /// Rotation matrix for a unit quaternion.
    ///
    /// Convention: a positive angle about +Y turns +X toward +Z, so
    /// `from_axis_and_angle(0, 1, 0, pi/2)` maps +X to +Z.
    pub fn rotation(q: &Quaternion) -> Self {
        let [c0, c1, c2] = rotation_columns(q);
        Self::from_columns(c0, c1, c2, Vector4::W)
    }

    /// Scale, then rotate, then translate.
    ///
    /// The x, y and z of `scale` and `translation` are used; their w is ignored.
    pub fn transformation(scale: Vector4, rotation: &Quaternion, translation: Vector4) -> Self {
        let [c0, c1, c2] = rotation_columns(rotation);
        Self::from_columns(
            c0 * scale.x,
            c1 * scale.y,
            c2 * scale.z,
            translation.with_w(1.0),
        )
    }

    /// Right-handed view matrix, equivalent to `gluLookAt`.
    ///
    /// `eye` and `center` are positions, `up` a direction. `up` must not be
    /// parallel to the viewing direction.
    pub fn look_at(eye: Vector4, center: Vector4, up: Vector4) -> Self {
        let forward = (center - eye).with_w(0.0).normalized();
        let side = forward.cross(up.with_w(0.0)).normalized();
        let true_up = side.cross(forward);

        let rotation = Self::from_columns(
            Vector4::new(side.x, true_up.x, -forward.x, 0.0),
            Vector4::new(side.y, true_up.y, -forward.y, 0.0),
            Vector4::new(side.z, true_up.z, -forward.z, 0.0),
            Vector4::W,
        );
        rotation * Self::translation(-eye)
    }

    /// Orthographic projection, equivalent to `glOrtho`
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let width = right - left;
        let height = top - bottom;
        let depth = far - near;
        Self::from_columns(
            Vector4::new(2.0 / width, 0.0, 0.0, 0.0),
            Vector4::new(0.0, 2.0 / height, 0.0, 0.0),
            Vector4::new(0.0, 0.0, -2.0 / depth, 0.0),
            Vector4::new(
                -(right + left) / width,
                -(top + bottom) / height,
                -(far + near) / depth,
                1.0,
            ),
        )
    }

    /// Multiply columns 0, 1 and 2 by the x, y and z of `factors`, in place
    #[inline]
    pub fn scale(&mut self, factors: Vector4) -> &mut Self {
        Active::scale_columns(self, factors);
        self
    }

    #[inline]
    pub fn scale_xyz(&mut self, sx: f32, sy: f32, sz: f32) -> &mut Self {
        self.scale(Vector4::new(sx, sy, sz, 1.0))
    }

    /// Transform a position: w is taken as 1, column 3 is added unscaled
    #[inline]
    pub fn map_position(&self, v: Vector4) -> Vector4 {
        Active::map_position(self, v)
    }

    /// Transform a direction: w is taken as 0, column 3 is skipped
    #[inline]
    pub fn map_normal(&self, v: Vector4) -> Vector4 {
        Active::map_normal(self, v)
    }

    pub fn transposed(&self) -> Self {
        let c = &self.cols;
        Self::from_columns(
            Vector4::new(c[0].x, c[1].x, c[2].x, c[3].x),
            Vector4::new(c[0].y, c[1].y, c[2].y, c[3].y),
            Vector4::new(c[0].z, c[1].z, c[2].z, c[3].z),
            Vector4::new(c[0].w, c[1].w, c[2].w, c[3].w),
        )
    }

    pub fn determinant(&self) -> f32 {
        let m = self.data();
        let cof = first_column_cofactors(m);
        m[0] * cof[0] + m[1] * cof[1] + m[2] * cof[2] + m[3] * cof[3]
    }

    /// General inverse, or the identity matrix if this matrix is singular.
    ///
    /// The fallback is silent: a singular input is indistinguishable from an
    /// identity input by the result alone. Callers that need to know should
    /// use [`Matrix4::try_inverted`].
    pub fn inverted(&self) -> Self {
        self.try_inverted().unwrap_or_else(|_| {
            log::trace!("inverted(): singular matrix, returning identity");
            Self::IDENTITY
        })
    }

    /// General inverse by cofactor expansion.
    ///
    /// Fails with [`MathError::SingularMatrix`] when the determinant is exactly
    /// zero. Near-singular matrices still invert, with large error.
    pub fn try_inverted(&self) -> Result<Self, MathError> {
        let m = self.data();
        let cof = first_column_cofactors(m);
        let det = m[0] * cof[0] + m[1] * cof[1] + m[2] * cof[2] + m[3] * cof[3];
        if det == 0.0 {
            return Err(MathError::SingularMatrix);
        }

        let mut inv = [0.0f32; 16];
        inv[0] = cof[0];
        inv[4] = cof[1];
        inv[8] = cof[2];
        inv[12] = cof[3];

        inv[1] = -m[1] * m[10] * m[15] + m[1] * m[11] * m[14] + m[9] * m[2] * m[15]
            - m[9] * m[3] * m[14] - m[13] * m[2] * m[11] + m[13] * m[3] * m[10];
        inv[5] = m[0] * m[10] * m[15] - m[0] * m[11] * m[14] - m[8] * m[2] * m[15]
            + m[8] * m[3] * m[14] + m[12] * m[2] * m[11] - m[12] * m[3] * m[10];
        inv[9] = -m[0] * m[9] * m[15] + m[0] * m[11] * m[13] + m[8] * m[1] * m[15]
            - m[8] * m[3] * m[13] - m[12] * m[1] * m[11] + m[12] * m[3] * m[9];
        inv[13] = m[0] * m[9] * m[14] - m[0] * m[10] * m[13] - m[8] * m[1] * m[14]
            + m[8] * m[2] * m[13] + m[12] * m[1] * m[10] - m[12] * m[2] * m[9];

        inv[2] = m[1] * m[6] * m[15] - m[1] * m[7] * m[14] - m[5] * m[2] * m[15]
            + m[5] * m[3] * m[14] + m[13] * m[2] * m[7] - m[13] * m[3] * m[6];
        inv[6] = -m[0] * m[6] * m[15] + m[0] * m[7] * m[14] + m[4] * m[2] * m[15]
            - m[4] * m[3] * m[14] - m[12] * m[2] * m[7] + m[12] * m[3] * m[6];
        inv[10] = m[0] * m[5] * m[15] - m[0] * m[7] * m[13] - m[4] * m[1] * m[15]
            + m[4] * m[3] * m[13] + m[12] * m[1] * m[7] - m[12] * m[3] * m[5];
        inv[14] = -m[0] * m[5] * m[14] + m[0] * m[6] * m[13] + m[4] * m[1] * m[14]
            - m[4] * m[2] * m[13] - m[12] * m[1] * m[6] + m[12] * m[2] * m[5];

        inv[3] = -m[1] * m[6] * m[11] + m[1] * m[7] * m[10] + m[5] * m[2] * m[11]
            - m[5] * m[3] * m[10] - m[9] * m[2] * m[7] + m[9] * m[3] * m[6];
        inv[7] = m[0] * m[6] * m[11] - m[0] * m[7] * m[10] - m[4] * m[2] * m[11]
            + m[4] * m[3] * m[10] + m[8] * m[2] * m[7] - m[8] * m[3] * m[6];
        inv[11] = -m[0] * m[5] * m[11] + m[0] * m[7] * m[9] + m[4] * m[1] * m[11]
            - m[4] * m[3] * m[9] - m[8] * m[1] * m[7] + m[8] * m[3] * m[5];
        inv[15] = m[0] * m[5] * m[10] - m[0] * m[6] * m[9] - m[4] * m[1] * m[10]
            + m[4] * m[2] * m[9] + m[8] * m[1] * m[6] - m[8] * m[2] * m[5];

        let inv_det = 1.0 / det;
        for value in &mut inv {
            *value *= inv_det;
        }
        Ok(Self::from_column_major(inv))
    }
}

/// Cofactors of m[0..4] (the first column), each a 3x3 minor with sign.
///
/// These are also entries 0, 4, 8 and 12 of the adjugate, and the
/// determinant is their dot product with the first column.
fn first_column_cofactors(m: &[f32; 16]) -> [f32; 4] {
    [
        m[5] * m[10] * m[15] - m[5] * m[11] * m[14] - m[9] * m[6] * m[15]
            + m[9] * m[7] * m[14] + m[13] * m[6] * m[11] - m[13] * m[7] * m[10],
        -m[4] * m[10] * m[15] + m[4] * m[11] * m[14] + m[8] * m[6] * m[15]
            - m[8] * m[7] * m[14] - m[12] * m[6] * m[11] + m[12] * m[7] * m[10],
        m[4] * m[9] * m[15] - m[4] * m[11] * m[13] - m[8] * m[5] * m[15]
            + m[8] * m[7] * m[13] + m[12] * m[5] * m[11] - m[12] * m[7] * m[9],
        -m[4] * m[9] * m[14] + m[4] * m[10] * m[13] + m[8] * m[5] * m[14]
            - m[8] * m[6] * m[13] - m[12] * m[5] * m[10] + m[12] * m[6] * m[9],
    ]
}

/// Upper 3x3 of the rotation for `q`, as three direction columns
fn rotation_columns(q: &Quaternion) -> [Vector4; 3] {
    let (x, y, z, w) = (q.x, q.y, q.z, q.w);
    let (xx, yy, zz) = (x * x, y * y, z * z);
    let (xy, xz, yz) = (x * y, x * z, y * z);
    let (xw, yw, zw) = (x * w, y * w, z * w);

    [
        Vector4::new(1.0 - 2.0 * (yy + zz), 2.0 * (xy - zw), 2.0 * (xz + yw), 0.0),
        Vector4::new(2.0 * (xy + zw), 1.0 - 2.0 * (xx + zz), 2.0 * (yz - xw), 0.0),
        Vector4::new(2.0 * (xz - yw), 2.0 * (yz + xw), 1.0 - 2.0 * (xx + yy), 0.0),
    ]
}

impl TryFrom<&[f32]> for Matrix4 {
    type Error = MathError;

    /// Copies sixteen column-major floats; alignment of the source does not matter
    fn try_from(slice: &[f32]) -> Result<Self, MathError> {
        let data: [f32; 16] = slice.try_into().map_err(|_| MathError::SliceLength {
            expected: 16,
            actual: slice.len(),
        })?;
        Ok(Self::from_column_major(data))
    }
}

impl std::ops::Index<(usize, usize)> for Matrix4 {
    type Output = f32;

    /// `m[(row, col)]`
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.cols[col].as_array()[row]
    }
}

impl std::ops::IndexMut<(usize, usize)> for Matrix4 {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        &mut bytemuck::cast_mut::<Vector4, [f32; 4]>(&mut self.cols[col])[row]
    }
}

impl std::ops::Mul for Matrix4 {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        Active::mul_matrix(&self, &other)
    }
}

impl std::ops::MulAssign for Matrix4 {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

/// `m * v` with no homogeneous divide
impl std::ops::Mul<Vector4> for Matrix4 {
    type Output = Vector4;
    #[inline]
    fn mul(self, v: Vector4) -> Vector4 {
        Active::mul_vector(&self, v)
    }
}

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            writeln!(
                f,
                "{:.6} {:.6} {:.6} {:.6}",
                self[(row, 0)],
                self[(row, 1)],
                self[(row, 2)],
                self[(row, 3)]
            )?;
        }
        Ok(())
    }
}
