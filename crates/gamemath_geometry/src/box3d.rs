//! Axis-aligned bounding box
//!
//! Boundaries are inclusive: touching boxes intersect and points on a face
//! are contained.

use gamemath_kernel::lanes::{NEGATIVE_INFINITY, POSITIVE_INFINITY};
use gamemath_kernel::{Matrix4, Vector4};
use serde::{Deserialize, Serialize};

/// AABB given by its minimum and maximum corners.
///
/// The default box is the null box at the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Box3d {
    minimum: Vector4,
    maximum: Vector4,
}

impl Box3d {
    pub fn new(minimum: Vector4, maximum: Vector4) -> Self {
        Self { minimum, maximum }
    }

    /// A box covering all of space
    pub fn infinite() -> Self {
        let mut b = Self::default();
        b.set_to_infinity();
        b
    }

    #[inline]
    pub fn minimum(&self) -> &Vector4 {
        &self.minimum
    }

    #[inline]
    pub fn maximum(&self) -> &Vector4 {
        &self.maximum
    }

    pub fn set_minimum(&mut self, minimum: Vector4) {
        self.minimum = minimum;
    }

    pub fn set_maximum(&mut self, maximum: Vector4) {
        self.maximum = maximum;
    }

    pub fn center(&self) -> Vector4 {
        0.5 * (self.minimum + self.maximum)
    }

    /// Half the box size along each axis
    pub fn half_extents(&self) -> Vector4 {
        0.5 * (self.maximum - self.minimum)
    }

    pub fn size(&self) -> Vector4 {
        self.maximum - self.minimum
    }

    /// Minimum equals maximum
    pub fn is_null(&self) -> bool {
        self.minimum == self.maximum
    }

    /// Sets x, y and z of the corners to -inf and +inf; w is left alone
    pub fn set_to_infinity(&mut self) {
        self.minimum = NEGATIVE_INFINITY.with_w(self.minimum.w);
        self.maximum = POSITIVE_INFINITY.with_w(self.maximum.w);
    }

    pub fn is_infinite(&self) -> bool {
        self.minimum.is_infinite() || self.maximum.is_infinite()
    }

    /// Grow to enclose `other`
    pub fn merge(&mut self, other: &Box3d) {
        self.minimum = self.minimum.min_components(other.minimum).with_w(self.minimum.w);
        self.maximum = self.maximum.max_components(other.maximum).with_w(self.maximum.w);
    }

    /// Grow to enclose `point`. Each axis updates min and max independently.
    pub fn merge_point(&mut self, point: Vector4) {
        self.minimum = self.minimum.min_components(point).with_w(self.minimum.w);
        self.maximum = self.maximum.max_components(point).with_w(self.maximum.w);
    }

    pub fn intersects(&self, other: &Box3d) -> bool {
        !(self.minimum.x > other.maximum.x
            || self.minimum.y > other.maximum.y
            || self.minimum.z > other.maximum.z
            || other.minimum.x > self.maximum.x
            || other.minimum.y > self.maximum.y
            || other.minimum.z > self.maximum.z)
    }

    pub fn contains(&self, point: Vector4) -> bool {
        !(self.minimum.x > point.x
            || self.minimum.y > point.y
            || self.minimum.z > point.z
            || point.x > self.maximum.x
            || point.y > self.maximum.y
            || point.z > self.maximum.z)
    }

    /// Bounding box of this box after an affine transform.
    ///
    /// Starts from the translation and, per output axis `i`, adds the smaller
    /// and larger of `m(i, j) * min[j]` and `m(i, j) * max[j]` for each input
    /// axis `j`. Tight for rotations, scales and translations; a projective
    /// matrix gives meaningless results.
    pub fn transform_affine(&self, matrix: &Matrix4) -> Box3d {
        let translation = *matrix.column(3);
        let mut new_min = translation.to_array();
        let mut new_max = translation.to_array();
        let min = self.minimum.to_array();
        let max = self.maximum.to_array();

        for i in 0..3 {
            for j in 0..3 {
                let a = matrix[(i, j)] * min[j];
                let b = matrix[(i, j)] * max[j];
                if a < b {
                    new_min[i] += a;
                    new_max[i] += b;
                } else {
                    new_min[i] += b;
                    new_max[i] += a;
                }
            }
        }

        Box3d::new(Vector4::from_array(new_min), Vector4::from_array(new_max))
    }
}

/// `matrix * box` refits through [`Box3d::transform_affine`]
impl std::ops::Mul<Box3d> for Matrix4 {
    type Output = Box3d;

    fn mul(self, b: Box3d) -> Box3d {
        b.transform_affine(&self)
    }
}
