//! View frustum for culling
//!
//! Planes are extracted from a combined transform with the Gribb-Hartmann
//! method and normalized, so `plane.dot(point)` is a signed distance in the
//! space the transform maps from. If the matrix is view * projection the
//! frustum is in world space; with model * view * projection it is in model
//! space.

use gamemath_kernel::{Matrix4, Vector4};
use serde::{Deserialize, Serialize};

use crate::Box3d;

/// The six planes, in storage order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClippingPlane {
    Left = 0,
    Right,
    Top,
    Bottom,
    Near,
    Far,
}

impl ClippingPlane {
    pub const ALL: [ClippingPlane; 6] = [
        ClippingPlane::Left,
        ClippingPlane::Right,
        ClippingPlane::Top,
        ClippingPlane::Bottom,
        ClippingPlane::Near,
        ClippingPlane::Far,
    ];
}

/// Six inward-facing planes `(a, b, c, d)` with `ax + by + cz + d >= 0` inside
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frustum {
    planes: [Vector4; 6],
}

impl Frustum {
    /// Extract the frustum of a combined transform matrix
    pub fn from_matrix(matrix: &Matrix4) -> Self {
        let mut frustum = Self { planes: [Vector4::ZERO; 6] };
        frustum.extract(matrix);
        frustum
    }

    /// Replace the planes with those of `matrix`
    pub fn extract(&mut self, matrix: &Matrix4) {
        let rows = matrix.transposed();
        let c = rows.columns();

        self.planes = [
            normalize_plane(c[3] + c[0]),
            normalize_plane(c[3] - c[0]),
            normalize_plane(c[3] + c[1]),
            normalize_plane(c[3] - c[1]),
            normalize_plane(c[3] + c[2]),
            normalize_plane(c[3] - c[2]),
        ];
    }

    #[inline]
    pub fn plane(&self, which: ClippingPlane) -> &Vector4 {
        &self.planes[which as usize]
    }

    #[inline]
    pub fn planes(&self) -> &[Vector4; 6] {
        &self.planes
    }

    /// Conservative box test.
    ///
    /// Returns false only when the box lies entirely behind at least one
    /// plane. Boxes near a frustum corner can be reported visible while
    /// lying outside. A NaN distance never culls, so an infinite box is
    /// always visible.
    pub fn is_visible(&self, bounding_box: &Box3d) -> bool {
        let center = bounding_box.center().with_w(1.0);
        let half = bounding_box.half_extents().with_w(0.0);

        !self.planes.iter().any(|plane| {
            let extent = plane.with_w(0.0).absolute().dot(half);
            let distance = plane.dot(center);
            distance + extent < 0.0
        })
    }

    /// True when `point` is on the inner side of (or on) all six planes
    pub fn is_point_visible(&self, point: Vector4) -> bool {
        let point = point.with_w(1.0);
        self.planes.iter().all(|plane| plane.dot(point) >= 0.0)
    }
}

/// Scale the plane so its normal has unit length.
///
/// A zero normal is left as-is; such a plane only depends on its `d`.
fn normalize_plane(plane: Vector4) -> Vector4 {
    let length = plane.with_w(0.0).length();
    if length == 0.0 {
        log::trace!("Degenerate frustum plane {:?}, leaving unnormalized", plane);
        return plane;
    }
    plane * (1.0 / length)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn cube(center: Vector4, half: f32) -> Box3d {
        let h = Vector4::direction(half, half, half);
        Box3d::new(center - h, center + h)
    }

    #[test]
    fn test_identity_frustum_is_clip_cube() {
        let f = Frustum::from_matrix(&Matrix4::IDENTITY);
        assert_eq!(*f.plane(ClippingPlane::Left), Vector4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(*f.plane(ClippingPlane::Right), Vector4::new(-1.0, 0.0, 0.0, 1.0));
        assert_eq!(*f.plane(ClippingPlane::Near), Vector4::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(*f.plane(ClippingPlane::Far), Vector4::new(0.0, 0.0, -1.0, 1.0));
    }

    #[test]
    fn test_planes_are_normalized() {
        let projection = Matrix4::ortho(-4.0, 4.0, -2.0, 2.0, 1.0, 50.0);
        let f = Frustum::from_matrix(&projection);
        for which in ClippingPlane::ALL {
            let normal = f.plane(which).with_w(0.0);
            assert!(approx_eq(normal.length(), 1.0), "{:?} not normalized", which);
        }
        // Left plane of the volume sits at x = -4
        assert!(approx_eq(f.plane(ClippingPlane::Left).w, 4.0));
    }

    #[test]
    fn test_box_visibility() {
        let f = Frustum::from_matrix(&Matrix4::IDENTITY);
        assert!(f.is_visible(&cube(Vector4::position(0.0, 0.0, 0.0), 0.5)));
        // Straddles the right plane
        assert!(f.is_visible(&cube(Vector4::position(1.2, 0.0, 0.0), 0.5)));
        // Touches the right plane from outside
        assert!(f.is_visible(&cube(Vector4::position(1.5, 0.0, 0.0), 0.5)));
        assert!(!f.is_visible(&cube(Vector4::position(1.6, 0.0, 0.0), 0.5)));
        assert!(!f.is_visible(&cube(Vector4::position(0.0, 0.0, -3.0), 0.5)));
    }

    #[test]
    fn test_infinite_box_is_visible() {
        let f = Frustum::from_matrix(&Matrix4::ortho(-1.0, 1.0, -1.0, 1.0, 0.1, 10.0));
        assert!(f.is_visible(&Box3d::infinite()));
    }

    #[test]
    fn test_point_visibility() {
        let f = Frustum::from_matrix(&Matrix4::IDENTITY);
        assert!(f.is_point_visible(Vector4::position(0.9, -0.9, 0.0)));
        assert!(f.is_point_visible(Vector4::direction(1.0, 1.0, 1.0)));
        assert!(!f.is_point_visible(Vector4::position(0.0, 1.1, 0.0)));
    }

    #[test]
    fn test_degenerate_plane_stays_finite() {
        let mut m = Matrix4::IDENTITY;
        *m.column_mut(0) = Vector4::ZERO;
        let f = Frustum::from_matrix(&m);
        // Left and right collapse to (0, 0, 0, 1)
        assert_eq!(*f.plane(ClippingPlane::Left), Vector4::W);
        assert!(f.planes().iter().all(|p| p.is_finite()));
    }
}
