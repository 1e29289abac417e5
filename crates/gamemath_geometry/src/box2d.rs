//! Two-dimensional box in screen-style coordinates (top above bottom)

use serde::{Deserialize, Serialize};

/// Axis-aligned 2D box.
///
/// Construction swaps reversed bounds, so `left <= right` and
/// `top <= bottom` always hold. That includes values read through serde.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Box2d {
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
}

impl Box2d {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        let (left, right) = if right < left { (right, left) } else { (left, right) };
        let (top, bottom) = if bottom < top { (bottom, top) } else { (top, bottom) };
        Self { left, top, right, bottom }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.left
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.top
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.right
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// True when the interiors overlap.
    ///
    /// Boxes that only share an edge do not intersect. This is stricter than
    /// `Box3d::intersects`, which counts touching boxes.
    pub fn intersects(&self, other: &Box2d) -> bool {
        !(other.right <= self.left
            || other.bottom <= self.top
            || other.left >= self.right
            || other.top >= self.bottom)
    }
}

impl From<[f32; 4]> for Box2d {
    /// `[left, top, right, bottom]`, swapped into order
    fn from(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl From<Box2d> for [f32; 4] {
    fn from(b: Box2d) -> Self {
        [b.left, b.top, b.right, b.bottom]
    }
}
