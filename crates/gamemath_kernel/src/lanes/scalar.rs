//! Portable scalar path

use super::Lanes;
use crate::{Matrix4, Vector4};

/// Plain `f32` arithmetic, one component at a time
#[derive(Clone, Copy, Debug, Default)]
pub struct Scalar;

impl Lanes for Scalar {
    const NAME: &'static str = "scalar";

    #[inline]
    fn dot(a: Vector4, b: Vector4) -> f32 {
        // Pairwise, same association as the SIMD lane fold
        (a.x * b.x + a.z * b.z) + (a.y * b.y + a.w * b.w)
    }

    #[inline]
    fn cross(a: Vector4, b: Vector4) -> Vector4 {
        Vector4::new(
            a.y * b.z - a.z * b.y,
            a.z * b.x - a.x * b.z,
            a.x * b.y - a.y * b.x,
            0.0,
        )
    }

    #[inline]
    fn length(v: Vector4) -> f32 {
        Self::dot(v, v).sqrt()
    }

    #[inline]
    fn normalized(v: Vector4) -> Vector4 {
        let len = Self::length(v);
        Vector4::new(v.x / len, v.y / len, v.z / len, v.w / len)
    }

    #[inline]
    fn normalized_estimated(v: Vector4) -> Vector4 {
        // No reciprocal square root estimate in scalar code
        Self::normalized(v)
    }

    #[inline]
    fn add(a: Vector4, b: Vector4) -> Vector4 {
        Vector4::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
    }

    #[inline]
    fn sub(a: Vector4, b: Vector4) -> Vector4 {
        Vector4::new(a.x - b.x, a.y - b.y, a.z - b.z, a.w - b.w)
    }

    #[inline]
    fn scale(v: Vector4, factor: f32) -> Vector4 {
        Vector4::new(v.x * factor, v.y * factor, v.z * factor, v.w * factor)
    }

    #[inline]
    fn divide(v: Vector4, divisor: f32) -> Vector4 {
        Vector4::new(v.x / divisor, v.y / divisor, v.z / divisor, v.w / divisor)
    }

    #[inline]
    fn component_mul(a: Vector4, b: Vector4) -> Vector4 {
        Vector4::new(a.x * b.x, a.y * b.y, a.z * b.z, a.w * b.w)
    }

    #[inline]
    fn negate_xyz(v: Vector4) -> Vector4 {
        Vector4::new(-v.x, -v.y, -v.z, v.w)
    }

    #[inline]
    fn absolute(v: Vector4) -> Vector4 {
        Vector4::new(v.x.abs(), v.y.abs(), v.z.abs(), v.w.abs())
    }

    #[inline]
    fn min(a: Vector4, b: Vector4) -> Vector4 {
        Vector4::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z), a.w.min(b.w))
    }

    #[inline]
    fn max(a: Vector4, b: Vector4) -> Vector4 {
        Vector4::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z), a.w.max(b.w))
    }

    fn mul_vector(m: &Matrix4, v: Vector4) -> Vector4 {
        let c = m.columns();
        Vector4::new(
            c[0].x * v.x + c[1].x * v.y + c[2].x * v.z + c[3].x * v.w,
            c[0].y * v.x + c[1].y * v.y + c[2].y * v.z + c[3].y * v.w,
            c[0].z * v.x + c[1].z * v.y + c[2].z * v.z + c[3].z * v.w,
            c[0].w * v.x + c[1].w * v.y + c[2].w * v.z + c[3].w * v.w,
        )
    }

    fn map_position(m: &Matrix4, v: Vector4) -> Vector4 {
        let c = m.columns();
        Vector4::new(
            c[0].x * v.x + c[1].x * v.y + c[2].x * v.z + c[3].x,
            c[0].y * v.x + c[1].y * v.y + c[2].y * v.z + c[3].y,
            c[0].z * v.x + c[1].z * v.y + c[2].z * v.z + c[3].z,
            c[0].w * v.x + c[1].w * v.y + c[2].w * v.z + c[3].w,
        )
    }

    fn map_normal(m: &Matrix4, v: Vector4) -> Vector4 {
        let c = m.columns();
        Vector4::new(
            c[0].x * v.x + c[1].x * v.y + c[2].x * v.z,
            c[0].y * v.x + c[1].y * v.y + c[2].y * v.z,
            c[0].z * v.x + c[1].z * v.y + c[2].z * v.z,
            c[0].w * v.x + c[1].w * v.y + c[2].w * v.z,
        )
    }

    fn scale_columns(m: &mut Matrix4, factors: Vector4) {
        *m.column_mut(0) = Self::scale(*m.column(0), factors.x);
        *m.column_mut(1) = Self::scale(*m.column(1), factors.y);
        *m.column_mut(2) = Self::scale(*m.column(2), factors.z);
    }

    fn slab_interval(
        origin: Vector4,
        inv_direction: Vector4,
        box_min: Vector4,
        box_max: Vector4,
    ) -> (f32, f32) {
        let near = Self::component_mul(Self::sub(box_min, origin), inv_direction);
        let far = Self::component_mul(Self::sub(box_max, origin), inv_direction);

        // f32::min/max return the non-NaN operand, so a NaN lane becomes the
        // clamp bound. +inf first, then -inf.
        let near_hi = Self::min(near, super::POSITIVE_INFINITY);
        let far_hi = Self::min(far, super::POSITIVE_INFINITY);
        let near_lo = Self::max(near, super::NEGATIVE_INFINITY);
        let far_lo = Self::max(far, super::NEGATIVE_INFINITY);

        let exits = Self::max(near_hi, far_hi);
        let entries = Self::min(near_lo, far_lo);

        let entry = entries.x.max(entries.y).max(entries.z);
        let exit = exits.x.min(exits.y).min(exits.z);
        (entry, exit)
    }
}
