//! 4-wide SIMD path
//!
//! Built on `wide::f32x4`, which lowers to SSE on x86, NEON on aarch64 and
//! simd128 on wasm, with a portable fallback elsewhere. [`Vector4`] and
//! `f32x4` are both 16 bytes of four `f32` lanes, so loads and stores are
//! `bytemuck` casts rather than pointer tricks. Nothing in this path branches
//! on lane values.

use wide::f32x4;

use super::Lanes;
use crate::{Matrix4, Vector4};

/// Hardware 4-wide lanes
#[derive(Clone, Copy, Debug, Default)]
pub struct Simd;

#[inline(always)]
fn load(v: Vector4) -> f32x4 {
    bytemuck::cast(v)
}

#[inline(always)]
fn store(lanes: f32x4) -> Vector4 {
    bytemuck::cast(lanes)
}

#[inline(always)]
fn splat(value: f32) -> f32x4 {
    f32x4::splat(value)
}

/// Sign bits of x, y and z
#[inline(always)]
fn sign_mask_xyz() -> f32x4 {
    f32x4::from([-0.0, -0.0, -0.0, 0.0])
}

impl Lanes for Simd {
    const NAME: &'static str = "simd";

    #[inline]
    fn dot(a: Vector4, b: Vector4) -> f32 {
        let products = load(a) * load(b);
        let p = products.to_array();
        // Fold (x, y, z, w) onto (x+z, y+w, ..) then add the two low lanes
        let folded = (products + f32x4::from([p[2], p[3], p[0], p[1]])).to_array();
        folded[0] + folded[1]
    }

    #[inline]
    fn cross(a: Vector4, b: Vector4) -> Vector4 {
        let a_yzx = f32x4::from([a.y, a.z, a.x, 0.0]);
        let a_zxy = f32x4::from([a.z, a.x, a.y, 0.0]);
        let b_yzx = f32x4::from([b.y, b.z, b.x, 0.0]);
        let b_zxy = f32x4::from([b.z, b.x, b.y, 0.0]);
        store(a_yzx * b_zxy - a_zxy * b_yzx)
    }

    #[inline]
    fn length(v: Vector4) -> f32 {
        Self::dot(v, v).sqrt()
    }

    #[inline]
    fn normalized(v: Vector4) -> Vector4 {
        store(load(v) / splat(Self::length(v)))
    }

    #[inline]
    fn normalized_estimated(v: Vector4) -> Vector4 {
        let inv_length = splat(Self::dot(v, v)).recip_sqrt();
        store(load(v) * inv_length)
    }

    #[inline]
    fn add(a: Vector4, b: Vector4) -> Vector4 {
        store(load(a) + load(b))
    }

    #[inline]
    fn sub(a: Vector4, b: Vector4) -> Vector4 {
        store(load(a) - load(b))
    }

    #[inline]
    fn scale(v: Vector4, factor: f32) -> Vector4 {
        store(load(v) * splat(factor))
    }

    #[inline]
    fn divide(v: Vector4, divisor: f32) -> Vector4 {
        store(load(v) / splat(divisor))
    }

    #[inline]
    fn component_mul(a: Vector4, b: Vector4) -> Vector4 {
        store(load(a) * load(b))
    }

    #[inline]
    fn negate_xyz(v: Vector4) -> Vector4 {
        store(load(v) ^ sign_mask_xyz())
    }

    #[inline]
    fn absolute(v: Vector4) -> Vector4 {
        store(load(v).abs())
    }

    #[inline]
    fn min(a: Vector4, b: Vector4) -> Vector4 {
        store(load(a).min(load(b)))
    }

    #[inline]
    fn max(a: Vector4, b: Vector4) -> Vector4 {
        store(load(a).max(load(b)))
    }

    fn mul_vector(m: &Matrix4, v: Vector4) -> Vector4 {
        let c = m.columns();
        store(
            load(c[0]) * splat(v.x)
                + load(c[1]) * splat(v.y)
                + load(c[2]) * splat(v.z)
                + load(c[3]) * splat(v.w),
        )
    }

    fn map_position(m: &Matrix4, v: Vector4) -> Vector4 {
        let c = m.columns();
        store(
            load(c[0]) * splat(v.x)
                + load(c[1]) * splat(v.y)
                + load(c[2]) * splat(v.z)
                + load(c[3]),
        )
    }

    fn map_normal(m: &Matrix4, v: Vector4) -> Vector4 {
        let c = m.columns();
        store(load(c[0]) * splat(v.x) + load(c[1]) * splat(v.y) + load(c[2]) * splat(v.z))
    }

    fn scale_columns(m: &mut Matrix4, factors: Vector4) {
        for (i, factor) in [factors.x, factors.y, factors.z].into_iter().enumerate() {
            let column = m.column_mut(i);
            *column = store(load(*column) * splat(factor));
        }
    }

    fn slab_interval(
        origin: Vector4,
        inv_direction: Vector4,
        box_min: Vector4,
        box_max: Vector4,
    ) -> (f32, f32) {
        let origin = load(origin);
        let inv_direction = load(inv_direction);
        let near = (load(box_min) - origin) * inv_direction;
        let far = (load(box_max) - origin) * inv_direction;

        // f32x4::min/max pick the other lane when one is NaN, so the clamp
        // bound replaces it. +inf first, then -inf.
        let pos_inf = splat(f32::INFINITY);
        let neg_inf = splat(f32::NEG_INFINITY);
        let near_hi = near.min(pos_inf);
        let far_hi = far.min(pos_inf);
        let near_lo = near.max(neg_inf);
        let far_lo = far.max(neg_inf);

        let exits = near_hi.max(far_hi).to_array();
        let entries = near_lo.min(far_lo).to_array();

        // Horizontal reduction over x, y, z only; w never constrains the ray
        let entry = entries[0].max(entries[1]).max(entries[2]);
        let exit = exits[0].min(exits[1]).min(exits[2]);
        (entry, exit)
    }
}
