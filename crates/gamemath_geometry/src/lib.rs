//! Bounding volumes and queries on top of the math kernel
//!
//! ## Types
//!
//! - [`Box3d`] - axis-aligned bounding box with inclusive boundaries
//! - [`Box2d`] - screen-space box with strict (non-touching) intersection
//! - [`Frustum`] - six-plane view volume for culling
//! - [`Ray3d`] - ray with a cached reciprocal direction for slab tests

mod box2d;
mod box3d;
mod frustum;
mod ray3d;

pub use box2d::Box2d;
pub use box3d::Box3d;
pub use frustum::{ClippingPlane, Frustum};
pub use ray3d::Ray3d;
