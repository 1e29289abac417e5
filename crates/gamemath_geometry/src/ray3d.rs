//! Ray with a cached reciprocal direction

use gamemath_kernel::lanes::{Active, Lanes};
use gamemath_kernel::{Matrix4, Vector4};
use serde::{Deserialize, Serialize};

use crate::Box3d;

/// Half-line from `origin` along `direction`.
///
/// The reciprocal direction used by the slab test is recomputed whenever the
/// direction changes; the fields are private so it cannot go stale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RayParts", into = "RayParts")]
pub struct Ray3d {
    origin: Vector4,
    direction: Vector4,
    inv_direction: Vector4,
}

#[derive(Clone, Copy, Serialize, Deserialize)]
struct RayParts {
    origin: Vector4,
    direction: Vector4,
}

impl From<RayParts> for Ray3d {
    fn from(parts: RayParts) -> Self {
        Ray3d::new(parts.origin, parts.direction)
    }
}

impl From<Ray3d> for RayParts {
    fn from(ray: Ray3d) -> Self {
        RayParts { origin: ray.origin, direction: ray.direction }
    }
}

impl Ray3d {
    /// `origin` should be a position (w = 1) and `direction` a direction (w = 0).
    /// The direction need not be normalized.
    pub fn new(origin: Vector4, direction: Vector4) -> Self {
        Self {
            origin,
            direction,
            inv_direction: reciprocal(direction),
        }
    }

    #[inline]
    pub fn origin(&self) -> &Vector4 {
        &self.origin
    }

    #[inline]
    pub fn direction(&self) -> &Vector4 {
        &self.direction
    }

    /// `1 / direction` per lane; zero lanes are signed infinity
    #[inline]
    pub fn inverted_direction(&self) -> &Vector4 {
        &self.inv_direction
    }

    pub fn set_origin(&mut self, origin: Vector4) {
        self.origin = origin;
    }

    pub fn set_direction(&mut self, direction: Vector4) {
        self.direction = direction;
        self.inv_direction = reciprocal(direction);
    }

    /// `origin + direction * t`
    pub fn point_at(&self, t: f32) -> Vector4 {
        self.origin + self.direction * t
    }

    /// Sphere test by closest approach.
    ///
    /// A ray starting inside the sphere always hits. Otherwise the sphere
    /// must lie ahead of the origin and the ray's closest approach to its
    /// center must be within the radius.
    pub fn intersects_sphere(&self, center: Vector4, radius_squared: f32) -> bool {
        let to_center = (center - self.origin).with_w(0.0);
        let distance_squared = to_center.length_squared();
        if distance_squared < radius_squared {
            return true;
        }

        let direction = self.direction.with_w(0.0);
        let along = direction.dot(to_center);
        if along <= 0.0 {
            return false;
        }

        let closest_squared = distance_squared - along * along / direction.length_squared();
        closest_squared <= radius_squared
    }

    /// Slab test against `bounding_box`.
    ///
    /// On a hit, `distance` is lowered to the entry distance if that is
    /// closer than its current value, so a running nearest hit can be kept
    /// across many boxes. Start it at `f32::INFINITY`.
    pub fn intersects(&self, bounding_box: &Box3d, distance: &mut f32) -> bool {
        match self.intersection(bounding_box) {
            Some(entry) => {
                if entry < *distance {
                    *distance = entry;
                }
                true
            }
            None => false,
        }
    }

    /// Entry distance along the ray, in units of `direction`'s length.
    ///
    /// Hits require `0 <= entry <= exit`. An origin inside the box has a
    /// negative entry and reports no hit.
    pub fn intersection(&self, bounding_box: &Box3d) -> Option<f32> {
        let (entry, exit) = Active::slab_interval(
            self.origin,
            self.inv_direction,
            *bounding_box.minimum(),
            *bounding_box.maximum(),
        );
        (entry >= 0.0 && entry <= exit).then_some(entry)
    }
}

fn reciprocal(v: Vector4) -> Vector4 {
    Vector4::from_array(v.to_array().map(f32::recip))
}

/// Origin via `map_position`, direction via `map_normal`
impl std::ops::Mul<Ray3d> for Matrix4 {
    type Output = Ray3d;

    fn mul(self, ray: Ray3d) -> Ray3d {
        Ray3d::new(self.map_position(ray.origin), self.map_normal(ray.direction))
    }
}
