//! Ray representation and ray-plane parameters.

use radvis_math::{add, dot, normalize, scale, subtract, Point3, Vec3};

/// A ray in 3D space defined by origin and unit direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Unit direction of the ray.
    pub direction: Vec3,
}

impl Ray {
    /// Ray starting at `from` and heading towards `to`.
    ///
    /// Coincident points give a NaN direction.
    pub fn between(from: &Point3, to: &Point3) -> Self {
        Self {
            origin: *from,
            direction: normalize(&subtract(to, from)),
        }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        add(&self.origin, &scale(&self.direction, t))
    }

    /// Parameter at which the ray meets the plane through `point` with
    /// normal `normal`.
    ///
    /// Evaluated as `(n·point - n·origin) / (n·direction)` with no parallel
    /// check: a ray parallel to the plane gives an infinite or NaN result.
    #[inline]
    pub fn plane_parameter(&self, normal: &Vec3, point: &Point3) -> f64 {
        (dot(normal, &point.coords) - dot(normal, &self.origin.coords))
            / dot(normal, &self.direction)
    }

    /// Like [`Ray::plane_parameter`], but `None` when the ray is exactly
    /// parallel to the plane.
    #[inline]
    pub fn intersect_plane(&self, normal: &Vec3, point: &Point3) -> Option<f64> {
        if dot(normal, &self.direction) == 0.0 {
            return None;
        }
        Some(self.plane_parameter(normal, point))
    }
}
