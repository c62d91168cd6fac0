//! Point-in-triangle testing for ray hits on patch planes.
//!
//! The candidate point is assumed to lie in the triangle's plane (it comes
//! from a ray-plane intersection); coplanarity is not checked. Points on
//! an edge or vertex count as inside.

use radvis_math::{cross, dot, subtract, Point3};
use radvis_mesh::Patch;

/// Whether `p` and `reference` lie on the same side of the line through
/// `a` and `b`, within their common plane.
///
/// A point on the line is on both sides.
pub fn same_side(p: &Point3, reference: &Point3, a: &Point3, b: &Point3) -> bool {
    let edge = subtract(b, a);
    let cp1 = cross(&edge, &subtract(p, a));
    let cp2 = cross(&edge, &subtract(reference, a));
    dot(&cp1, &cp2) >= 0.0
}

/// Test if a coplanar point lies inside triangle `(a, b, c)`.
///
/// Each edge is checked against the opposite vertex.
pub fn point_in_triangle(p: &Point3, a: &Point3, b: &Point3, c: &Point3) -> bool {
    same_side(p, a, b, c) && same_side(p, b, a, c) && same_side(p, c, a, b)
}

/// [`point_in_triangle`] against a patch's vertices.
pub fn point_in_patch(p: &Point3, patch: &Patch) -> bool {
    let [a, b, c] = patch.vertices();
    point_in_triangle(p, a, b, c)
}
