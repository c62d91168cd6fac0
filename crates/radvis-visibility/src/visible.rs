//! Pairwise patch visibility.
//!
//! Two patches see each other when the segment between their centroids
//! leaves the front side of one, arrives at the front side of the other,
//! and crosses no third patch on the way. Every other patch in the mesh is
//! checked; there is no acceleration structure.
//!
//! Arithmetic is in `f64`, so pairs sitting right at the facing thresholds
//! can differ from a single-precision evaluation.
//!
//! Degenerate patches are not special-cased. A NaN normal or a NaN ray
//! direction fails no comparison, so such a pair is reported visible and
//! nothing between it can occlude it.

use radvis_math::dot;
use radvis_mesh::Patch;

use crate::containment::point_in_patch;
use crate::Ray;

/// The receiver's normal must have at least this component along the
/// receiver-to-emitter direction.
pub const RECEIVER_FACING_EPSILON: f64 = 1e-5;

/// The emitter's normal must have a component along the
/// receiver-to-emitter direction below the negation of this value.
///
/// Smaller than [`RECEIVER_FACING_EPSILON`]; the asymmetry is part of the
/// output format and must not be "fixed".
pub const EMITTER_FACING_EPSILON: f64 = 1e-6;

/// Hits closer than this to the receiver's centroid are not occlusions.
pub const MIN_OCCLUSION_DISTANCE: f64 = 1e-6;

/// Whether patches `i` and `j` of `patches` see each other.
///
/// The ray runs from `j`'s centroid towards `i`'s. The result is used for
/// both `(i, j)` and `(j, i)`; the reverse direction is never tested.
///
/// # Panics
///
/// Panics if `i` or `j` is out of bounds.
pub fn is_visible(patches: &[Patch], i: usize, j: usize) -> bool {
    let emitter = &patches[i];
    let receiver = &patches[j];
    let ray = Ray::between(receiver.center(), emitter.center());

    if !facing(emitter, receiver, &ray) {
        return false;
    }

    let max_t = ray.plane_parameter(emitter.normal(), emitter.point1());

    !patches
        .iter()
        .enumerate()
        .filter(|&(k, _)| k != i && k != j)
        .any(|(_, occluder)| occludes(occluder, &ray, max_t))
}

/// Facing test for both ends of the ray.
///
/// Written as a rejection so that NaN (degenerate normals, coincident
/// centroids) rejects nothing.
fn facing(emitter: &Patch, receiver: &Patch, ray: &Ray) -> bool {
    let receiver_dot = dot(receiver.normal(), &ray.direction);
    let emitter_dot = dot(emitter.normal(), &ray.direction);
    !(receiver_dot <= RECEIVER_FACING_EPSILON || emitter_dot >= -EMITTER_FACING_EPSILON)
}

/// Whether `occluder` blocks `ray` strictly between the receiver and the
/// emitter plane at `max_t`.
fn occludes(occluder: &Patch, ray: &Ray, max_t: f64) -> bool {
    let Some(t) = ray.intersect_plane(occluder.normal(), occluder.point1()) else {
        return false;
    };
    t > MIN_OCCLUSION_DISTANCE && t < max_t && point_in_patch(&ray.at(t), occluder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use radvis_math::Point3;

    /// Triangle in z = 0 facing +z.
    fn floor() -> Patch {
        Patch::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        )
    }

    /// Triangle in z = 1 facing -z, directly above [`floor`].
    fn ceiling() -> Patch {
        Patch::new(
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(0.0, 1.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
        )
    }

    /// Large triangle in z = `z` covering the floor/ceiling centroid line.
    fn blocker(z: f64) -> Patch {
        Patch::new(
            Point3::new(-1.0, -1.0, z),
            Point3::new(2.0, -1.0, z),
            Point3::new(-1.0, 2.0, z),
        )
    }

    #[test]
    fn test_facing_pair_is_visible() {
        let patches = [floor(), ceiling()];
        assert!(is_visible(&patches, 0, 1));
        assert!(is_visible(&patches, 1, 0));
    }

    #[test]
    fn test_receiver_facing_away() {
        // Ceiling flipped to face +z, away from the floor
        let up = Patch::new(
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(0.0, 1.0, 1.0),
        );
        let patches = [floor(), up];
        assert!(!is_visible(&patches, 0, 1));
        assert!(!is_visible(&patches, 1, 0));
    }

    #[test]
    fn test_emitter_facing_away() {
        // Floor flipped to face -z, away from the ceiling
        let down = Patch::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        );
        let patches = [down, ceiling()];
        assert!(!is_visible(&patches, 0, 1));
    }

    #[test]
    fn test_coplanar_patches_do_not_see_each_other() {
        let neighbour = Patch::new(
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        );
        let patches = [floor(), neighbour];
        assert!(!is_visible(&patches, 0, 1));
    }

    #[test]
    fn test_blocker_between_occludes() {
        let patches = [floor(), ceiling(), blocker(0.5)];
        assert!(!is_visible(&patches, 0, 1));
    }

    #[test]
    fn test_blocker_facing_either_way_occludes() {
        // Same blocker with reversed winding
        let b = blocker(0.5);
        let [p1, p2, p3] = *b.vertices();
        let patches = [floor(), ceiling(), Patch::new(p1, p3, p2)];
        assert!(!is_visible(&patches, 0, 1));
    }

    #[test]
    fn test_blocker_outside_segment_ignored() {
        // Beyond the emitter plane and behind the receiver
        let patches = [floor(), ceiling(), blocker(2.0), blocker(-1.0)];
        assert!(is_visible(&patches, 0, 1));
    }

    #[test]
    fn test_blocker_off_axis_ignored() {
        let off = Patch::new(
            Point3::new(5.0, 5.0, 0.5),
            Point3::new(6.0, 5.0, 0.5),
            Point3::new(5.0, 6.0, 0.5),
        );
        let patches = [floor(), ceiling(), off];
        assert!(is_visible(&patches, 0, 1));
    }

    #[test]
    fn test_parallel_fin_ignored() {
        // Lies in the plane y = 1/3, which contains the centroid line
        let y = 1.0 / 3.0;
        let fin = Patch::new(
            Point3::new(-1.0, y, 0.2),
            Point3::new(2.0, y, 0.2),
            Point3::new(0.5, y, 0.8),
        );
        let patches = [floor(), ceiling(), fin];
        assert!(is_visible(&patches, 0, 1));
    }

    #[test]
    fn test_degenerate_occluder_never_blocks() {
        let sliver = Patch::new(
            Point3::new(0.0, 0.0, 0.5),
            Point3::new(1.0, 1.0, 0.5),
            Point3::new(2.0, 2.0, 0.5),
        );
        assert!(sliver.is_degenerate());
        let patches = [floor(), ceiling(), sliver];
        assert!(is_visible(&patches, 0, 1));
    }

    /// Collinear triangle at z = 1 above [`floor`]; its normal is NaN.
    fn sliver() -> Patch {
        Patch::new(
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(0.5, 0.5, 1.0),
            Point3::new(1.0, 1.0, 1.0),
        )
    }

    #[test]
    fn test_degenerate_receiver_is_not_rejected() {
        let patches = [floor(), sliver()];
        assert!(patches[1].is_degenerate());
        assert!(is_visible(&patches, 0, 1));
    }

    #[test]
    fn test_degenerate_emitter_is_not_rejected() {
        // The emitter plane parameter is NaN, so no hit counts as occluding
        let patches = [sliver(), floor(), blocker(0.5)];
        assert!(is_visible(&patches, 0, 1));
    }

    #[test]
    fn test_coincident_centroids_are_visible() {
        // Duplicate faces give a zero-length ray and a NaN direction
        let patches = [floor(), floor()];
        assert!(is_visible(&patches, 0, 1));
    }

    #[test]
    fn test_facing_thresholds() {
        assert_eq!(RECEIVER_FACING_EPSILON, 1e-5);
        assert_eq!(EMITTER_FACING_EPSILON, 1e-6);
        assert_eq!(MIN_OCCLUSION_DISTANCE, 1e-6);
    }
}
