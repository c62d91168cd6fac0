#![warn(missing_docs)]

//! Math types for the radvis visibility precomputation.
//!
//! Thin wrappers around nalgebra: point and vector aliases plus the
//! handful of vector kernels the visibility test is written in terms of.
//! None of the kernels defend against degenerate input; a zero-length
//! vector passed to [`normalize`] yields NaN components, and those
//! propagate to every caller.

use nalgebra::Vector3;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// `a - b`, the vector from `b` to `a`.
#[inline]
pub fn subtract(a: &Point3, b: &Point3) -> Vec3 {
    a - b
}

/// Offset a point by a vector.
#[inline]
pub fn add(p: &Point3, v: &Vec3) -> Point3 {
    p + v
}

/// Multiply a vector by a scalar.
#[inline]
pub fn scale(v: &Vec3, s: f64) -> Vec3 {
    v * s
}

/// Right-handed cross product.
#[inline]
pub fn cross(a: &Vec3, b: &Vec3) -> Vec3 {
    a.cross(b)
}

/// Dot product.
#[inline]
pub fn dot(a: &Vec3, b: &Vec3) -> f64 {
    a.dot(b)
}

/// `v / |v|`.
///
/// Undefined for the zero vector: the result has NaN components.
#[inline]
pub fn normalize(v: &Vec3) -> Vec3 {
    v / v.norm()
}

/// Arithmetic mean of three points.
pub fn centroid(a: &Point3, b: &Point3, c: &Point3) -> Point3 {
    Point3::from((a.coords + b.coords + c.coords) / 3.0)
}

/// Unit normal of triangle `(a, b, c)`: `normalize(cross(b - a, c - a))`.
///
/// Counter-clockwise winding seen from the tip of the normal. Collinear
/// vertices give a NaN normal.
pub fn triangle_normal(a: &Point3, b: &Point3, c: &Point3) -> Vec3 {
    normalize(&cross(&subtract(b, a), &subtract(c, a)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_subtract_and_add() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(0.5, -1.0, 2.0);
        let d = subtract(&a, &b);
        assert_relative_eq!(d, Vec3::new(0.5, 3.0, 1.0));
        assert_relative_eq!(add(&b, &d), a);
    }

    #[test]
    fn test_scale() {
        let v = Vec3::new(1.0, -2.0, 0.5);
        assert_relative_eq!(scale(&v, 2.0), Vec3::new(2.0, -4.0, 1.0));
    }

    #[test]
    fn test_cross_right_handed() {
        let z = cross(&Vec3::x(), &Vec3::y());
        assert_relative_eq!(z, Vec3::z());
        let neg_z = cross(&Vec3::y(), &Vec3::x());
        assert_relative_eq!(neg_z, -Vec3::z());
    }

    #[test]
    fn test_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, -5.0, 6.0);
        assert_relative_eq!(dot(&a, &b), 12.0);
        assert_relative_eq!(dot(&Vec3::x(), &Vec3::y()), 0.0);
    }

    #[test]
    fn test_normalize_unit_length() {
        let n = normalize(&Vec3::new(3.0, 0.0, 4.0));
        assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(n, Vec3::new(0.6, 0.0, 0.8), epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_zero_is_nan() {
        let n = normalize(&Vec3::zeros());
        assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
    }

    #[test]
    fn test_centroid() {
        let c = centroid(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(3.0, 0.0, 0.0),
            &Point3::new(0.0, 3.0, 6.0),
        );
        assert_relative_eq!(c, Point3::new(1.0, 1.0, 2.0), epsilon = 1e-12);
    }

    #[test]
    fn test_triangle_normal_winding() {
        let a = Point3::origin();
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(0.0, 1.0, 0.0);
        assert_relative_eq!(triangle_normal(&a, &b, &c), Vec3::z());
        // Reversed winding flips the normal
        assert_relative_eq!(triangle_normal(&a, &c, &b), -Vec3::z());
    }

    #[test]
    fn test_triangle_normal_collinear() {
        let n = triangle_normal(
            &Point3::origin(),
            &Point3::new(1.0, 1.0, 1.0),
            &Point3::new(2.0, 2.0, 2.0),
        );
        assert!(!n.x.is_finite());
    }
}
