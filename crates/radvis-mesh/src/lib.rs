#![warn(missing_docs)]

//! Triangle patch meshes for the radvis visibility precomputation.
//!
//! A [`Mesh`] is an ordered list of immutable [`Patch`]es. The position of
//! a patch in the list is its identity: row and column `i` of a visibility
//! matrix both refer to `mesh[i]`.
//!
//! # Example
//!
//! ```
//! use radvis_mesh::parse_obj;
//!
//! let mesh = parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
//! assert_eq!(mesh.len(), 1);
//! ```

pub mod error;
pub mod obj;

pub use error::{MeshError, Result};
pub use obj::{parse_obj, read_obj, read_obj_from_reader};

use std::ops::Index;

use radvis_math::{centroid, triangle_normal, Point3, Vec3};

/// A triangular face with its derived centroid and unit normal.
///
/// Both derived values are computed once at construction. Collinear
/// vertices are accepted and leave the normal NaN; see
/// [`Patch::is_degenerate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    vertices: [Point3; 3],
    normal: Vec3,
    center: Point3,
}

impl Patch {
    /// Create a patch from three vertices in counter-clockwise order
    /// around the outward normal.
    pub fn new(p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self {
            normal: triangle_normal(&p1, &p2, &p3),
            center: centroid(&p1, &p2, &p3),
            vertices: [p1, p2, p3],
        }
    }

    /// The three vertices in winding order.
    pub fn vertices(&self) -> &[Point3; 3] {
        &self.vertices
    }

    /// First vertex; any point of the patch plane would do, this one is used.
    pub fn point1(&self) -> &Point3 {
        &self.vertices[0]
    }

    /// Unit outward normal.
    pub fn normal(&self) -> &Vec3 {
        &self.normal
    }

    /// Centroid (mean of the vertices).
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Whether the normal is non-finite (collinear or coincident vertices).
    ///
    /// Visibility decisions involving such a patch are meaningless, but
    /// nothing downstream checks this.
    pub fn is_degenerate(&self) -> bool {
        !(self.normal.x.is_finite() && self.normal.y.is_finite() && self.normal.z.is_finite())
    }
}

/// An ordered, read-only sequence of patches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    patches: Vec<Patch>,
}

impl Mesh {
    /// Create a mesh from patches; index order is preserved.
    pub fn new(patches: Vec<Patch>) -> Self {
        Self { patches }
    }

    /// Number of patches.
    pub fn len(&self) -> usize {
        self.patches.len()
    }

    /// Whether the mesh has no patches.
    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    /// All patches in index order.
    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }

    /// Patch at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Patch> {
        self.patches.get(index)
    }

    /// Iterate over patches in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Patch> {
        self.patches.iter()
    }

    /// Number of patches whose normal is not finite.
    pub fn degenerate_count(&self) -> usize {
        self.patches.iter().filter(|p| p.is_degenerate()).count()
    }
}

impl Index<usize> for Mesh {
    type Output = Patch;

    fn index(&self, index: usize) -> &Patch {
        &self.patches[index]
    }
}

impl FromIterator<Patch> for Mesh {
    fn from_iter<I: IntoIterator<Item = Patch>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Mesh {
    type Item = &'a Patch;
    type IntoIter = std::slice::Iter<'a, Patch>;

    fn into_iter(self) -> Self::IntoIter {
        self.patches.iter()
    }
}
