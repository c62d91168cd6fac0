#![warn(missing_docs)]

//! Patch-to-patch visibility for radiosity form factors.
//!
//! For every pair of triangular patches in a mesh this crate decides
//! whether the segment between their centroids leaves one patch's front
//! face, reaches the other's front face, and crosses no other patch. The
//! answers form a symmetric [`VisibilityMatrix`] consumed by a form-factor
//! solver.
//!
//! # Architecture
//!
//! - [`Ray`] - Ray representation with origin and unit direction
//! - [`containment`] - Same-side point-in-triangle test
//! - [`visible`] - The pairwise test and its tolerance constants
//! - [`builder`] - Parallel fill of the full matrix
//! - [`matrix`] - Row-major matrix with its text format
//!
//! The occluder scan is brute force: every pair checks every other patch,
//! so building a matrix is cubic in the patch count.
//!
//! # Example
//!
//! ```
//! use radvis_mesh::parse_obj;
//! use radvis_visibility::{build_matrix, BuildSettings};
//!
//! let mesh = parse_obj(
//!     "v 0 0 0\nv 1 0 0\nv 0 1 0\nv 0 0 1\nv 0 1 1\nv 1 0 1\nf 1 2 3\nf 4 5 6\n",
//! )
//! .unwrap();
//! let matrix = build_matrix(&mesh, &BuildSettings::default()).unwrap();
//! assert_eq!(matrix.to_text(), "0 1\n1 0\n");
//! ```

mod ray;
pub mod builder;
pub mod containment;
pub mod error;
pub mod matrix;
pub mod visible;

pub use builder::{build_matrix, BuildSettings, DEFAULT_CHUNK_SIZE};
pub use containment::{point_in_patch, point_in_triangle};
pub use error::{Result, VisibilityError};
pub use matrix::VisibilityMatrix;
pub use ray::Ray;
pub use visible::{
    is_visible, EMITTER_FACING_EPSILON, MIN_OCCLUSION_DISTANCE, RECEIVER_FACING_EPSILON,
};
