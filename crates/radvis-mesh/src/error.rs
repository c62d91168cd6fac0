//! Error types for mesh loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a mesh.
#[derive(Error, Debug)]
pub enum MeshError {
    /// The mesh file could not be opened or read.
    #[error("error reading {}: {source}", path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A `v` record without exactly three float coordinates.
    #[error("line {line}: expected 3 vertex coordinates, found {found}: `{text}`")]
    InvalidVertex {
        /// Line number (1-indexed).
        line: usize,
        /// Number of coordinates that parsed.
        found: usize,
        /// The offending line.
        text: String,
    },

    /// An `f` record that does not reference exactly three vertices.
    #[error(
        "line {line}: expected a triangular face, found {found} vertices: `{text}` \
         (only triangle meshes are supported; re-export the model triangulated)"
    )]
    InvalidFace {
        /// Line number (1-indexed).
        line: usize,
        /// Number of vertex references on the line.
        found: usize,
        /// The offending line.
        text: String,
    },

    /// A face vertex reference that is not a positive integer.
    #[error("line {line}: invalid vertex reference `{token}`")]
    InvalidIndex {
        /// Line number (1-indexed).
        line: usize,
        /// The offending token.
        token: String,
    },

    /// A face vertex reference past the end of the vertex list.
    #[error("line {line}: vertex {index} referenced but only {vertex_count} defined")]
    IndexOutOfRange {
        /// Line number (1-indexed).
        line: usize,
        /// The 1-indexed reference.
        index: usize,
        /// Vertices defined so far.
        vertex_count: usize,
    },
}

impl MeshError {
    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for mesh operations.
pub type Result<T> = std::result::Result<T, MeshError>;
