//! Parallel construction of the full visibility matrix.
//!
//! Row `i` of the output is owned by the task that handles outer index
//! `i`: it clears the diagonal and fills `M[i][j]` for every `j > i`. The
//! rows are disjoint slices of one buffer, so no locking is needed. A
//! sequential pass afterwards mirrors the upper triangle onto the lower.
//!
//! Early rows carry more pairs than late ones, and occluder scans stop at
//! the first hit, so per-row cost is uneven. Rows are handed out to a
//! work-stealing pool in chunks of at least `chunk_size` instead of being
//! split evenly up front.

use std::time::Instant;

use radvis_mesh::{Mesh, Patch};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, VisibilityError};
use crate::matrix::VisibilityMatrix;
use crate::visible::is_visible;

/// Default number of rows a worker claims at a time.
pub const DEFAULT_CHUNK_SIZE: usize = 10;

/// Matrix construction parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildSettings {
    /// Worker threads; `None` uses the available hardware parallelism.
    pub threads: Option<usize>,
    /// Minimum rows per scheduling chunk.
    pub chunk_size: usize,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            threads: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl BuildSettings {
    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(VisibilityError::InvalidSettings(
                "chunk_size must be at least 1".into(),
            ));
        }
        if self.threads == Some(0) {
            return Err(VisibilityError::InvalidSettings(
                "threads must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Build a dedicated worker pool for these settings.
    fn thread_pool(&self) -> Result<ThreadPool> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.threads.unwrap_or(0))
            .thread_name(|i| format!("radvis-worker-{i}"))
            .build()?;
        Ok(pool)
    }
}

/// Compute the visibility matrix of `mesh`.
///
/// Cost is O(N³) in the patch count: N²/2 pairs, each scanning every
/// other patch as a potential occluder.
pub fn build_matrix(mesh: &Mesh, settings: &BuildSettings) -> Result<VisibilityMatrix> {
    settings.validate()?;

    let n = mesh.len();
    let mut matrix = VisibilityMatrix::new(n);
    if n == 0 {
        return Ok(matrix);
    }

    let pool = settings.thread_pool()?;
    debug!(
        threads = pool.current_num_threads(),
        chunk_size = settings.chunk_size,
        "visibility worker pool ready"
    );

    let start = Instant::now();
    let patches = mesh.patches();
    pool.install(|| {
        matrix
            .cells
            .par_chunks_mut(n)
            .enumerate()
            .with_min_len(settings.chunk_size)
            .for_each(|(i, row)| fill_row(patches, i, row));
    });
    matrix.mirror_upper();

    info!(
        patches = n,
        visible_pairs = matrix.visible_pair_count(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "finished computing visibility"
    );
    Ok(matrix)
}

/// Fill the diagonal and upper-triangle cells of row `i`.
fn fill_row(patches: &[Patch], i: usize, row: &mut [bool]) {
    row[i] = false;
    for j in (i + 1)..patches.len() {
        row[j] = is_visible(patches, i, j);
    }
}
