//! Row-major symmetric visibility matrix and its text format.
//!
//! The text format is one row per line, `0`/`1` entries separated by a
//! single space:
//!
//! ```text
//! 0 1 0
//! 1 0 1
//! 0 1 0
//! ```

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::ops::Index;
use std::path::Path;

use crate::error::{Result, VisibilityError};

/// An N×N boolean grid indexed by patch.
///
/// Every matrix handed out by this crate is symmetric with a zero
/// diagonal. Only the builder and the parser write cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityMatrix {
    size: usize,
    pub(crate) cells: Vec<bool>,
}

impl VisibilityMatrix {
    /// All-zero matrix for `size` patches.
    pub(crate) fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Entry at `(row, col)`, or `None` out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// One row of the matrix.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.size()`.
    pub fn row(&self, row: usize) -> &[bool] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    /// Iterate over rows in index order.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        // chunks(0) panics; an empty matrix simply has no rows
        self.cells.chunks(self.size.max(1))
    }

    /// Set `(row, col)` and `(col, row)`.
    #[cfg(test)]
    pub(crate) fn set_pair(&mut self, row: usize, col: usize, value: bool) {
        self.cells[row * self.size + col] = value;
        self.cells[col * self.size + row] = value;
    }

    /// Copy the strict upper triangle onto the lower triangle.
    pub(crate) fn mirror_upper(&mut self) {
        let n = self.size;
        for i in 0..n {
            for j in (i + 1)..n {
                self.cells[j * n + i] = self.cells[i * n + j];
            }
        }
    }

    /// Whether `M[i][j] == M[j][i]` everywhere.
    pub fn is_symmetric(&self) -> bool {
        let n = self.size;
        (0..n).all(|i| ((i + 1)..n).all(|j| self.cells[i * n + j] == self.cells[j * n + i]))
    }

    /// Whether every `M[i][i]` is zero.
    pub fn has_zero_diagonal(&self) -> bool {
        (0..self.size).all(|i| !self.cells[i * self.size + i])
    }

    /// Unordered visible pairs as `(i, j)` with `i < j`.
    pub fn visible_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.size;
        (0..n).flat_map(move |i| {
            ((i + 1)..n)
                .filter(move |&j| self.cells[i * n + j])
                .map(move |j| (i, j))
        })
    }

    /// Number of unordered visible pairs.
    pub fn visible_pair_count(&self) -> usize {
        self.visible_pairs().count()
    }

    /// Write the text form to `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        for row in self.rows() {
            for (col, &visible) in row.iter().enumerate() {
                if col > 0 {
                    writer.write_all(b" ")?;
                }
                writer.write_all(if visible { b"1" } else { b"0" })?;
            }
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write the text form to a file, replacing any existing contents.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))
    }

    /// Text form as a string.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.size * self.size * 2);
        for row in self.rows() {
            let entries: Vec<&str> = row.iter().map(|&v| if v { "1" } else { "0" }).collect();
            out.push_str(&entries.join(" "));
            out.push('\n');
        }
        out
    }

    /// Parse the text form.
    ///
    /// Entries may be separated by any whitespace and blank lines are
    /// skipped. The result must be square, 0/1, symmetric and have a zero
    /// diagonal.
    pub fn parse(source: &str) -> Result<Self> {
        Self::read_from(source.as_bytes())
    }

    /// Parse the text form from a buffered reader.
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self> {
        let mut rows: Vec<(usize, Vec<bool>)> = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            if line.trim().is_empty() {
                continue;
            }
            let row = line
                .split_whitespace()
                .map(|token| match token {
                    "0" => Ok(false),
                    "1" => Ok(true),
                    other => Err(VisibilityError::malformed(
                        line_no,
                        format!("expected 0 or 1, found `{other}`"),
                    )),
                })
                .collect::<Result<Vec<bool>>>()?;
            rows.push((line_no, row));
        }

        let size = rows.len();
        let mut matrix = Self::new(size);
        for (i, (line_no, row)) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(VisibilityError::malformed(
                    *line_no,
                    format!("expected {size} entries, found {}", row.len()),
                ));
            }
            if row[i] {
                return Err(VisibilityError::malformed(*line_no, "non-zero diagonal entry"));
            }
            matrix.cells[i * size..(i + 1) * size].copy_from_slice(row);
        }

        for (i, (line_no, _)) in rows.iter().enumerate() {
            let mismatch =
                (0..size).find(|&j| matrix.cells[i * size + j] != matrix.cells[j * size + i]);
            if let Some(j) = mismatch {
                return Err(VisibilityError::malformed(
                    *line_no,
                    format!("entry ({i}, {j}) differs from ({j}, {i})"),
                ));
            }
        }

        Ok(matrix)
    }
}

impl Index<(usize, usize)> for VisibilityMatrix {
    type Output = bool;

    fn index(&self, (row, col): (usize, usize)) -> &bool {
        assert!(
            row < self.size && col < self.size,
            "index ({row}, {col}) out of bounds for {n}x{n} matrix",
            n = self.size
        );
        &self.cells[row * self.size + col]
    }
}
