//! Wavefront OBJ subset reader.
//!
//! Only two records matter: `v x y z` appends a vertex to a 1-indexed
//! list, and `f a b c` emits one [`Patch`] from three earlier vertices.
//! Face references may carry texture and normal indices (`a/t`, `a/t/n`,
//! `a//n`); those are ignored. Everything else (comments, `vn`, `vt`,
//! groups, materials) is skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use radvis_math::Point3;
use tracing::{debug, info, warn};

use crate::error::{MeshError, Result};
use crate::{Mesh, Patch};

/// Read a mesh from an OBJ file.
pub fn read_obj(path: impl AsRef<Path>) -> Result<Mesh> {
    let path = path.as_ref();
    debug!(path = %path.display(), "opening mesh for read");
    let file = File::open(path).map_err(|e| MeshError::io(path, e))?;
    load(BufReader::new(file), path)
}

/// Read a mesh from any buffered reader.
pub fn read_obj_from_reader<R: BufRead>(reader: R) -> Result<Mesh> {
    load(reader, Path::new("<reader>"))
}

/// Parse a mesh from OBJ text held in memory.
pub fn parse_obj(source: &str) -> Result<Mesh> {
    load(source.as_bytes(), Path::new("<string>"))
}

fn load<R: BufRead>(reader: R, origin: &Path) -> Result<Mesh> {
    let mut vertices: Vec<Point3> = Vec::new();
    let mut patches: Vec<Patch> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let text = line.map_err(|e| MeshError::io(origin, e))?;
        let line_no = idx + 1;
        let mut tokens = text.split_whitespace();

        match tokens.next() {
            Some("v") => vertices.push(parse_vertex(tokens, line_no, &text)?),
            Some("f") => {
                let [a, b, c] = parse_face(tokens, line_no, &text, vertices.len())?;
                patches.push(Patch::new(vertices[a], vertices[b], vertices[c]));
            }
            _ => {}
        }
    }

    let mesh = Mesh::new(patches);
    info!(
        vertices = vertices.len(),
        faces = mesh.len(),
        "read mesh from {}",
        origin.display()
    );
    let degenerate = mesh.degenerate_count();
    if degenerate > 0 {
        warn!(
            degenerate,
            "mesh contains faces with collinear vertices; their visibility is undefined"
        );
    }
    Ok(mesh)
}

fn parse_vertex<'a>(
    tokens: impl Iterator<Item = &'a str>,
    line: usize,
    text: &str,
) -> Result<Point3> {
    let tokens: Vec<&str> = tokens.collect();
    let mut coords = [0.0f64; 3];
    let mut found = 0;
    for (slot, token) in coords.iter_mut().zip(&tokens) {
        match token.parse::<f64>() {
            Ok(value) => {
                *slot = value;
                found += 1;
            }
            Err(_) => break,
        }
    }

    if found != 3 || tokens.len() != 3 {
        return Err(MeshError::InvalidVertex {
            line,
            found: if found == 3 { tokens.len() } else { found },
            text: text.to_string(),
        });
    }
    Ok(Point3::new(coords[0], coords[1], coords[2]))
}

/// Resolve a face record to three 0-based vertex indices.
fn parse_face<'a>(
    tokens: impl Iterator<Item = &'a str>,
    line: usize,
    text: &str,
    vertex_count: usize,
) -> Result<[usize; 3]> {
    let refs: Vec<&str> = tokens.collect();
    // Trailing text after the third reference is ignored unless it is
    // itself a vertex reference
    let extra = refs.iter().skip(3).take_while(|t| is_vertex_ref(t)).count();
    if refs.len() < 3 || extra > 0 {
        return Err(MeshError::InvalidFace {
            line,
            found: refs.len().min(3) + extra,
            text: text.to_string(),
        });
    }

    let mut out = [0usize; 3];
    for (slot, token) in out.iter_mut().zip(refs) {
        let index = match index_part(token).parse::<usize>() {
            Ok(i) if i > 0 => i,
            _ => {
                return Err(MeshError::InvalidIndex {
                    line,
                    token: token.to_string(),
                })
            }
        };
        if index > vertex_count {
            return Err(MeshError::IndexOutOfRange {
                line,
                index,
                vertex_count,
            });
        }
        *slot = index - 1;
    }
    Ok(out)
}

/// The vertex part of a face reference: `12`, `12/4`, `12/4/7` and
/// `12//7` all name vertex 12.
fn index_part(token: &str) -> &str {
    token.split('/').next().unwrap_or(token)
}

/// Whether `token` starts with an integer vertex index (possibly negative).
fn is_vertex_ref(token: &str) -> bool {
    index_part(token).parse::<i64>().is_ok()
}
