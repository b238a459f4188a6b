use std::path::Path;

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::error::ObjError;
use crate::normals::accumulate_normals;

// ── Types ─────────────────────────────────────────────────────────────────

/// One vertex of a loaded model: position plus the averaged vertex normal.
///
/// The layout matches a `Float32x3, Float32x3` vertex buffer (24 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: Vec3,
    pub normal: Vec3,
}

/// Indexed triangle mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
    /// 0-based vertex indices, three per triangle.
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

// ── Loading ───────────────────────────────────────────────────────────────

/// Reads and parses an OBJ file.
pub fn load_obj(path: impl AsRef<Path>) -> Result<Mesh, ObjError> {
    let path = path.as_ref();
    let src = std::fs::read_to_string(path).map_err(|source| ObjError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_obj(&src)
}

/// Parses the `v` / `f` subset of the OBJ format.
///
/// Every other directive is skipped. Face indices are 1-based in the source
/// (negative ones count back from the last vertex) and 0-based in the result.
/// Polygons are split into a triangle fan.
pub fn parse_obj(src: &str) -> Result<Mesh, ObjError> {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    let mut corners: Vec<u32> = Vec::with_capacity(4);

    for (n, raw) in src.lines().enumerate() {
        let line = n + 1;
        let content = raw.split('#').next().unwrap_or_default();
        let mut tokens = content.split_whitespace();

        match tokens.next() {
            Some("v") => {
                let position = parse_position(line, tokens)?;
                vertices.push(MeshVertex {
                    position,
                    normal: Vec3::ZERO,
                });
            }
            Some("f") => {
                corners.clear();
                for token in tokens {
                    corners.push(resolve_index(line, token, vertices.len())?);
                }
                if corners.len() < 3 {
                    return Err(ObjError::MissingValues {
                        line,
                        directive: "f",
                        expected: 3,
                        found: corners.len(),
                    });
                }
                for k in 1..corners.len() - 1 {
                    indices.extend_from_slice(&[corners[0], corners[k], corners[k + 1]]);
                }
            }
            _ => {}
        }
    }

    accumulate_normals(&mut vertices, &indices);

    Ok(Mesh { vertices, indices })
}

fn parse_position<'a>(
    line: usize,
    tokens: impl Iterator<Item = &'a str>,
) -> Result<Vec3, ObjError> {
    let mut xyz = [0.0f32; 3];
    let mut found = 0;

    // An optional fourth `w` component is ignored.
    for token in tokens.take(3) {
        xyz[found] = token.parse().map_err(|_| ObjError::InvalidNumber {
            line,
            token: token.to_string(),
        })?;
        found += 1;
    }

    if found < 3 {
        return Err(ObjError::MissingValues {
            line,
            directive: "v",
            expected: 3,
            found,
        });
    }

    Ok(Vec3::from_array(xyz))
}

/// Resolves one face token (`i`, `i/t`, `i//n`, `i/t/n`) to a 0-based index.
fn resolve_index(line: usize, token: &str, vertex_count: usize) -> Result<u32, ObjError> {
    let position = token.split('/').next().unwrap_or_default();
    let index: i64 = position.parse().map_err(|_| ObjError::InvalidNumber {
        line,
        token: token.to_string(),
    })?;

    let count = vertex_count as i64;
    let resolved = match index {
        i if i > 0 => i - 1,
        i if i < 0 => count + i,
        _ => -1,
    };

    if resolved < 0 || resolved >= count {
        return Err(ObjError::IndexOutOfRange {
            line,
            index,
            vertex_count,
        });
    }

    Ok(resolved as u32)
}
