use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Flat, unindexed mesh attributes produced from an OBJ file: one entry per
/// face-vertex, shared vertices duplicated. Deliberately no de-duplication.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjData {
    /// x,y,z per face-vertex
    pub positions: Vec<f32>,
    /// u,v per face-vertex
    pub uvs: Vec<f32>,
    /// x,y,z per face-vertex
    pub normals: Vec<f32>,
}

impl ObjData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }
}

/// Loads an OBJ file from disk.
///
/// Recognized records: `v` (position), `vt` (UV), `vn` (normal) and `f` with
/// exactly three `v/vt/vn` corners (triangulated input only). Any face record
/// that does not carry exactly 9 indices aborts the whole load.
pub fn load_obj(path: impl AsRef<Path>) -> Result<ObjData> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to open OBJ file: {}", path.display()))?;
    parse_obj(&text).with_context(|| format!("failed to parse OBJ file: {}", path.display()))
}

/// Parses OBJ text into flat attribute arrays. See [`load_obj`].
pub fn parse_obj(text: &str) -> Result<ObjData> {
    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut uvs: Vec<[f32; 2]> = Vec::new();
    let mut normals: Vec<[f32; 3]> = Vec::new();
    // Accumulated 1-based v/vt/vn index triples, one per face-vertex
    let mut faces: Vec<[u32; 3]> = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let mut tokens = line.split_whitespace();
        let Some(prefix) = tokens.next() else {
            continue;
        };

        match prefix {
            "v" => positions.push(parse_floats(tokens, line_no)?),
            "vt" => uvs.push(parse_floats(tokens, line_no)?),
            "vn" => normals.push(parse_floats(tokens, line_no)?),
            "f" => {
                let corners: Vec<&str> = tokens.collect();
                if corners.len() != 3 {
                    bail!(
                        "line {}: face record must have exactly 3 corners, found {}",
                        line_no + 1,
                        corners.len()
                    );
                }
                for corner in corners {
                    faces.push(parse_corner(corner, line_no)?);
                }
            }
            // Comments, object names, materials and anything else are skipped
            _ => {}
        }
    }

    // Resolve the accumulated indices into unindexed output arrays
    let mut data = ObjData::default();
    for [vi, ti, ni] in faces {
        let position = lookup(&positions, vi, "vertex")?;
        let uv = lookup(&uvs, ti, "UV")?;
        let normal = lookup(&normals, ni, "normal")?;

        data.positions.extend_from_slice(&position);
        data.uvs.extend_from_slice(&uv);
        data.normals.extend_from_slice(&normal);
    }

    Ok(data)
}

/// Parse exactly N floats from the remaining tokens of a record
fn parse_floats<'a, const N: usize>(
    tokens: impl Iterator<Item = &'a str>,
    line_no: usize,
) -> Result<[f32; N]> {
    let mut out = [0.0f32; N];
    let mut count = 0;
    for token in tokens {
        if count == N {
            bail!("line {}: expected {} components", line_no + 1, N);
        }
        out[count] = token
            .parse()
            .with_context(|| format!("line {}: bad float {:?}", line_no + 1, token))?;
        count += 1;
    }
    if count != N {
        bail!("line {}: expected {} components, found {}", line_no + 1, N, count);
    }
    Ok(out)
}

/// Parse one `vertex/uv/normal` corner of a face record
fn parse_corner(corner: &str, line_no: usize) -> Result<[u32; 3]> {
    let parts: Vec<&str> = corner.split('/').collect();
    if parts.len() != 3 {
        bail!(
            "line {}: face corner {:?} is not vertex/uv/normal",
            line_no + 1,
            corner
        );
    }
    let mut indices = [0u32; 3];
    for (slot, part) in indices.iter_mut().zip(parts) {
        *slot = part
            .parse()
            .with_context(|| format!("line {}: bad index {:?}", line_no + 1, part))?;
    }
    Ok(indices)
}

/// Resolve a 1-based OBJ index against an attribute table.
/// Index 0 is never valid in OBJ and fails like any out-of-range index.
fn lookup<const N: usize>(table: &[[f32; N]], index: u32, kind: &str) -> Result<[f32; N]> {
    (index as usize)
        .checked_sub(1)
        .and_then(|i| table.get(i))
        .copied()
        .with_context(|| format!("{} index {} out of range ({} entries)", kind, index, table.len()))
}
