//! The finished decal mesh handed back to the host.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::bounds::BoundingBox;
use crate::error::{DecalError, DecalResult};
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// A welded, UV-mapped decal mesh in decal-local space.
///
/// `indices` holds 3 entries per triangle; `uvs` and `normals` run parallel
/// to `vertices`.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalMesh {
    pub vertices: Vec<Vec3>,
    pub indices: Vec<u32>,
    pub uvs: Vec<Vec2>,
    pub normals: Vec<Vec3>,
    pub bounds: BoundingBox,
}

impl FinalMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate triangles as vertex index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Write the mesh as Wavefront OBJ text.
    pub fn write_obj(&self, writer: &mut impl Write) -> io::Result<()> {
        writeln!(writer, "# decal mesh")?;
        writeln!(writer, "o decal")?;
        for v in &self.vertices {
            writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
        }
        for uv in &self.uvs {
            writeln!(writer, "vt {} {}", uv.x, uv.y)?;
        }
        for n in &self.normals {
            writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
        }
        for [a, b, c] in self.triangles() {
            // OBJ indices are 1-based
            let (a, b, c) = (a + 1, b + 1, c + 1);
            writeln!(writer, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
        }
        Ok(())
    }

    /// Save the mesh to an OBJ file.
    pub fn save_obj(&self, path: impl AsRef<Path>) -> DecalResult<()> {
        let path = path.as_ref();
        let io_err = |source: io::Error| DecalError::Io {
            path: path.to_path_buf(),
            source,
        };
        let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
        self.write_obj(&mut writer).map_err(io_err)?;
        writer.flush().map_err(io_err)
    }
}

/// Area-weighted vertex normals: each vertex sums the un-normalized normals
/// of its triangles. Vertices whose sum is zero get `fallback`.
pub fn vertex_normals(vertices: &[Vec3], indices: &[u32], fallback: Vec3) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; vertices.len()];
    for t in indices.chunks_exact(3) {
        let (a, b, c) = (t[0] as usize, t[1] as usize, t[2] as usize);
        let face = (vertices[b] - vertices[a]).cross(vertices[c] - vertices[a]);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }
    normals
        .into_iter()
        .map(|n| n.try_normalize().unwrap_or(fallback))
        .collect()
}
