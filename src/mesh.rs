//! Source meshes: the triangle data decals are projected onto.

use std::io::BufRead;
use std::path::Path;

use crate::error::{DecalError, DecalResult};
use crate::math::vec3::Vec3;

pub const N_CUBE_VERTICES: usize = 8;
pub const N_CUBE_TRIANGLES: usize = 12;

/// Corners of a cube with half extent 1.
pub const CUBE_VERTICES: [Vec3; N_CUBE_VERTICES] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
];

/// Cube triangles, wound so `(b - a) x (c - a)` points out of the cube.
pub const CUBE_TRIANGLES: [[u32; 3]; N_CUBE_TRIANGLES] = [
    // Front (-Z)
    [0, 1, 2],
    [0, 2, 3],
    // Right (+X)
    [3, 2, 4],
    [3, 4, 5],
    // Back (+Z)
    [5, 4, 6],
    [5, 6, 7],
    // Left (-X)
    [7, 6, 1],
    [7, 1, 0],
    // Top (+Y)
    [1, 6, 4],
    [1, 4, 2],
    // Bottom (-Y)
    [5, 7, 0],
    [5, 0, 3],
];

/// Triangle data of one host mesh in its own local space.
///
/// Each sub-mesh is a flat index list, 3 indices per triangle, into the
/// shared vertex list. Sub-meshes need not be closed or manifold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceMesh {
    name: String,
    vertices: Vec<Vec3>,
    submeshes: Vec<Vec<u32>>,
}

impl SourceMesh {
    /// Create a mesh with a single sub-mesh.
    pub fn new(name: impl Into<String>, vertices: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self::with_submeshes(name, vertices, vec![indices])
    }

    pub fn with_submeshes(
        name: impl Into<String>,
        vertices: Vec<Vec3>,
        submeshes: Vec<Vec<u32>>,
    ) -> Self {
        Self {
            name: name.into(),
            vertices,
            submeshes,
        }
    }

    /// A closed 12-triangle cube centered at the origin.
    pub fn cube(half_extent: f32) -> Self {
        let vertices = CUBE_VERTICES.iter().map(|&v| v * half_extent).collect();
        let indices = CUBE_TRIANGLES.iter().flatten().copied().collect();
        Self::new("cube", vertices, indices)
    }

    /// Load every object/group in an OBJ file as its own mesh.
    ///
    /// Faces are triangulated on load.
    pub fn load_all_from_obj(path: impl AsRef<Path>) -> DecalResult<Vec<SourceMesh>> {
        let path = path.as_ref();
        let (models, _materials) =
            tobj::load_obj(path, &obj_load_options()).map_err(|source| DecalError::ObjLoad {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(models.into_iter().map(Self::from_tobj).collect())
    }

    /// Like [`SourceMesh::load_all_from_obj`], reading OBJ text from memory.
    /// Material libraries are not resolved.
    pub fn load_all_from_obj_reader(
        reader: &mut impl BufRead,
        label: impl AsRef<Path>,
    ) -> DecalResult<Vec<SourceMesh>> {
        let (models, _materials) =
            tobj::load_obj_buf(reader, &obj_load_options(), |_| {
                Err(tobj::LoadError::OpenFileFailed)
            })
            .map_err(|source| DecalError::ObjLoad {
                path: label.as_ref().to_path_buf(),
                source,
            })?;
        Ok(models.into_iter().map(Self::from_tobj).collect())
    }

    fn from_tobj(model: tobj::Model) -> Self {
        let vertices = model
            .mesh
            .positions
            .chunks_exact(3)
            .map(|p| Vec3::new(p[0], p[1], p[2]))
            .collect();
        Self::new(model.name, vertices, model.mesh.indices)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn submeshes(&self) -> &[Vec<u32>] {
        &self.submeshes
    }

    /// Total number of indices over all sub-meshes.
    pub fn index_count(&self) -> usize {
        self.submeshes.iter().map(Vec::len).sum()
    }

    pub fn triangle_count(&self) -> usize {
        self.submeshes.iter().map(|s| s.len() / 3).sum()
    }

    /// Check every sub-mesh is whole triangles referencing existing vertices.
    pub fn validate(&self) -> DecalResult<()> {
        let vertex_count = self.vertices.len();
        for submesh in &self.submeshes {
            if submesh.len() % 3 != 0 {
                return Err(DecalError::InvalidIndexCount(submesh.len()));
            }
            if let Some(&index) = submesh.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(DecalError::IndexOutOfBounds {
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    /// Iterate every triangle of every sub-mesh as vertex positions.
    ///
    /// The mesh is validated first, so a partial triangle or a dangling
    /// index is an error rather than a panic.
    pub fn triangles(&self) -> DecalResult<impl Iterator<Item = [Vec3; 3]> + '_> {
        self.validate()?;
        Ok(self.submeshes.iter().flat_map(move |submesh| {
            submesh.chunks_exact(3).map(move |t| {
                [
                    self.vertices[t[0] as usize],
                    self.vertices[t[1] as usize],
                    self.vertices[t[2] as usize],
                ]
            })
        }))
    }
}

fn obj_load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index: true,
        triangulate: true,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    }
}
