//! Host models: named source meshes sharing one world transform.
//!
//! A [`SourceModel`] is a collection of [`SourceMesh`] instances, usually
//! loaded from a single OBJ file. Its [`Transform`] provides the
//! source-to-world matrix handed to the decal builder.

use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use crate::error::DecalResult;
use crate::math::mat4::Mat4;
use crate::mesh::SourceMesh;
use crate::transform::Transform;

/// A placed model whose meshes can receive decals.
#[derive(Debug, Clone, Default)]
pub struct SourceModel {
    name: String,
    meshes: Vec<SourceMesh>,
    mesh_names: HashMap<String, usize>,
    transform: Transform,
}

impl SourceModel {
    /// Create an empty model with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Load a model from an OBJ file.
    ///
    /// All objects/groups in the file become separate meshes.
    pub fn from_obj(name: impl Into<String>, path: impl AsRef<Path>) -> DecalResult<Self> {
        let meshes = SourceMesh::load_all_from_obj(path)?;
        Ok(Self::from_meshes(name, meshes))
    }

    /// Load a model from OBJ text. `label` names the source in errors.
    pub fn from_obj_reader(
        name: impl Into<String>,
        reader: &mut impl BufRead,
        label: impl AsRef<Path>,
    ) -> DecalResult<Self> {
        let meshes = SourceMesh::load_all_from_obj_reader(reader, label)?;
        Ok(Self::from_meshes(name, meshes))
    }

    pub fn from_meshes(name: impl Into<String>, meshes: impl IntoIterator<Item = SourceMesh>) -> Self {
        let mut model = Self::new(name);
        for mesh in meshes {
            model.add_mesh(mesh);
        }
        model
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // ============ Transform Accessors ============

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// Chaining setter used when building scenes.
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Source-to-world matrix for every mesh of this model.
    pub fn to_world(&self) -> Mat4 {
        self.transform.to_matrix()
    }

    // ============ Mesh Access ============

    /// Get a mesh by name. With duplicate names the last one added wins.
    pub fn mesh(&self, name: &str) -> Option<&SourceMesh> {
        self.mesh_names.get(name).map(|&i| &self.meshes[i])
    }

    pub fn mesh_by_index(&self, index: usize) -> Option<&SourceMesh> {
        self.meshes.get(index)
    }

    pub fn meshes(&self) -> &[SourceMesh] {
        &self.meshes
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// Total triangles over all meshes.
    pub fn triangle_count(&self) -> usize {
        self.meshes.iter().map(SourceMesh::triangle_count).sum()
    }

    pub fn mesh_names(&self) -> impl Iterator<Item = &str> {
        self.mesh_names.keys().map(|s| s.as_str())
    }

    pub fn add_mesh(&mut self, mesh: SourceMesh) {
        let name = mesh.name().to_string();
        let index = self.meshes.len();
        self.meshes.push(mesh);
        self.mesh_names.insert(name, index);
    }
}
