//! Decals placed in the world, and batch builds over many of them.
//!
//! A [`DecalProjector`] owns the decal's transform and projection settings and
//! drives a full build session over a set of [`SourceModel`]s. Independent
//! decals can be built in parallel with [`build_batch`], one builder per
//! decal.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::axis::ProjectionAxis;
use crate::builder::DecalMeshBuilder;
use crate::config::DecalBuildConfig;
use crate::error::DecalResult;
use crate::final_mesh::FinalMesh;
use crate::math::mat4::Mat4;
use crate::model::SourceModel;
use crate::transform::Transform;

/// A decal volume: a unit cube in its own space, placed by `transform`.
///
/// The scale of the transform is the size of the volume.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DecalProjector {
    pub transform: Transform,
    pub axis: ProjectionAxis,
    pub exclude_back_facing: bool,
}

impl DecalProjector {
    pub fn new(transform: Transform, axis: ProjectionAxis) -> Self {
        Self {
            transform,
            axis,
            exclude_back_facing: false,
        }
    }

    #[must_use]
    pub fn excluding_back_faces(mut self, exclude: bool) -> Self {
        self.exclude_back_facing = exclude;
        self
    }

    /// World-to-decal matrix.
    pub fn world_to_decal(&self) -> DecalResult<Mat4> {
        self.transform.inverse_matrix()
    }

    /// Run a whole session over every mesh of every model.
    ///
    /// Returns `None` when the decal touches no geometry. On error the
    /// builder is reset so it can be reused.
    pub fn build(
        &self,
        builder: &mut DecalMeshBuilder,
        models: &[SourceModel],
    ) -> DecalResult<Option<FinalMesh>> {
        let world_to_decal = self.world_to_decal()?;

        builder.begin(self.axis, self.exclude_back_facing)?;
        if let Err(err) = self.process_models(builder, &world_to_decal, models) {
            builder.reset();
            return Err(err);
        }
        builder.end()
    }

    fn process_models(
        &self,
        builder: &mut DecalMeshBuilder,
        world_to_decal: &Mat4,
        models: &[SourceModel],
    ) -> DecalResult<()> {
        for model in models {
            let source_to_world = model.to_world();
            for mesh in model.meshes() {
                builder.process(&source_to_world, world_to_decal, mesh)?;
            }
            debug!(model = model.name(), meshes = model.mesh_count(), "Projected onto model");
        }
        Ok(())
    }
}

/// Build every decal against the same models in parallel.
///
/// Results come back in the order of `projectors`. The first error aborts
/// the batch.
pub fn build_batch(
    projectors: &[DecalProjector],
    models: &[SourceModel],
    config: &DecalBuildConfig,
) -> DecalResult<Vec<Option<FinalMesh>>> {
    config.validate()?;

    let results: Vec<DecalResult<Option<FinalMesh>>> = projectors
        .par_iter()
        .map(|projector| {
            let mut builder = DecalMeshBuilder::with_config(config.clone())?;
            projector.build(&mut builder, models)
        })
        .collect();

    // Collect results, propagating any errors
    let mut meshes = Vec::with_capacity(results.len());
    for result in results {
        meshes.push(result?);
    }

    info!(
        decals = meshes.len(),
        built = meshes.iter().filter(|m| m.is_some()).count(),
        "Decal batch complete"
    );
    Ok(meshes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecalError;
    use crate::math::vec3::Vec3;
    use crate::mesh::SourceMesh;
    use approx::assert_relative_eq;

    fn floor() -> SourceModel {
        // 4x4 quad in the XZ plane facing +Y.
        let vertices = vec![
            Vec3::new(-2.0, 0.0, -2.0),
            Vec3::new(-2.0, 0.0, 2.0),
            Vec3::new(2.0, 0.0, 2.0),
            Vec3::new(2.0, 0.0, -2.0),
        ];
        SourceModel::from_meshes("floor", [SourceMesh::new("floor", vertices, vec![0, 1, 2, 0, 2, 3])])
    }

    fn decal_at(x: f32, z: f32) -> DecalProjector {
        let mut transform = Transform::new();
        transform.set_position_xyz(x, 0.0, z);
        DecalProjector::new(transform, ProjectionAxis::Y)
    }

    #[test]
    fn test_build_on_floor() {
        let mut builder = DecalMeshBuilder::new();
        let mesh = decal_at(0.0, 0.0)
            .build(&mut builder, &[floor()])
            .unwrap()
            .unwrap();

        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        for n in &mesh.normals {
            assert_relative_eq!(*n, Vec3::Y);
        }
        assert!(!builder.is_building());
    }

    #[test]
    fn test_decal_off_the_floor_is_empty() {
        let mut builder = DecalMeshBuilder::new();
        assert!(decal_at(5.0, 0.0)
            .build(&mut builder, &[floor()])
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_singular_decal_leaves_builder_idle() {
        let mut projector = decal_at(0.0, 0.0);
        projector.transform.set_scale_xyz(1.0, 0.0, 1.0);
        let mut builder = DecalMeshBuilder::new();

        assert!(matches!(
            projector.build(&mut builder, &[floor()]),
            Err(DecalError::SingularTransform)
        ));
        assert!(!builder.is_building());
    }

    #[test]
    fn test_bad_mesh_resets_builder() {
        let broken = SourceModel::from_meshes(
            "broken",
            [SourceMesh::new("broken", vec![Vec3::ZERO], vec![0, 0, 7])],
        );
        let mut builder = DecalMeshBuilder::new();

        assert!(decal_at(0.0, 0.0).build(&mut builder, &[broken]).is_err());
        assert!(!builder.is_building());
        assert!(decal_at(0.0, 0.0).build(&mut builder, &[floor()]).is_ok());
    }

    #[test]
    fn test_batch_keeps_input_order() {
        let projectors: Vec<_> = [0.0, 10.0, -1.0, 20.0]
            .iter()
            .map(|&x| decal_at(x, 0.0))
            .collect();
        let results = build_batch(&projectors, &[floor()], &DecalBuildConfig::default()).unwrap();

        assert_eq!(results.len(), 4);
        assert!(results[0].is_some());
        assert!(results[1].is_none());
        assert!(results[3].is_none());

        // Still fully on the floor, so it covers the whole volume footprint.
        let shifted = results[2].as_ref().unwrap();
        assert_relative_eq!(shifted.bounds.min, Vec3::new(-0.5, 0.0, -0.5), epsilon = 1e-6);
        assert_relative_eq!(shifted.bounds.max, Vec3::new(0.5, 0.0, 0.5), epsilon = 1e-6);
    }

    #[test]
    fn test_batch_rejects_bad_config() {
        let config = DecalBuildConfig::with_weld_tolerance(-1.0);
        assert!(build_batch(&[decal_at(0.0, 0.0)], &[floor()], &config).is_err());
    }
}
