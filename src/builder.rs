//! Decal mesh builder.
//!
//! A build session runs `begin -> process* -> end`:
//!
//! ```text
//! Idle --begin--> Building --process--> Building --end--> Idle
//! ```
//!
//! `process` transforms each source triangle into decal space and sorts it:
//!
//! - back-facing (when excluded): dropped
//! - all three vertices inside the unit cube: appended as is
//! - separated from the cube: dropped
//! - straddling: clipped to the cube, fan-triangulated, fan triangles that
//!   are flat relative to their own size dropped
//!
//! Accepted triangles are appended as independent vertex triples. `end`
//! welds them into an indexed mesh and generates UVs and normals.
//!
//! Every builder owns its scratch buffers, so separate builders can run on
//! separate threads. Buffers keep their capacity between sessions.

use tracing::{debug, info, trace, warn};

use crate::axis::ProjectionAxis;
use crate::bounds::BoundingBox;
use crate::clipper::UnitCubeClipper;
use crate::config::DecalBuildConfig;
use crate::error::{DecalError, DecalResult};
use crate::final_mesh::{vertex_normals, FinalMesh};
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::mesh::SourceMesh;
use crate::predicates::{is_degenerate_triangle, triangle_intersects_box, triangle_normal};
use crate::triangulate::fan_triangles;
use crate::weld::weld;

/// Session state of a [`DecalMeshBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildState {
    #[default]
    Idle,
    Building,
}

/// Counters for the current (or last finished) session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildStats {
    /// Source meshes passed to `process`, including skipped ones.
    pub meshes: usize,
    /// Source triangles examined.
    pub triangles_in: usize,
    /// Dropped by back-face exclusion.
    pub back_facing: usize,
    /// Fully inside the volume; appended without clipping.
    pub contained: usize,
    /// Separated from the volume; never clipped.
    pub rejected: usize,
    /// Sent through the clipper.
    pub clipped: usize,
    /// Clipped down to fewer than 3 points.
    pub clipped_away: usize,
    /// Flat fan triangles dropped after clipping.
    pub degenerate: usize,
    /// Triangles appended to the session.
    pub triangles_out: usize,
}

/// Where a transformed source triangle goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Classification {
    BackFacing,
    Contained,
    Outside,
    Straddling,
}

/// Builds decal meshes by clipping source triangles to the unit cube.
#[derive(Debug, Clone)]
pub struct DecalMeshBuilder {
    config: DecalBuildConfig,
    state: BuildState,
    axis: ProjectionAxis,
    exclude_back_facing: bool,
    /// Accepted triangles as independent vertex triples.
    vertices: Vec<Vec3>,
    /// Current source mesh's vertices in decal space.
    transformed: Vec<Vec3>,
    clipper: UnitCubeClipper,
    stats: BuildStats,
}

impl Default for DecalMeshBuilder {
    fn default() -> Self {
        Self::from_valid_config(DecalBuildConfig::default())
    }
}

impl DecalMeshBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder after validating `config`.
    pub fn with_config(config: DecalBuildConfig) -> DecalResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: DecalBuildConfig) -> Self {
        Self {
            vertices: Vec::with_capacity(config.initial_capacity),
            transformed: Vec::with_capacity(config.initial_capacity),
            config,
            state: BuildState::Idle,
            axis: ProjectionAxis::default(),
            exclude_back_facing: false,
            clipper: UnitCubeClipper::new(),
            stats: BuildStats::default(),
        }
    }

    pub fn config(&self) -> &DecalBuildConfig {
        &self.config
    }

    pub fn state(&self) -> BuildState {
        self.state
    }

    pub fn is_building(&self) -> bool {
        self.state == BuildState::Building
    }

    /// Projection axis of the current (or last) session.
    pub fn axis(&self) -> ProjectionAxis {
        self.axis
    }

    /// Vertices accumulated so far in this session, before welding.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Start a session.
    pub fn begin(&mut self, axis: ProjectionAxis, exclude_back_facing: bool) -> DecalResult<()> {
        if self.is_building() {
            return Err(DecalError::SessionAlreadyActive);
        }

        self.vertices.clear();
        self.stats = BuildStats::default();
        self.axis = axis;
        self.exclude_back_facing = exclude_back_facing;
        self.state = BuildState::Building;

        debug!(%axis, exclude_back_facing, "Decal build started");
        Ok(())
    }

    /// Abandon the current session, discarding anything accumulated.
    pub fn reset(&mut self) {
        if self.is_building() {
            debug!(vertices = self.vertices.len(), "Decal build abandoned");
        }
        self.vertices.clear();
        self.state = BuildState::Idle;
    }

    /// Add one source mesh's triangles to the session.
    ///
    /// Vertices go source -> world -> decal space through the two matrices.
    /// Returns whether the session now holds at least one triangle. A mesh
    /// with fewer than 3 indices is skipped and reports `false`.
    pub fn process(
        &mut self,
        source_to_world: &Mat4,
        world_to_decal: &Mat4,
        source: &SourceMesh,
    ) -> DecalResult<bool> {
        if !self.is_building() {
            return Err(DecalError::SessionNotActive);
        }

        self.stats.meshes += 1;

        if source.index_count() < 3 {
            warn!(
                mesh = source.name(),
                indices = source.index_count(),
                "Skipping source mesh without triangles"
            );
            return Ok(false);
        }
        source.validate()?;

        self.transformed.clear();
        self.transformed.extend(
            source
                .vertices()
                .iter()
                .map(|&v| world_to_decal.transform_point(source_to_world.transform_point(v))),
        );

        let before = self.stats;
        for submesh in source.submeshes() {
            for t in submesh.chunks_exact(3) {
                let v0 = self.transformed[t[0] as usize];
                let v1 = self.transformed[t[1] as usize];
                let v2 = self.transformed[t[2] as usize];
                self.add_triangle(v0, v1, v2);
            }
        }

        debug!(
            mesh = source.name(),
            triangles = self.stats.triangles_in - before.triangles_in,
            contained = self.stats.contained - before.contained,
            clipped = self.stats.clipped - before.clipped,
            emitted = self.stats.triangles_out - before.triangles_out,
            "Processed source mesh"
        );

        Ok(self.vertices.len() >= 3)
    }

    fn classify(&self, v0: Vec3, v1: Vec3, v2: Vec3) -> Classification {
        if self.exclude_back_facing {
            let normal = triangle_normal(v0, v1, v2, false);
            if normal.dot(self.axis.direction()) <= 0.0 {
                return Classification::BackFacing;
            }
        }

        let volume = BoundingBox::unit_cube();
        if volume.contains_point(v0) && volume.contains_point(v1) && volume.contains_point(v2) {
            Classification::Contained
        } else if triangle_intersects_box(v0, v1, v2, &volume) {
            Classification::Straddling
        } else {
            Classification::Outside
        }
    }

    fn add_triangle(&mut self, v0: Vec3, v1: Vec3, v2: Vec3) {
        self.stats.triangles_in += 1;

        let class = self.classify(v0, v1, v2);
        trace!(?class, ?v0, ?v1, ?v2, "Classified triangle");

        match class {
            Classification::BackFacing => self.stats.back_facing += 1,
            Classification::Outside => self.stats.rejected += 1,
            Classification::Contained => {
                self.stats.contained += 1;
                self.stats.triangles_out += 1;
                self.vertices.extend_from_slice(&[v0, v1, v2]);
            }
            Classification::Straddling => {
                self.stats.clipped += 1;
                let Some(polygon) = self.clipper.clip_triangle(v0, v1, v2) else {
                    self.stats.clipped_away += 1;
                    return;
                };

                for [a, b, c] in fan_triangles(&polygon.vertices) {
                    if is_degenerate_triangle(a, b, c, self.config.degenerate_epsilon) {
                        self.stats.degenerate += 1;
                        continue;
                    }
                    self.stats.triangles_out += 1;
                    self.vertices.extend_from_slice(&[a, b, c]);
                }
            }
        }
    }

    /// Finish the session: weld, generate UVs and normals.
    ///
    /// Returns `None` when fewer than 3 vertices were accumulated. The
    /// builder is `Idle` afterwards either way.
    pub fn end(&mut self) -> DecalResult<Option<FinalMesh>> {
        if !self.is_building() {
            return Err(DecalError::SessionNotActive);
        }
        self.state = BuildState::Idle;

        if self.vertices.len() < 3 {
            debug!(
                vertices = self.vertices.len(),
                "Decal build produced no geometry"
            );
            self.vertices.clear();
            return Ok(None);
        }

        let mut indices: Vec<u32> = (0..self.vertices.len() as u32).collect();
        let vertices = weld(&self.vertices, &mut indices, self.config.weld_tolerance);
        let welded_away = self.vertices.len() - vertices.len();
        self.vertices.clear();

        let uvs = vertices.iter().map(|&v| self.axis.uv(v)).collect();
        let normals = vertex_normals(&vertices, &indices, self.axis.direction());
        let bounds = BoundingBox::from_points(vertices.iter().copied());

        info!(
            axis = %self.axis,
            meshes = self.stats.meshes,
            triangles_in = self.stats.triangles_in,
            triangles_out = self.stats.triangles_out,
            vertices = vertices.len(),
            welded_away,
            "Decal build complete"
        );

        Ok(Some(FinalMesh {
            vertices,
            indices,
            uvs,
            normals,
            bounds,
        }))
    }
}
