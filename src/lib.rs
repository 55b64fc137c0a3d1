//! Decal mesh generation by clipping host geometry to a unit cube.
//!
//! A decal is an oriented box in the world. Every host triangle is moved into
//! the box's local space, where the box is the unit cube `[-0.5, 0.5]^3`,
//! and clipped against it. The surviving pieces are welded into one indexed
//! mesh with texture coordinates from a planar projection along one of the
//! box's axes.
//!
//! # Quick Start
//!
//! ```
//! use decal_mesh::prelude::*;
//!
//! let floor = SourceModel::from_meshes("floor", [SourceMesh::cube(4.0)]);
//!
//! let mut transform = Transform::new();
//! transform.set_position_xyz(0.0, 4.0, 0.0).set_scale_xyz(1.0, 0.5, 1.0);
//! let decal = DecalProjector::new(transform, ProjectionAxis::Y);
//!
//! let mut builder = DecalMeshBuilder::new();
//! let mesh = decal.build(&mut builder, &[floor])?.expect("decal touches the cube");
//! assert_eq!(mesh.triangle_count(), 2);
//! # Ok::<(), decal_mesh::DecalError>(())
//! ```

pub mod axis;
pub mod bounds;
pub mod builder;
pub mod clipper;
pub mod config;
pub mod error;
pub mod final_mesh;
pub mod math;
pub mod mesh;
pub mod model;
pub mod predicates;
pub mod projector;
pub mod transform;
pub mod triangulate;
pub mod weld;

// Re-export commonly needed types at crate root for convenience
pub use axis::ProjectionAxis;
pub use builder::{BuildStats, DecalMeshBuilder};
pub use config::DecalBuildConfig;
pub use error::{DecalError, DecalResult};
pub use final_mesh::FinalMesh;
pub use mesh::SourceMesh;
pub use model::SourceModel;
pub use projector::{build_batch, DecalProjector};
pub use transform::Transform;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use decal_mesh::prelude::*;
/// ```
pub mod prelude {
    // Building
    pub use crate::axis::ProjectionAxis;
    pub use crate::builder::{BuildStats, DecalMeshBuilder};
    pub use crate::config::DecalBuildConfig;
    pub use crate::final_mesh::FinalMesh;
    pub use crate::projector::{build_batch, DecalProjector};

    // Scene
    pub use crate::mesh::SourceMesh;
    pub use crate::model::SourceModel;
    pub use crate::transform::Transform;

    // Errors
    pub use crate::error::{DecalError, DecalResult};

    // Math
    pub use crate::bounds::BoundingBox;
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
}
