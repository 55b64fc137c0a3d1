//! Placement of source models and decal volumes in the world.
//!
//! A [`Transform`] is position, rotation (Euler angles) and scale with a
//! fluent API. Source models use [`Transform::to_matrix`] as their
//! source-to-world matrix; decals use [`Transform::inverse_matrix`] as their
//! world-to-decal matrix.

use crate::error::{DecalError, DecalResult};
use crate::math::{mat4::Mat4, vec3::Vec3};

/// A 3D transform with position, rotation (Euler angles), and scale.
///
/// Mutating methods return `&mut Self` for chaining:
///
/// ```
/// use decal_mesh::transform::Transform;
///
/// let mut decal = Transform::new();
/// decal
///     .set_position_xyz(0.0, 1.0, -2.0)
///     .set_rotation_xyz(0.0, 0.5, 0.0)
///     .set_scale_xyz(2.0, 2.0, 0.25);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    position: Vec3,
    rotation: Vec3, // Euler angles in radians: x=pitch, y=yaw, z=roll
    scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Identity transform (position=0, rotation=0, scale=1).
    pub fn new() -> Self {
        Self::default()
    }

    // ============ Position ============

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) -> &mut Self {
        self.position = position;
        self
    }

    pub fn set_position_xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.position = Vec3::new(x, y, z);
        self
    }

    // ============ Rotation ============

    /// Euler angles in radians.
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Vec3) -> &mut Self {
        self.rotation = rotation;
        self
    }

    pub fn set_rotation_xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.rotation = Vec3::new(x, y, z);
        self
    }

    // ============ Scale ============

    /// For a decal this is the size of its volume along each local axis.
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec3) -> &mut Self {
        self.scale = scale;
        self
    }

    pub fn set_scale_xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.scale = Vec3::new(x, y, z);
        self
    }

    /// Set uniform scale (same value for x, y, z).
    pub fn set_scale_uniform(&mut self, s: f32) -> &mut Self {
        self.scale = Vec3::splat(s);
        self
    }

    // ============ Matrix Generation ============

    /// Local-to-world matrix.
    ///
    /// Order: Translation * RotationX * RotationY * RotationZ * Scale
    /// (Scale applied first, then rotations, then translation)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::translation(self.position.x, self.position.y, self.position.z)
            * Mat4::rotation_x(self.rotation.x)
            * Mat4::rotation_y(self.rotation.y)
            * Mat4::rotation_z(self.rotation.z)
            * Mat4::scaling(self.scale.x, self.scale.y, self.scale.z)
    }

    /// World-to-local matrix, the exact inverse of [`Transform::to_matrix`].
    ///
    /// Built from the inverted factors in reverse order rather than a general
    /// 4x4 inverse. Fails when a scale component is zero or not finite.
    pub fn inverse_matrix(&self) -> DecalResult<Mat4> {
        let s = self.scale;
        if [s.x, s.y, s.z].iter().any(|c| *c == 0.0 || !c.is_finite()) {
            return Err(DecalError::SingularTransform);
        }

        Ok(Mat4::scaling(1.0 / s.x, 1.0 / s.y, 1.0 / s.z)
            * Mat4::rotation_z(-self.rotation.z)
            * Mat4::rotation_y(-self.rotation.y)
            * Mat4::rotation_x(-self.rotation.x)
            * Mat4::translation(-self.position.x, -self.position.y, -self.position.z))
    }
}
