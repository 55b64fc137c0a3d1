//! Parameters for a decal build.

use crate::error::{DecalError, DecalResult};

/// Default distance under which two output vertices are welded together.
pub const DEFAULT_WELD_TOLERANCE: f32 = 1e-4;

/// Default flatness under which a clipped triangle counts as zero-area.
///
/// See [`is_degenerate_triangle`](crate::predicates::is_degenerate_triangle).
pub const DEFAULT_DEGENERATE_EPSILON: f32 = 1e-10;

/// Parameters for a [`DecalMeshBuilder`](crate::builder::DecalMeshBuilder).
#[derive(Debug, Clone, PartialEq)]
pub struct DecalBuildConfig {
    /// Rounding step used when welding output vertices. Default: 1e-4
    pub weld_tolerance: f32,

    /// Fan triangles with `|normal|^2 <= epsilon * longest_edge^4` are
    /// dropped, so the cut does not depend on the decal's size. Default: 1e-10
    pub degenerate_epsilon: f32,

    /// Number of vertices the scratch buffers reserve up front. Default: 1024
    pub initial_capacity: usize,
}

impl Default for DecalBuildConfig {
    fn default() -> Self {
        Self {
            weld_tolerance: DEFAULT_WELD_TOLERANCE,
            degenerate_epsilon: DEFAULT_DEGENERATE_EPSILON,
            initial_capacity: 1024,
        }
    }
}

impl DecalBuildConfig {
    /// Create a config with a custom weld tolerance.
    #[must_use]
    pub fn with_weld_tolerance(tolerance: f32) -> Self {
        Self {
            weld_tolerance: tolerance,
            ..Default::default()
        }
    }

    /// Create a config that drops only exactly flat triangles.
    #[must_use]
    pub fn keep_slivers() -> Self {
        Self {
            degenerate_epsilon: 0.0,
            ..Default::default()
        }
    }

    /// Check the config before a builder uses it.
    pub fn validate(&self) -> DecalResult<()> {
        if !self.weld_tolerance.is_finite() || self.weld_tolerance <= 0.0 {
            return Err(DecalError::InvalidTolerance(self.weld_tolerance));
        }
        if !self.degenerate_epsilon.is_finite() || self.degenerate_epsilon < 0.0 {
            return Err(DecalError::InvalidTolerance(self.degenerate_epsilon));
        }
        Ok(())
    }
}
