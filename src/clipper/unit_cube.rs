//! Clipping triangles to the unit cube.
//!
//! Two [`clip_in_place`] passes against [`UNIT_SQUARE`] bound all three
//! coordinates: the Z swizzle clips x and y, the X swizzle then clips z (and
//! y again, which is a no-op). The pass order is fixed; it determines the
//! order of the output points and so the fan triangulation downstream.

use crate::axis::ProjectionAxis;
use crate::prelude::{Vec2, Vec3};

use super::polygon::{clip_in_place, Polygon, UNIT_SQUARE};

/// Swizzle axes of the two clip passes, in order.
pub const CLIP_PASSES: [ProjectionAxis; 2] = [ProjectionAxis::Z, ProjectionAxis::X];

/// Clips triangles to the decal volume, reusing its buffers between calls.
///
/// Each builder owns one of these, so independent builds never share
/// scratch storage.
#[derive(Debug, Clone)]
pub struct UnitCubeClipper {
    clip_polygon: [Vec2; 4],
    polygon: Polygon,
    scratch: Polygon,
}

impl UnitCubeClipper {
    pub fn new() -> Self {
        Self {
            clip_polygon: UNIT_SQUARE,
            polygon: Polygon::with_capacity(16),
            scratch: Polygon::with_capacity(16),
        }
    }

    /// Clip a triangle against the unit cube.
    ///
    /// Returns the clipped convex polygon, or `None` if fewer than 3 points
    /// survive.
    pub fn clip_triangle(&mut self, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<&Polygon> {
        self.polygon.set_triangle(v0, v1, v2);

        for axis in CLIP_PASSES {
            clip_in_place(
                &mut self.polygon,
                &mut self.scratch,
                &self.clip_polygon,
                axis,
            );
            if self.polygon.is_empty() {
                return None;
            }
        }

        Some(&self.polygon)
    }
}

impl Default for UnitCubeClipper {
    fn default() -> Self {
        Self::new()
    }
}
