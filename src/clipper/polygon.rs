//! Sutherland-Hodgman clipping of a 3D polygon against a 2D convex polygon.
//!
//! The subject is swizzled for the given [`ProjectionAxis`] so its first two
//! components are the in-plane coordinates. The third component rides along
//! and is interpolated at every intersection, then the result is swizzled
//! back into decal space.
//!
//! A point `p` is inside the clip edge `(c0, c1)` when
//!
//! ```text
//! (c1 - c0) x (p - c0) <= 0
//! ```
//!
//! so the clip polygon must be wound clockwise (see [`UNIT_SQUARE`]) and
//! points exactly on an edge are kept.

use std::mem;

use crate::axis::ProjectionAxis;
use crate::prelude::{Vec2, Vec3};

/// The clip polygon for the decal volume, wound clockwise.
pub const UNIT_SQUARE: [Vec2; 4] = [
    Vec2::new(-0.5, -0.5),
    Vec2::new(-0.5, 0.5),
    Vec2::new(0.5, 0.5),
    Vec2::new(0.5, -0.5),
];

/// A convex polygon in decal space.
///
/// Used as an intermediate representation during clipping. After clipping,
/// it is fan-triangulated back into triangles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Vec3>,
}

impl Polygon {
    pub fn new(vertices: Vec<Vec3>) -> Self {
        Self { vertices }
    }

    /// Create an empty polygon that can hold `capacity` points without growing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Create a polygon from a triangle (3 vertices).
    pub fn from_triangle(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self {
            vertices: vec![v0, v1, v2],
        }
    }

    /// Replace the contents with a triangle, keeping the allocation.
    pub fn set_triangle(&mut self, v0: Vec3, v1: Vec3, v2: Vec3) {
        self.vertices.clear();
        self.vertices.extend_from_slice(&[v0, v1, v2]);
    }

    /// Returns true if the polygon has been completely clipped away.
    pub fn is_empty(&self) -> bool {
        self.vertices.len() < 3
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    fn swizzle(&mut self, axis: ProjectionAxis) {
        for v in &mut self.vertices {
            *v = axis.swizzle(*v);
        }
    }

    /// Clip this (already swizzled) polygon against a single clip edge,
    /// writing the surviving points into `output`.
    fn clip_against_edge(&self, c0: Vec2, c1: Vec2, output: &mut Vec<Vec3>) {
        output.clear();

        let Some(&last) = self.vertices.last() else {
            return;
        };

        let edge = c1 - c0;
        let side = |p: Vec3| edge.cross(Vec2::new(p.x, p.y) - c0);

        let mut start = last;
        let mut d_start = side(start);

        for &end in &self.vertices {
            let d_end = side(end);
            let start_inside = d_start <= 0.0;
            let end_inside = d_end <= 0.0;

            if end_inside {
                if !start_inside {
                    // Coming back inside, add intersection
                    output.push(intersect(start, end, d_start, d_end));
                }
                output.push(end);
            } else if start_inside {
                // Leaving, add intersection
                output.push(intersect(start, end, d_start, d_end));
            }
            // If both outside, add nothing

            start = end;
            d_start = d_end;
        }
    }
}

/// Point where segment `start -> end` crosses the clip edge line.
///
/// Only called after the inside test changed sign between the endpoints, so
/// the segment cannot be parallel to the edge.
#[inline]
fn intersect(start: Vec3, end: Vec3, d_start: f32, d_end: f32) -> Vec3 {
    let denom = d_start - d_end;
    debug_assert!(denom != 0.0, "clip intersection on a parallel segment");
    start.lerp(end, d_start / denom)
}

/// Clip `subject` against `clip_polygon` in the plane selected by `axis`,
/// leaving the result in `subject`. `scratch` is a work buffer whose
/// contents are overwritten.
///
/// A result with fewer than 3 points is cleared to the empty polygon.
pub fn clip_in_place(
    subject: &mut Polygon,
    scratch: &mut Polygon,
    clip_polygon: &[Vec2],
    axis: ProjectionAxis,
) {
    if subject.is_empty() || clip_polygon.len() < 3 {
        subject.clear();
        return;
    }

    subject.swizzle(axis);

    for (i, &c0) in clip_polygon.iter().enumerate() {
        let c1 = clip_polygon[(i + 1) % clip_polygon.len()];
        subject.clip_against_edge(c0, c1, &mut scratch.vertices);
        mem::swap(subject, scratch);
        if subject.is_empty() {
            subject.clear();
            return;
        }
    }

    subject.swizzle(axis);
}

/// Clip a polygon against a convex 2D clip polygon in the plane of `axis`.
///
/// Returns the clipped polygon, which is empty if the subject was entirely
/// outside.
pub fn clip(subject: &Polygon, clip_polygon: &[Vec2], axis: ProjectionAxis) -> Polygon {
    let mut result = subject.clone();
    let mut scratch = Polygon::with_capacity(subject.len() + clip_polygon.len());
    clip_in_place(&mut result, &mut scratch, clip_polygon, axis);
    result
}
