//! Triangle predicates: triangle/box overlap and face normals.

use crate::bounds::BoundingBox;
use crate::math::vec3::Vec3;

/// Face normal `(v1 - v0) x (v2 - v0)`.
///
/// A zero-area triangle gives a zero vector when `normalize` is false. With
/// `normalize` set it falls back to [`Vec3::ZERO`] rather than dividing by zero.
pub fn triangle_normal(v0: Vec3, v1: Vec3, v2: Vec3, normalize: bool) -> Vec3 {
    let n = (v1 - v0).cross(v2 - v0);
    if normalize {
        n.try_normalize().unwrap_or(Vec3::ZERO)
    } else {
        n
    }
}

/// True when the triangle's area is negligible next to its size.
///
/// Compares `|n|^2` against `epsilon * l^4`, where `n` is the un-normalized
/// normal and `l` the longest edge. The ratio is the squared sine of the
/// sharpest angle (up to a constant), so the test does not depend on scale.
/// Repeated points always count as degenerate.
pub fn is_degenerate_triangle(v0: Vec3, v1: Vec3, v2: Vec3, epsilon: f32) -> bool {
    let longest = (v1 - v0)
        .magnitude_squared()
        .max((v2 - v1).magnitude_squared())
        .max((v0 - v2).magnitude_squared());
    triangle_normal(v0, v1, v2, false).magnitude_squared() <= epsilon * longest * longest
}

/// Separating axis test between a triangle and an axis-aligned box.
///
/// 1. Accept as soon as one vertex lies in the box.
/// 2. Reject when the triangle's bounds miss the box, or the box lies
///    entirely on one side of the triangle's plane.
/// 3. Test the nine axes formed by crossing each box axis with each edge.
pub fn triangle_intersects_box(v0: Vec3, v1: Vec3, v2: Vec3, bbox: &BoundingBox) -> bool {
    if bbox.contains_point(v0) || bbox.contains_point(v1) || bbox.contains_point(v2) {
        return true;
    }

    let tri_bounds = BoundingBox::from_points([v0, v1, v2]);
    if !tri_bounds.intersects(bbox) {
        return false;
    }

    let center = bbox.center();
    let extents = bbox.extents();

    let normal = (v1 - v0).cross(v2 - v0);
    let plane_d = normal.dot(v0);
    let radius = extents.dot(normal.abs());
    if (normal.dot(center) - plane_d).abs() > radius {
        return false;
    }

    // Work relative to the box center so the box interval is symmetric.
    let p = [v0 - center, v1 - center, v2 - center];
    let edges = [p[1] - p[0], p[2] - p[1], p[0] - p[2]];

    for box_axis in [Vec3::X, Vec3::Y, Vec3::Z] {
        for edge in edges {
            let axis = box_axis.cross(edge);
            if separated_on_axis(axis, &p, extents) {
                return false;
            }
        }
    }

    true
}

/// True when the projected triangle interval misses `[-r, r]`.
fn separated_on_axis(axis: Vec3, points: &[Vec3; 3], extents: Vec3) -> bool {
    let d0 = axis.dot(points[0]);
    let d1 = axis.dot(points[1]);
    let d2 = axis.dot(points[2]);
    let r = extents.dot(axis.abs());
    let min = d0.min(d1).min(d2);
    let max = d0.max(d1).max(d2);
    min > r || max < -r
}
