//! Fan triangulation of convex polygons.

use crate::math::vec3::Vec3;

/// Triangles `(v0, v[i], v[i + 1])` of a convex polygon, in winding order.
///
/// Yields nothing for fewer than 3 points. Non-convex input is not
/// supported; the clipper only produces convex polygons.
pub fn fan_triangles(polygon: &[Vec3]) -> impl Iterator<Item = [Vec3; 3]> + '_ {
    (1..polygon.len().saturating_sub(1)).map(move |i| [polygon[0], polygon[i], polygon[i + 1]])
}

/// Append the fan triangulation of `polygon` to `out` as vertex triples.
///
/// Returns the number of triangles appended.
pub fn triangulate_fan(polygon: &[Vec3], out: &mut Vec<Vec3>) -> usize {
    let before = out.len();
    out.extend(fan_triangles(polygon).flatten());
    (out.len() - before) / 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pentagon_gives_three_triangles() {
        let p: Vec<Vec3> = (0..5).map(|i| Vec3::new(i as f32, 0.0, 0.0)).collect();
        let mut out = vec![Vec3::ONE];
        let count = triangulate_fan(&p, &mut out);

        assert_eq!(count, 3);
        assert_eq!(out.len(), 1 + 9);
        // Existing contents are left alone.
        assert_eq!(out[0], Vec3::ONE);
        assert_eq!(&out[1..4], &[p[0], p[1], p[2]]);
        assert_eq!(&out[4..7], &[p[0], p[2], p[3]]);
        assert_eq!(&out[7..10], &[p[0], p[3], p[4]]);
    }

    #[test]
    fn test_degenerate_input() {
        let mut out = Vec::new();
        assert_eq!(triangulate_fan(&[], &mut out), 0);
        assert_eq!(triangulate_fan(&[Vec3::ZERO, Vec3::ONE], &mut out), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_triangle_passes_through() {
        let tri = [Vec3::ZERO, Vec3::X, Vec3::Y];
        let fans: Vec<_> = fan_triangles(&tri).collect();
        assert_eq!(fans, vec![tri]);
    }
}
