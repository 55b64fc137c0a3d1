//! Tolerance-based vertex welding.
//!
//! Each vertex is snapped to a grid of spacing `tolerance` (scale by
//! `1 / tolerance`, round to nearest). Vertices that land on the same grid
//! point share one output vertex: the first one seen, kept verbatim.

use hashbrown::HashMap;

use crate::math::vec3::Vec3;

type WeldKey = [i64; 3];

#[inline]
fn weld_key(v: Vec3, inv_tolerance: f32) -> WeldKey {
    // Float to int `as` casts saturate, so out-of-range inputs still hash.
    [
        (v.x * inv_tolerance).round() as i64,
        (v.y * inv_tolerance).round() as i64,
        (v.z * inv_tolerance).round() as i64,
    ]
}

/// Deduplicate `vertices`, rewriting `triangles` in place to index the
/// compacted array that is returned.
///
/// Triangle count and winding are unchanged. Indices in `triangles` must be
/// valid for `vertices`; `tolerance` must be positive (see
/// [`DecalBuildConfig::validate`](crate::config::DecalBuildConfig::validate)).
pub fn weld(vertices: &[Vec3], triangles: &mut [u32], tolerance: f32) -> Vec<Vec3> {
    let inv_tolerance = 1.0 / tolerance;
    let mut lookup: HashMap<WeldKey, u32> = HashMap::with_capacity(vertices.len());
    let mut compacted = Vec::with_capacity(vertices.len());

    let remap: Vec<u32> = vertices
        .iter()
        .map(|&v| {
            *lookup.entry(weld_key(v, inv_tolerance)).or_insert_with(|| {
                compacted.push(v);
                (compacted.len() - 1) as u32
            })
        })
        .collect();

    for index in triangles.iter_mut() {
        *index = remap[*index as usize];
    }

    compacted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_vertices_collapse() {
        let vertices = [Vec3::ZERO, Vec3::new(0.00001, 0.0, 0.0)];
        let mut indices = [0, 1];
        let welded = weld(&vertices, &mut indices, 0.0001);
        assert_eq!(welded, vec![Vec3::ZERO]);
        assert_eq!(indices, [0, 0]);
    }

    #[test]
    fn test_fine_tolerance_keeps_vertices() {
        let vertices = [Vec3::ZERO, Vec3::new(0.00001, 0.0, 0.0)];
        let mut indices = [0, 1];
        let welded = weld(&vertices, &mut indices, 0.000001);
        assert_eq!(welded.len(), 2);
        assert_eq!(indices, [0, 1]);
    }

    #[test]
    fn test_first_seen_vertex_is_kept() {
        let a = Vec3::new(1.00002, 0.0, 0.0);
        let b = Vec3::new(0.99998, 0.0, 0.0);
        let mut indices = [1, 0];
        let welded = weld(&[a, b], &mut indices, 0.001);
        assert_eq!(welded, vec![a]);
    }

    #[test]
    fn test_quad_from_two_triangles() {
        // Two triangles appended as independent triples share an edge.
        let p = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        let vertices = [p[0], p[1], p[2], p[0], p[2], p[3]];
        let mut indices: Vec<u32> = (0..6).collect();

        let welded = weld(&vertices, &mut indices, 1e-4);

        assert_eq!(welded, p.to_vec());
        assert_eq!(indices, vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn test_empty_input() {
        let mut indices: [u32; 0] = [];
        assert!(weld(&[], &mut indices, 1e-4).is_empty());
    }
}
