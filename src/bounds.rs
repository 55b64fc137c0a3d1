//! Axis-aligned bounding box.
//!
//! Both [`BoundingBox::intersects`] and [`BoundingBox::contains_point`] use
//! closed intervals on every axis, so a point lying exactly on a face is
//! inside and two boxes that only touch do intersect.

use crate::math::vec3::Vec3;

/// Half the edge length of the decal projection volume.
pub const UNIT_HALF_EXTENT: f32 = 0.5;

/// Axis-aligned bounding box. Callers keep `min <= max` component-wise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// The decal volume: a unit cube centered at the origin.
    pub const fn unit_cube() -> Self {
        Self::new(
            Vec3::splat(-UNIT_HALF_EXTENT),
            Vec3::splat(UNIT_HALF_EXTENT),
        )
    }

    /// An inverted box that any point expands.
    pub const fn empty() -> Self {
        Self::new(Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY))
    }

    /// Smallest box containing all points, or [`BoundingBox::empty`] for none.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        points
            .into_iter()
            .fold(Self::empty(), |bbox, p| bbox.expand_to_include(p))
    }

    pub fn expand_to_include(&self, p: Vec3) -> Self {
        Self::new(self.min.min(p), self.max.max(p))
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half the size on each axis.
    pub fn extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// True when the boxes overlap on all three axes.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    pub fn contains_point(&self, p: Vec3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_is_symmetric() {
        let boxes = [
            BoundingBox::unit_cube(),
            BoundingBox::new(Vec3::splat(0.5), Vec3::splat(1.0)),
            BoundingBox::new(Vec3::new(0.6, -0.1, -0.1), Vec3::new(0.9, 0.1, 0.1)),
            BoundingBox::new(Vec3::new(-2.0, -2.0, 0.0), Vec3::new(2.0, 2.0, 0.0)),
        ];
        for a in &boxes {
            for b in &boxes {
                assert_eq!(a.intersects(b), b.intersects(a));
            }
        }
    }

    #[test]
    fn test_touching_boxes_intersect() {
        let a = BoundingBox::unit_cube();
        let b = BoundingBox::new(Vec3::new(0.5, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        assert!(a.intersects(&b));
        let c = BoundingBox::new(Vec3::new(0.51, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_unit_cube_contains_closed_interval() {
        let cube = BoundingBox::unit_cube();
        assert!(cube.contains_point(Vec3::ZERO));
        assert!(cube.contains_point(Vec3::splat(-0.5)));
        assert!(cube.contains_point(Vec3::splat(0.5)));
        assert!(cube.contains_point(Vec3::new(0.5, -0.5, 0.25)));

        let step = 1e-4;
        assert!(!cube.contains_point(Vec3::new(0.5 + step, 0.0, 0.0)));
        assert!(!cube.contains_point(Vec3::new(0.0, -0.5 - step, 0.0)));
        assert!(!cube.contains_point(Vec3::new(0.0, 0.0, 0.5 + step)));
    }

    #[test]
    fn test_from_points() {
        let bbox = BoundingBox::from_points([
            Vec3::new(1.0, -2.0, 0.0),
            Vec3::new(-1.0, 3.0, 0.5),
        ]);
        assert_eq!(bbox.min, Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(bbox.max, Vec3::new(1.0, 3.0, 0.5));
        assert_eq!(bbox.center(), Vec3::new(0.0, 0.5, 0.25));
        assert_eq!(bbox.extents(), Vec3::new(1.0, 2.5, 0.25));
        assert!(BoundingBox::from_points(std::iter::empty()).is_empty());
    }
}
