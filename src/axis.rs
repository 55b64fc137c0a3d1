//! Projection axis of a decal and the per-axis lookup table.
//!
//! Every axis-dependent decision (clipping swizzle, back-face direction, UV
//! mapping) reads from one static table instead of matching on the axis at
//! each call site.

use std::fmt;
use std::str::FromStr;

use crate::error::DecalError;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// The cube axis treated as the decal's depth direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProjectionAxis {
    X,
    Y,
    /// Decals project along +Z unless told otherwise.
    #[default]
    Z,
}

/// Per-axis data used by the clipper, the back-face test and UV generation.
pub struct AxisInfo {
    /// Source component for each output component. Each entry swaps two
    /// components (or none), so applying it twice restores the point.
    pub swizzle: [usize; 3],
    /// Unit vector along the axis; triangles facing it are kept.
    pub direction: Vec3,
    /// Maps a decal-space position in the unit cube to `[0, 1]²`.
    pub uv: fn(Vec3) -> Vec2,
}

const AXIS_TABLE: [AxisInfo; 3] = [
    AxisInfo {
        swizzle: [2, 1, 0],
        direction: Vec3::X,
        uv: |p| Vec2::new(p.z + 0.5, p.y + 0.5),
    },
    AxisInfo {
        swizzle: [0, 2, 1],
        direction: Vec3::Y,
        uv: |p| Vec2::new(-p.x + 0.5, -p.z + 0.5),
    },
    AxisInfo {
        swizzle: [0, 1, 2],
        direction: Vec3::Z,
        uv: |p| Vec2::new(-p.x + 0.5, p.y + 0.5),
    },
];

impl ProjectionAxis {
    pub const ALL: [ProjectionAxis; 3] = [ProjectionAxis::X, ProjectionAxis::Y, ProjectionAxis::Z];

    /// Table entry for this axis.
    #[inline]
    pub fn info(self) -> &'static AxisInfo {
        &AXIS_TABLE[self as usize]
    }

    #[inline]
    pub fn direction(self) -> Vec3 {
        self.info().direction
    }

    /// Reorder a point so the two in-plane coordinates come first.
    #[inline]
    pub fn swizzle(self, p: Vec3) -> Vec3 {
        let [a, b, c] = self.info().swizzle;
        Vec3::new(p[a], p[b], p[c])
    }

    /// Texture coordinate of a decal-space position.
    #[inline]
    pub fn uv(self, p: Vec3) -> Vec2 {
        (self.info().uv)(p)
    }
}

impl fmt::Display for ProjectionAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionAxis::X => write!(f, "X"),
            ProjectionAxis::Y => write!(f, "Y"),
            ProjectionAxis::Z => write!(f, "Z"),
        }
    }
}

impl FromStr for ProjectionAxis {
    type Err = DecalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(ProjectionAxis::X),
            "y" => Ok(ProjectionAxis::Y),
            "z" => Ok(ProjectionAxis::Z),
            _ => Err(DecalError::InvalidAxis(s.to_string())),
        }
    }
}

impl TryFrom<u8> for ProjectionAxis {
    type Error = DecalError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        ProjectionAxis::ALL
            .get(usize::from(code))
            .copied()
            .ok_or_else(|| DecalError::InvalidAxis(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_swizzle_is_its_own_inverse() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        for axis in ProjectionAxis::ALL {
            assert_eq!(axis.swizzle(axis.swizzle(p)), p);
        }
        assert_eq!(ProjectionAxis::Z.swizzle(p), p);
        assert_eq!(ProjectionAxis::Y.swizzle(p), Vec3::new(1.0, 3.0, 2.0));
        assert_eq!(ProjectionAxis::X.swizzle(p), Vec3::new(3.0, 2.0, 1.0));
    }

    #[test]
    fn test_uv_formulas() {
        let p = Vec3::new(0.25, -0.5, 0.5);
        assert_relative_eq!(ProjectionAxis::Z.uv(p), Vec2::new(0.25, 0.0));
        assert_relative_eq!(ProjectionAxis::Y.uv(p), Vec2::new(0.25, 0.0));
        assert_relative_eq!(ProjectionAxis::X.uv(p), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_uv_maps_cube_face_to_unit_square() {
        for axis in ProjectionAxis::ALL {
            for corner in [Vec3::splat(-0.5), Vec3::splat(0.5)] {
                let uv = axis.uv(corner);
                assert!((0.0..=1.0).contains(&uv.x));
                assert!((0.0..=1.0).contains(&uv.y));
            }
        }
    }

    #[test]
    fn test_parse_axis() {
        assert_eq!("x".parse::<ProjectionAxis>().unwrap(), ProjectionAxis::X);
        assert_eq!(" Y ".parse::<ProjectionAxis>().unwrap(), ProjectionAxis::Y);
        assert!(matches!(
            "w".parse::<ProjectionAxis>(),
            Err(DecalError::InvalidAxis(_))
        ));
    }

    #[test]
    fn test_axis_from_code() {
        assert_eq!(ProjectionAxis::try_from(2).unwrap(), ProjectionAxis::Z);
        assert!(ProjectionAxis::try_from(3).is_err());
    }
}
