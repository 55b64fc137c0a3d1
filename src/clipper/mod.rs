//! Polygon clipping against the decal volume.
//!
//! Clipping is Sutherland-Hodgman against a convex 2D clip polygon. A 3D
//! polygon is clipped in 2D by first swizzling its points so the two
//! coordinates of interest come first, which lets one unit-square clip
//! polygon bound any pair of axes:
//!
//! - [`polygon`]: the [`Polygon`] type and the single-pass [`clip`].
//! - [`unit_cube`]: the two-pass clip (Z swizzle, then X swizzle) that bounds
//!   a triangle to the unit cube, with reusable scratch buffers.

pub mod polygon;
pub mod unit_cube;

pub use polygon::{clip, clip_in_place, Polygon, UNIT_SQUARE};
pub use unit_cube::{UnitCubeClipper, CLIP_PASSES};
