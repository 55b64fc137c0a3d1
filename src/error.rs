//! Error types for decal mesh generation.
//!
//! Only malformed input is an error. Input that simply produces no geometry
//! (a sub-mesh with fewer than 3 indices, a session that accumulated nothing)
//! is reported through `Ok(false)` / `Ok(None)` so callers can skip the decal.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a decal mesh.
#[derive(Debug, Error)]
pub enum DecalError {
    /// A projection axis name or code that is not X, Y or Z.
    #[error("Invalid projection axis: {0:?} (expected x, y or z)")]
    InvalidAxis(String),

    /// `begin` was called while another session was still building.
    #[error("A decal build session is already active")]
    SessionAlreadyActive,

    /// `process` or `end` was called without a matching `begin`.
    #[error("No decal build session is active")]
    SessionNotActive,

    /// A sub-mesh index list whose length is not a multiple of 3.
    #[error("Index count {0} is not a multiple of 3")]
    InvalidIndexCount(usize),

    /// A triangle references a vertex the source mesh does not have.
    #[error("Vertex index {index} out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds {
        /// The offending index.
        index: u32,
        /// Number of vertices in the source mesh.
        vertex_count: usize,
    },

    /// Weld tolerance or degeneracy threshold is not usable.
    #[error("Invalid tolerance: {0} (must be finite and > 0)")]
    InvalidTolerance(f32),

    /// The decal transform cannot be inverted into a world-to-decal matrix.
    #[error("Decal transform is singular and cannot be inverted")]
    SingularTransform,

    /// Failure while loading a source mesh from an OBJ file.
    #[error("Failed to load {}: {source}", path.display())]
    ObjLoad {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying loader error.
        #[source]
        source: tobj::LoadError,
    },

    /// IO error while writing a decal mesh.
    #[error("Failed to write to {}: {source}", path.display())]
    Io {
        /// The path that failed.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for decal mesh operations.
pub type DecalResult<T> = std::result::Result<T, DecalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DecalError::InvalidAxis("w".to_string());
        assert_eq!(format!("{err}"), "Invalid projection axis: \"w\" (expected x, y or z)");

        let err = DecalError::IndexOutOfBounds {
            index: 9,
            vertex_count: 3,
        };
        assert!(format!("{err}").contains("9"));
        assert!(format!("{err}").contains("3 vertices"));
    }
}
