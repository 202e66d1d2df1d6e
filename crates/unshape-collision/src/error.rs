//! Error types for unshape-collision.
//!
//! Collision queries themselves never fail; these errors come from the
//! strict constructors and configuration validation.

use thiserror::Error;

/// Errors from validating collision input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CollisionError {
    /// Polygon has too few vertices to enclose an area.
    #[error("polygon needs at least 3 vertices, got {vertices}")]
    DegeneratePolygon {
        /// Number of vertices supplied.
        vertices: usize,
    },

    /// A vertex has a NaN or infinite coordinate.
    #[error("vertex {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Index of the offending vertex.
        index: usize,
    },

    /// Cursor probe size must be finite and positive.
    #[error("invalid cursor size: {0}")]
    InvalidCursorSize(f32),
}

/// Result type for fallible collision operations.
pub type Result<T> = std::result::Result<T, CollisionError>;
