//! Error types for triangulation.

use thiserror::Error;

/// Errors returned by [`crate::triangulate`] and [`crate::triangulate_with`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TriangulationError {
    /// Fewer than two distinct finite points remained after deduplication.
    #[error("invalid input: need at least 2 distinct points, got {distinct}")]
    InvalidInput {
        /// Distinct points left after dropping non-finite entries and duplicates.
        distinct: usize,
    },

    /// An internal invariant of the algorithm was broken. This is a defect,
    /// not a property of the input.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(&'static str),
}

pub type Result<T> = std::result::Result<T, TriangulationError>;
