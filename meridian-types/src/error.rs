//! Error type used by the crate.

use thiserror::Error;

/// Error returned when a geometry value cannot be constructed.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// A line string was given fewer than two positions.
    #[error("a line string must contain at least two positions")]
    LineStringTooShort,

    /// A linear ring was given fewer than four positions.
    #[error("a linear ring must contain at least four positions")]
    RingTooShort,

    /// A linear ring does not end with its first position.
    #[error("a linear ring must start and end with the same position")]
    RingNotClosed,

    /// A bounding box array had a length other than 4 or 6.
    #[error("bounding box coordinates must contain 4 or 6 values, got {0}")]
    InvalidBoundingBoxLength(usize),
}
