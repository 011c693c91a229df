//! Error type used by the crate.

use crate::units::Units;
use meridian_types::GeometryError;
use thiserror::Error;

/// Error enum.
///
/// Every failure is detected and reported at the call that violates the
/// precondition; no operation retries or returns partial results.
#[derive(Debug, Error)]
pub enum Error {
    /// A length conversion was requested in a unit with no linear factor.
    #[error("{0:?} is not a valid unit for length conversion")]
    InvalidLengthUnit(Units),

    /// An area conversion was requested in a unit with no area factor.
    #[error("{0:?} is not a valid unit for area conversion")]
    InvalidAreaUnit(Units),

    /// A quantity that must be non-negative was negative.
    #[error("{0} must be a non-negative number")]
    NegativeInput(&'static str),

    /// An argument violated an operation's precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation is not implemented for the given input.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    /// An output geometry could not be constructed.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
