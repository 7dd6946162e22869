//! Error type shared by all geometry operations.

use super::types::Coords;

/// Input or result that has no meaningful geometric value.
///
/// `op` names the operation that rejected the input.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum InvalidGeometry {
    /// An input coordinate (or scalar) is NaN or infinite.
    #[error("{op}: non-finite input")]
    NonFiniteInput { op: &'static str },

    /// A segment whose endpoints coincide was passed where a line is required.
    #[error("{op}: degenerate segment, both endpoints at {at}")]
    DegenerateSegment { op: &'static str, at: Coords },

    /// The formula produced NaN or an infinity (overflow, zero divisor).
    #[error("{op}: non-finite result")]
    NonFiniteResult { op: &'static str },
}

impl InvalidGeometry {
    /// Name of the rejecting operation.
    pub fn op(&self) -> &'static str {
        match *self {
            InvalidGeometry::NonFiniteInput { op }
            | InvalidGeometry::DegenerateSegment { op, .. }
            | InvalidGeometry::NonFiniteResult { op } => op,
        }
    }
}

pub type Result<T> = std::result::Result<T, InvalidGeometry>;
