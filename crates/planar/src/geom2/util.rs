use super::error::{InvalidGeometry, Result};
use super::types::{Coords, Segment};

#[inline]
pub(crate) fn check_finite(op: &'static str, points: &[Coords]) -> Result<()> {
    if points.iter().all(Coords::is_finite) {
        return Ok(());
    }
    tracing::debug!(op, reason = "non-finite input", ?points, "rejected");
    Err(InvalidGeometry::NonFiniteInput { op })
}

#[inline]
pub(crate) fn check_finite_scalar(op: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        return Ok(());
    }
    tracing::debug!(op, reason = "non-finite scalar", value, "rejected");
    Err(InvalidGeometry::NonFiniteInput { op })
}

/// Finite endpoints and `p1 != p2`.
#[inline]
pub(crate) fn check_line(op: &'static str, line: &Segment) -> Result<()> {
    check_finite(op, &[line.p1, line.p2])?;
    if line.is_degenerate() {
        tracing::debug!(op, reason = "degenerate segment", at = %line.p1, "rejected");
        return Err(InvalidGeometry::DegenerateSegment { op, at: line.p1 });
    }
    Ok(())
}

/// Pass a computed point through only if both components are finite.
#[inline]
pub(crate) fn finite_result(op: &'static str, c: Coords) -> Result<Coords> {
    if c.is_finite() {
        Ok(c)
    } else {
        tracing::debug!(op, reason = "non-finite result", ?c, "rejected");
        Err(InvalidGeometry::NonFiniteResult { op })
    }
}

#[inline]
pub(crate) fn finite_scalar_result(op: &'static str, v: f64) -> Result<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        tracing::debug!(op, reason = "non-finite result", v, "rejected");
        Err(InvalidGeometry::NonFiniteResult { op })
    }
}
