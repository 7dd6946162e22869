//! Line and segment operations: segment–segment intersection and reflection.
//!
//! - `intersection`: Paul Bourke's parametric test; `Ok(None)` when the
//!   segments do not meet, `Err` only for invalid input.
//! - `reflect_point_thru_line`: mirror image across the infinite line through a segment.
//!
//! Code cross-refs: `types::{Segment, GeomCfg}`, `util::check_line`

use nalgebra::{matrix, Vector2};

use super::error::{InvalidGeometry, Result};
use super::types::{Coords, GeomCfg, IntersectionArgs, ReflectArgs};
use super::util::{check_finite, check_line, finite_result};

/// Intersection point of two segments with the default (exact) tolerances.
///
/// Returns `Ok(None)` for parallel or collinear segments and for lines that cross
/// outside either segment. Degenerate or non-finite segments are `Err`, and so
/// are finite segments whose direction or denominator overflows `f64`
/// (`NonFiniteResult`), e.g. endpoints at `±1e308`.
#[inline]
pub fn intersection(args: IntersectionArgs) -> Result<Option<Coords>> {
    intersection_eps(args, GeomCfg::default())
}

/// Intersection point of two segments under explicit tolerances.
///
/// With `line_a = (p1, p2)` and `line_b = (p3, p4)` the crossing is
/// `p1 + ua (p2 - p1) = p3 + ub (p4 - p3)`; it lies on both segments iff
/// `ua, ub ∈ [0, 1]` (widened by `cfg.eps_param`).
pub fn intersection_eps(args: IntersectionArgs, cfg: GeomCfg) -> Result<Option<Coords>> {
    const OP: &str = "intersection";
    let IntersectionArgs { line_a, line_b } = args;
    check_line(OP, &line_a)?;
    check_line(OP, &line_b)?;

    let p1 = Vector2::from(line_a.p1);
    let da = Vector2::from(line_a.direction());
    let db = Vector2::from(line_b.direction());
    let w = p1 - Vector2::from(line_b.p1);
    // (p4.y-p3.y)(p2.x-p1.x) - (p4.x-p3.x)(p2.y-p1.y)
    let denom = da.perp(&db);
    if !denom.is_finite() {
        tracing::debug!(op = OP, reason = "non-finite denominator", denom, "rejected");
        return Err(InvalidGeometry::NonFiniteResult { op: OP });
    }
    if denom.abs() <= cfg.eps_denom {
        tracing::trace!(op = OP, reason = "parallel", denom, "no intersection");
        return Ok(None);
    }

    let ua = db.perp(&w) / denom;
    let ub = da.perp(&w) / denom;
    let lo = -cfg.eps_param;
    let hi = 1.0 + cfg.eps_param;
    // NaN fails both comparisons, so non-finite parameters land here too.
    if !((lo..=hi).contains(&ua) && (lo..=hi).contains(&ub)) {
        tracing::trace!(op = OP, reason = "outside", ua, ub, "no intersection");
        return Ok(None);
    }

    finite_result(OP, Coords::from(p1 + da * ua)).map(Some)
}

/// Reflect `origin` across the infinite line through `line.p1` and `line.p2`.
///
/// Uses the reflection matrix `[[a, b], [b, -a]]` with
/// `a = (dx² - dy²) / (dx² + dy²)` and `b = 2 dx dy / (dx² + dy²)`, applied about `p1`.
pub fn reflect_point_thru_line(args: ReflectArgs) -> Result<Coords> {
    const OP: &str = "reflect_point_thru_line";
    let ReflectArgs { origin, line } = args;
    check_finite(OP, &[origin])?;
    check_line(OP, &line)?;

    let Coords { x: dx, y: dy } = line.direction();
    let len2 = dx * dx + dy * dy;
    // Distinct endpoints can still underflow (or overflow) the squared length.
    if !(len2.is_finite() && len2 > 0.0) {
        tracing::debug!(op = OP, reason = "squared length not positive-finite", len2, "rejected");
        return Err(InvalidGeometry::NonFiniteResult { op: OP });
    }
    let a = (dx * dx - dy * dy) / len2;
    let b = 2.0 * dx * dy / len2;

    let p1 = Vector2::from(line.p1);
    let image = matrix![a, b; b, -a] * (Vector2::from(origin) - p1) + p1;
    finite_result(OP, Coords::from(image))
}
