//! Point and vector arithmetic: differences, angles, midpoints, offsets, distance.
//!
//! All functions validate finiteness of their inputs and outputs and return
//! `InvalidGeometry` instead of NaN/Infinity.
//!
//! Elementwise operand order
//! - `add`, `subtract`, `multiply`, `divide` read left to right:
//!   `subtract(a, b) = a - b`, `divide(a, b) = a / b`.
//! - Code ported from helpers where the second operand was primary
//!   (`subtract(a, b) = b - a`) must swap its arguments.

use super::error::Result;
use super::types::{AngleArgs, AngleUnit, Coords, ExtendArgs, PerpendicularArgs, PointPair};
use super::util::{check_finite, check_finite_scalar, finite_result, finite_scalar_result};

/// Vector pointing from `p2` to `p1`: `p1 - p2`.
pub fn vector_between(args: PointPair) -> Result<Coords> {
    const OP: &str = "vector_between";
    check_finite(OP, &[args.p1, args.p2])?;
    finite_result(OP, args.p1 - args.p2)
}

/// Direction angle of the ray `p1 → p2`, `atan2(dy, dx)`, in `[-180, 180]` degrees
/// or `[-π, π]` radians.
pub fn angle(args: AngleArgs) -> Result<f64> {
    const OP: &str = "angle";
    check_finite(OP, &[args.p1, args.p2])?;
    let rad = (args.p2.y - args.p1.y).atan2(args.p2.x - args.p1.x);
    let out = match args.unit {
        AngleUnit::Radians => rad,
        AngleUnit::Degrees => rad.to_degrees(),
    };
    finite_scalar_result(OP, out)
}

/// Componentwise average of `p1` and `p2`.
pub fn midpoint(args: PointPair) -> Result<Coords> {
    const OP: &str = "midpoint";
    check_finite(OP, &[args.p1, args.p2])?;
    let m = Coords::new((args.p2.x + args.p1.x) / 2.0, (args.p2.y + args.p1.y) / 2.0);
    finite_result(OP, m)
}

/// `point + vector * distance`.
///
/// `vector` is not normalized; pass a unit vector for `distance` to be a length.
pub fn extend_point_by_vector(args: ExtendArgs) -> Result<Coords> {
    const OP: &str = "extend_point_by_vector";
    check_finite(OP, &[args.point, args.vector])?;
    check_finite_scalar(OP, args.distance)?;
    finite_result(OP, args.point + args.vector * args.distance)
}

/// Offset `point` by `distance` along `(sin(angle), cos(angle))`; `angle` in radians.
///
/// The direction is measured from the +y axis, so `angle = 0` moves straight up.
pub fn perpendicular_point(args: PerpendicularArgs) -> Result<Coords> {
    const OP: &str = "perpendicular_point";
    check_finite(OP, &[args.point])?;
    check_finite_scalar(OP, args.angle)?;
    check_finite_scalar(OP, args.distance)?;
    let (s, c) = args.angle.sin_cos();
    let p = Coords::new(args.point.x + s * args.distance, args.point.y + c * args.distance);
    finite_result(OP, p)
}

/// Euclidean distance `|p2 - p1|`, computed with `hypot` (no intermediate overflow).
pub fn distance(args: PointPair) -> Result<f64> {
    const OP: &str = "distance";
    check_finite(OP, &[args.p1, args.p2])?;
    finite_scalar_result(OP, (args.p2.x - args.p1.x).hypot(args.p2.y - args.p1.y))
}

/// Elementwise `a + b`.
pub fn add(a: Coords, b: Coords) -> Result<Coords> {
    elementwise("add", a, b, |l, r| l + r)
}

/// Elementwise `a - b`.
pub fn subtract(a: Coords, b: Coords) -> Result<Coords> {
    elementwise("subtract", a, b, |l, r| l - r)
}

/// Elementwise `a * b`.
pub fn multiply(a: Coords, b: Coords) -> Result<Coords> {
    elementwise("multiply", a, b, |l, r| l * r)
}

/// Elementwise `a / b`. A zero component in `b` yields `NonFiniteResult`.
pub fn divide(a: Coords, b: Coords) -> Result<Coords> {
    elementwise("divide", a, b, |l, r| l / r)
}

#[inline]
fn elementwise(
    op: &'static str,
    a: Coords,
    b: Coords,
    f: impl Fn(f64, f64) -> f64,
) -> Result<Coords> {
    check_finite(op, &[a, b])?;
    finite_result(op, Coords::new(f(a.x, b.x), f(a.y, b.y)))
}
