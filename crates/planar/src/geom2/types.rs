//! Basic 2D value types, operation arguments and tolerances.
//!
//! - `Coords`: a point or displacement `{x, y}`; `Copy`, never mutated by the library.
//! - `Segment`: ordered endpoint pair `(p1, p2)` used as a line or line segment.
//! - `GeomCfg`: centralizes the epsilons of the segment-intersection test.
//! - `*Args`: named argument bundles, one per operation.
//!
//! Code cross-refs: `ops::*`, `lines::{intersection, reflect_point_thru_line}`

use nalgebra::Vector2;

/// A 2D point, or a displacement vector depending on context.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coords {
    pub x: f64,
    pub y: f64,
}

impl Coords {
    pub const ORIGIN: Coords = Coords { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Componentwise rounding to the nearest integer (ties away from zero).
    ///
    /// Opt-in snapping for callers that want integer pixel coordinates, e.g.
    /// after `reflect_point_thru_line`.
    #[inline]
    pub fn round(self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }

    /// Max-abs comparison with an absolute tolerance.
    #[inline]
    pub fn approx_eq(&self, other: &Coords, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }
}

impl std::fmt::Display for Coords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Coords {
    fn from(value: (f64, f64)) -> Self {
        Coords::new(value.0, value.1)
    }
}

impl From<[f64; 2]> for Coords {
    fn from(value: [f64; 2]) -> Self {
        Coords::new(value[0], value[1])
    }
}

impl From<Vector2<f64>> for Coords {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Coords::new(v.x, v.y)
    }
}

impl From<Coords> for Vector2<f64> {
    #[inline]
    fn from(c: Coords) -> Self {
        Vector2::new(c.x, c.y)
    }
}

impl std::ops::Add for Coords {
    type Output = Coords;
    #[inline]
    fn add(self, rhs: Coords) -> Self::Output {
        (Vector2::from(self) + Vector2::from(rhs)).into()
    }
}
impl std::ops::Sub for Coords {
    type Output = Coords;
    #[inline]
    fn sub(self, rhs: Coords) -> Self::Output {
        (Vector2::from(self) - Vector2::from(rhs)).into()
    }
}
impl std::ops::Neg for Coords {
    type Output = Coords;
    #[inline]
    fn neg(self) -> Self::Output {
        (-Vector2::from(self)).into()
    }
}
impl std::ops::Mul<f64> for Coords {
    type Output = Coords;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        (Vector2::from(self) * rhs).into()
    }
}

/// Ordered endpoint pair. Direction matters for vectors, not for reflection.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub p1: Coords,
    pub p2: Coords,
}

impl Segment {
    #[inline]
    pub const fn new(p1: Coords, p2: Coords) -> Self {
        Self { p1, p2 }
    }
    /// Both endpoints coincide (exact comparison).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.p1 == self.p2
    }
    /// `p2 - p1`.
    #[inline]
    pub fn direction(&self) -> Coords {
        self.p2 - self.p1
    }
}

impl From<(Coords, Coords)> for Segment {
    fn from(value: (Coords, Coords)) -> Self {
        Segment::new(value.0, value.1)
    }
}

/// Geometry configuration (tolerances) for `intersection_eps`.
///
/// Defaults are exact: `[0,1]` parameter test with no slack and only an exact
/// zero denominator counts as parallel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Slack on the `0 <= u <= 1` test; positive widens, negative narrows.
    pub eps_param: f64,
    /// `|denom| <= eps_denom` is treated as parallel.
    pub eps_denom: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_param: 0.0,
            eps_denom: 0.0,
        }
    }
}

/// Output unit for `angle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

/// Two points, read as `p1` then `p2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointPair {
    pub p1: Coords,
    pub p2: Coords,
}

impl PointPair {
    #[inline]
    pub const fn new(p1: Coords, p2: Coords) -> Self {
        Self { p1, p2 }
    }
}

impl From<Segment> for PointPair {
    fn from(s: Segment) -> Self {
        PointPair::new(s.p1, s.p2)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleArgs {
    pub p1: Coords,
    pub p2: Coords,
    pub unit: AngleUnit,
}

/// `point + vector * distance`; `vector` is used as given (not normalized).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExtendArgs {
    pub point: Coords,
    pub vector: Coords,
    pub distance: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionArgs {
    pub line_a: Segment,
    pub line_b: Segment,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReflectArgs {
    pub origin: Coords,
    pub line: Segment,
}

/// `angle` is in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerpendicularArgs {
    pub point: Coords,
    pub angle: f64,
    pub distance: f64,
}
