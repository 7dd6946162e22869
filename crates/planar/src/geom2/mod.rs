//! Stateless 2D geometry helpers over `Coords`.
//!
//! Purpose
//! - Vector difference, angle, midpoint, extension along a vector, perpendicular
//!   offset, distance, and elementwise arithmetic (`ops`).
//! - Segment–segment intersection and reflection across a line (`lines`).
//!
//! Conventions
//! - Every operation takes one small argument struct (`PointPair`, `AngleArgs`, ...)
//!   except the elementwise `add`/`subtract`/`multiply`/`divide`, which take `(a, b)`
//!   and compute `a ∘ b`.
//! - Inputs and outputs are checked for finiteness; failures are `InvalidGeometry`,
//!   never NaN. "Segments do not meet" is `Ok(None)`, not an error.
//! - Rejections are reported as `tracing` debug events (`op`, `reason`).
//!
//! Code cross-refs: `Coords`, `Segment`, `GeomCfg`, `InvalidGeometry`

mod error;
mod lines;
mod ops;
mod types;
mod util;

pub use error::{InvalidGeometry, Result};
pub use lines::{intersection, intersection_eps, reflect_point_thru_line};
pub use ops::{
    add, angle, distance, divide, extend_point_by_vector, midpoint, multiply, perpendicular_point,
    subtract, vector_between,
};
pub use types::{
    AngleArgs, AngleUnit, Coords, ExtendArgs, GeomCfg, IntersectionArgs, PerpendicularArgs,
    PointPair, ReflectArgs, Segment,
};
