//! Stateless 2D geometry helpers.
//!
//! Pure functions over plain coordinate pairs: vector difference, angle,
//! midpoint, extension along a vector, segment intersection, reflection across
//! a line, perpendicular offset, elementwise arithmetic and distance.
//!
//! API Policy
//! - Every function is referentially transparent; all types are `Copy + Send + Sync`.
//! - Invalid input (non-finite coordinates, degenerate segments) is an
//!   `InvalidGeometry` error; NaN/Infinity never leak out as results.
//! - The library emits `tracing` events but never installs a subscriber.

pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Coords, GeomCfg, InvalidGeometry, Segment};
pub use nalgebra::Vector2 as Vec2;

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{
        add, angle, distance, divide, extend_point_by_vector, intersection, intersection_eps,
        midpoint, multiply, perpendicular_point, reflect_point_thru_line, subtract,
        vector_between, AngleArgs, AngleUnit, Coords, ExtendArgs, GeomCfg, IntersectionArgs,
        InvalidGeometry, PerpendicularArgs, PointPair, ReflectArgs, Segment,
    };
    pub use nalgebra::Vector2 as Vec2;
}
