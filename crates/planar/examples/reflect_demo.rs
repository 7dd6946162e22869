//! Walk a point through the geom2 helpers and log each step.
//!
//! The subscriber is set to DEBUG so the library's rejection events show up
//! next to the demo's own INFO lines.

use anyhow::Result;
use planar::prelude::*;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(Level::DEBUG)
        .init();

    let mirror = Segment::new(Coords::new(0.0, 0.0), Coords::new(1.0, 2.0));
    let origin = Coords::new(1.0, 0.0);
    let image = reflect_point_thru_line(ReflectArgs {
        origin,
        line: mirror,
    })?;
    tracing::info!(%origin, %image, snapped = %image.round(), "reflect");

    let heading = angle(AngleArgs {
        p1: origin,
        p2: image,
        unit: AngleUnit::Degrees,
    })?;
    let gap = distance(PointPair::new(origin, image))?;
    tracing::info!(heading, gap, "origin → image");

    let crossing = intersection(IntersectionArgs {
        line_a: Segment::new(origin, image),
        line_b: mirror,
    })?;
    match crossing {
        Some(p) => tracing::info!(%p, "segment origin→image crosses the mirror"),
        None => tracing::info!("no crossing"),
    }

    // Degenerate mirror: reported as an error, not NaN.
    let bad = reflect_point_thru_line(ReflectArgs {
        origin,
        line: Segment::new(origin, origin),
    });
    if let Err(err) = bad {
        tracing::warn!(%err, "rejected");
    }
    Ok(())
}
