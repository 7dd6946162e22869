//! Algebraic properties of the geom2 helpers (proptest + seeded random sweeps).

use planar::prelude::*;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

const R: f64 = 1e3;

fn coords() -> impl Strategy<Value = Coords> {
    (-R..R, -R..R).prop_map(|(x, y)| Coords::new(x, y))
}

fn line() -> impl Strategy<Value = Segment> {
    (coords(), coords())
        .prop_filter("endpoints too close", |(a, b)| (*a - *b).x.abs() + (*a - *b).y.abs() > 1e-3)
        .prop_map(|(a, b)| Segment::new(a, b))
}

proptest! {
    #[test]
    fn vector_antisymmetric(p1 in coords(), p2 in coords()) {
        let fwd = vector_between(PointPair::new(p1, p2)).unwrap();
        let back = vector_between(PointPair::new(p2, p1)).unwrap();
        prop_assert_eq!(fwd, -back);
    }

    #[test]
    fn midpoint_symmetric(p1 in coords(), p2 in coords()) {
        prop_assert_eq!(
            midpoint(PointPair::new(p1, p2)).unwrap(),
            midpoint(PointPair::new(p2, p1)).unwrap()
        );
    }

    #[test]
    fn distance_symmetric_nonnegative(p1 in coords(), p2 in coords()) {
        let d12 = distance(PointPair::new(p1, p2)).unwrap();
        let d21 = distance(PointPair::new(p2, p1)).unwrap();
        prop_assert_eq!(d12, d21);
        prop_assert!(d12 >= 0.0);
        prop_assert_eq!(d12 == 0.0, p1 == p2);
    }

    #[test]
    fn angle_units_agree(p1 in coords(), p2 in coords()) {
        let rad = angle(AngleArgs { p1, p2, unit: AngleUnit::Radians }).unwrap();
        let deg = angle(AngleArgs { p1, p2, unit: AngleUnit::Degrees }).unwrap();
        prop_assert!((rad.to_degrees() - deg).abs() <= 1e-9);
    }

    #[test]
    fn reflection_is_involution(pt in coords(), l in line()) {
        let once = reflect_point_thru_line(ReflectArgs { origin: pt, line: l }).unwrap();
        let twice = reflect_point_thru_line(ReflectArgs { origin: once, line: l }).unwrap();
        prop_assert!(twice.approx_eq(&pt, 1e-9 * R), "{:?} vs {:?}", twice, pt);
    }

    #[test]
    fn reflection_preserves_distance_to_line_points(pt in coords(), l in line()) {
        let img = reflect_point_thru_line(ReflectArgs { origin: pt, line: l }).unwrap();
        let before = distance(PointPair::new(pt, l.p1)).unwrap();
        let after = distance(PointPair::new(img, l.p1)).unwrap();
        prop_assert!((before - after).abs() <= 1e-9 * R);
    }

    #[test]
    fn intersection_symmetric_and_on_both_segments(a in line(), b in line()) {
        let ab = intersection(IntersectionArgs { line_a: a, line_b: b }).unwrap();
        let ba = intersection(IntersectionArgs { line_a: b, line_b: a }).unwrap();
        prop_assert_eq!(ab.is_some(), ba.is_some());
        if let (Some(p), Some(q)) = (ab, ba) {
            prop_assert!(p.approx_eq(&q, 1e-6 * R));
            prop_assert!(p.x >= a.p1.x.min(a.p2.x) - 1e-6 * R && p.x <= a.p1.x.max(a.p2.x) + 1e-6 * R);
            prop_assert!(p.x >= b.p1.x.min(b.p2.x) - 1e-6 * R && p.x <= b.p1.x.max(b.p2.x) + 1e-6 * R);
        }
    }

    #[test]
    fn add_then_subtract_roundtrips(a in coords(), b in coords()) {
        let back = subtract(add(a, b).unwrap(), b).unwrap();
        prop_assert!(back.approx_eq(&a, 1e-9));
    }
}

#[test]
fn extend_by_unit_vector_moves_exact_distance_seeded() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let p = Coords::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
        let theta: f64 = rng.gen::<f64>() * std::f64::consts::TAU;
        let unit = Coords::new(theta.cos(), theta.sin());
        let d = rng.gen_range(0.0..5.0);
        let q = extend_point_by_vector(ExtendArgs {
            point: p,
            vector: unit,
            distance: d,
        })
        .unwrap();
        let moved = distance(PointPair::new(p, q)).unwrap();
        assert!((moved - d).abs() < 1e-9);
    }
}

#[test]
fn perpendicular_offset_has_requested_length_seeded() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let p = Coords::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
        let angle = rng.gen_range(-std::f64::consts::PI..std::f64::consts::PI);
        let d = rng.gen_range(0.0..5.0);
        let q = perpendicular_point(PerpendicularArgs {
            point: p,
            angle,
            distance: d,
        })
        .unwrap();
        assert!((distance(PointPair::new(p, q)).unwrap() - d).abs() < 1e-9);
    }
}

#[test]
fn crossing_diagonals_of_random_boxes_meet_at_center() {
    let mut rng = StdRng::seed_from_u64(43);
    for _ in 0..100 {
        let x0: f64 = rng.gen_range(-50.0..50.0);
        let y0: f64 = rng.gen_range(-50.0..50.0);
        let w: f64 = rng.gen_range(0.5..20.0);
        let h: f64 = rng.gen_range(0.5..20.0);
        let a = Segment::new(Coords::new(x0, y0), Coords::new(x0 + w, y0 + h));
        let b = Segment::new(Coords::new(x0, y0 + h), Coords::new(x0 + w, y0));
        let p = intersection(IntersectionArgs { line_a: a, line_b: b })
            .unwrap()
            .expect("diagonals cross");
        let center = midpoint(PointPair::from(a)).unwrap();
        assert!(p.approx_eq(&center, 1e-9));
    }
}
