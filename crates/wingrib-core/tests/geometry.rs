//! Property checks for the polygon utilities

use proptest::prelude::*;
use wingrib_core::{
    close_polygon, ensure_clockwise, is_closed, offset_polygon, point_in_polygon, signed_area,
    winding, Point, Winding,
};

fn regular_polygon(cx: f64, cy: f64, r: f64, sides: usize) -> Vec<Point> {
    let pts: Vec<Point> = (0..sides)
        .map(|i| {
            let a = std::f64::consts::TAU * i as f64 / sides as f64;
            Point::new(cx + r * a.cos(), cy + r * a.sin())
        })
        .collect();
    close_polygon(&pts)
}

proptest! {
    #[test]
    fn zero_offset_is_identity(cx in -100.0..100.0f64, cy in -100.0..100.0f64, r in 1.0..50.0f64, sides in 3usize..24) {
        let poly = regular_polygon(cx, cy, r, sides);
        prop_assert_eq!(offset_polygon(&poly, 0.0), poly);
    }

    #[test]
    fn outward_offset_grows_convex_polygon(r in 5.0..50.0f64, sides in 3usize..24, d1 in 0.01..1.0f64, extra in 0.01..1.0f64) {
        let poly = ensure_clockwise(&regular_polygon(0.0, 0.0, r, sides));
        let base = signed_area(&poly).abs();
        let a1 = signed_area(&offset_polygon(&poly, d1)).abs();
        let a2 = signed_area(&offset_polygon(&poly, d1 + extra)).abs();
        prop_assert!(a1 > base);
        prop_assert!(a2 > a1);
    }

    #[test]
    fn ensure_clockwise_is_closed_and_clockwise(r in 1.0..50.0f64, sides in 3usize..24) {
        let cw = ensure_clockwise(&regular_polygon(0.0, 0.0, r, sides));
        prop_assert!(is_closed(&cw));
        prop_assert_eq!(winding(&cw), Winding::Clockwise);
    }

    #[test]
    fn centre_is_inside_regular_polygon(cx in -100.0..100.0f64, cy in -100.0..100.0f64, r in 1.0..50.0f64, sides in 3usize..24) {
        let poly = regular_polygon(cx, cy, r, sides);
        prop_assert!(point_in_polygon(Point::new(cx, cy), &poly));
        prop_assert!(!point_in_polygon(Point::new(cx + 2.0 * r, cy), &poly));
    }
}
