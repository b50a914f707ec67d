//! Miter-join polygon offset used for kerf compensation.
//!
//! Each vertex moves to the intersection of its two neighbouring edges after
//! both edges are pushed along their normals. This is not a general
//! Minkowski offset: sharp reflex corners can overshoot and self-intersect,
//! which is acceptable for smooth outlines such as airfoils and for small
//! kerf values.

use super::polygon::{close_polygon, signed_area};
use super::Point;

const PARALLEL_EPSILON: f64 = 1e-9;

/// Offsets a closed polygon by `delta`.
///
/// Positive `delta` grows the polygon and negative shrinks it, whatever the
/// winding. The result is closed. Zero `delta` and polygons with fewer than
/// four points (a closed triangle) are returned unchanged.
pub fn offset_polygon(polygon: &[Point], delta: f64) -> Vec<Point> {
    if delta == 0.0 || polygon.len() < 4 {
        return polygon.to_vec();
    }

    let closed = close_polygon(polygon);
    // Left normals point into a counter-clockwise polygon, out of a clockwise one.
    let d = if signed_area(&closed) > 0.0 { -delta } else { delta };

    let n = closed.len() - 1;
    let mut out = Vec::with_capacity(n + 1);

    for i in 0..n {
        let p0 = closed[(i + n - 1) % n];
        let p1 = closed[i];
        let p2 = closed[(i + 1) % n];

        let n1 = unit_left_normal(p0, p1);
        let n2 = unit_left_normal(p1, p2);

        let a1 = p0.translated(n1.x * d, n1.y * d);
        let b1 = p1.translated(n1.x * d, n1.y * d);
        let a2 = p1.translated(n2.x * d, n2.y * d);
        let b2 = p2.translated(n2.x * d, n2.y * d);

        let vertex = line_intersection(a1, b1, a2, b2).unwrap_or_else(|| {
            p1.translated((n1.x + n2.x) * 0.5 * d, (n1.y + n2.y) * 0.5 * d)
        });
        out.push(vertex);
    }

    out.push(out[0]);
    out
}

fn unit_left_normal(a: Point, b: Point) -> Point {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len = dx.hypot(dy);
    let len = if len > 0.0 { len } else { 1.0 };
    Point::new(-dy / len, dx / len)
}

/// Intersection of the infinite lines through `a1-a2` and `b1-b2`.
fn line_intersection(a1: Point, a2: Point, b1: Point, b2: Point) -> Option<Point> {
    let dax = a2.x - a1.x;
    let day = a2.y - a1.y;
    let dbx = b2.x - b1.x;
    let dby = b2.y - b1.y;

    let denom = dax * dby - day * dbx;
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = ((b1.x - a1.x) * dby - (b1.y - a1.y) * dbx) / denom;
    Some(Point::new(a1.x + t * dax, a1.y + t * day))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::polygon::{is_closed, winding, Winding};
    use approx::assert_relative_eq;

    fn square(side: f64) -> Vec<Point> {
        close_polygon(&[
            Point::new(0.0, 0.0),
            Point::new(side, 0.0),
            Point::new(side, side),
            Point::new(0.0, side),
        ])
    }

    #[test]
    fn test_zero_delta_is_identity() {
        let sq = square(10.0);
        assert_eq!(offset_polygon(&sq, 0.0), sq);
    }

    #[test]
    fn test_outward_offset_ccw_square() {
        let grown = offset_polygon(&square(10.0), 1.0);
        assert!(is_closed(&grown));
        assert_relative_eq!(signed_area(&grown), 144.0, epsilon = 1e-9);
        assert_relative_eq!(grown[0].x, -1.0, epsilon = 1e-9);
        assert_relative_eq!(grown[0].y, -1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_outward_offset_cw_square() {
        let mut sq = square(10.0);
        sq.reverse();
        assert_eq!(winding(&sq), Winding::Clockwise);
        let grown = offset_polygon(&sq, 1.0);
        assert_relative_eq!(signed_area(&grown).abs(), 144.0, epsilon = 1e-9);
        assert_eq!(winding(&grown), Winding::Clockwise);
    }

    #[test]
    fn test_inward_offset_shrinks() {
        let shrunk = offset_polygon(&square(10.0), -1.0);
        assert_relative_eq!(signed_area(&shrunk), 64.0, epsilon = 1e-9);
    }

    #[test]
    fn test_collinear_vertex_uses_averaged_normal() {
        // midpoint on the bottom edge has parallel neighbours
        let poly = close_polygon(&[
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]);
        let grown = offset_polygon(&poly, 1.0);
        assert_relative_eq!(grown[1].x, 5.0, epsilon = 1e-9);
        assert_relative_eq!(grown[1].y, -1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_area_grows_with_delta() {
        let sq = square(20.0);
        let mut last = signed_area(&sq);
        for step in 1..6 {
            let area = signed_area(&offset_polygon(&sq, step as f64 * 0.5));
            assert!(area > last);
            last = area;
        }
    }

    #[test]
    fn test_tiny_polygon_returned_unchanged() {
        let open_tri = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ];
        assert_eq!(offset_polygon(&open_tri, 1.0), open_tri);
    }
}
