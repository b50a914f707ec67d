use super::Point;

/// Polygon orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

/// Top and bottom crossings of a vertical line with a polygon
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct YExtrema {
    pub top: f64,
    pub bottom: f64,
}

/// `true` when the first point equals the last point exactly.
pub fn is_closed(points: &[Point]) -> bool {
    match (points.first(), points.last()) {
        (Some(a), Some(b)) => points.len() > 1 && a == b,
        _ => false,
    }
}

/// Appends a copy of the first point unless the polygon is already closed.
///
/// Fewer than three points cannot form a polygon and are returned as-is.
pub fn close_polygon(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 || is_closed(points) {
        return points.to_vec();
    }
    let mut closed = points.to_vec();
    closed.push(points[0]);
    closed
}

/// Signed area by the shoelace formula over consecutive pairs.
///
/// Positive for counter-clockwise. The sum only walks `points[i] -> points[i + 1]`,
/// so pass a closed polygon to include the closing edge.
pub fn signed_area(points: &[Point]) -> f64 {
    let sum: f64 = points
        .windows(2)
        .map(|w| w[0].x * w[1].y - w[1].x * w[0].y)
        .sum();
    sum * 0.5
}

/// Orientation of the polygon, measured on its closed form.
///
/// Zero-area polygons report clockwise.
pub fn winding(points: &[Point]) -> Winding {
    if signed_area(&close_polygon(points)) > 0.0 {
        Winding::CounterClockwise
    } else {
        Winding::Clockwise
    }
}

/// Closes the polygon and reverses it if needed so it winds clockwise.
pub fn ensure_clockwise(points: &[Point]) -> Vec<Point> {
    let mut closed = close_polygon(points);
    if signed_area(&closed) > 0.0 {
        closed.reverse();
    }
    closed
}

/// Ray-casting parity test. The polygon is treated as implicitly closed.
pub fn point_in_polygon(p: Point, polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n == 0 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[j];
        let crosses = (a.y > p.y) != (b.y > p.y)
            && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y + 1e-12) + a.x;
        if crosses {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Highest and lowest crossing of the vertical line `x` with the polygon edges.
///
/// Edges whose inclusive x-span contains `x` are interpolated; a vertical edge
/// lying exactly on the line contributes both endpoints. Returns `None` when
/// no edge reaches the line.
pub fn y_extrema_at_x(polygon: &[Point], x: f64) -> Option<YExtrema> {
    let mut extrema: Option<YExtrema> = None;
    let mut record = |y: f64| {
        let e = extrema.get_or_insert(YExtrema { top: y, bottom: y });
        e.top = e.top.max(y);
        e.bottom = e.bottom.min(y);
    };

    for edge in polygon.windows(2) {
        let (a, b) = (edge[0], edge[1]);
        if x < a.x.min(b.x) || x > a.x.max(b.x) {
            continue;
        }

        if a.x == b.x {
            if a.x == x {
                record(a.y);
                record(b.y);
            }
            continue;
        }

        let t = (x - a.x) / (b.x - a.x);
        if !(0.0..=1.0).contains(&t) {
            continue;
        }
        record(a.y + t * (b.y - a.y));
    }

    extrema
}
