//! Lightening hole fitting
//!
//! Holes are equilateral triangles placed along the chord. Each one must sit
//! fully inside the rib outline with a clearance margin; a triangle that does
//! not fit is shrunk and retried a bounded number of times.

use std::f64::consts::{PI, TAU};
use tracing::debug;
use wingrib_core::{point_in_polygon, CutPrimitive, Point};

use crate::planform::{clamp, lerp};
use crate::spec::LighteningHoles;

/// Shrink attempts before a hole is given up
pub const MAX_FIT_ATTEMPTS: usize = 8;

/// Circumradius multiplier applied after a failed attempt
pub const SHRINK_FACTOR: f64 = 0.85;

/// Smallest circumradius tried, relative to the starting size
pub const MIN_SIZE_RATIO: f64 = 0.25;

/// Vertices of an equilateral triangle on a circle of radius `r`
pub fn equilateral_triangle(center: Point, r: f64, rotation: f64) -> [Point; 3] {
    [0.0, 1.0, 2.0].map(|i| {
        let a = rotation + TAU * i / 3.0;
        Point::new(center.x + a.cos() * r, center.y + a.sin() * r)
    })
}

pub fn centroid(points: &[Point]) -> Point {
    let n = points.len().max(1) as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / n, sy / n)
}

/// Moves each vertex toward the centroid by `inset`, never more than 45% of
/// its distance. Returns `None` for fewer than three points or a vertex
/// sitting on the centroid.
pub fn inset_toward_centroid(points: &[Point], inset: f64) -> Option<Vec<Point>> {
    if points.len() < 3 {
        return None;
    }
    let c = centroid(points);

    points
        .iter()
        .map(|p| {
            let (vx, vy) = (c.x - p.x, c.y - p.y);
            let len = vx.hypot(vy);
            if len <= 1e-6 {
                return None;
            }
            let d = inset.min(len * 0.45);
            Some(Point::new(p.x + vx / len * d, p.y + vy / len * d))
        })
        .collect()
}

/// Fits a triangle hole centred at `center` inside `outline`.
///
/// The returned vertices are already inset by `margin`. `None` means the
/// centre lies outside the outline or no size down to the minimum fits.
pub fn fit_triangle_hole(
    outline: &[Point],
    center: Point,
    size: f64,
    rotation: f64,
    margin: f64,
) -> Option<Vec<Point>> {
    if !point_in_polygon(center, outline) {
        return None;
    }

    let mut r = size;
    for _ in 0..MAX_FIT_ATTEMPTS {
        let tri = equilateral_triangle(center, r, rotation);
        if let Some(inset) = inset_toward_centroid(&tri, margin) {
            if inset.iter().all(|p| point_in_polygon(*p, outline)) {
                return Some(inset);
            }
        }

        r *= SHRINK_FACTOR;
        if r < size * MIN_SIZE_RATIO {
            break;
        }
    }
    None
}

/// Lightening hole cutouts for one rib. Holes that cannot be fitted are
/// omitted; the remaining ones keep their `lh-tri-{k}` index.
pub fn lightening_holes(
    outline: &[Point],
    chord: f64,
    holes: &LighteningHoles,
    margin: f64,
) -> Vec<CutPrimitive> {
    if !holes.enabled || holes.count == 0 {
        return Vec::new();
    }

    let size = clamp(holes.radius_frac, 0.01, 0.25) * chord;
    let x0 = clamp(holes.x_start_frac, 0.05, 0.95) * chord;
    let x1 = clamp(holes.x_end_frac, 0.05, 0.95) * chord;
    let base_y = holes.y_offset_frac * chord;
    let stagger = size * 0.35;
    let corner = clamp(holes.corner_frac, 0.0, 0.5) * size;
    let corner_radius = (corner > 0.0).then(|| corner.min(size * 0.45));

    let mut cutouts = Vec::new();
    for k in 0..holes.count {
        let u = if holes.count == 1 {
            0.5
        } else {
            k as f64 / (holes.count - 1) as f64
        };
        let even = k % 2 == 0;
        let center = Point::new(
            lerp(x0, x1, u),
            base_y + if even { stagger } else { -stagger },
        );
        let rotation = if even { 0.0 } else { PI };

        match fit_triangle_hole(outline, center, size, rotation, margin) {
            Some(points) => cutouts.push(CutPrimitive::polygon(
                format!("lh-tri-{}", k),
                points,
                corner_radius,
            )),
            None => debug!("Lightening hole {} does not fit at x={:.2}, omitted", k, center.x),
        }
    }
    cutouts
}
