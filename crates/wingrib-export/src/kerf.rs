//! Kerf compensation
//!
//! The beam removes `kerf` worth of material centred on the cut path. Outlines
//! are pushed out by half of it and holes pulled in by half of it so the
//! finished part lands on nominal size.

use tracing::debug;
use wingrib_core::{close_polygon, is_closed, offset_polygon, signed_area, CutPrimitive, Point};

/// Outline grown by `kerf / 2`. Zero or negative kerf returns the input.
pub fn apply_kerf_to_outline(outline: &[Point], kerf: f64) -> Vec<Point> {
    if kerf <= 0.0 {
        return outline.to_vec();
    }
    offset_polygon(outline, kerf / 2.0)
}

/// Cutouts shrunk by `kerf / 2`; cutouts that collapse are dropped
pub fn apply_kerf_to_cutouts(cutouts: &[CutPrimitive], kerf: f64) -> Vec<CutPrimitive> {
    if kerf <= 0.0 {
        return cutouts.to_vec();
    }
    let delta = kerf / 2.0;

    cutouts
        .iter()
        .filter_map(|cut| {
            let shrunk = shrink_cutout(cut, delta);
            if shrunk.as_ref().map_or(true, CutPrimitive::is_degenerate) {
                debug!("Cutout {} collapsed under kerf {}, dropped", cut.id(), kerf);
                return None;
            }
            shrunk
        })
        .collect()
}

fn shrink_cutout(cut: &CutPrimitive, delta: f64) -> Option<CutPrimitive> {
    match cut {
        CutPrimitive::Rect { id, x, y, w, h } => Some(CutPrimitive::rect(
            id.clone(),
            x + delta,
            y + delta,
            (w - 2.0 * delta).max(0.0),
            (h - 2.0 * delta).max(0.0),
        )),
        CutPrimitive::Circle { id, cx, cy, r } => {
            Some(CutPrimitive::circle(id.clone(), *cx, *cy, (r - delta).max(0.0)))
        }
        CutPrimitive::Polygon {
            id,
            points,
            corner_radius,
        } => {
            let was_closed = is_closed(points);
            let closed = close_polygon(points);
            if signed_area(&closed) == 0.0 {
                return None;
            }
            let mut shrunk = offset_polygon(&closed, -delta);
            if turned_inside_out(&closed, &shrunk) {
                return None;
            }

            if !was_closed && is_closed(&shrunk) {
                shrunk.pop();
            }
            let radius = corner_radius.map(|r| (r - delta).max(0.0)).filter(|r| *r > 0.0);
            Some(CutPrimitive::polygon(id.clone(), shrunk, radius))
        }
    }
}

/// An inset past the inradius flips every offset edge against its source edge
fn turned_inside_out(original: &[Point], offset: &[Point]) -> bool {
    original
        .windows(2)
        .zip(offset.windows(2))
        .any(|(a, b)| {
            let (ax, ay) = (a[1].x - a[0].x, a[1].y - a[0].y);
            let (bx, by) = (b[1].x - b[0].x, b[1].y - b[0].y);
            ax * bx + ay * by <= 0.0
        })
}
