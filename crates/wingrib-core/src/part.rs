//! Cut primitives and generic fabrication parts.
//!
//! A [`RawPart`] is what the layout engine sees: an outline, the holes cut
//! into it and a label. It carries no knowledge of wings, ribs or spars.

use crate::geom::{Bounds, Point};
use serde::{Deserialize, Serialize};

/// A hole or slot cut into a part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CutPrimitive {
    /// Axis-aligned rectangle anchored at its minimum corner
    Rect {
        id: String,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
    },
    /// Circle
    Circle { id: String, cx: f64, cy: f64, r: f64 },
    /// Open polygon (implicitly closed) with optional rounded corners
    #[serde(rename = "poly")]
    Polygon {
        id: String,
        points: Vec<Point>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        corner_radius: Option<f64>,
    },
}

impl CutPrimitive {
    pub fn rect(id: impl Into<String>, x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::Rect {
            id: id.into(),
            x,
            y,
            w,
            h,
        }
    }

    pub fn circle(id: impl Into<String>, cx: f64, cy: f64, r: f64) -> Self {
        Self::Circle {
            id: id.into(),
            cx,
            cy,
            r,
        }
    }

    pub fn polygon(id: impl Into<String>, points: Vec<Point>, corner_radius: Option<f64>) -> Self {
        Self::Polygon {
            id: id.into(),
            points,
            corner_radius,
        }
    }

    /// Stable identifier used by layout and export
    pub fn id(&self) -> &str {
        match self {
            Self::Rect { id, .. } | Self::Circle { id, .. } | Self::Polygon { id, .. } => id,
        }
    }

    pub fn bounds(&self) -> Bounds {
        match self {
            Self::Rect { x, y, w, h, .. } => Bounds::new(*x, *y, x + w, y + h),
            Self::Circle { cx, cy, r, .. } => Bounds::new(cx - r, cy - r, cx + r, cy + r),
            Self::Polygon { points, .. } => Bounds::of_points(points),
        }
    }

    /// `true` when the primitive encloses no area and should not be cut
    pub fn is_degenerate(&self) -> bool {
        match self {
            Self::Rect { w, h, .. } => *w <= 0.0 || *h <= 0.0,
            Self::Circle { r, .. } => *r <= 0.0,
            Self::Polygon { points, .. } => points.len() < 3,
        }
    }

    /// Copy shifted by `(dx, dy)`
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        match self {
            Self::Rect { id, x, y, w, h } => Self::rect(id.clone(), x + dx, y + dy, *w, *h),
            Self::Circle { id, cx, cy, r } => Self::circle(id.clone(), cx + dx, cy + dy, *r),
            Self::Polygon {
                id,
                points,
                corner_radius,
            } => Self::polygon(
                id.clone(),
                points.iter().map(|p| p.translated(dx, dy)).collect(),
                *corner_radius,
            ),
        }
    }

    /// Copy with every point mapped through `f`.
    ///
    /// Rectangles map their four corners and are re-bounded axis-aligned;
    /// circles map their centre only.
    pub fn map_points(&self, f: impl Fn(Point) -> Point) -> Self {
        match self {
            Self::Rect { id, x, y, w, h } => {
                let corners = [
                    Point::new(*x, *y),
                    Point::new(x + w, *y),
                    Point::new(x + w, y + h),
                    Point::new(*x, y + h),
                ]
                .map(&f);
                let b = Bounds::of_points(&corners);
                Self::rect(id.clone(), b.min_x, b.min_y, b.width(), b.height())
            }
            Self::Circle { id, cx, cy, r } => {
                let c = f(Point::new(*cx, *cy));
                Self::circle(id.clone(), c.x, c.y, *r)
            }
            Self::Polygon {
                id,
                points,
                corner_radius,
            } => Self::polygon(
                id.clone(),
                points.iter().map(|p| f(*p)).collect(),
                *corner_radius,
            ),
        }
    }
}

/// Generic fabrication unit handed to the layout engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPart {
    pub id: String,
    /// Closed outline
    pub outline: Vec<Point>,
    pub cutouts: Vec<CutPrimitive>,
    pub label: String,
}

impl RawPart {
    pub fn new(
        id: impl Into<String>,
        outline: Vec<Point>,
        cutouts: Vec<CutPrimitive>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            outline,
            cutouts,
            label: label.into(),
        }
    }

    /// Bounding box of the outline
    pub fn bounds(&self) -> Bounds {
        Bounds::of_points(&self.outline)
    }
}
