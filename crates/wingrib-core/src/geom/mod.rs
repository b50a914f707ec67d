//! 2D geometry primitives and polygon utilities.
//!
//! Polygons are plain point slices. A polygon is *closed* when its first
//! point equals its last point exactly; most producers in wingrib hand out
//! closed polygons and the utilities here accept both forms unless noted.

mod offset;
mod polygon;

pub use offset::offset_polygon;
pub use polygon::{
    close_polygon, ensure_clockwise, is_closed, point_in_polygon, signed_area, winding,
    y_extrema_at_x, Winding, YExtrema,
};

use serde::{Deserialize, Serialize};

/// A 2D point in model units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Shift by `(dx, dy)`
    pub fn translated(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Uniform scale about the origin
    pub fn scaled(&self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Bounds of a point set. An empty set yields the zero box.
    pub fn of_points(points: &[Point]) -> Self {
        let mut bounds = Bounds::new(
            f64::INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
        );
        for p in points {
            bounds.include(*p);
        }
        if !bounds.min_x.is_finite() {
            return Bounds::default();
        }
        bounds
    }

    /// Grow to contain `p`
    pub fn include(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    /// Smallest box containing both
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn min(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }
}
