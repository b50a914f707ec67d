use serde::{Deserialize, Serialize};

/// Stock sheet dimensions and packing clearances, in model units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetSpec {
    pub width: f64,
    pub height: f64,
    /// Border kept clear on every side
    pub margin: f64,
    /// Gap between neighbouring parts and between rows
    pub spacing: f64,
}

impl Default for SheetSpec {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 300.0,
            margin: 10.0,
            spacing: 6.0,
        }
    }
}

impl SheetSpec {
    pub fn new(width: f64, height: f64, margin: f64, spacing: f64) -> Self {
        Self {
            width,
            height,
            margin,
            spacing,
        }
    }

    pub fn usable_width(&self) -> f64 {
        self.width - self.margin * 2.0
    }

    pub fn usable_height(&self) -> f64 {
        self.height - self.margin * 2.0
    }

    /// `true` when a `w` by `h` footprint fits inside the margins
    pub fn fits(&self, w: f64, h: f64) -> bool {
        w <= self.usable_width() && h <= self.usable_height()
    }
}
