//! Packing output types

use serde::{Deserialize, Serialize};
use wingrib_core::{Bounds, CutPrimitive, Point};

/// Orientation a part was placed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    #[serde(rename = "0")]
    Deg0,
    #[serde(rename = "90")]
    Deg90,
}

impl Rotation {
    pub fn degrees(self) -> u32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
        }
    }
}

/// A part positioned on a sheet.
///
/// `outline` and `cutouts` are in part-local coordinates: normalized so the
/// footprint starts at the origin and already rotated. Add `(x, y)` to get
/// sheet coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedPart {
    pub id: String,
    pub sheet_index: usize,
    /// Placement origin on the sheet
    pub x: f64,
    pub y: f64,
    /// Footprint after rotation
    pub width: f64,
    pub height: f64,
    pub outline: Vec<Point>,
    pub cutouts: Vec<CutPrimitive>,
    pub label: String,
    pub rotation: Rotation,
}

impl PlacedPart {
    /// Footprint in sheet coordinates
    pub fn sheet_bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Outline translated onto the sheet
    pub fn sheet_outline(&self) -> Vec<Point> {
        self.outline
            .iter()
            .map(|p| p.translated(self.x, self.y))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Sheet {
    pub index: usize,
    pub parts: Vec<PlacedPart>,
    /// Overflow notes for parts larger than the usable area
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutResult {
    pub sheets: Vec<Sheet>,
}

impl LayoutResult {
    pub fn part_count(&self) -> usize {
        self.sheets.iter().map(|s| s.parts.len()).sum()
    }

    pub fn parts(&self) -> impl Iterator<Item = &PlacedPart> {
        self.sheets.iter().flat_map(|s| s.parts.iter())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.sheets
            .iter()
            .flat_map(|s| s.warnings.iter().map(String::as_str))
    }
}
