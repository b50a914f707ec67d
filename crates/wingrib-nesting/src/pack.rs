//! Shelf packer
//!
//! Parts are sorted largest first and laid left to right in rows. A row
//! that runs out of width starts a new one below it; a row that runs out of
//! height starts a new sheet. Each part is tried upright and turned a
//! quarter, preferring whichever fits.

use tracing::{debug, info, warn};
use wingrib_core::{close_polygon, Bounds, CutPrimitive, Point, RawPart};

use crate::layout::{LayoutResult, PlacedPart, Rotation, Sheet};
use crate::sheet::SheetSpec;

/// Quarter turn mapping a `w0`-wide footprint at the origin onto itself:
/// `(x, y) -> (y, w0 - x)`
pub fn rotate_quarter_turn(p: Point, w0: f64) -> Point {
    Point::new(p.y, w0 - p.x)
}

/// Inverse of [`rotate_quarter_turn`]
pub fn unrotate_quarter_turn(p: Point, w0: f64) -> Point {
    Point::new(w0 - p.y, p.x)
}

#[derive(Debug, Clone, Copy)]
struct ShelfCursor {
    x: f64,
    y: f64,
    row_height: f64,
    spacing: f64,
}

impl ShelfCursor {
    fn new(spacing: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            row_height: 0.0,
            spacing,
        }
    }

    /// Gap in front of the next part; none at the start of a row
    fn lead(&self) -> f64 {
        if self.x > 0.0 {
            self.spacing
        } else {
            0.0
        }
    }

    fn needs_new_row(&self, width: f64, usable_width: f64) -> bool {
        self.x > 0.0 && self.x + self.lead() + width > usable_width
    }

    fn needs_new_sheet(&self, height: f64, usable_height: f64) -> bool {
        self.y > 0.0 && self.y + height > usable_height
    }

    /// Reserves `width` x `height` and returns its origin inside the usable area
    fn place(&mut self, width: f64, height: f64) -> (f64, f64) {
        let position = (self.x + self.lead(), self.y);
        self.x = position.0 + width;
        self.row_height = self.row_height.max(height);
        position
    }

    fn next_row(&mut self) {
        self.y += self.row_height + self.spacing;
        self.x = 0.0;
        self.row_height = 0.0;
    }

    fn reset(&mut self) {
        *self = Self::new(self.spacing);
    }
}

struct Candidate<'a> {
    part: &'a RawPart,
    bounds: Bounds,
    rotation: Rotation,
    w: f64,
    h: f64,
}

fn choose_orientation<'a>(
    part: &'a RawPart,
    bounds: Bounds,
    sheet: &SheetSpec,
) -> Candidate<'a> {
    let (w0, h0) = (bounds.width(), bounds.height());
    let upright = Candidate {
        part,
        bounds,
        rotation: Rotation::Deg0,
        w: w0,
        h: h0,
    };
    let turned = Candidate {
        part,
        bounds,
        rotation: Rotation::Deg90,
        w: h0,
        h: w0,
    };

    match (sheet.fits(upright.w, upright.h), sheet.fits(turned.w, turned.h)) {
        (true, false) => upright,
        (false, true) => turned,
        _ if upright.w.max(upright.h) <= turned.w.max(turned.h) => upright,
        _ => turned,
    }
}

/// Packs `parts` onto as many `sheet`-sized sheets as needed.
///
/// Every part is placed exactly once. Parts that do not fit the usable area
/// in either orientation are still placed and a warning is added to their
/// sheet. Empty sheets are never emitted.
pub fn pack_parts(parts: &[RawPart], sheet: &SheetSpec) -> LayoutResult {
    let usable_w = sheet.usable_width();
    let usable_h = sheet.usable_height();

    let mut items: Vec<(&RawPart, Bounds)> = parts.iter().map(|p| (p, p.bounds())).collect();
    items.sort_by(|(_, a), (_, b)| {
        let da = a.width().max(a.height());
        let db = b.width().max(b.height());
        db.total_cmp(&da)
    });

    let mut sheets = Vec::new();
    let mut current = Sheet::default();
    let mut cursor = ShelfCursor::new(sheet.spacing);

    for (part, bounds) in items {
        let chosen = choose_orientation(part, bounds, sheet);

        if cursor.needs_new_row(chosen.w, usable_w) {
            cursor.next_row();
        }
        if cursor.needs_new_sheet(chosen.h, usable_h) {
            if !current.parts.is_empty() {
                let index = current.index;
                debug!("Sheet {} full with {} parts", index, current.parts.len());
                sheets.push(std::mem::take(&mut current));
                current.index = index + 1;
            }
            cursor.reset();
        }

        let (x, y) = cursor.place(chosen.w, chosen.h);
        let placed = place_part(
            &chosen,
            sheet.margin + x,
            sheet.margin + y,
            current.index,
        );

        if !sheet.fits(chosen.w, chosen.h) {
            let message = format!(
                "{} exceeds usable area ({}x{}) with part ({:.1}x{:.1})",
                placed.id, usable_w, usable_h, chosen.w, chosen.h
            );
            warn!("{}", message);
            current.warnings.push(message);
        }
        current.parts.push(placed);
    }

    if !current.parts.is_empty() {
        sheets.push(current);
    }

    info!("Packed {} parts onto {} sheets", parts.len(), sheets.len());
    LayoutResult { sheets }
}

fn place_part(c: &Candidate<'_>, x: f64, y: f64, sheet_index: usize) -> PlacedPart {
    let (dx, dy) = (-c.bounds.min_x, -c.bounds.min_y);
    let w0 = c.bounds.width();

    let mut outline: Vec<Point> = c
        .part
        .outline
        .iter()
        .map(|p| p.translated(dx, dy))
        .collect();
    let mut cutouts: Vec<CutPrimitive> = c
        .part
        .cutouts
        .iter()
        .map(|cut| cut.translated(dx, dy))
        .collect();

    if c.rotation == Rotation::Deg90 {
        outline = outline
            .into_iter()
            .map(|p| rotate_quarter_turn(p, w0))
            .collect();
        cutouts = cutouts
            .iter()
            .map(|cut| cut.map_points(|p| rotate_quarter_turn(p, w0)))
            .collect();
    }

    PlacedPart {
        id: c.part.id.clone(),
        sheet_index,
        x,
        y,
        width: c.w,
        height: c.h,
        outline: close_polygon(&outline),
        cutouts,
        label: c.part.label.clone(),
        rotation: c.rotation,
    }
}
