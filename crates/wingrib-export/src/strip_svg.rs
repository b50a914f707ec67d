//! Single-row preview of parts, no sheet limits

use serde::{Deserialize, Serialize};
use wingrib_core::RawPart;

use crate::sheet_svg::cutout_element;
use crate::svg::{path_d, path_element, text_element, Layer, SvgDocument};

const LABEL_FONT_SIZE: f64 = 10.0;
const LABEL_GAP: f64 = 12.0;
const MIN_DOCUMENT_SIZE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripSvgOptions {
    pub margin: f64,
    /// Gap between neighbouring parts
    pub spacing: f64,
    pub show_labels: bool,
}

impl Default for StripSvgOptions {
    fn default() -> Self {
        Self {
            margin: 10.0,
            spacing: 10.0,
            show_labels: true,
        }
    }
}

/// Lays `parts` left to right in one row and renders them.
///
/// Parts keep their orientation; each one is shifted so its bounding box
/// starts at the cursor. Labels sit under their part.
pub fn render_part_strip_svg(parts: &[RawPart], options: &StripSvgOptions) -> String {
    let m = options.margin;
    let mut cursor_x = m;
    let mut bottom = m;
    let mut elements = Vec::with_capacity(parts.len());

    for part in parts {
        let b = part.bounds();
        let dx = cursor_x - b.min_x;
        let dy = m - b.min_y;

        let mut cut = vec![path_element(&path_d(&part.outline, dx, dy))];
        cut.extend(part.cutouts.iter().map(|c| cutout_element(c, dx, dy)));

        let label = options.show_labels.then(|| {
            text_element(
                cursor_x,
                m + b.height() + LABEL_GAP,
                LABEL_FONT_SIZE,
                &part.label,
            )
        });
        elements.push((cut, label));

        cursor_x += b.width() + options.spacing;
        bottom = bottom.max(m + b.height());
    }

    let right = if parts.is_empty() {
        m
    } else {
        cursor_x - options.spacing
    };
    let label_room = if options.show_labels { LABEL_GAP * 2.0 } else { 0.0 };
    let mut doc = SvgDocument::new(
        (right + m).max(MIN_DOCUMENT_SIZE),
        (bottom + m + label_room).max(MIN_DOCUMENT_SIZE),
    );

    for (cut, label) in elements {
        for element in cut {
            doc.push(Layer::Cut, element);
        }
        if let Some(label) = label {
            doc.push(Layer::Engrave, label);
        }
    }
    doc.render()
}
