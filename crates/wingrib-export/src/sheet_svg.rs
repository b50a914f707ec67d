//! Cut-sheet renderer: one SVG document per packed sheet

use serde::{Deserialize, Serialize};
use tracing::debug;
use wingrib_core::{Bounds, CutPrimitive, Point};
use wingrib_nesting::{LayoutResult, PlacedPart, Sheet, SheetSpec};

use crate::kerf::{apply_kerf_to_cutouts, apply_kerf_to_outline};
use crate::svg::{
    centered_text_element, circle_element, path_d, path_element, rect_element, rounded_polygon_d,
    Layer, SvgDocument,
};

/// Smallest and largest label font size
pub const LABEL_FONT_RANGE: (f64, f64) = (3.0, 12.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetSvgOptions {
    /// Engrave each part's label at its centre
    pub show_labels: bool,
    /// Draw the sheet edge and the usable-area box as guides
    pub show_sheet_border: bool,
    /// Kerf to compensate for; 0 draws nominal geometry
    pub kerf: f64,
}

impl Default for SheetSvgOptions {
    fn default() -> Self {
        Self {
            show_labels: true,
            show_sheet_border: true,
            kerf: 0.0,
        }
    }
}

/// Label font size for a `w` by `h` part
pub fn label_font_size(w: f64, h: f64) -> f64 {
    let (lo, hi) = LABEL_FONT_RANGE;
    (0.25 * w.min(h)).max(lo).min(hi)
}

pub fn render_sheet_svgs(
    layout: &LayoutResult,
    sheet: &SheetSpec,
    options: &SheetSvgOptions,
) -> Vec<String> {
    layout
        .sheets
        .iter()
        .map(|s| render_sheet_svg(s, sheet, options))
        .collect()
}

/// Renders a single packed sheet.
///
/// Bounds come from the cut geometry after kerf is applied. When that
/// geometry reaches past the sheet origin (a zero margin with kerf), the whole
/// drawing shifts so no coordinate is negative. The document is at least the
/// sheet size and grows to fit parts that overflow it, so nothing is clipped.
pub fn render_sheet_svg(sheet: &Sheet, spec: &SheetSpec, options: &SheetSvgOptions) -> String {
    let cut_parts: Vec<CutPart> = sheet
        .parts
        .iter()
        .map(|part| CutPart::new(part, options.kerf))
        .collect();

    let bounds = cut_parts
        .iter()
        .fold(Bounds::default(), |b, p| b.union(&p.sheet_bounds()));
    let shift_x = (-bounds.min_x).max(0.0);
    let shift_y = (-bounds.min_y).max(0.0);

    let mut doc = SvgDocument::new(
        spec.width.max(bounds.max_x + spec.margin) + shift_x,
        spec.height.max(bounds.max_y + spec.margin) + shift_y,
    );

    if options.show_sheet_border {
        doc.push(
            Layer::Guides,
            rect_element(shift_x, shift_y, spec.width, spec.height),
        );
        doc.push(
            Layer::Guides,
            rect_element(
                spec.margin + shift_x,
                spec.margin + shift_y,
                spec.usable_width(),
                spec.usable_height(),
            ),
        );
    }

    for cut in &cut_parts {
        cut.push(&mut doc, shift_x, shift_y, options.show_labels);
    }

    debug!(
        "Rendered sheet {} with {} parts",
        sheet.index,
        sheet.parts.len()
    );
    doc.render()
}

/// A placed part with kerf applied, still in part-local coordinates
struct CutPart<'a> {
    part: &'a PlacedPart,
    outline: Vec<Point>,
    cutouts: Vec<CutPrimitive>,
}

impl<'a> CutPart<'a> {
    fn new(part: &'a PlacedPart, kerf: f64) -> Self {
        Self {
            part,
            outline: apply_kerf_to_outline(&part.outline, kerf),
            cutouts: apply_kerf_to_cutouts(&part.cutouts, kerf),
        }
    }

    /// Footprint on the sheet, covering both the placement box and the
    /// kerf-grown outline
    fn sheet_bounds(&self) -> Bounds {
        let p = self.part;
        let outline = Bounds::of_points(&self.outline);
        Bounds::new(
            p.x + outline.min_x,
            p.y + outline.min_y,
            p.x + outline.max_x,
            p.y + outline.max_y,
        )
        .union(&Bounds::new(p.x, p.y, p.x + p.width, p.y + p.height))
    }

    fn push(&self, doc: &mut SvgDocument, shift_x: f64, shift_y: f64, show_labels: bool) {
        let p = self.part;
        let (dx, dy) = (p.x + shift_x, p.y + shift_y);

        doc.push(Layer::Cut, path_element(&path_d(&self.outline, dx, dy)));
        for cut in &self.cutouts {
            doc.push(Layer::Cut, cutout_element(cut, dx, dy));
        }

        if show_labels {
            let label = if p.label.is_empty() { &p.id } else { &p.label };
            doc.push(
                Layer::Engrave,
                centered_text_element(
                    dx + p.width / 2.0,
                    dy + p.height / 2.0,
                    label_font_size(p.width, p.height),
                    label,
                ),
            );
        }
    }
}

/// SVG element for a cutout shifted by `(dx, dy)`
pub fn cutout_element(cut: &CutPrimitive, dx: f64, dy: f64) -> String {
    match cut {
        CutPrimitive::Rect { x, y, w, h, .. } => rect_element(x + dx, y + dy, *w, *h),
        CutPrimitive::Circle { cx, cy, r, .. } => circle_element(cx + dx, cy + dy, *r),
        CutPrimitive::Polygon {
            points,
            corner_radius,
            ..
        } => path_element(&rounded_polygon_d(
            points,
            corner_radius.unwrap_or(0.0),
            dx,
            dy,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wingrib_core::{close_polygon, RawPart};
    use wingrib_nesting::pack_parts;

    fn square_part(id: &str, size: f64) -> RawPart {
        let outline = close_polygon(&[
            Point::new(0.0, 0.0),
            Point::new(size, 0.0),
            Point::new(size, size),
            Point::new(0.0, size),
        ]);
        RawPart::new(
            id,
            outline,
            vec![CutPrimitive::rect(format!("{}-hole", id), 2.0, 2.0, 4.0, 4.0)],
            id,
        )
    }

    #[test]
    fn test_font_size_clamped() {
        assert_eq!(label_font_size(4.0, 100.0), 3.0);
        assert_eq!(label_font_size(200.0, 30.0), 7.5);
        assert_eq!(label_font_size(200.0, 100.0), 12.0);
    }

    #[test]
    fn test_one_document_per_sheet() {
        let sheet = SheetSpec::default();
        let parts: Vec<RawPart> = (0..6).map(|i| square_part(&format!("p{}", i), 250.0)).collect();
        let layout = pack_parts(&parts, &sheet);
        let svgs = render_sheet_svgs(&layout, &sheet, &SheetSvgOptions::default());
        assert_eq!(svgs.len(), layout.sheets.len());
        assert!(svgs.len() > 1);
    }

    #[test]
    fn test_part_is_translated_and_labelled() {
        let sheet = SheetSpec::default();
        let layout = pack_parts(&[square_part("a", 20.0)], &sheet);
        let svg = &render_sheet_svgs(&layout, &sheet, &SheetSvgOptions::default())[0];

        assert!(svg.contains(r#"<path d="M 10 10 L 30 10 L 30 30 L 10 30 L 10 10 Z" />"#));
        assert!(svg.contains(r#"<rect x="12" y="12" width="4" height="4" />"#));
        assert!(svg.contains(r#"<rect x="0" y="0" width="600" height="300" />"#));
        assert!(svg.contains(r#"<rect x="10" y="10" width="580" height="280" />"#));
        assert!(svg.contains(r#"x="20" y="20" font-size="5""#));
        assert!(svg.contains(">a</text>"));
    }

    #[test]
    fn test_options_disable_guides_and_labels() {
        let sheet = SheetSpec::default();
        let layout = pack_parts(&[square_part("a", 20.0)], &sheet);
        let options = SheetSvgOptions {
            show_labels: false,
            show_sheet_border: false,
            kerf: 0.0,
        };
        let svg = &render_sheet_svgs(&layout, &sheet, &options)[0];
        assert!(!svg.contains("<text"));
        assert!(!svg.contains("width=\"580\""));
    }

    #[test]
    fn test_kerf_moves_cut_paths() {
        let sheet = SheetSpec::default();
        let layout = pack_parts(&[square_part("a", 20.0)], &sheet);
        let options = SheetSvgOptions {
            kerf: 0.2,
            ..SheetSvgOptions::default()
        };
        let svg = &render_sheet_svgs(&layout, &sheet, &options)[0];
        assert!(svg.contains(r#"<rect x="12.1" y="12.1" width="3.8" height="3.8" />"#));
        assert!(svg.contains("M 9.9 9.9"));
    }

    #[test]
    fn test_zero_margin_kerf_stays_on_positive_coordinates() {
        let sheet = SheetSpec::new(600.0, 300.0, 0.0, 6.0);
        let layout = pack_parts(&[square_part("a", 20.0)], &sheet);
        let options = SheetSvgOptions {
            kerf: 0.4,
            ..SheetSvgOptions::default()
        };
        let svg = &render_sheet_svgs(&layout, &sheet, &options)[0];

        assert!(svg.contains(r#"<path d="M 0 0 L 20.4 0 L 20.4 20.4 L 0 20.4 L 0 0 Z" />"#));
        assert!(svg.contains(r#"<rect x="0.2" y="0.2" width="600" height="300" />"#));
        assert!(svg.contains(r#"width="600.2" height="300.2""#));
        assert!(!svg.contains(" -") && !svg.contains("\"-"));
    }

    #[test]
    fn test_document_grows_for_oversize_parts() {
        let sheet = SheetSpec::default();
        let layout = pack_parts(&[square_part("big", 700.0)], &sheet);
        let svg = &render_sheet_svgs(&layout, &sheet, &SheetSvgOptions::default())[0];
        assert!(svg.contains(r#"width="720" height="720" viewBox="0 0 720 720""#));
    }

    #[test]
    fn test_rounded_polygon_cutout() {
        let cut = CutPrimitive::polygon(
            "lh",
            vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(0.0, 10.0)],
            Some(1.0),
        );
        let el = cutout_element(&cut, 5.0, 5.0);
        assert!(el.starts_with("<path d=\"M 5 6 Q 5 5 6 5"));
    }
}
