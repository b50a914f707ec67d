//! Planform drawing: both wing halves seen from above

use serde::{Deserialize, Serialize};
use wingrib_core::units::format_length;
use wingrib_core::{Bounds, Point};
use wingrib_wing::planform::{leading_edge_at, spar_angle, spar_endpoints};
use wingrib_wing::WingArtifact;

use crate::svg::{fmt_num, line_element, path_d, path_element, text_element, Layer, SvgDocument};

const LABEL_FONT_SIZE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanSvgOptions {
    /// Clear border around the drawing
    pub margin: f64,
    pub show_rib_stations: bool,
    pub show_spar_lines: bool,
    pub show_labels: bool,
}

impl Default for PlanSvgOptions {
    fn default() -> Self {
        Self {
            margin: 10.0,
            show_rib_stations: true,
            show_spar_lines: true,
            show_labels: true,
        }
    }
}

/// Renders the mirrored planform with rib stations and spar lines as guides.
///
/// Chordwise runs along x, spanwise along y with the root on `y = 0`; the
/// whole drawing is shifted so every coordinate is at least `margin`.
pub fn render_plan_svg(artifact: &WingArtifact, options: &PlanSvgOptions) -> String {
    let spec = &artifact.spec;
    let half_span = spec.half_span();
    let m = options.margin;

    let half = [
        Point::new(0.0, 0.0),
        Point::new(spec.root_chord, 0.0),
        Point::new(spec.sweep_le + spec.tip_chord, half_span),
        Point::new(spec.sweep_le, half_span),
        Point::new(0.0, 0.0),
    ];
    let mirrored = half.map(|p| Point::new(p.x, -p.y));

    let bounds = Bounds::of_points(&half).union(&Bounds::of_points(&mirrored));
    let dx = m - bounds.min_x;
    let dy = m - bounds.min_y;
    let at = |x: f64, y: f64| Point::new(x + dx, y + dy);

    let mut doc = SvgDocument::new(bounds.width() + m * 2.0, bounds.height() + m * 2.0);
    doc.push(Layer::Guides, path_element(&path_d(&half, dx, dy)));
    doc.push(Layer::Guides, path_element(&path_d(&mirrored, dx, dy)));

    if options.show_rib_stations {
        for rib in &artifact.ribs {
            let le = leading_edge_at(spec, rib.station_y / half_span);
            let te = le + rib.chord;
            for y in [rib.station_y, -rib.station_y] {
                doc.push(Layer::Guides, line_element(at(le, y), at(te, y)));
            }
        }
    }

    if options.show_spar_lines {
        for (i, spar) in spec.spars.iter().enumerate() {
            let (x_root, x_tip) = spar_endpoints(spec, spar.x_frac);
            for y in [half_span, -half_span] {
                doc.push(Layer::Guides, line_element(at(x_root, 0.0), at(x_tip, y)));
            }

            if options.show_labels {
                let label = format!(
                    "spar {}: x={} {} {} {}°",
                    i + 1,
                    fmt_num(spar.x_frac),
                    format_length(spar.stock_size, spec.units),
                    spar.edge,
                    fmt_num(spar_angle(spec, spar.x_frac).to_degrees()),
                );
                let anchor = at(x_root + 2.0, LABEL_FONT_SIZE + 2.0);
                doc.push(
                    Layer::Engrave,
                    text_element(anchor.x, anchor.y, LABEL_FONT_SIZE, &label),
                );
            }
        }
    }

    doc.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wingrib_wing::{generate_wing, SparEdge, SparSpec, WingSpec};

    fn artifact() -> WingArtifact {
        let spec = WingSpec {
            span: 1000.0,
            root_chord: 200.0,
            tip_chord: 100.0,
            sweep_le: 50.0,
            rib_count_per_half: 3,
            spars: vec![SparSpec {
                x_frac: 0.5,
                stock_size: 3.0,
                edge: SparEdge::Top,
            }],
            ..WingSpec::default()
        };
        generate_wing(&spec).unwrap()
    }

    #[test]
    fn test_document_size_from_bounds() {
        let svg = render_plan_svg(&artifact(), &PlanSvgOptions::default());
        // x: 0..200, y: -500..500
        assert!(svg.contains(r#"width="220" height="1020" viewBox="0 0 220 1020""#));
    }

    #[test]
    fn test_trapezoids_are_shifted() {
        let svg = render_plan_svg(&artifact(), &PlanSvgOptions::default());
        assert!(svg.contains(r#"<path d="M 10 510 L 210 510 L 160 1010 L 60 1010 L 10 510 Z" />"#));
        assert!(svg.contains(r#"<path d="M 10 510 L 210 510 L 160 10 L 60 10 L 10 510 Z" />"#));
    }

    #[test]
    fn test_rib_stations_follow_sweep() {
        let svg = render_plan_svg(&artifact(), &PlanSvgOptions::default());
        // middle rib: station 250, chord 150, leading edge 25
        assert!(svg.contains(r#"<line x1="35" y1="760" x2="185" y2="760" />"#));
        assert!(svg.contains(r#"<line x1="35" y1="260" x2="185" y2="260" />"#));
    }

    #[test]
    fn test_spar_lines_and_label() {
        let svg = render_plan_svg(&artifact(), &PlanSvgOptions::default());
        assert!(svg.contains(r#"<line x1="110" y1="510" x2="110" y2="1010" />"#));
        assert!(svg.contains(r#"<line x1="110" y1="510" x2="110" y2="10" />"#));
        assert!(svg.contains("spar 1: x=0.5 3.000mm top 0°"));
    }

    #[test]
    fn test_guides_can_be_hidden() {
        let options = PlanSvgOptions {
            show_rib_stations: false,
            show_spar_lines: false,
            ..PlanSvgOptions::default()
        };
        let svg = render_plan_svg(&artifact(), &options);
        assert!(!svg.contains("<line"));
        assert!(!svg.contains("<text"));
        assert_eq!(svg.matches("<path").count(), 2);
    }
}
