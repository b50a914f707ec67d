//! Minimal layered SVG writer
//!
//! Documents are assembled as strings. Every document carries the same three
//! groups so downstream laser software can map them to operations:
//! `GUIDES` (non-printing), `CUT` and `ENGRAVE`.

use std::fmt::Write as _;
use wingrib_core::{is_closed, Point};

/// Named layer of an output document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Guides,
    Cut,
    Engrave,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Guides, Layer::Cut, Layer::Engrave];

    pub fn id(self) -> &'static str {
        match self {
            Self::Guides => "GUIDES",
            Self::Cut => "CUT",
            Self::Engrave => "ENGRAVE",
        }
    }

    fn style(self) -> &'static str {
        match self {
            Self::Guides => r##"fill="none" stroke="#808080" stroke-width="0.3""##,
            Self::Cut => r##"fill="none" stroke="#000000" stroke-width="0.2""##,
            Self::Engrave => r##"fill="#808080" stroke="#808080" stroke-width="0.2""##,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Guides => 0,
            Self::Cut => 1,
            Self::Engrave => 2,
        }
    }
}

/// An SVG document under construction
#[derive(Debug, Clone, Default)]
pub struct SvgDocument {
    width: f64,
    height: f64,
    layers: [Vec<String>; 3],
}

impl SvgDocument {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            layers: Default::default(),
        }
    }

    pub fn push(&mut self, layer: Layer, element: String) {
        self.layers[layer.index()].push(element);
    }

    pub fn elements(&self, layer: Layer) -> &[String] {
        &self.layers[layer.index()]
    }

    pub fn render(&self) -> String {
        let w = fmt_num(self.width);
        let h = fmt_num(self.height);
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );
        for layer in Layer::ALL {
            let _ = writeln!(out, r#"  <g id="{}" {}>"#, layer.id(), layer.style());
            for element in self.elements(layer) {
                let _ = writeln!(out, "    {}", element);
            }
            out.push_str("  </g>\n");
        }
        out.push_str("</svg>\n");
        out
    }
}

/// Formats a coordinate with at most three decimals, trailing zeros trimmed
pub fn fmt_num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Straight-segment path through `points`, shifted by `(dx, dy)` and closed
pub fn path_d(points: &[Point], dx: f64, dy: f64) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { "M" } else { " L" };
        let _ = write!(d, "{} {} {}", cmd, fmt_num(p.x + dx), fmt_num(p.y + dy));
    }
    if !d.is_empty() {
        d.push_str(" Z");
    }
    d
}

/// Closed path with every corner replaced by a quadratic curve of `radius`.
///
/// The radius is limited to half of each adjacent edge so neighbouring
/// curves never overlap.
pub fn rounded_polygon_d(points: &[Point], radius: f64, dx: f64, dy: f64) -> String {
    let pts = if is_closed(points) {
        &points[..points.len() - 1]
    } else {
        points
    };
    let n = pts.len();
    if n < 3 || radius <= 0.0 {
        return path_d(pts, dx, dy);
    }

    let toward = |from: Point, to: Point, r: f64| {
        let len = from.distance_to(&to);
        if len <= 0.0 {
            return from;
        }
        let t = r.min(len / 2.0) / len;
        Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t)
    };

    let mut d = String::new();
    for i in 0..n {
        let prev = pts[(i + n - 1) % n];
        let v = pts[i];
        let next = pts[(i + 1) % n];
        let a = toward(v, prev, radius);
        let b = toward(v, next, radius);

        let cmd = if i == 0 { "M" } else { " L" };
        let _ = write!(
            d,
            "{} {} {} Q {} {} {} {}",
            cmd,
            fmt_num(a.x + dx),
            fmt_num(a.y + dy),
            fmt_num(v.x + dx),
            fmt_num(v.y + dy),
            fmt_num(b.x + dx),
            fmt_num(b.y + dy)
        );
    }
    d.push_str(" Z");
    d
}

pub fn path_element(d: &str) -> String {
    format!(r#"<path d="{}" />"#, d)
}

pub fn rect_element(x: f64, y: f64, w: f64, h: f64) -> String {
    format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" />"#,
        fmt_num(x),
        fmt_num(y),
        fmt_num(w),
        fmt_num(h)
    )
}

pub fn circle_element(cx: f64, cy: f64, r: f64) -> String {
    format!(
        r#"<circle cx="{}" cy="{}" r="{}" />"#,
        fmt_num(cx),
        fmt_num(cy),
        fmt_num(r)
    )
}

pub fn line_element(a: Point, b: Point) -> String {
    format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" />"#,
        fmt_num(a.x),
        fmt_num(a.y),
        fmt_num(b.x),
        fmt_num(b.y)
    )
}

/// Left-aligned text with its baseline at `(x, y)`
pub fn text_element(x: f64, y: f64, font_size: f64, text: &str) -> String {
    format!(
        r#"<text x="{}" y="{}" font-size="{}">{}</text>"#,
        fmt_num(x),
        fmt_num(y),
        fmt_num(font_size),
        escape_text(text)
    )
}

/// Text centred on `(x, y)` both ways
pub fn centered_text_element(x: f64, y: f64, font_size: f64, text: &str) -> String {
    format!(
        r#"<text x="{}" y="{}" font-size="{}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
        fmt_num(x),
        fmt_num(y),
        fmt_num(font_size),
        escape_text(text)
    )
}

pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
