//! NACA 4-digit airfoil surface generation
//!
//! Produces a closed, clockwise polygon in normalized chord space
//! (x in 0..1, y in chord units).

use std::f64::consts::PI;
use wingrib_core::{ensure_clockwise, Point};

use crate::spec::MIN_AIRFOIL_SAMPLES;

/// Decoded NACA MPXX parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Naca4 {
    /// Max camber as a fraction of chord (M / 100)
    pub max_camber: f64,
    /// Location of max camber as a fraction of chord (P / 10)
    pub camber_position: f64,
    /// Max thickness as a fraction of chord (XX / 100)
    pub thickness: f64,
}

impl Naca4 {
    /// Decode a 4-digit code. Missing or unparsable digits fall back to
    /// zero camber and 12% thickness.
    pub fn from_code(code: &str) -> Self {
        let digit = |i: usize| {
            code.get(i..i + 1)
                .and_then(|d| d.parse::<u32>().ok())
                .unwrap_or(0)
        };
        let thickness = code
            .get(2..)
            .map(|rest| rest.get(..2).unwrap_or(rest))
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(12);

        Self {
            max_camber: digit(0) as f64 / 100.0,
            camber_position: digit(1) as f64 / 10.0,
            thickness: thickness as f64 / 100.0,
        }
    }

    pub fn is_symmetric(&self) -> bool {
        self.max_camber == 0.0 || self.camber_position == 0.0
    }

    /// Thickness half-width at `x`
    pub fn half_thickness(&self, x: f64) -> f64 {
        5.0 * self.thickness
            * (0.2969 * x.sqrt() - 0.126 * x - 0.3516 * x * x + 0.2843 * x * x * x
                - 0.1015 * x * x * x * x)
    }

    /// Mean camber line height at `x`
    pub fn camber(&self, x: f64) -> f64 {
        if self.is_symmetric() {
            return 0.0;
        }
        let (m, p) = (self.max_camber, self.camber_position);
        if x < p {
            (m / (p * p)) * (2.0 * p * x - x * x)
        } else {
            (m / ((1.0 - p) * (1.0 - p))) * ((1.0 - 2.0 * p) + 2.0 * p * x - x * x)
        }
    }

    /// Mean camber line slope at `x`
    pub fn camber_slope(&self, x: f64) -> f64 {
        if self.is_symmetric() {
            return 0.0;
        }
        let (m, p) = (self.max_camber, self.camber_position);
        if x < p {
            (2.0 * m / (p * p)) * (p - x)
        } else {
            (2.0 * m / ((1.0 - p) * (1.0 - p))) * (p - x)
        }
    }

    /// Upper and lower surface points at chord station `x`
    pub fn surface_points(&self, x: f64) -> (Point, Point) {
        let theta = self.camber_slope(x).atan();
        let yt = self.half_thickness(x);
        let yc = self.camber(x);
        let (sin, cos) = theta.sin_cos();

        let upper = Point::new(x - yt * sin, yc + yt * cos);
        let lower = Point::new(x + yt * sin, yc - yt * cos);
        (upper, lower)
    }
}

/// Cosine-spaced stations in 0..1, clustered at both edges
pub fn cosine_spacing(n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![0.0; n];
    }
    (0..n)
        .map(|i| {
            let u = i as f64 / (n - 1) as f64;
            0.5 * (1.0 - (PI * u).cos())
        })
        .collect()
}

/// Closed clockwise polygon for a NACA 4-digit airfoil in chord space.
///
/// The outline runs along the upper surface from leading to trailing edge and
/// returns along the lower surface. `samples` below the minimum are raised.
pub fn naca4_polygon(code: &str, samples: u32) -> Vec<Point> {
    let foil = Naca4::from_code(code);
    let n = samples.max(MIN_AIRFOIL_SAMPLES) as usize;

    let mut upper = Vec::with_capacity(n);
    let mut lower = Vec::with_capacity(n);
    for x in cosine_spacing(n) {
        let (u, l) = foil.surface_points(x);
        upper.push(u);
        lower.push(l);
    }

    upper.extend(lower.into_iter().rev());
    ensure_clockwise(&upper)
}
