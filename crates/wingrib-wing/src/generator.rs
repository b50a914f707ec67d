//! Rib generation
//!
//! Turns a validated [`WingSpec`] into one rib per station along a half-span.
//! Each rib carries its scaled airfoil outline plus open spar notches and
//! optional lightening holes.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use wingrib_core::{y_extrema_at_x, CutPrimitive, Point};

use crate::airfoil::naca4_polygon;
use crate::error::WingResult;
use crate::holes::lightening_holes;
use crate::planform::{chord_at, notch_widen_factor};
use crate::spec::{WingSpec, MIN_RIB_COUNT};

/// A single cut rib at one spanwise station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rib {
    pub id: String,
    /// Distance from the root along the half-span
    pub station_y: f64,
    pub chord: f64,
    /// Closed clockwise outline in rib-local coordinates
    pub outline: Vec<Point>,
    pub cutouts: Vec<CutPrimitive>,
}

/// Everything generated from one spec
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WingArtifact {
    pub spec: WingSpec,
    pub ribs: Vec<Rib>,
}

/// Rib generator bound to a validated spec
#[derive(Debug, Clone)]
pub struct WingGenerator {
    spec: WingSpec,
}

impl WingGenerator {
    /// Validates `spec` and binds a generator to it
    pub fn new(spec: WingSpec) -> WingResult<Self> {
        spec.validate()?;
        Ok(Self { spec })
    }

    pub fn spec(&self) -> &WingSpec {
        &self.spec
    }

    /// Number of rib stations per half-span
    pub fn rib_count(&self) -> usize {
        self.spec.rib_count_per_half.max(MIN_RIB_COUNT) as usize
    }

    /// Clearance kept between a lightening hole and the rib perimeter
    pub fn hole_margin(&self) -> f64 {
        self.spec
            .kerf
            .max(self.spec.material_thickness * 0.15)
            .max(0.5)
    }

    pub fn generate(&self) -> WingArtifact {
        let count = self.rib_count();
        info!(
            "Generating {} ribs for NACA {} ({} samples)",
            count, self.spec.airfoil.code, self.spec.airfoil.samples
        );

        let profile = naca4_polygon(&self.spec.airfoil.code, self.spec.airfoil.samples);
        let ribs: Vec<Rib> = (0..count)
            .map(|i| self.rib_at(i, count, &profile))
            .collect();

        info!(
            "Generated {} ribs with {} cutouts",
            ribs.len(),
            ribs.iter().map(|r| r.cutouts.len()).sum::<usize>()
        );

        WingArtifact {
            spec: self.spec.clone(),
            ribs,
        }
    }

    fn rib_at(&self, index: usize, count: usize, profile: &[Point]) -> Rib {
        let t = index as f64 / (count - 1) as f64;
        let chord = chord_at(&self.spec, t);
        let outline: Vec<Point> = profile.iter().map(|p| p.scaled(chord)).collect();

        let mut cutouts = self.spar_notches(&outline, chord, index);
        cutouts.extend(lightening_holes(
            &outline,
            chord,
            &self.spec.rib_features.lightening_holes,
            self.hole_margin(),
        ));

        debug!(
            "rib-{}: chord {:.2}, {} cutouts",
            index,
            chord,
            cutouts.len()
        );

        Rib {
            id: format!("rib-{}", index),
            station_y: t * self.spec.half_span(),
            chord,
            outline,
            cutouts,
        }
    }

    fn spar_notches(&self, outline: &[Point], chord: f64, rib_index: usize) -> Vec<CutPrimitive> {
        let mut notches = Vec::new();

        for (k, spar) in self.spec.spars.iter().enumerate() {
            let cx = spar.x_frac * chord;
            let widen = notch_widen_factor(&self.spec, spar.x_frac);
            let size = (spar.stock_size + self.spec.slot_clearance) * widen;

            let Some(extrema) = y_extrema_at_x(outline, cx) else {
                warn!(
                    "rib-{}: spar {} at x={:.3} misses the outline, notch skipped",
                    rib_index, k, cx
                );
                continue;
            };

            let x = cx - size / 2.0;
            if spar.edge.has_top() {
                notches.push(CutPrimitive::rect(
                    format!("notch-top-{}", k),
                    x,
                    extrema.top - size,
                    size,
                    size,
                ));
            }
            if spar.edge.has_bottom() {
                notches.push(CutPrimitive::rect(
                    format!("notch-bottom-{}", k),
                    x,
                    extrema.bottom,
                    size,
                    size,
                ));
            }
        }
        notches
    }
}

/// Validate `spec` and generate every rib. No partial result on failure.
pub fn generate_wing(spec: &WingSpec) -> WingResult<WingArtifact> {
    Ok(WingGenerator::new(spec.clone())?.generate())
}
