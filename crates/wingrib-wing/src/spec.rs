//! Type definitions for the wing spec
//!
//! `WingSpec` is the canonical, versioned input for wing generation. The
//! editing surface replaces it wholesale on every change; generators only
//! read it. Field names serialize in camelCase to match the editor's
//! "copy spec" JSON.

use crate::error::{ParameterError, ParameterResult, WingResult};
use serde::{Deserialize, Serialize};
use wingrib_core::Units;

/// Spec schema version understood by this crate
pub const SUPPORTED_SPEC_VERSION: u32 = 1;

/// Fewest airfoil samples accepted per surface
pub const MIN_AIRFOIL_SAMPLES: u32 = 20;

/// Fewest ribs per half-span (root and tip)
pub const MIN_RIB_COUNT: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AirfoilKind {
    #[default]
    #[serde(rename = "naca4")]
    Naca4,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirfoilSpec {
    #[serde(rename = "type", default)]
    pub kind: AirfoilKind,
    /// NACA 4-digit code, e.g. "0012"
    pub code: String,
    /// Points per surface
    pub samples: u32,
}

impl Default for AirfoilSpec {
    fn default() -> Self {
        Self {
            kind: AirfoilKind::Naca4,
            code: "0012".to_string(),
            samples: 80,
        }
    }
}

/// Which rib edge a spar notch opens onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SparEdge {
    Top,
    Bottom,
    Both,
}

impl SparEdge {
    pub fn has_top(self) -> bool {
        matches!(self, SparEdge::Top | SparEdge::Both)
    }

    pub fn has_bottom(self) -> bool {
        matches!(self, SparEdge::Bottom | SparEdge::Both)
    }
}

impl std::fmt::Display for SparEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Bottom => write!(f, "bottom"),
            Self::Both => write!(f, "both"),
        }
    }
}

/// A spar is stock material (a square stick), not a cut part. It defines
/// open notches that touch the rib perimeter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SparSpec {
    /// Position along the chord, 0 = leading edge, 1 = trailing edge
    pub x_frac: f64,
    /// Side of the square stick
    pub stock_size: f64,
    pub edge: SparEdge,
}

/// Lightening hole generator parameters. All fractions are of the local chord.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LighteningHoles {
    pub enabled: bool,
    pub count: u32,
    /// Hole circumradius, clamped to 0.01..0.25
    pub radius_frac: f64,
    /// First hole position, clamped to 0.05..0.95
    pub x_start_frac: f64,
    /// Last hole position, clamped to 0.05..0.95
    pub x_end_frac: f64,
    /// Vertical offset of the hole row
    pub y_offset_frac: f64,
    /// Corner rounding as a fraction of the hole size, clamped to 0..0.5
    pub corner_frac: f64,
}

impl Default for LighteningHoles {
    fn default() -> Self {
        Self {
            enabled: false,
            count: 3,
            radius_frac: 0.06,
            x_start_frac: 0.35,
            x_end_frac: 0.75,
            y_offset_frac: 0.0,
            corner_frac: 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RibFeatures {
    pub lightening_holes: LighteningHoles,
}

/// Canonical wing description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WingSpec {
    pub version: u32,
    pub units: Units,

    /// Total wingspan
    pub span: f64,
    pub root_chord: f64,
    pub tip_chord: f64,
    /// Leading edge sweep distance at the tip
    #[serde(rename = "sweepLE")]
    pub sweep_le: f64,
    /// Preview only; ribs are cut flat regardless
    pub dihedral_deg: f64,

    /// Ribs per half-span, root and tip included
    pub rib_count_per_half: u32,
    pub airfoil: AirfoilSpec,

    pub material_thickness: f64,
    pub kerf: f64,
    /// Added to spar stock size to make the slot width
    pub slot_clearance: f64,

    #[serde(default)]
    pub spars: Vec<SparSpec>,
    #[serde(default)]
    pub rib_features: RibFeatures,
}

impl Default for WingSpec {
    fn default() -> Self {
        Self {
            version: SUPPORTED_SPEC_VERSION,
            units: Units::Millimeters,
            span: 1200.0,
            root_chord: 220.0,
            tip_chord: 140.0,
            sweep_le: 0.0,
            dihedral_deg: 3.0,
            rib_count_per_half: 9,
            airfoil: AirfoilSpec::default(),
            material_thickness: 3.0,
            kerf: 0.15,
            slot_clearance: 0.25,
            spars: vec![
                // 1/8" stock
                SparSpec {
                    x_frac: 0.25,
                    stock_size: 3.175,
                    edge: SparEdge::Both,
                },
                SparSpec {
                    x_frac: 0.6,
                    stock_size: 3.175,
                    edge: SparEdge::Both,
                },
            ],
            rib_features: RibFeatures::default(),
        }
    }
}

impl WingSpec {
    pub fn half_span(&self) -> f64 {
        self.span / 2.0
    }

    /// Check every structural and range constraint, stopping at the first failure
    pub fn validate(&self) -> ParameterResult<()> {
        if self.version != SUPPORTED_SPEC_VERSION {
            return Err(ParameterError::UnsupportedVersion {
                found: self.version,
                expected: SUPPORTED_SPEC_VERSION,
            });
        }

        require_positive("span", self.span)?;
        require_positive("rootChord", self.root_chord)?;
        require_positive("tipChord", self.tip_chord)?;

        if self.rib_count_per_half < MIN_RIB_COUNT {
            return Err(ParameterError::TooFew {
                name: "ribCountPerHalf".to_string(),
                value: self.rib_count_per_half,
                min: MIN_RIB_COUNT,
            });
        }

        let code = &self.airfoil.code;
        if code.len() != 4 || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParameterError::InvalidValue {
                name: "airfoil.code".to_string(),
                reason: format!("must be a 4-digit string like \"0012\", got {:?}", code),
            });
        }

        if self.airfoil.samples < MIN_AIRFOIL_SAMPLES {
            return Err(ParameterError::TooFew {
                name: "airfoil.samples".to_string(),
                value: self.airfoil.samples,
                min: MIN_AIRFOIL_SAMPLES,
            });
        }

        require_non_negative("slotClearance", self.slot_clearance)?;
        require_non_negative("kerf", self.kerf)?;

        for (i, spar) in self.spars.iter().enumerate() {
            if spar.x_frac.is_nan() || !(0.0..=1.0).contains(&spar.x_frac) {
                return Err(ParameterError::OutOfRange {
                    name: format!("spars[{}].xFrac", i),
                    value: spar.x_frac,
                    min: 0.0,
                    max: 1.0,
                });
            }
            require_positive(&format!("spars[{}].stockSize", i), spar.stock_size)?;
        }

        Ok(())
    }

    /// Pretty JSON for "copy spec" style exchange
    pub fn to_json(&self) -> WingResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a spec from JSON. The result is not validated.
    pub fn from_json(json: &str) -> WingResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn require_positive(name: &str, value: f64) -> ParameterResult<()> {
    if value.is_nan() || value <= 0.0 {
        return Err(ParameterError::NotPositive {
            name: name.to_string(),
            value,
        });
    }
    Ok(())
}

fn require_non_negative(name: &str, value: f64) -> ParameterResult<()> {
    if value.is_nan() || value < 0.0 {
        return Err(ParameterError::Negative {
            name: name.to_string(),
            value,
        });
    }
    Ok(())
}
