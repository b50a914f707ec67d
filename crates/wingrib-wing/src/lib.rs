//! # Wingrib Wing
//!
//! Parametric wing description and rib generation.
//!
//! A [`WingSpec`] describes a straight-tapered, optionally swept wing: span,
//! root and tip chord, a NACA 4-digit airfoil, the spars running through it
//! and the lightening holes to cut. [`generate_wing`] turns it into one
//! [`Rib`] per station along a half-span, and [`to_parts`] flattens the
//! result into [`wingrib_core::RawPart`]s for nesting and export.
//!
//! - [`airfoil`]: NACA 4-digit surface generation
//! - [`planform`]: chord, sweep and spar-angle math
//! - [`holes`]: triangle lightening hole fitting
//! - [`generator`]: the rib generator
//! - [`parts`]: part extraction, including optional spar strips

pub mod airfoil;
pub mod error;
pub mod generator;
pub mod holes;
pub mod parts;
pub mod planform;
pub mod spec;

pub use airfoil::{naca4_polygon, Naca4};
pub use error::{ParameterError, ParameterResult, WingError, WingResult};
pub use generator::{generate_wing, Rib, WingArtifact, WingGenerator};
pub use parts::{spar_parts, to_parts, to_parts_with, PartOptions};
pub use planform::notch_widen_factor;
pub use spec::{
    AirfoilKind, AirfoilSpec, LighteningHoles, RibFeatures, SparEdge, SparSpec, WingSpec,
    SUPPORTED_SPEC_VERSION,
};
