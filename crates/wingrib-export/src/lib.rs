//! # Wingrib Export
//!
//! Serializes packed sheets and wing planforms into layered SVG.
//!
//! Every document has three groups: `GUIDES` for non-printing alignment
//! lines, `CUT` for through-cuts and `ENGRAVE` for labels.
//!
//! - [`sheet_svg`]: one document per packed sheet, optional kerf compensation
//! - [`plan_svg`]: mirrored planform with rib stations and spar lines
//! - [`strip_svg`]: quick single-row preview of raw parts
//! - [`kerf`]: outline growth and cutout shrinkage by half the kerf
//! - [`svg`]: the document writer and number formatting

pub mod kerf;
pub mod plan_svg;
pub mod sheet_svg;
pub mod strip_svg;
pub mod svg;

pub use kerf::{apply_kerf_to_cutouts, apply_kerf_to_outline};
pub use plan_svg::{render_plan_svg, PlanSvgOptions};
pub use sheet_svg::{render_sheet_svg, render_sheet_svgs, SheetSvgOptions};
pub use strip_svg::{render_part_strip_svg, StripSvgOptions};
pub use svg::{fmt_num, Layer, SvgDocument};
