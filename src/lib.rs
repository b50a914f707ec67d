//! # Wingrib
//!
//! Parametric wing rib generator with sheet nesting and layered SVG export
//! for laser cutting.
//!
//! This crate ties the workspace together:
//!
//! - [`wingrib_core`]: geometry primitives and cut parts
//! - [`wingrib_wing`]: wing description and rib generation
//! - [`wingrib_nesting`]: shelf packing onto stock sheets
//! - [`wingrib_export`]: kerf compensation and SVG rendering
//! - [`wingrib_settings`]: export configuration
//!
//! [`export_sheets`] and [`export_plan`] run the whole pipeline from a
//! [`WingSpec`] to SVG text.

use anyhow::Context;
use tracing::{info, warn};

pub use wingrib_core::{CutPrimitive, Point, RawPart, Units};
pub use wingrib_export::{
    render_part_strip_svg, render_plan_svg, render_sheet_svgs, PlanSvgOptions, SheetSvgOptions,
    StripSvgOptions,
};
pub use wingrib_nesting::{pack_parts, LayoutResult, SheetSpec};
pub use wingrib_settings::{ExportConfig, SettingsError, SheetSvgSettings};
pub use wingrib_wing::{
    generate_wing, to_parts, to_parts_with, PartOptions, Rib, WingArtifact, WingError,
    WingGenerator, WingSpec,
};

/// Initialize logging
///
/// Logs to stdout at INFO by default; `RUST_LOG` adds directives on top.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}

/// One rendered cut sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SheetExport {
    pub svg: String,
    /// Overflow warnings for parts placed on this sheet
    pub warnings: Vec<String>,
}

/// Generate, pack and render a wing to one SVG document per sheet
pub fn export_sheets(
    spec: &WingSpec,
    config: &ExportConfig,
) -> anyhow::Result<Vec<SheetExport>> {
    config.validate().context("invalid export config")?;
    let artifact = generate_wing(spec).context("failed to generate wing")?;
    let parts = to_parts_with(&artifact, &config.parts);
    let layout = pack_parts(&parts, &config.sheet);

    let svgs = render_sheet_svgs(
        &layout,
        &config.sheet,
        &config.sheet_svg.options(spec.kerf),
    );
    let sheets: Vec<SheetExport> = layout
        .sheets
        .iter()
        .zip(svgs)
        .map(|(sheet, svg)| {
            for warning in &sheet.warnings {
                warn!("Sheet {}: {}", sheet.index, warning);
            }
            SheetExport {
                svg,
                warnings: sheet.warnings.clone(),
            }
        })
        .collect();

    info!(
        "Exported {} parts on {} sheets",
        layout.part_count(),
        sheets.len()
    );
    Ok(sheets)
}

/// Generate a wing and render its planform view
pub fn export_plan(spec: &WingSpec, config: &ExportConfig) -> anyhow::Result<String> {
    config.validate().context("invalid export config")?;
    let artifact = generate_wing(spec).context("failed to generate wing")?;
    Ok(render_plan_svg(&artifact, &config.plan_svg))
}
