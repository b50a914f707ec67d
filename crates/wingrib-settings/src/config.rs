//! Export configuration
//!
//! Everything that shapes output but is not part of the wing itself: stock
//! sheet size, renderer toggles and which parts to extract. Stored as TOML or
//! JSON text; reading and writing files is left to the caller.

use serde::{Deserialize, Serialize};
use tracing::debug;
use wingrib_export::{PlanSvgOptions, SheetSvgOptions};
use wingrib_nesting::SheetSpec;
use wingrib_wing::PartOptions;

use crate::error::{SettingsError, SettingsResult};

/// Sheet renderer toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetSvgSettings {
    pub show_labels: bool,
    pub show_sheet_border: bool,
    /// Compensate cut paths for the wing's kerf
    pub apply_kerf: bool,
}

impl Default for SheetSvgSettings {
    fn default() -> Self {
        Self {
            show_labels: true,
            show_sheet_border: true,
            apply_kerf: false,
        }
    }
}

impl SheetSvgSettings {
    /// Renderer options for a wing cut with `kerf`
    pub fn options(&self, kerf: f64) -> SheetSvgOptions {
        SheetSvgOptions {
            show_labels: self.show_labels,
            show_sheet_border: self.show_sheet_border,
            kerf: if self.apply_kerf { kerf } else { 0.0 },
        }
    }
}

/// Complete export configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub sheet: SheetSpec,
    pub sheet_svg: SheetSvgSettings,
    pub plan_svg: PlanSvgOptions,
    pub parts: PartOptions,
}

impl ExportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate TOML
    pub fn from_toml_str(content: &str) -> SettingsResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> SettingsResult<String> {
        self.validate()?;
        Ok(toml::to_string_pretty(self)?)
    }

    /// Parse and validate JSON
    pub fn from_json_str(content: &str) -> SettingsResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> SettingsResult<String> {
        self.validate()?;
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let sheet = &self.sheet;
        if sheet.width.is_nan() || sheet.width <= 0.0 {
            return Err(SettingsError::invalid("sheet.width", "must be > 0"));
        }
        if sheet.height.is_nan() || sheet.height <= 0.0 {
            return Err(SettingsError::invalid("sheet.height", "must be > 0"));
        }
        if sheet.margin.is_nan() || sheet.margin < 0.0 {
            return Err(SettingsError::invalid("sheet.margin", "must be >= 0"));
        }
        if sheet.spacing.is_nan() || sheet.spacing < 0.0 {
            return Err(SettingsError::invalid("sheet.spacing", "must be >= 0"));
        }
        if sheet.usable_width() <= 0.0 || sheet.usable_height() <= 0.0 {
            return Err(SettingsError::invalid(
                "sheet.margin",
                format!(
                    "margin {} leaves no usable area on a {}x{} sheet",
                    sheet.margin, sheet.width, sheet.height
                ),
            ));
        }

        if self.plan_svg.margin.is_nan() || self.plan_svg.margin <= 0.0 {
            return Err(SettingsError::invalid("plan_svg.margin", "must be > 0"));
        }

        debug!("Export config valid: {:?}", self);
        Ok(())
    }
}
