//! # Wingrib Settings
//!
//! Export configuration shared by every front end: stock sheet, renderer
//! toggles and part selection, with validation and TOML/JSON text forms.

pub mod config;
pub mod error;

pub use config::{ExportConfig, SheetSvgSettings};
pub use error::{SettingsError, SettingsResult};
