//! # Wingrib Nesting
//!
//! Lays flat [`wingrib_core::RawPart`]s out on fixed-size stock sheets.
//!
//! The packer is a deterministic shelf (row) packer: largest parts first,
//! rows filled left to right, new sheets opened as rows run out. It works on
//! bounding boxes only; outlines are never nested into each other's concave
//! regions.

pub mod layout;
pub mod pack;
pub mod sheet;

pub use layout::{LayoutResult, PlacedPart, Rotation, Sheet};
pub use pack::{pack_parts, rotate_quarter_turn, unrotate_quarter_turn};
pub use sheet::SheetSpec;
