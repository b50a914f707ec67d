//! # Wingrib Core
//!
//! Core types and geometry utilities shared by every wingrib crate.
//! Provides the fundamental 2D primitives the rib generator, the sheet
//! packer and the SVG exporters all speak:
//!
//! - [`geom`]: points, bounding boxes, polygon closure/winding, point-in-polygon,
//!   vertical-line extrema and miter-join offsetting
//! - [`part`]: cut primitives (rectangles, circles, rounded polygons) and the
//!   geometry-agnostic [`RawPart`] handed to the layout engine
//! - [`units`]: the unit a wing spec is authored in
//! - [`error`]: shared error type

pub mod error;
pub mod geom;
pub mod part;
pub mod units;

pub use error::{Error, Result};
pub use geom::{
    close_polygon, ensure_clockwise, is_closed, offset_polygon, point_in_polygon, signed_area,
    winding, y_extrema_at_x, Bounds, Point, Winding, YExtrema,
};
pub use part::{CutPrimitive, RawPart};
pub use units::Units;
