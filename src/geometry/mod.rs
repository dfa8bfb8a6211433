//! Turns measured letter positions into the path drawn between clicked letters.
//!
//! All output lives in a fixed 400×400 logical square, whatever the wheel's
//! size on screen.

mod layout;
mod resolver;

use egui::Pos2;

pub use layout::{LayoutProvider, MeasuredLayout, PositionMap, center_of, measure_positions};
pub use resolver::{
    Marker, MarkerKind, PathGeometry, Segment, edge_point, resolve_path, trim_toward_center,
};

/// Side of the normalized square
pub const LOGICAL_SIZE: f32 = 400.0;
pub const LOGICAL_CENTER: Pos2 = Pos2::new(LOGICAL_SIZE / 2.0, LOGICAL_SIZE / 2.0);
/// Distance letters sit from the center
pub const WHEEL_RADIUS: f32 = 150.0;
/// How far path endpoints are pulled in from the letter centers
pub const CENTER_OFFSET: f32 = 30.0;
pub const MARKER_RADIUS: f32 = 8.0;
