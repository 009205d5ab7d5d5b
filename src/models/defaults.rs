//! Default values for chart rendering
//!
//! Fixed grid parameters, viewport constants and per-shape fallbacks.

use super::color::Palette;

/// Default output width in pixels
pub const DEFAULT_WIDTH: f64 = 720.0;

/// Default output height in pixels
pub const DEFAULT_HEIGHT: f64 = 720.0;

/// Default grid stroke width (plot units)
pub const DEFAULT_STROKE_WIDTH: f64 = 0.003;

/// Default uniform zoom of plotted content
pub const DEFAULT_SCALE: f64 = 1.0;

/// Logical viewBox span, centered on the origin (±1.2)
pub const VIEW_SIZE: f64 = 2.4;

/// Normalized resistances drawn as grid circles
pub const GRID_RESISTANCES: [f64; 6] = [0.0, 0.2, 0.5, 1.0, 2.0, 5.0];

/// Normalized reactance magnitudes drawn as +x / -x arcs
pub const GRID_REACTANCES: [f64; 5] = [0.2, 0.5, 1.0, 2.0, 5.0];

/// Grid stroke colors
pub const BOUNDARY_STROKE: &str = "#555";
pub const GRID_STROKE: &str = "#333";
pub const AXIS_STROKE: &str = "#444";
pub const BOUNDARY_REDRAW_STROKE: &str = "#777";

/// Point marker defaults
pub const POINT_SIZE: f64 = 0.025;
pub const POINT_STROKE_WIDTH: f64 = 0.01;
pub const POINT_COLOR: Palette = Palette::Blue;

/// Circle overlay defaults
pub const CIRCLE_STROKE_WIDTH: f64 = 0.008;
pub const CIRCLE_COLOR: Palette = Palette::Green;

/// Stub path defaults
///
/// A provided stub stroke width is multiplied by `STUB_STROKE_FACTOR`;
/// points and circles take theirs unscaled.
pub const STUB_STROKE_WIDTH: f64 = 0.01;
pub const STUB_STROKE_FACTOR: f64 = 0.01;
pub const STUB_COLOR: Palette = Palette::Purple;
