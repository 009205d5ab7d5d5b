//! Renderers module for the Smith chart
//!
//! Grid, overlay and composition stages that turn chart options into
//! SVG markup.

pub mod chart;
pub mod grid;
pub mod overlay;
pub mod svg;

// Re-export commonly used types
pub use chart::{render_chart, render_chart_with_diagnostics, render_embed, RenderOutput};
pub use grid::{render_grid, render_grid_cached, GridOutput};
pub use overlay::{render_overlay, stub_stroke_width};
