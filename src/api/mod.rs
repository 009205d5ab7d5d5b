//! Smith Chart WASM API
//!
//! JavaScript-facing API for the chart renderer.
//!
//! # Module Structure
//!
//! - `helpers`: serialization across the JS boundary, error conversion, logging
//! - `types`: result shapes returned to JavaScript
//! - `render`: chart rendering entry points
//! - `geometry`: standalone geometry helpers

pub mod geometry;
pub mod helpers;
pub mod render;
pub mod types;

pub use geometry::{palette_colors, polar_to_cartesian, reactance_arc_path, resistance_circle};
pub use render::{
    render_smith_chart, render_smith_chart_embed, render_smith_chart_json,
    render_smith_chart_with_diagnostics, render_smith_chart_yaml,
};
