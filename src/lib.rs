//! Smith Chart WASM Module
//!
//! Renders a Smith chart (the reflection-coefficient plane with its
//! resistance and reactance grid) plus user annotations as SVG markup.

pub mod api;
pub mod diagnostics;
pub mod error;
pub mod geometry;
pub mod models;
pub mod renderers;

// Re-export commonly used types
pub use diagnostics::{DiagnosticMark, DiagnosticSeverity, Diagnostics};
pub use error::ChartError;
pub use geometry::{polar_to_cartesian, reactance_arc, reactance_arc_path, resistance_circle, AxisCircle, Complex};
pub use models::*;
pub use renderers::{render_chart, render_chart_with_diagnostics, render_embed, RenderOutput};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("Logger already initialized");
    }

    log::info!("Smith chart WASM module initialized");
}
