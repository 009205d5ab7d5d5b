//! Chart rendering operations for the WASM API
//!
//! Every entry point accepts the same options shape (`width`, `height`,
//! `stroke_width`, `scale`, `config`) from a JS object, JSON, or YAML.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize_or_default, error_to_js, serialize};
use crate::models::ChartOptions;
use crate::renderers::{render_chart, render_chart_with_diagnostics, render_embed};
use crate::{wasm_info, wasm_log};

fn log_options(options: &ChartOptions) {
    wasm_log!(
        "  {}x{}, stroke_width={}, scale={}, {} points, {} circles, {} stubs",
        options.width,
        options.height,
        options.stroke_width,
        options.scale,
        options.config.points.len(),
        options.config.circles.len(),
        options.config.stubs.len()
    );
}

// ============================================================================
// SVG Rendering
// ============================================================================

/// Render a Smith chart from a JS options object
///
/// # Returns
/// SVG document string
#[wasm_bindgen(js_name = renderSmithChart)]
pub fn render_smith_chart(options: JsValue) -> Result<String, JsValue> {
    wasm_info!("renderSmithChart called");
    let options: ChartOptions = deserialize_or_default(options, "Invalid chart options")?;
    log_options(&options);
    Ok(render_chart(&options))
}

/// Render a Smith chart from a JSON options string
#[wasm_bindgen(js_name = renderSmithChartJson)]
pub fn render_smith_chart_json(json: &str) -> Result<String, JsValue> {
    wasm_info!("renderSmithChartJson called: {} bytes", json.len());
    let options = ChartOptions::from_json(json).map_err(|e| error_to_js("renderSmithChartJson", e))?;
    log_options(&options);
    Ok(render_chart(&options))
}

/// Render a Smith chart from YAML options (plain or `---` frontmatter)
#[wasm_bindgen(js_name = renderSmithChartYaml)]
pub fn render_smith_chart_yaml(yaml: &str) -> Result<String, JsValue> {
    wasm_info!("renderSmithChartYaml called: {} bytes", yaml.len());
    let options = ChartOptions::from_yaml(yaml).map_err(|e| error_to_js("renderSmithChartYaml", e))?;
    log_options(&options);
    Ok(render_chart(&options))
}

/// Render a Smith chart and report non-fatal findings about the input
///
/// # Returns
/// `{ svg: string, diagnostics: { marks: [...] } }`
#[wasm_bindgen(js_name = renderSmithChartWithDiagnostics)]
pub fn render_smith_chart_with_diagnostics(options: JsValue) -> Result<JsValue, JsValue> {
    wasm_info!("renderSmithChartWithDiagnostics called");
    let options: ChartOptions = deserialize_or_default(options, "Invalid chart options")?;
    log_options(&options);

    let output = render_chart_with_diagnostics(&options);
    wasm_info!("  {} diagnostics", output.diagnostics.marks.len());
    serialize(&output, "Failed to serialize render output")
}

/// Render a Smith chart wrapped in a centering container
#[wasm_bindgen(js_name = renderSmithChartEmbed)]
pub fn render_smith_chart_embed(options: JsValue) -> Result<String, JsValue> {
    wasm_info!("renderSmithChartEmbed called");
    let options: ChartOptions = deserialize_or_default(options, "Invalid chart options")?;
    log_options(&options);
    Ok(render_embed(&options))
}
