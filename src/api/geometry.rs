//! Geometry operations for the WASM API
//!
//! Thin wrappers so page scripts can place their own markup on the chart.

use wasm_bindgen::prelude::*;

use crate::api::helpers::serialize;
use crate::api::types::palette_entries;
use crate::geometry;

/// Convert polar (magnitude, angle in degrees) to `{ re, im }`
#[wasm_bindgen(js_name = polarToCartesian)]
pub fn polar_to_cartesian(r: f64, angle: f64) -> Result<JsValue, JsValue> {
    serialize(&geometry::polar_to_cartesian(r, angle), "polarToCartesian")
}

/// Constant-resistance circle as `{ center, radius }`
#[wasm_bindgen(js_name = resistanceCircle)]
pub fn resistance_circle(r: f64) -> Result<JsValue, JsValue> {
    serialize(&geometry::resistance_circle(r), "resistanceCircle")
}

/// Clipped constant-reactance arc as SVG path data (may be empty)
#[wasm_bindgen(js_name = reactanceArcPath)]
pub fn reactance_arc_path(x: f64) -> String {
    geometry::reactance_arc_path(x)
}

/// Named colors accepted in annotations, as `[{ name, hex }]`
#[wasm_bindgen(js_name = paletteColors)]
pub fn palette_colors() -> Result<JsValue, JsValue> {
    serialize(&palette_entries(), "paletteColors")
}
