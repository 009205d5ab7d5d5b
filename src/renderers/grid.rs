//! Background grid of the Smith chart
//!
//! Boundary circle, constant-resistance circles, constant-reactance arcs,
//! the real axis and a boundary redraw, painted in that order.

use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;

use super::svg::SvgElement;
use crate::diagnostics::{kinds, DiagnosticMark, DiagnosticSeverity};
use crate::geometry::{reactance_arc_path, resistance_circle};
use crate::models::defaults::*;
use crate::models::Layer;

/// Rendered grid elements plus anything worth reporting about them
#[derive(Clone, Debug, PartialEq)]
pub struct GridOutput {
    pub elements: Vec<SvgElement>,
    pub diagnostics: Vec<DiagnosticMark>,
}

fn stroked_circle(cx: f64, r: f64, stroke: &str, stroke_width: f64) -> SvgElement {
    SvgElement::new("circle")
        .num("cx", cx)
        .num("cy", 0.0)
        .num("r", r)
        .attr("fill", "none")
        .attr("stroke", stroke)
        .num("stroke-width", stroke_width)
}

/// Build the grid for a given line thickness
pub fn render_grid(stroke_width: f64) -> GridOutput {
    let mut elements = Vec::with_capacity(3 + GRID_RESISTANCES.len() + GRID_REACTANCES.len() * 2);
    let mut diagnostics = Vec::new();

    elements.push(stroked_circle(0.0, 1.0, BOUNDARY_STROKE, stroke_width));

    for r in GRID_RESISTANCES {
        let circle = resistance_circle(r);
        elements.push(stroked_circle(circle.center, circle.radius, GRID_STROKE, stroke_width));
    }

    for x in GRID_REACTANCES {
        for value in [x, -x] {
            let d = reactance_arc_path(value);
            if d.is_empty() {
                diagnostics.push(DiagnosticMark::new(
                    Layer::Grid,
                    DiagnosticSeverity::Info,
                    kinds::EMPTY_ARC,
                    format!("Reactance arc x={} has no points inside the chart", value),
                ));
                continue;
            }
            elements.push(
                SvgElement::new("path")
                    .attr("d", &d)
                    .attr("stroke", GRID_STROKE)
                    .num("stroke-width", stroke_width)
                    .attr("fill", "none"),
            );
        }
    }

    elements.push(
        SvgElement::new("line")
            .num("x1", -1.0)
            .num("y1", 0.0)
            .num("x2", 1.0)
            .num("y2", 0.0)
            .attr("stroke", AXIS_STROKE)
            .num("stroke-width", stroke_width),
    );

    elements.push(stroked_circle(0.0, 1.0, BOUNDARY_REDRAW_STROKE, stroke_width));

    GridOutput {
        elements,
        diagnostics,
    }
}

// Last grid built, keyed on the stroke width bits
static GRID_CACHE: Lazy<Mutex<Option<(u64, Arc<GridOutput>)>>> = Lazy::new(|| Mutex::new(None));

/// Same as [`render_grid`], reusing the previous result when the stroke
/// width has not changed
pub fn render_grid_cached(stroke_width: f64) -> Arc<GridOutput> {
    let key = stroke_width.to_bits();

    if let Ok(guard) = GRID_CACHE.lock() {
        if let Some((cached_key, grid)) = guard.as_ref() {
            if *cached_key == key {
                return Arc::clone(grid);
            }
        }
    }

    let grid = Arc::new(render_grid(stroke_width));
    match GRID_CACHE.lock() {
        Ok(mut guard) => *guard = Some((key, Arc::clone(&grid))),
        Err(e) => log::warn!("Grid cache unavailable: {}", e),
    }
    grid
}
