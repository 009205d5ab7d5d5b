//! Chart composition
//!
//! Wraps grid and overlay in one `<g>` flipped by `scale(s,-s)`, so the
//! computed coordinates keep the mathematical positive-imaginary-up
//! convention, inside a fixed 2.4-unit viewBox centered on the origin.

use serde::Serialize;

use super::grid::render_grid_cached;
use super::overlay::render_overlay;
use super::svg::{SvgElement, SvgWriter, SVG_NAMESPACE};
use crate::diagnostics::{kinds, DiagnosticMark, DiagnosticSeverity, Diagnostics};
use crate::geometry::path::format_number;
use crate::models::defaults::VIEW_SIZE;
use crate::models::{ChartOptions, Layer};

/// Markup plus the diagnostics collected while producing it
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RenderOutput {
    pub svg: String,
    pub diagnostics: Diagnostics,
}

/// `min-x min-y width height` for the fixed logical viewport
pub fn view_box() -> String {
    let half = VIEW_SIZE / 2.0;
    format!(
        "{} {} {} {}",
        format_number(-half),
        format_number(-half),
        format_number(VIEW_SIZE),
        format_number(VIEW_SIZE)
    )
}

fn flip_transform(scale: f64) -> String {
    format!("scale({},-{})", format_number(scale), format_number(scale))
}

fn check_options(options: &ChartOptions, diagnostics: &mut Diagnostics) {
    let dimensions = [
        ("width", options.width),
        ("height", options.height),
        ("stroke_width", options.stroke_width),
        ("scale", options.scale),
    ];
    for (name, value) in dimensions {
        if !(value > 0.0 && value.is_finite()) {
            diagnostics.add(DiagnosticMark::new(
                Layer::Options,
                DiagnosticSeverity::Warning,
                kinds::NON_POSITIVE_DIMENSION,
                format!("{} should be a positive number, got {}", name, value),
            ));
        }
    }
}

/// Render the chart and collect diagnostics
pub fn render_chart_with_diagnostics(options: &ChartOptions) -> RenderOutput {
    let mut diagnostics = Diagnostics::new();
    check_options(options, &mut diagnostics);

    let grid = render_grid_cached(options.stroke_width);
    diagnostics.extend(grid.diagnostics.iter().cloned());
    let overlay = render_overlay(&options.config, &mut diagnostics);

    let mut writer = SvgWriter::new();
    writer.start(
        &SvgElement::new("svg")
            .attr("xmlns", SVG_NAMESPACE)
            .attr("viewBox", &view_box())
            .num("width", options.width)
            .num("height", options.height),
    );
    writer.start(&SvgElement::new("g").attr("transform", &flip_transform(options.scale)));

    for element in grid.elements.iter().chain(overlay.iter()) {
        writer.empty(element);
    }

    let svg = writer.finish();
    log::debug!(
        "Rendered Smith chart: {} grid elements, {} annotations, {} bytes",
        grid.elements.len(),
        overlay.len(),
        svg.len()
    );

    RenderOutput { svg, diagnostics }
}

/// Render the chart as a standalone SVG document
pub fn render_chart(options: &ChartOptions) -> String {
    render_chart_with_diagnostics(options).svg
}

/// Inline style of the embedding container
const EMBED_STYLE: &str =
    "display: flex; justify-content: center; align-items: center; width: 100%; height: 100%;";

/// Render the chart centered inside a flex container, for direct embedding
/// into a page
pub fn render_embed(options: &ChartOptions) -> String {
    let container = SvgElement::new("div").attr("style", EMBED_STYLE);

    let mut html = container.to_start_tag();
    html.push('\n');
    for line in render_chart(options).lines() {
        html.push_str("  ");
        html.push_str(line);
        html.push('\n');
    }
    html.push_str("</div>\n");
    html
}
