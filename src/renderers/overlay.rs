//! User annotations drawn over the grid
//!
//! Resolves locations, colors and per-shape defaults, and reports anything
//! suspicious to the diagnostics channel without altering the markup.

use super::svg::SvgElement;
use crate::diagnostics::{kinds, DiagnosticMark, DiagnosticSeverity, Diagnostics};
use crate::geometry::{encode_polyline, Complex};
use crate::models::defaults::*;
use crate::models::{Annotation, ChartConfig, CircleMark, ColorSpec, Layer, Palette, PointMark, StubPath};

/// Stroke width for a stub: provided values are scaled by 0.01, and a
/// missing or zero value falls back to 0.01
pub fn stub_stroke_width(provided: Option<f64>) -> f64 {
    match provided {
        Some(w) if w != 0.0 && !w.is_nan() => w * STUB_STROKE_FACTOR,
        _ => STUB_STROKE_WIDTH,
    }
}

/// Render every annotation in paint order
pub fn render_overlay(config: &ChartConfig, diagnostics: &mut Diagnostics) -> Vec<SvgElement> {
    config
        .annotations()
        .map(|(index, annotation)| render_annotation(annotation, index, diagnostics))
        .collect()
}

/// Render one annotation
pub fn render_annotation(
    annotation: Annotation<'_>,
    index: usize,
    diagnostics: &mut Diagnostics,
) -> SvgElement {
    match annotation {
        Annotation::Point(point) => render_point(point, index, diagnostics),
        Annotation::Circle(circle) => render_circle(circle, index, diagnostics),
        Annotation::Stub(stub) => render_stub(stub, index, diagnostics),
    }
}

fn resolve_color<'a>(
    raw: Option<&'a str>,
    fallback: Palette,
    layer: Layer,
    index: usize,
    diagnostics: &mut Diagnostics,
) -> &'a str {
    let parsed = ColorSpec::parse(raw);
    if let ColorSpec::Literal(value) = parsed {
        diagnostics.add(
            DiagnosticMark::new(
                layer,
                DiagnosticSeverity::Info,
                kinds::LITERAL_COLOR,
                format!("Color '{}' is not a palette name; used as a literal value", value),
            )
            .at(index),
        );
    }
    parsed.resolve(fallback)
}

fn check_location(g: &Complex, layer: Layer, index: usize, outside_kind: &str, diagnostics: &mut Diagnostics) {
    if !g.is_finite() {
        diagnostics.add(
            DiagnosticMark::new(
                layer,
                DiagnosticSeverity::Warning,
                kinds::NON_FINITE_COORDINATE,
                format!("Location ({}, {}) is not finite", g.re, g.im),
            )
            .at(index),
        );
    } else if !g.is_in_unit_disk() {
        diagnostics.add(
            DiagnosticMark::new(
                layer,
                DiagnosticSeverity::Warning,
                outside_kind,
                format!("Location ({}, {}) lies outside the unit circle", g.re, g.im),
            )
            .at(index),
        );
    }
}

fn render_point(point: &PointMark, index: usize, diagnostics: &mut Diagnostics) -> SvgElement {
    let g = point.location.to_cartesian();
    check_location(&g, Layer::Points, index, kinds::POINT_OUTSIDE_CHART, diagnostics);

    let color = resolve_color(point.color.as_deref(), POINT_COLOR, Layer::Points, index, diagnostics);

    SvgElement::new("circle")
        .num("cx", g.re)
        .num("cy", g.im)
        .num("r", point.size.unwrap_or(POINT_SIZE))
        .attr("fill", color)
        .num("stroke-width", point.stroke_width.unwrap_or(POINT_STROKE_WIDTH))
}

fn render_circle(circle: &CircleMark, index: usize, diagnostics: &mut Diagnostics) -> SvgElement {
    let g = circle.location.to_cartesian();
    check_location(&g, Layer::Circles, index, kinds::CIRCLE_OUTSIDE_CHART, diagnostics);

    if circle.radius.is_none() {
        diagnostics.add(
            DiagnosticMark::new(
                Layer::Circles,
                DiagnosticSeverity::Warning,
                kinds::CIRCLE_MISSING_RADIUS,
                "Circle has no radius and will not be drawn",
            )
            .at(index),
        );
    }

    let color = resolve_color(circle.color.as_deref(), CIRCLE_COLOR, Layer::Circles, index, diagnostics);

    SvgElement::new("circle")
        .num("cx", g.re)
        .num("cy", g.im)
        .num_opt("r", circle.radius)
        .attr("fill", "none")
        .attr("stroke", color)
        .num("stroke-width", circle.stroke_width.unwrap_or(CIRCLE_STROKE_WIDTH))
}

fn render_stub(stub: &StubPath, index: usize, diagnostics: &mut Diagnostics) -> SvgElement {
    if stub.points.is_empty() {
        diagnostics.add(
            DiagnosticMark::new(
                Layer::Stubs,
                DiagnosticSeverity::Warning,
                kinds::EMPTY_STUB,
                "Stub has no vertices",
            )
            .at(index),
        );
    }

    for vertex in &stub.points {
        let g = Complex::new(vertex.x, vertex.y);
        check_location(&g, Layer::Stubs, index, kinds::STUB_OUTSIDE_CHART, diagnostics);
    }

    let d = encode_polyline(stub.points.iter().map(|p| (p.x, p.y)));
    let color = resolve_color(stub.color.as_deref(), STUB_COLOR, Layer::Stubs, index, diagnostics);

    SvgElement::new("path")
        .attr("d", &d)
        .attr("stroke", color)
        .num("stroke-width", stub_stroke_width(stub.stroke_width))
        .attr("fill", "none")
        .attr("stroke-linecap", "round")
}
