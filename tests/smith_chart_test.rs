// Smith chart rendering: end-to-end markup checks
//
// Rendered documents are parsed back with roxmltree so the assertions
// look at structure and paint order rather than string fragments.

use smith_chart_wasm::diagnostics::{kinds, DiagnosticSeverity};
use smith_chart_wasm::{render_chart, render_chart_with_diagnostics, ChartOptions};

/// Number of grid elements: boundary, 6 resistance circles, 10 arcs, axis, redraw
const GRID_ELEMENTS: usize = 19;

fn parse_options(json: &str) -> ChartOptions {
    ChartOptions::from_json(json).expect("options should parse")
}

fn plot_children<'a, 'input>(doc: &'a roxmltree::Document<'input>) -> Vec<roxmltree::Node<'a, 'input>> {
    let group = doc
        .root_element()
        .children()
        .find(|n| n.has_tag_name("g"))
        .expect("chart should have a plot group");
    group.children().filter(|n| n.is_element()).collect()
}

fn path_coordinates(d: &str) -> Vec<(f64, f64)> {
    let numbers: Vec<f64> = d
        .split_whitespace()
        .filter(|t| *t != "M" && *t != "L")
        .map(|t| t.parse().expect("path coordinate should be numeric"))
        .collect();
    numbers.chunks(2).map(|c| (c[0], c[1])).collect()
}

#[test]
fn test_viewport_and_flip() {
    let svg = render_chart(&parse_options(r#"{"width": 500, "height": 300, "scale": 0.9}"#));
    let doc = roxmltree::Document::parse(&svg).expect("output should be well-formed");

    let root = doc.root_element();
    assert!(root.has_tag_name("svg"));
    assert_eq!(root.tag_name().namespace(), Some("http://www.w3.org/2000/svg"));
    assert_eq!(root.attribute("viewBox"), Some("-1.2 -1.2 2.4 2.4"));
    assert_eq!(root.attribute("width"), Some("500"));
    assert_eq!(root.attribute("height"), Some("300"));

    let group = root.children().find(|n| n.has_tag_name("g")).unwrap();
    assert_eq!(group.attribute("transform"), Some("scale(0.9,-0.9)"));
}

#[test]
fn test_empty_config_renders_grid_only() {
    let svg = render_chart(&ChartOptions::default());
    let doc = roxmltree::Document::parse(&svg).unwrap();
    assert_eq!(plot_children(&doc).len(), GRID_ELEMENTS);
}

#[test]
fn test_annotation_paint_order() {
    let options = parse_options(
        r#"{
            "config": {
                "stubs": [{"points": [{"x": 0, "y": 0}, {"x": 0.3, "y": 0.4}]}],
                "circles": [{"re": 0, "im": 0, "radius": 0.5}],
                "points": [{"re": 0.1, "im": 0.1}]
            }
        }"#,
    );
    let svg = render_chart(&options);
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let children = plot_children(&doc);

    assert_eq!(children.len(), GRID_ELEMENTS + 3);

    let point = children[GRID_ELEMENTS];
    assert!(point.has_tag_name("circle"));
    assert_eq!(point.attribute("fill"), Some("#74b9ff"));

    let circle = children[GRID_ELEMENTS + 1];
    assert!(circle.has_tag_name("circle"));
    assert_eq!(circle.attribute("fill"), Some("none"));
    assert_eq!(circle.attribute("stroke"), Some("#55efc4"));

    let stub = children[GRID_ELEMENTS + 2];
    assert!(stub.has_tag_name("path"));
    assert_eq!(stub.attribute("stroke-linecap"), Some("round"));
}

#[test]
fn test_groups_keep_input_order() {
    let options = parse_options(
        r#"{"config": {"points": [
            {"re": 0.1, "im": 0, "color": "yellow"},
            {"re": 0.2, "im": 0, "color": "pink"},
            {"re": 0.3, "im": 0, "color": "orange"}
        ]}}"#,
    );
    let svg = render_chart(&options);
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let fills: Vec<&str> = plot_children(&doc)[GRID_ELEMENTS..]
        .iter()
        .filter_map(|n| n.attribute("fill"))
        .collect();
    assert_eq!(fills, vec!["#ffeaa7", "#fab1a0", "#feca57"]);
}

#[test]
fn test_render_is_idempotent() {
    let options = parse_options(
        r#"{"stroke_width": 0.004, "config": {
            "points": [{"type": "g", "r": 0.7, "angle": 30}],
            "circles": [{"re": 0.2, "im": 0.1, "radius": 0.4, "color": "orange"}],
            "stubs": [{"points": [{"x": 0.5, "y": 0}, {"x": 0.5, "y": 0.5}], "stroke_width": 2}]
        }}"#,
    );
    assert_eq!(render_chart(&options), render_chart(&options));
}

#[test]
fn test_single_blue_point() {
    let options = parse_options(
        r#"{"config": {"points": [{"re": 0.5, "im": 0, "color": "blue", "size": 0.05}]}}"#,
    );
    let svg = render_chart(&options);
    let doc = roxmltree::Document::parse(&svg).unwrap();

    let filled: Vec<_> = plot_children(&doc)
        .into_iter()
        .filter(|n| n.has_tag_name("circle") && n.attribute("fill") != Some("none"))
        .collect();

    assert_eq!(filled.len(), 1);
    let point = filled[0];
    assert_eq!(point.attribute("cx"), Some("0.5"));
    assert_eq!(point.attribute("cy"), Some("0"));
    assert_eq!(point.attribute("r"), Some("0.05"));
    assert_eq!(point.attribute("fill"), Some("#74b9ff"));
}

#[test]
fn test_two_vertex_stub() {
    let options = parse_options(
        r#"{"config": {"stubs": [{"points": [{"x": 0, "y": 0}, {"x": 1, "y": 1}], "color": "purple"}]}}"#,
    );
    let svg = render_chart(&options);
    let doc = roxmltree::Document::parse(&svg).unwrap();

    let stubs: Vec<_> = plot_children(&doc)
        .into_iter()
        .filter(|n| n.attribute("stroke-linecap") == Some("round"))
        .collect();

    assert_eq!(stubs.len(), 1);
    assert_eq!(stubs[0].attribute("d"), Some("M 0 0 L 1 1"));
    assert_eq!(stubs[0].attribute("stroke"), Some("#a29bfe"));
    assert_eq!(stubs[0].attribute("fill"), Some("none"));
}

#[test]
fn test_stub_stroke_width_is_scaled() {
    let options = parse_options(
        r#"{"config": {
            "points": [{"re": 0, "im": 0, "stroke_width": 2}],
            "stubs": [{"points": [{"x": 0, "y": 0}], "stroke_width": 2}]
        }}"#,
    );
    let svg = render_chart(&options);
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let children = plot_children(&doc);

    // Points take the value as-is, stubs scale it by 0.01
    assert_eq!(children[GRID_ELEMENTS].attribute("stroke-width"), Some("2"));
    assert_eq!(children[GRID_ELEMENTS + 1].attribute("stroke-width"), Some("0.02"));
}

#[test]
fn test_grid_arcs_stay_inside_chart() {
    let svg = render_chart(&ChartOptions::default());
    let doc = roxmltree::Document::parse(&svg).unwrap();

    let arcs: Vec<_> = plot_children(&doc)
        .into_iter()
        .filter(|n| n.has_tag_name("path"))
        .collect();
    assert_eq!(arcs.len(), 10);

    for arc in arcs {
        let coords = path_coordinates(arc.attribute("d").unwrap());
        assert!(!coords.is_empty());
        for (x, y) in coords {
            assert!(x * x + y * y <= 1.0 + 1e-6, "({}, {}) outside the chart", x, y);
        }
    }
}

#[test]
fn test_literal_color_survives_escaping() {
    let options = parse_options(
        r#"{"config": {"circles": [{"re": 0, "im": 0, "radius": 0.2, "color": "rgb(1, 2, 3)\" onload=\"x"}]}}"#,
    );
    let svg = render_chart(&options);
    let doc = roxmltree::Document::parse(&svg).expect("escaped output should be well-formed");
    let circle = plot_children(&doc)[GRID_ELEMENTS];

    assert_eq!(circle.attribute("stroke"), Some("rgb(1, 2, 3)\" onload=\"x"));
    assert_eq!(circle.attribute("onload"), None);
}

#[test]
fn test_yaml_and_json_render_identically() {
    let json = parse_options(
        r#"{"width": 400, "config": {"points": [{"type": "g", "r": 0.5, "angle": 120, "color": "green"}]}}"#,
    );
    let yaml = ChartOptions::from_yaml(
        "---\nwidth: 400\nconfig:\n  points:\n    - type: g\n      r: 0.5\n      angle: 120\n      color: green\n---\n",
    )
    .unwrap();
    assert_eq!(render_chart(&json), render_chart(&yaml));
}

#[test]
fn test_out_of_range_inputs_are_plotted_and_reported() {
    let options = parse_options(
        r#"{"config": {
            "points": [{"type": "g", "r": 1.5, "angle": 0}],
            "circles": [{"re": 2, "im": 0}]
        }}"#,
    );
    let output = render_chart_with_diagnostics(&options);
    let doc = roxmltree::Document::parse(&output.svg).unwrap();
    let children = plot_children(&doc);

    assert_eq!(children[GRID_ELEMENTS].attribute("cx"), Some("1.5"));
    assert_eq!(children[GRID_ELEMENTS + 1].attribute("r"), None);

    let diags = &output.diagnostics;
    assert_eq!(diags.of_kind(kinds::POINT_OUTSIDE_CHART).count(), 1);
    assert_eq!(diags.of_kind(kinds::CIRCLE_OUTSIDE_CHART).count(), 1);
    assert_eq!(diags.of_kind(kinds::CIRCLE_MISSING_RADIUS).count(), 1);
    assert!(diags.has_warnings());
    assert!(diags
        .marks
        .iter()
        .all(|m| m.severity == DiagnosticSeverity::Warning));
}

#[test]
fn test_null_annotation_groups_render_grid_only() {
    let options = parse_options(r#"{"config": {"points": null, "circles": null, "stubs": null}}"#);
    assert_eq!(render_chart(&options), render_chart(&ChartOptions::default()));

    let yaml = ChartOptions::from_yaml("config:\n  points:\n  stubs:\n").unwrap();
    assert_eq!(render_chart(&yaml), render_chart(&ChartOptions::default()));
}
