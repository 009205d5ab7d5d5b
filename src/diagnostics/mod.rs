//! Diagnostics for chart rendering
//!
//! Rendering degrades silently: bad colors pass through, out-of-range
//! geometry is plotted as-is, empty inputs simply omit markup. This module
//! reports those cases on a side channel without changing the output.

use serde::{Deserialize, Serialize};

use crate::models::Layer;

/// Severity level for diagnostic marks
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Warning,
    Info,
}

/// Diagnostic kind identifiers
pub mod kinds {
    pub const POINT_OUTSIDE_CHART: &str = "point_outside_chart";
    pub const CIRCLE_OUTSIDE_CHART: &str = "circle_outside_chart";
    pub const STUB_OUTSIDE_CHART: &str = "stub_outside_chart";
    pub const NON_FINITE_COORDINATE: &str = "non_finite_coordinate";
    pub const LITERAL_COLOR: &str = "literal_color";
    pub const CIRCLE_MISSING_RADIUS: &str = "circle_missing_radius";
    pub const EMPTY_STUB: &str = "empty_stub";
    pub const EMPTY_ARC: &str = "empty_arc";
    pub const NON_POSITIVE_DIMENSION: &str = "non_positive_dimension";
}

/// A single non-fatal finding about the render input
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DiagnosticMark {
    /// Which part of the chart the finding refers to
    pub layer: Layer,
    /// Index within the layer's input array, when there is one
    pub index: Option<usize>,
    pub severity: DiagnosticSeverity,
    /// Kind identifier (e.g., "point_outside_chart")
    pub kind: String,
    /// Human-readable message
    pub message: String,
}

impl DiagnosticMark {
    pub fn new(
        layer: Layer,
        severity: DiagnosticSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            layer,
            index: None,
            severity,
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Attach the input index of the annotation
    pub fn at(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

/// Collection of diagnostic marks for one render
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Diagnostics {
    pub marks: Vec<DiagnosticMark>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self { marks: Vec::new() }
    }

    pub fn add(&mut self, mark: DiagnosticMark) {
        log::debug!("chart diagnostic [{}] {}", mark.kind, mark.message);
        self.marks.push(mark);
    }

    pub fn extend(&mut self, marks: impl IntoIterator<Item = DiagnosticMark>) {
        for mark in marks {
            self.add(mark);
        }
    }

    pub fn has_warnings(&self) -> bool {
        self.marks
            .iter()
            .any(|m| m.severity == DiagnosticSeverity::Warning)
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Marks of a given kind
    pub fn of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a DiagnosticMark> + 'a {
        self.marks.iter().filter(move |m| m.kind == kind)
    }
}
