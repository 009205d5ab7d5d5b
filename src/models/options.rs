//! Chart options: presentation settings plus the annotation config
//!
//! Parsed from JS objects, JSON, or YAML (optionally wrapped in a
//! `---` frontmatter block). Every field is optional.

use serde::Deserialize;

use super::annotation::{Annotation, CircleMark, PointMark, StubPath};
use super::defaults::*;
use super::serde_helpers::null_as_default;
use crate::error::ChartError;

/// User annotations drawn over the grid
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub points: Vec<PointMark>,
    #[serde(deserialize_with = "null_as_default")]
    pub circles: Vec<CircleMark>,
    #[serde(deserialize_with = "null_as_default")]
    pub stubs: Vec<StubPath>,
}

impl ChartConfig {
    /// Annotations in paint order, each paired with its index in its group
    pub fn annotations(&self) -> impl Iterator<Item = (usize, Annotation<'_>)> + '_ {
        let points = self.points.iter().map(Annotation::Point).enumerate();
        let circles = self.circles.iter().map(Annotation::Circle).enumerate();
        let stubs = self.stubs.iter().map(Annotation::Stub).enumerate();
        points.chain(circles).chain(stubs)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.circles.is_empty() && self.stubs.is_empty()
    }
}

/// Full render input
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ChartOptions {
    /// Output width in pixels (presentational only)
    pub width: f64,
    /// Output height in pixels (presentational only)
    pub height: f64,
    /// Grid line thickness in plot units
    pub stroke_width: f64,
    /// Uniform zoom applied to all plotted content
    pub scale: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub config: ChartConfig,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            stroke_width: DEFAULT_STROKE_WIDTH,
            scale: DEFAULT_SCALE,
            config: ChartConfig::default(),
        }
    }
}

impl ChartOptions {
    pub fn with_config(config: ChartConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Parse options from a JSON object
    pub fn from_json(json: &str) -> Result<Self, ChartError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse options from YAML
    ///
    /// A leading `---` line starts a frontmatter block that must be closed
    /// by another `---` line; anything after it is ignored.
    pub fn from_yaml(yaml: &str) -> Result<Self, ChartError> {
        let body = frontmatter_body(yaml)?;
        if body.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(body)?)
    }
}

/// Extract the frontmatter block, or return the input when there is none
fn frontmatter_body(text: &str) -> Result<&str, ChartError> {
    let trimmed = text.trim_start_matches('\u{feff}');
    let mut lines = trimmed.split_inclusive('\n');

    match lines.next() {
        Some(first) if first.trim_end() == "---" => {}
        _ => return Ok(trimmed),
    }

    let start = trimmed.find('\n').map(|i| i + 1).unwrap_or(trimmed.len());
    let mut offset = start;
    for line in lines {
        if line.trim_end() == "---" {
            return Ok(&trimmed[start..offset]);
        }
        offset += line.len();
    }

    Err(ChartError::UnterminatedFrontmatter)
}
