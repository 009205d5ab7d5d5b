//! Error types for chart option parsing
//!
//! Rendering itself never fails; only turning text into options can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Options were not valid JSON or did not match the expected shape
    #[error("Invalid chart options JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Options were not valid YAML or did not match the expected shape
    #[error("Invalid chart options YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    /// A `---` frontmatter block was opened but never closed
    #[error("Frontmatter block is missing its closing '---' line")]
    UnterminatedFrontmatter,
}
