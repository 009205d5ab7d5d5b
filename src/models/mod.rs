//! Data model for the Smith chart renderer
//!
//! Locations, annotations, colors, options and their defaults.

pub mod annotation;
pub mod color;
pub mod defaults;
pub mod options;
pub mod serde_helpers;

// Re-export commonly used types
pub use annotation::{Annotation, CircleMark, Layer, Location, PointMark, StubPath, StubVertex};
pub use color::{resolve_color, ColorSpec, Palette};
pub use options::{ChartConfig, ChartOptions};
