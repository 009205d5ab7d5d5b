//! SVG markup output
//!
//! Element construction and the document writer used by the chart renderers.

pub mod document;
pub mod elements;

pub use document::{SvgWriter, SVG_NAMESPACE};
pub use elements::SvgElement;
