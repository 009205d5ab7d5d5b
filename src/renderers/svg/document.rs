//! SVG document writer
//!
//! Indented, line-per-element string buffer.

use super::elements::SvgElement;

/// SVG namespace for the root element
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Builder for SVG markup
pub struct SvgWriter {
    buffer: String,
    depth: usize,
    open: Vec<&'static str>,
}

impl SvgWriter {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            depth: 0,
            open: Vec::new(),
        }
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str("  ");
        }
    }

    /// Open a container element
    pub fn start(&mut self, element: &SvgElement) {
        self.indent();
        self.buffer.push_str(&element.to_start_tag());
        self.buffer.push('\n');
        self.open.push(element.name());
        self.depth += 1;
    }

    /// Close the innermost open element
    pub fn end(&mut self) {
        if let Some(name) = self.open.pop() {
            self.depth -= 1;
            self.indent();
            self.buffer.push_str(&format!("</{}>\n", name));
        }
    }

    /// Write a self-closing element
    pub fn empty(&mut self, element: &SvgElement) {
        self.indent();
        self.buffer.push_str(&element.to_empty_tag());
        self.buffer.push('\n');
    }

    /// Close anything still open and return the markup
    pub fn finish(mut self) -> String {
        while !self.open.is_empty() {
            self.end();
        }
        self.buffer
    }
}

impl Default for SvgWriter {
    fn default() -> Self {
        Self::new()
    }
}
