//! SVG element building
//!
//! Elements are a name plus ordered attributes; attribute values are
//! XML-escaped when they are added.

use quick_xml::escape::escape;

use crate::geometry::path::format_number;

/// A single SVG element with ordered attributes
#[derive(Clone, Debug, PartialEq)]
pub struct SvgElement {
    name: &'static str,
    attributes: Vec<(&'static str, String)>,
}

impl SvgElement {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Add a text attribute (escaped)
    pub fn attr(mut self, key: &'static str, value: &str) -> Self {
        self.attributes.push((key, escape(value).into_owned()));
        self
    }

    /// Add a numeric attribute
    pub fn num(mut self, key: &'static str, value: f64) -> Self {
        self.attributes.push((key, format_number(value)));
        self
    }

    /// Add a numeric attribute only when a value is present
    pub fn num_opt(self, key: &'static str, value: Option<f64>) -> Self {
        match value {
            Some(v) => self.num(key, v),
            None => self,
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    fn write_attributes(&self, out: &mut String) {
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
    }

    /// `<name a="..."/>`
    pub fn to_empty_tag(&self) -> String {
        let mut out = format!("<{}", self.name);
        self.write_attributes(&mut out);
        out.push_str("/>");
        out
    }

    /// `<name a="...">`
    pub fn to_start_tag(&self) -> String {
        let mut out = format!("<{}", self.name);
        self.write_attributes(&mut out);
        out.push('>');
        out
    }
}
