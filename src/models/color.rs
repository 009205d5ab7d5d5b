//! Annotation color resolution
//!
//! Named colors come from a closed palette. Anything else is passed through
//! as a literal color value without validation.

use serde::{Deserialize, Serialize};

/// Named chart colors
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    Yellow,
    Pink,
    Blue,
    Green,
    Purple,
    Orange,
}

impl Palette {
    pub const ALL: [Palette; 6] = [
        Palette::Yellow,
        Palette::Pink,
        Palette::Blue,
        Palette::Green,
        Palette::Purple,
        Palette::Orange,
    ];

    /// Exact, case-sensitive name lookup
    pub fn from_name(name: &str) -> Option<Palette> {
        match name {
            "yellow" => Some(Palette::Yellow),
            "pink" => Some(Palette::Pink),
            "blue" => Some(Palette::Blue),
            "green" => Some(Palette::Green),
            "purple" => Some(Palette::Purple),
            "orange" => Some(Palette::Orange),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Palette::Yellow => "yellow",
            Palette::Pink => "pink",
            Palette::Blue => "blue",
            Palette::Green => "green",
            Palette::Purple => "purple",
            Palette::Orange => "orange",
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            Palette::Yellow => "#ffeaa7",
            Palette::Pink => "#fab1a0",
            Palette::Blue => "#74b9ff",
            Palette::Green => "#55efc4",
            Palette::Purple => "#a29bfe",
            Palette::Orange => "#feca57",
        }
    }
}

/// A color as written in the chart configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorSpec<'a> {
    /// A palette name
    Named(Palette),
    /// Any other non-empty value, used verbatim
    Literal(&'a str),
    /// Absent or empty; the shape's default applies
    Unset,
}

impl<'a> ColorSpec<'a> {
    pub fn parse(raw: Option<&'a str>) -> Self {
        match raw {
            None | Some("") => ColorSpec::Unset,
            Some(name) => match Palette::from_name(name) {
                Some(palette) => ColorSpec::Named(palette),
                None => ColorSpec::Literal(name),
            },
        }
    }

    /// Resolve to the value written into markup
    pub fn resolve(self, fallback: Palette) -> &'a str {
        match self {
            ColorSpec::Named(palette) => palette.hex(),
            ColorSpec::Literal(value) => value,
            ColorSpec::Unset => fallback.hex(),
        }
    }
}

/// Resolve a raw color option against a per-shape fallback
pub fn resolve_color(raw: Option<&str>, fallback: Palette) -> &str {
    ColorSpec::parse(raw).resolve(fallback)
}
