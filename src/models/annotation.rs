//! Chart locations and user annotations
//!
//! Annotations are drawn over the grid in a fixed order: points, then
//! circles, then stubs, each group in input order.

use serde::{Deserialize, Serialize};

use crate::geometry::{polar_to_cartesian, Complex};

/// A location in the reflection-coefficient plane
///
/// On the wire this is an object with an optional `type` field: `"g"`
/// selects the polar form (`r`, `angle` in degrees), anything else the
/// Cartesian form (`re`, `im`). Missing numbers read as zero.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(from = "LocationFields")]
pub enum Location {
    Cartesian { re: f64, im: f64 },
    Polar { r: f64, angle: f64 },
}

impl Location {
    /// Cartesian position used for drawing
    pub fn to_cartesian(&self) -> Complex {
        match *self {
            Location::Cartesian { re, im } => Complex::new(re, im),
            Location::Polar { r, angle } => polar_to_cartesian(r, angle),
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::Cartesian { re: 0.0, im: 0.0 }
    }
}

/// Polar discriminator value
const POLAR_TAG: &str = "g";

#[derive(Deserialize, Default)]
struct LocationFields {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    re: Option<f64>,
    #[serde(default)]
    im: Option<f64>,
    #[serde(default)]
    r: Option<f64>,
    #[serde(default)]
    angle: Option<f64>,
}

impl From<LocationFields> for Location {
    fn from(fields: LocationFields) -> Self {
        if fields.kind.as_deref() == Some(POLAR_TAG) {
            Location::Polar {
                r: fields.r.unwrap_or(0.0),
                angle: fields.angle.unwrap_or(0.0),
            }
        } else {
            Location::Cartesian {
                re: fields.re.unwrap_or(0.0),
                im: fields.im.unwrap_or(0.0),
            }
        }
    }
}

/// A filled point marker
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PointMark {
    #[serde(flatten)]
    pub location: Location,
    #[serde(default)]
    pub color: Option<String>,
    /// Marker radius
    #[serde(default)]
    pub size: Option<f64>,
    #[serde(default)]
    pub stroke_width: Option<f64>,
}

/// An unfilled circle overlay
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CircleMark {
    #[serde(flatten)]
    pub location: Location,
    #[serde(default)]
    pub radius: Option<f64>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub stroke_width: Option<f64>,
}

/// A stub vertex, always Cartesian
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct StubVertex {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// An open polyline, typically a transmission-line routing path
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct StubPath {
    #[serde(default, deserialize_with = "super::serde_helpers::null_as_default")]
    pub points: Vec<StubVertex>,
    #[serde(default)]
    pub color: Option<String>,
    /// Scaled by 0.01 when rendered
    #[serde(default)]
    pub stroke_width: Option<f64>,
}

/// Annotation group, also the paint order of the groups
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Options,
    Grid,
    Points,
    Circles,
    Stubs,
}

/// One user annotation
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Annotation<'a> {
    Point(&'a PointMark),
    Circle(&'a CircleMark),
    Stub(&'a StubPath),
}

impl Annotation<'_> {
    pub fn layer(&self) -> Layer {
        match self {
            Annotation::Point(_) => Layer::Points,
            Annotation::Circle(_) => Layer::Circles,
            Annotation::Stub(_) => Layer::Stubs,
        }
    }
}
