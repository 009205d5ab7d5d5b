//! Geometry engine for the reflection-coefficient plane
//!
//! Pure functions mapping chart inputs (polar or Cartesian) to Cartesian
//! points, grid circles and clipped reactance arcs.

pub mod path;

pub use path::encode_polyline;

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Angular step used when sampling reactance circles (radians)
pub const ARC_SAMPLE_STEP: f64 = 0.002;

/// Tolerance for the unit disk membership test
pub const UNIT_DISK_EPSILON: f64 = 1e-6;

/// A point in the reflection-coefficient plane
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Squared magnitude (re² + im²)
    pub fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// True when the point lies on or inside the unit circle (with tolerance)
    pub fn is_in_unit_disk(&self) -> bool {
        self.norm_sqr() <= 1.0 + UNIT_DISK_EPSILON
    }

    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

/// A circle whose center sits on the real axis
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct AxisCircle {
    pub center: f64,
    pub radius: f64,
}

/// Convert a polar location (angle in degrees) to Cartesian
///
/// No constraint on `r`; magnitudes above 1 land outside the chart.
pub fn polar_to_cartesian(r: f64, angle_deg: f64) -> Complex {
    let a = angle_deg * PI / 180.0;
    Complex::new(r * a.cos(), r * a.sin())
}

/// Constant-resistance circle for normalized resistance `r ≥ 0`
///
/// Always internally tangent to the unit circle at (1, 0).
pub fn resistance_circle(r: f64) -> AxisCircle {
    AxisCircle {
        center: r / (1.0 + r),
        radius: 1.0 / (1.0 + r),
    }
}

/// Sample the constant-reactance circle for `x` and keep the points inside
/// the unit disk.
///
/// The circle is centered at (1, 1/x) with radius |1/x|. Sampling runs from
/// t = 0 in steps of [`ARC_SAMPLE_STEP`] while t ≤ 2π, and every sample outside
/// the disk is dropped. Points are not re-joined analytically, so a
/// non-contiguous survivor set is returned as-is.
///
/// The sweep direction follows the sign of `x`, which makes `reactance_arc(-x)`
/// the exact mirror of `reactance_arc(x)` across the real axis. For negative `x`
/// this is a clockwise sweep, so the locus matches a counterclockwise sweep of
/// the same circle but the vertex sequence (and the path data) does not:
/// `reactance_arc(-1.0)` starts next to (0, -1) on the rim, where a
/// counterclockwise sweep would start next to (1, 0) and keep one sample fewer.
pub fn reactance_arc(x: f64) -> Vec<Complex> {
    if x == 0.0 || !x.is_finite() {
        return Vec::new();
    }

    let cy = 1.0 / x;
    let radius = cy.abs();
    let sweep = if x > 0.0 { radius } else { -radius };
    let limit = PI * 2.0;

    let mut points = Vec::with_capacity((limit / ARC_SAMPLE_STEP) as usize / 4);
    let mut t = 0.0_f64;
    while t <= limit {
        let point = Complex::new(1.0 + radius * t.cos(), cy + sweep * t.sin());
        if point.is_in_unit_disk() {
            points.push(point);
        }
        t += ARC_SAMPLE_STEP;
    }

    points
}

/// SVG path data for the clipped reactance arc of `x`
///
/// Returns an empty string when no sample survives clipping.
pub fn reactance_arc_path(x: f64) -> String {
    let points = reactance_arc(x);
    encode_polyline(points.iter().map(|p| (p.re, p.im)))
}
