//! SVG path data encoding
//!
//! Turns an ordered vertex sequence into `"M x0 y0 L x1 y1 ..."`.

/// Format a coordinate for markup output
///
/// Uses the shortest round-trip representation and folds negative zero
/// into `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Encode vertices as an open polyline path
///
/// The first vertex is a move-to and every later vertex a line-to, so
/// gaps in the sequence are bridged by straight segments. An empty
/// sequence encodes to an empty string.
pub fn encode_polyline<I>(vertices: I) -> String
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut d = String::new();
    for (i, (x, y)) in vertices.into_iter().enumerate() {
        if i > 0 {
            d.push(' ');
        }
        d.push_str(if i == 0 { "M " } else { "L " });
        d.push_str(&format_number(x));
        d.push(' ');
        d.push_str(&format_number(y));
    }
    d
}
