//! Vector path descriptions for the unit drawing space.

use std::fmt::Write;

use super::Point;

/// Decimal places kept for path coordinates.
const COORD_PRECISION: f64 = 100.0;

/// Polyline through `points` in order: `M x,y L x,y ...`. Empty input gives an empty path.
#[must_use]
pub fn polyline_path(points: &[Point]) -> String {
    let mut path = String::new();
    for (i, point) in points.iter().enumerate() {
        let command = if i == 0 { "M" } else { " L" };
        let _ = write!(
            path,
            "{command}{},{}",
            format_coord(point.x),
            format_coord(point.y)
        );
    }
    path
}

/// Format a coordinate rounded to two decimals, without trailing zeros or negative zero.
#[must_use]
pub fn format_coord(value: f64) -> String {
    let rounded = (value * COORD_PRECISION).round() / COORD_PRECISION;
    if rounded.abs() < f64::EPSILON || !rounded.is_finite() {
        return "0".to_string();
    }
    format!("{rounded}")
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
