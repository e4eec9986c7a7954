//! Chart geometry: pure functions from records to drawable shapes.
//!
//! Everything here works in a unit drawing space of 0–100 on each axis and
//! never fails. Degenerate input (missing fields, zero-range domains, empty
//! configuration) resolves to a flat or empty picture.

mod bar;
mod line;
mod path;

pub use bar::{BarConfig, BarGeometry, compute_bar_geometry};
pub use line::{
    DEFAULT_PALETTE, LineConfig, LineGeometry, SeriesDescriptor, SeriesGeometry,
    compute_line_geometry, x_position,
};
pub use path::{format_coord, polyline_path};

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Normalized `(x, y)` position in the unit drawing space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A chart to compute, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ChartRequest {
    Bar(BarConfig),
    Line(LineConfig),
}

impl ChartRequest {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Bar(_) => "bar",
            Self::Line(_) => "line",
        }
    }
}

/// Computed geometry for either chart kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChartGeometry {
    Bar(Vec<BarGeometry>),
    Line(LineGeometry),
}

impl ChartGeometry {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Bar(_) => "bar",
            Self::Line(_) => "line",
        }
    }

    /// True when there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Bar(bars) => bars.is_empty(),
            Self::Line(line) => line.per_series.iter().all(|s| s.points.is_empty()),
        }
    }
}

/// Compute geometry for `request` over `records`.
#[must_use]
pub fn compute_geometry(records: &[Record], request: &ChartRequest) -> ChartGeometry {
    match request {
        ChartRequest::Bar(config) => ChartGeometry::Bar(compute_bar_geometry(records, config)),
        ChartRequest::Line(config) => ChartGeometry::Line(compute_line_geometry(records, config)),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
