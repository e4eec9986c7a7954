//! Line renderer: one polyline per series over a shared, zero-floored domain.

use serde::{Deserialize, Serialize};

use super::Point;
use super::path::polyline_path;
use crate::format::{NumberLocale, format_number};
use crate::record::{Record, field_label, field_value};
use crate::scale::{Domain, UNIT};

/// Colors handed out to series that do not name one, by series index.
pub const DEFAULT_PALETTE: [&str; 6] = [
    "#3b82f6", "#22c55e", "#f59e0b", "#ef4444", "#8b5cf6", "#14b8a6",
];

/// One numeric trace to plot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesDescriptor {
    pub field: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub color: String,
}

impl SeriesDescriptor {
    #[must_use]
    pub fn new(
        field: impl Into<String>,
        label: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            label: label.into(),
            color: color.into(),
        }
    }
}

/// Field selection for a line chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineConfig {
    /// Field holding the x-axis label.
    pub category_field: String,
    #[serde(default)]
    pub series: Vec<SeriesDescriptor>,
    #[serde(default)]
    pub locale: NumberLocale,
}

impl LineConfig {
    #[must_use]
    pub fn new(category_field: impl Into<String>, series: Vec<SeriesDescriptor>) -> Self {
        Self {
            category_field: category_field.into(),
            series,
            locale: NumberLocale::default(),
        }
    }

    #[must_use]
    pub const fn with_locale(mut self, locale: NumberLocale) -> Self {
        self.locale = locale;
        self
    }
}

/// Drawable trace for one series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesGeometry {
    pub label: String,
    pub color: String,
    pub points: Vec<Point>,
    pub path: String,
    /// `"<x label>: <value>"` per point, in point order.
    pub hover_labels: Vec<String>,
}

/// Geometry for a whole line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineGeometry {
    pub domain: Domain,
    pub per_series: Vec<SeriesGeometry>,
    /// Category label per record, shared by every series.
    pub categories: Vec<String>,
}

impl LineGeometry {
    /// Geometry that draws nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            domain: Domain::default(),
            per_series: Vec::new(),
            categories: Vec::new(),
        }
    }
}

/// Horizontal position of record `index` out of `count`; a single record sits at 0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn x_position(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return 0.0;
    }
    index as f64 / (count - 1) as f64 * UNIT
}

/// Compute per-series points, paths, and hover labels over one shared domain.
///
/// Series with a blank field are skipped; with no usable series nothing is rendered.
#[must_use]
pub fn compute_line_geometry(records: &[Record], config: &LineConfig) -> LineGeometry {
    let active: Vec<(usize, &SeriesDescriptor)> = config
        .series
        .iter()
        .enumerate()
        .filter(|(_, s)| {
            let usable = !s.field.trim().is_empty();
            if !usable {
                log::warn!("skipping line series '{}' with no field", s.label);
            }
            usable
        })
        .collect();

    if active.is_empty() {
        log::warn!("line chart has no series; rendering nothing");
        return LineGeometry::empty();
    }

    let values: Vec<Vec<f64>> = active
        .iter()
        .map(|(_, s)| records.iter().map(|r| field_value(r, &s.field)).collect())
        .collect();
    let domain = Domain::from_series(values.iter().map(Vec::as_slice));
    if !records.is_empty() && domain.range() <= 0.0 {
        log::debug!("line domain has zero range; plotting at midpoint");
    }

    let labels: Vec<String> = records
        .iter()
        .map(|r| field_label(r, &config.category_field))
        .collect();

    let per_series = active
        .iter()
        .zip(&values)
        .map(|((index, descriptor), series_values)| {
            build_series(*index, descriptor, series_values, &labels, domain, config.locale)
        })
        .collect();

    LineGeometry {
        domain,
        per_series,
        categories: labels,
    }
}

fn build_series(
    index: usize,
    descriptor: &SeriesDescriptor,
    values: &[f64],
    labels: &[String],
    domain: Domain,
    locale: NumberLocale,
) -> SeriesGeometry {
    let count = values.len();
    let points: Vec<Point> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| Point {
            x: x_position(i, count),
            y: domain.value_to_position(v),
        })
        .collect();

    let hover_labels = labels
        .iter()
        .zip(values)
        .map(|(label, &v)| format!("{label}: {}", format_number(v, locale)))
        .collect();

    let label = if descriptor.label.trim().is_empty() {
        descriptor.field.clone()
    } else {
        descriptor.label.clone()
    };
    let color = if descriptor.color.trim().is_empty() {
        DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()].to_string()
    } else {
        descriptor.color.clone()
    };

    SeriesGeometry {
        label,
        color,
        path: polyline_path(&points),
        points,
        hover_labels,
    }
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
