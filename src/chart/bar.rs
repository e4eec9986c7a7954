//! Bar renderer: one proportional bar per category, in record order.

use serde::{Deserialize, Serialize};

use crate::format::{NumberLocale, format_number};
use crate::record::{Record, field_label, field_value};
use crate::scale::{UNIT, bar_max, value_to_bar_height_percent};

/// Share of each category slot taken by its bar; the rest is split evenly as gap.
const BAR_FILL_RATIO: f64 = 0.8;

/// Field selection for a bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarConfig {
    /// Field holding the category label (x axis).
    pub category_field: String,
    /// Field holding the bar magnitude.
    pub value_field: String,
    #[serde(default)]
    pub locale: NumberLocale,
}

impl BarConfig {
    #[must_use]
    pub fn new(category_field: impl Into<String>, value_field: impl Into<String>) -> Self {
        Self {
            category_field: category_field.into(),
            value_field: value_field.into(),
            locale: NumberLocale::default(),
        }
    }

    #[must_use]
    pub const fn with_locale(mut self, locale: NumberLocale) -> Self {
        self.locale = locale;
        self
    }
}

/// Drawable bar for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarGeometry {
    pub label: String,
    pub value: f64,
    /// Height relative to the largest value in the sequence, 0–100.
    pub height_percent: f64,
    /// Locale-formatted value for the hover label.
    pub display_value: String,
    /// Left edge of the bar, percent of the drawing width.
    pub band_start: f64,
    /// Width of the bar, percent of the drawing width.
    pub band_width: f64,
}

/// Compute one bar per record, preserving record order.
///
/// Missing values render as zero-height bars. A blank value field renders nothing.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute_bar_geometry(records: &[Record], config: &BarConfig) -> Vec<BarGeometry> {
    if config.value_field.trim().is_empty() {
        log::warn!("bar chart has no value field; rendering nothing");
        return Vec::new();
    }
    if records.is_empty() {
        return Vec::new();
    }

    let values: Vec<f64> = records
        .iter()
        .map(|r| field_value(r, &config.value_field))
        .collect();
    let max = bar_max(values.iter().copied());
    if max <= 0.0 {
        log::debug!(
            "bar chart '{}' has no positive values; all heights are 0",
            config.value_field
        );
    }

    let slot = UNIT / records.len() as f64;
    let band_width = slot * BAR_FILL_RATIO;
    let inset = (slot - band_width) / 2.0;

    records
        .iter()
        .zip(values)
        .enumerate()
        .map(|(i, (record, value))| BarGeometry {
            label: field_label(record, &config.category_field),
            value,
            height_percent: value_to_bar_height_percent(value, max),
            display_value: format_number(value, config.locale),
            band_start: slot.mul_add(i as f64, inset),
            band_width,
        })
        .collect()
}

#[cfg(test)]
#[path = "bar_tests.rs"]
mod tests;
