//! Scale engine shared by the bar and line renderers.
//!
//! Lines use a zero-floored `[min, max]` domain and map values into a unit
//! drawing space where larger values sit higher (smaller `y`). Bars use a
//! simpler ratio against the largest observed value.

use serde::Serialize;

/// Extent of the unit drawing space on each axis.
pub const UNIT: f64 = 100.0;

/// Position used for every value when the domain has zero range.
pub const MIDPOINT: f64 = UNIT / 2.0;

/// Closed value interval a series is normalized against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Default for Domain {
    fn default() -> Self {
        Self { min: 0.0, max: 0.0 }
    }
}

impl Domain {
    /// Domain covering every value of every series, extended to include zero.
    ///
    /// Non-finite values are ignored. Empty input yields `{0, 0}`.
    pub fn from_series<'a, I>(series: I) -> Self
    where
        I: IntoIterator<Item = &'a [f64]>,
    {
        series
            .into_iter()
            .flat_map(|values| values.iter().copied())
            .filter(|v| v.is_finite())
            .fold(Self::default(), |domain, v| Self {
                min: domain.min.min(v),
                max: domain.max.max(v),
            })
    }

    #[must_use]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Map a value into `[0, 100]`: `max` lands on 0 (top), `min` on 100 (bottom).
    ///
    /// A zero-range domain maps every value to the midpoint.
    #[must_use]
    pub fn value_to_position(&self, value: f64) -> f64 {
        let range = self.range();
        if range <= 0.0 || !range.is_finite() {
            return MIDPOINT;
        }
        UNIT - (value - self.min) / range * UNIT
    }
}

/// Largest observed bar value, or `0` when nothing positive was observed.
pub fn bar_max<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max)
}

/// Bar height as a percentage of `max`, clamped to `[0, 100]`; `0` when `max` is not positive.
#[must_use]
pub fn value_to_bar_height_percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / max * UNIT).clamp(0.0, UNIT)
}

#[cfg(test)]
#[path = "scale_tests.rs"]
mod tests;
