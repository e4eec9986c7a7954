use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::chart::{BarConfig, ChartRequest, LineConfig, SeriesDescriptor};
use crate::error::{ChartError, Result};
use crate::format::NumberLocale;
use crate::output::OutputFormat;
use crate::trend::{StatCard, TrendUnit};

pub const DEFAULT_OUTPUT_DIR: &str = "charts";

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

/// Batch render configuration, usually read from `charts.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default)]
    pub format: OutputFormat,

    /// Locale for charts and stat cards that do not set their own.
    #[serde(default)]
    pub locale: NumberLocale,

    #[serde(default, rename = "chart")]
    pub charts: Vec<ChartEntry>,

    #[serde(default, rename = "stat")]
    pub stats: Vec<StatEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            format: OutputFormat::default(),
            locale: NumberLocale::default(),
            charts: Vec::new(),
            stats: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
}

/// One `[[chart]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartEntry {
    /// Output file stem; unique within a config.
    pub name: String,
    pub kind: ChartKind,
    #[serde(default)]
    pub title: String,
    /// JSON records file, relative to the config file.
    pub records: PathBuf,
    #[serde(default)]
    pub category_field: String,
    /// Bar charts only.
    #[serde(default)]
    pub value_field: String,
    /// Line charts only.
    #[serde(default)]
    pub series: Vec<SeriesDescriptor>,
    #[serde(default)]
    pub locale: Option<NumberLocale>,
}

impl ChartEntry {
    /// Geometry request for this entry, falling back to `default_locale`.
    #[must_use]
    pub fn request(&self, default_locale: NumberLocale) -> ChartRequest {
        let locale = self.locale.unwrap_or(default_locale);
        match self.kind {
            ChartKind::Bar => ChartRequest::Bar(
                BarConfig::new(&self.category_field, &self.value_field).with_locale(locale),
            ),
            ChartKind::Line => ChartRequest::Line(
                LineConfig::new(&self.category_field, self.series.clone()).with_locale(locale),
            ),
        }
    }

    /// Title to print, or the entry name when no title is set.
    #[must_use]
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.name
        } else {
            &self.title
        }
    }
}

/// One `[[stat]]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatEntry {
    pub title: String,
    /// Headline value, shown as written.
    pub value: String,
    #[serde(default)]
    pub delta: Option<f64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub unit: TrendUnit,
}

impl StatEntry {
    #[must_use]
    pub fn card(&self, locale: NumberLocale) -> StatCard {
        StatCard::new(&self.title, &self.value)
            .with_description(&self.description)
            .with_delta(self.delta, self.unit, locale)
    }
}

impl Config {
    /// Check chart names and warn about entries that will render empty.
    ///
    /// # Errors
    /// Returns [`ChartError::Config`] for blank, duplicate, or path-like chart names.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (index, chart) in self.charts.iter().enumerate() {
            let name = chart.name.trim();
            if name.is_empty() {
                return Err(ChartError::Config(format!(
                    "chart[{index}]: name must not be empty"
                )));
            }
            if name.contains(['/', '\\']) || name == "." || name == ".." {
                return Err(ChartError::Config(format!(
                    "chart '{name}': name must be a plain file stem"
                )));
            }
            if name == "stats" && !self.stats.is_empty() {
                return Err(ChartError::Config(
                    "chart 'stats' collides with the stat card output".to_string(),
                ));
            }
            if !seen.insert(name) {
                return Err(ChartError::Config(format!(
                    "duplicate chart name '{name}'"
                )));
            }
            chart.warn_if_empty();
        }
        Ok(())
    }
}

impl ChartEntry {
    fn warn_if_empty(&self) {
        match self.kind {
            ChartKind::Bar if self.value_field.trim().is_empty() => {
                log::warn!("chart '{}': value_field is empty, nothing to draw", self.name);
            }
            ChartKind::Line if self.series.is_empty() => {
                log::warn!("chart '{}': no series configured, nothing to draw", self.name);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
