mod json;
pub mod svg;
mod text;

pub use json::JsonFormatter;
pub use svg::SvgFormatter;
pub use text::TextFormatter;

use serde::{Deserialize, Serialize};

use crate::chart::ChartGeometry;
use crate::error::Result;
use crate::format::NumberLocale;
use crate::trend::{StatCard, Trend};

/// Trait for formatting computed geometry into various output formats.
pub trait OutputFormatter {
    /// Format one chart's geometry.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_chart(&self, title: &str, geometry: &ChartGeometry) -> Result<String>;

    /// Format a set of stat cards.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_stats(&self, cards: &[StatCard]) -> Result<String>;

    /// Format a single classified delta.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_trend(&self, trend: &Trend) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Svg,
}

impl OutputFormat {
    /// File extension used when writing batch output.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
            Self::Svg => "svg",
        }
    }

    /// Formatter for this format. `locale` applies to numbers the formatter prints itself.
    #[must_use]
    pub fn formatter(self, locale: NumberLocale) -> Box<dyn OutputFormatter + Send + Sync> {
        match self {
            Self::Text => Box::new(TextFormatter::new(locale)),
            Self::Json => Box::new(JsonFormatter),
            Self::Svg => Box::new(SvgFormatter::new(locale)),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "svg" => Ok(Self::Svg),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
