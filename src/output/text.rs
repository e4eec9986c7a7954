use std::fmt::Write;

use crate::chart::{BarGeometry, ChartGeometry, LineGeometry};
use crate::error::Result;
use crate::format::{NumberLocale, format_number};
use crate::trend::{StatCard, Trend};

use super::OutputFormatter;

/// Characters used for a full-height bar.
const BAR_CELLS: usize = 20;

pub struct TextFormatter {
    locale: NumberLocale,
}

impl TextFormatter {
    #[must_use]
    pub const fn new(locale: NumberLocale) -> Self {
        Self { locale }
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn bar_cells(height_percent: f64) -> String {
        let filled = (height_percent.clamp(0.0, 100.0) / 100.0 * BAR_CELLS as f64).round() as usize;
        format!("{}{}", "█".repeat(filled), " ".repeat(BAR_CELLS - filled))
    }

    fn write_bars(output: &mut String, bars: &[BarGeometry]) {
        let width = bars
            .iter()
            .map(|b| b.label.chars().count())
            .max()
            .unwrap_or(0);
        for bar in bars {
            let _ = writeln!(
                output,
                "  {:<width$}  {}  {:>5.1}%  {}",
                bar.label,
                Self::bar_cells(bar.height_percent),
                bar.height_percent,
                bar.display_value,
            );
        }
    }

    fn write_lines(&self, output: &mut String, line: &LineGeometry) {
        let _ = writeln!(
            output,
            "  Domain: {} .. {}",
            format_number(line.domain.min, self.locale),
            format_number(line.domain.max, self.locale),
        );
        for series in &line.per_series {
            let _ = writeln!(output, "  {} ({})", series.label, series.color);
            if !series.path.is_empty() {
                let _ = writeln!(output, "    path: {}", series.path);
            }
            for hover in &series.hover_labels {
                let _ = writeln!(output, "    {hover}");
            }
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_chart(&self, title: &str, geometry: &ChartGeometry) -> Result<String> {
        let mut output = String::new();
        let _ = writeln!(output, "{title} ({})", geometry.kind());

        if geometry.is_empty() {
            output.push_str("  No data available\n");
            return Ok(output);
        }

        match geometry {
            ChartGeometry::Bar(bars) => Self::write_bars(&mut output, bars),
            ChartGeometry::Line(line) => self.write_lines(&mut output, line),
        }
        Ok(output)
    }

    fn format_stats(&self, cards: &[StatCard]) -> Result<String> {
        let mut output = String::new();
        for card in cards {
            let _ = writeln!(output, "{}", card.summary_line());
        }
        Ok(output)
    }

    fn format_trend(&self, trend: &Trend) -> Result<String> {
        let line = match (trend.icon, trend.display_text.as_deref()) {
            (Some(icon), Some(text)) => {
                format!("{} {text} ({})\n", icon.glyph(), trend.state.as_str())
            }
            _ => "No comparison data\n".to_string(),
        };
        Ok(line)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
