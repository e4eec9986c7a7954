//! SVG painter for computed chart geometry.
//!
//! Charts scale through `viewBox`, use `var(--color-*)` CSS variables so a host
//! page can theme them, and carry `<title>` elements for hover labels and
//! screen readers. The painter never rescales data; it maps the 0–100 unit
//! space of the geometry into a padded drawing area.

mod cards;
mod chart;
mod element;
mod format;
mod style;

pub use cards::{StatCardsSvg, TrendBadgeSvg};
pub use chart::{BarChartSvg, LineChartSvg};
pub use element::{Bar, GridLine, Label, Marker, SvgElement};
pub use format::html_escape;
pub use style::{ChartColor, TextAnchor};

use crate::chart::ChartGeometry;
use crate::error::Result;
use crate::format::NumberLocale;
use crate::trend::{StatCard, Trend};

use super::OutputFormatter;

pub struct SvgFormatter {
    locale: NumberLocale,
}

impl SvgFormatter {
    #[must_use]
    pub const fn new(locale: NumberLocale) -> Self {
        Self { locale }
    }
}

impl OutputFormatter for SvgFormatter {
    fn format_chart(&self, title: &str, geometry: &ChartGeometry) -> Result<String> {
        let svg = match geometry {
            ChartGeometry::Bar(bars) => BarChartSvg::new(title, bars).render(),
            ChartGeometry::Line(line) => LineChartSvg::new(title, line)
                .with_locale(self.locale)
                .render(),
        };
        Ok(svg)
    }

    fn format_stats(&self, cards: &[StatCard]) -> Result<String> {
        Ok(StatCardsSvg::new(cards).render())
    }

    fn format_trend(&self, trend: &Trend) -> Result<String> {
        Ok(TrendBadgeSvg::new(trend).render())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
