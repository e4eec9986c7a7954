//! Dashboard stat card: headline value, description, and an optional trend badge.

use std::fmt::Write;

use serde::Serialize;

use super::{Trend, TrendColor, TrendIcon, TrendUnit, classify_trend_with};
use crate::format::NumberLocale;

/// Icon, color, and text shown when a card has a delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendBadge {
    pub icon: TrendIcon,
    pub color: TrendColor,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub description: String,
    pub trend: Trend,
}

impl StatCard {
    #[must_use]
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            description: String::new(),
            trend: classify_trend_with(None, TrendUnit::default(), NumberLocale::default()),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_delta(mut self, delta: Option<f64>, unit: TrendUnit, locale: NumberLocale) -> Self {
        self.trend = classify_trend_with(delta, unit, locale);
        self
    }

    /// Badge for the trend, or `None` when the card has no delta.
    #[must_use]
    pub fn badge(&self) -> Option<TrendBadge> {
        Some(TrendBadge {
            icon: self.trend.icon?,
            color: self.trend.color?,
            text: self.trend.display_text.clone()?,
        })
    }

    /// One-line summary: `Title: value [↑ +5%] description`.
    #[must_use]
    pub fn summary_line(&self) -> String {
        let mut line = format!("{}: {}", self.title, self.value);
        if let Some(badge) = self.badge() {
            let _ = write!(line, " [{} {}]", badge.icon.glyph(), badge.text);
        }
        if !self.description.is_empty() {
            line.push(' ');
            line.push_str(&self.description);
        }
        line
    }
}

#[cfg(test)]
#[path = "stat_card_tests.rs"]
mod tests;
