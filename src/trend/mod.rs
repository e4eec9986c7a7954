//! Stat trend indicator: sign classification of a delta plus its display affordance.

mod stat_card;

pub use stat_card::{StatCard, TrendBadge};

use serde::{Deserialize, Serialize};

use crate::format::{NumberLocale, format_signed};

/// Direction of a delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendState {
    Increasing,
    Decreasing,
    Flat,
    /// No delta available.
    None,
}

impl TrendState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Flat => "flat",
            Self::None => "none",
        }
    }
}

/// Icon kind shown next to the delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrendIcon {
    ArrowUp,
    ArrowDown,
    Minus,
}

impl TrendIcon {
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::ArrowUp => "↑",
            Self::ArrowDown => "↓",
            Self::Minus => "~",
        }
    }
}

/// Color kind for the delta badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendColor {
    Success,
    Danger,
    Neutral,
}

/// How the delta is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendUnit {
    /// `+5%`
    #[default]
    Percent,
    /// `+5`
    Absolute,
}

impl std::str::FromStr for TrendUnit {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "percent" | "%" => Ok(Self::Percent),
            "absolute" | "abs" => Ok(Self::Absolute),
            _ => Err(format!("Unknown trend unit: {s}")),
        }
    }
}

/// Classified delta with its display affordance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
    pub state: TrendState,
    /// Signed delta text; absent when there is no delta.
    pub display_text: Option<String>,
    pub icon: Option<TrendIcon>,
    pub color: Option<TrendColor>,
}

impl Trend {
    const fn none() -> Self {
        Self {
            state: TrendState::None,
            display_text: None,
            icon: None,
            color: None,
        }
    }

    #[must_use]
    pub const fn is_present(&self) -> bool {
        !matches!(self.state, TrendState::None)
    }
}

/// Classify a percentage delta with English formatting.
#[must_use]
pub fn classify_trend(delta: Option<f64>) -> Trend {
    classify_trend_with(delta, TrendUnit::Percent, NumberLocale::default())
}

/// Classify a delta: positive is increasing, negative decreasing, zero flat.
///
/// An absent or non-finite delta yields [`TrendState::None`] with no icon and no text.
#[must_use]
pub fn classify_trend_with(delta: Option<f64>, unit: TrendUnit, locale: NumberLocale) -> Trend {
    let Some(delta) = delta.filter(|d| d.is_finite()) else {
        return Trend::none();
    };

    let (state, icon, color) = if delta > 0.0 {
        (TrendState::Increasing, TrendIcon::ArrowUp, TrendColor::Success)
    } else if delta < 0.0 {
        (TrendState::Decreasing, TrendIcon::ArrowDown, TrendColor::Danger)
    } else {
        (TrendState::Flat, TrendIcon::Minus, TrendColor::Neutral)
    };

    let number = format_signed(delta, locale);
    let display_text = match unit {
        TrendUnit::Percent => format!("{number}%"),
        TrendUnit::Absolute => number,
    };

    Trend {
        state,
        display_text: Some(display_text),
        icon: Some(icon),
        color: Some(color),
    }
}

#[cfg(test)]
#[path = "trend_tests.rs"]
mod tests;
