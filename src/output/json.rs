use serde::Serialize;

use crate::chart::ChartGeometry;
use crate::error::Result;
use crate::trend::{StatCard, Trend, TrendBadge};

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct ChartOutput<'a> {
    title: &'a str,
    kind: &'static str,
    geometry: &'a ChartGeometry,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatOutput<'a> {
    title: &'a str,
    value: &'a str,
    description: &'a str,
    trend: &'a Trend,
    badge: Option<TrendBadge>,
}

impl OutputFormatter for JsonFormatter {
    fn format_chart(&self, title: &str, geometry: &ChartGeometry) -> Result<String> {
        let output = ChartOutput {
            title,
            kind: geometry.kind(),
            geometry,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_stats(&self, cards: &[StatCard]) -> Result<String> {
        let output: Vec<StatOutput<'_>> = cards
            .iter()
            .map(|card| StatOutput {
                title: &card.title,
                value: &card.value,
                description: &card.description,
                trend: &card.trend,
                badge: card.badge(),
            })
            .collect();
        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_trend(&self, trend: &Trend) -> Result<String> {
        Ok(serde_json::to_string_pretty(trend)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
