//! Stat card tiles and standalone trend badges.

use std::fmt::Write;

use super::element::{Label, SvgElement};
use super::format::{html_escape, px};
use super::style::{ChartColor, TextAnchor};
use crate::trend::{StatCard, Trend};

const CARD_WIDTH: f64 = 220.0;
const CARD_HEIGHT: f64 = 96.0;
const CARD_GAP: f64 = 12.0;

/// Row of dashboard stat cards.
#[derive(Debug)]
pub struct StatCardsSvg<'a> {
    pub cards: &'a [StatCard],
}

impl<'a> StatCardsSvg<'a> {
    #[must_use]
    pub const fn new(cards: &'a [StatCard]) -> Self {
        Self { cards }
    }

    fn render_card(output: &mut String, card: &StatCard, x: f64) {
        let border = ChartColor::css_var("border").to_css();
        let _ = writeln!(
            output,
            r#"    <rect x="{}" y="0" width="{CARD_WIDTH}" height="{CARD_HEIGHT}" rx="6" fill="var(--color-card, white)" stroke="{border}"/>"#,
            px(x)
        );

        let left = x + 12.0;
        let title = Label::new(left, 22.0, &card.title).with_anchor(TextAnchor::Start);
        let value = Label::new(left, 54.0, &card.value)
            .with_anchor(TextAnchor::Start)
            .with_color(ChartColor::css_var("text"))
            .with_font_size(24.0);
        for element in [title, value] {
            let _ = writeln!(output, "    {}", element.render());
        }

        let mut caption = Vec::new();
        if let Some(badge) = card.badge() {
            let color = ChartColor::from(badge.color).to_css();
            caption.push(format!(
                r#"<tspan fill="{color}">{} {}</tspan>"#,
                badge.icon.glyph(),
                html_escape(&badge.text)
            ));
        }
        if !card.description.is_empty() {
            caption.push(html_escape(&card.description));
        }
        if !caption.is_empty() {
            let muted = ChartColor::css_var("text-muted").to_css();
            let _ = writeln!(
                output,
                r#"    <text x="{}" y="80" text-anchor="start" fill="{muted}" font-size="11">{}</text>"#,
                px(left),
                caption.join(" ")
            );
        }
    }
}

impl SvgElement for StatCardsSvg<'_> {
    #[allow(clippy::cast_precision_loss)]
    fn render(&self) -> String {
        let count = self.cards.len().max(1) as f64;
        let width = CARD_GAP.mul_add(count - 1.0, CARD_WIDTH * count);

        let mut output = String::new();
        let _ = writeln!(
            output,
            r#"<svg viewBox="0 0 {} {CARD_HEIGHT}" xmlns="http://www.w3.org/2000/svg" role="img">"#,
            px(width)
        );
        output.push_str("    <title>Stat cards</title>\n");

        if self.cards.is_empty() {
            let label = Label::new(width / 2.0, CARD_HEIGHT / 2.0, "No data available")
                .with_font_size(14.0);
            let _ = writeln!(output, "    {}", label.render());
        }

        for (i, card) in self.cards.iter().enumerate() {
            let x = (CARD_WIDTH + CARD_GAP) * i as f64;
            Self::render_card(&mut output, card, x);
        }

        output.push_str("</svg>");
        output
    }
}

/// Pill-shaped badge for one classified delta.
#[derive(Debug)]
pub struct TrendBadgeSvg<'a> {
    pub trend: &'a Trend,
}

impl<'a> TrendBadgeSvg<'a> {
    #[must_use]
    pub const fn new(trend: &'a Trend) -> Self {
        Self { trend }
    }
}

impl SvgElement for TrendBadgeSvg<'_> {
    fn render(&self) -> String {
        let mut output = String::new();
        output.push_str(
            r#"<svg viewBox="0 0 96 28" xmlns="http://www.w3.org/2000/svg" role="img">"#,
        );
        output.push('\n');

        let (Some(icon), Some(color), Some(text)) = (
            self.trend.icon,
            self.trend.color,
            self.trend.display_text.as_deref(),
        ) else {
            output.push_str("    <title>No comparison data</title>\n</svg>");
            return output;
        };

        let color = ChartColor::from(color).to_css();
        let text = html_escape(text);
        let _ = writeln!(
            output,
            r"    <title>{} {text}</title>",
            self.trend.state.as_str()
        );
        let _ = writeln!(
            output,
            r#"    <rect x="0" y="0" width="96" height="28" rx="14" fill="{color}" fill-opacity="0.15"/>"#
        );
        let _ = writeln!(
            output,
            r#"    <text x="48" y="18" text-anchor="middle" fill="{color}" font-size="12">{} {text}</text>"#,
            icon.glyph()
        );
        output.push_str("</svg>");
        output
    }
}

#[cfg(test)]
#[path = "cards_tests.rs"]
mod tests;
