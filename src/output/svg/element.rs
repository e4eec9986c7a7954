//! Primitive SVG elements: bars, point markers, grid lines, and labels.

use super::format::{html_escape, px};
use super::style::{ChartColor, TextAnchor};

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// A single bar with its hover label.
#[derive(Debug, Clone)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: ChartColor,
    /// Text of the `<title>` tooltip.
    pub hover: String,
}

impl SvgElement for Bar {
    fn render(&self) -> String {
        let color = self.color.to_css();
        let hover = html_escape(&self.hover);
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{color}" rx="2">
    <title>{hover}</title>
</rect>"#,
            px(self.x),
            px(self.y),
            px(self.width),
            px(self.height)
        )
    }
}

/// Point marker on a line, carrying its hover label.
#[derive(Debug, Clone)]
pub struct Marker {
    pub cx: f64,
    pub cy: f64,
    pub color: ChartColor,
    pub hover: String,
}

impl SvgElement for Marker {
    fn render(&self) -> String {
        let color = self.color.to_css();
        let hover = html_escape(&self.hover);
        format!(
            r#"<circle cx="{}" cy="{}" r="4" fill="{color}" stroke="var(--color-card, white)" stroke-width="2">
    <title>{hover}</title>
</circle>"#,
            px(self.cx),
            px(self.cy)
        )
    }
}

/// Horizontal rule across the drawing area.
#[derive(Debug, Clone)]
pub struct GridLine {
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
    pub dashed: bool,
}

impl SvgElement for GridLine {
    fn render(&self) -> String {
        let color = ChartColor::css_var("border").to_css();
        let dash = if self.dashed {
            r#" stroke-dasharray="4,4" opacity="0.5""#
        } else {
            ""
        };
        let y = px(self.y);
        format!(
            r#"<line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="{color}" stroke-width="1"{dash}/>"#,
            px(self.x1),
            px(self.x2)
        )
    }
}

/// Positioned text label.
#[derive(Debug, Clone)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub anchor: TextAnchor,
    pub color: ChartColor,
    pub font_size: f64,
}

impl Label {
    #[must_use]
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            anchor: TextAnchor::Middle,
            color: ChartColor::css_var("text-muted"),
            font_size: 10.0,
        }
    }

    #[must_use]
    pub const fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }
}

impl SvgElement for Label {
    fn render(&self) -> String {
        format!(
            r#"<text x="{}" y="{}" text-anchor="{}" fill="{}" font-size="{}">{}</text>"#,
            px(self.x),
            px(self.y),
            self.anchor,
            self.color.to_css(),
            self.font_size,
            html_escape(&self.text)
        )
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
