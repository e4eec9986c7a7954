//! Composite chart types painting precomputed bar and line geometry.

use std::fmt::Write;

use super::element::{Bar, GridLine, Label, Marker, SvgElement};
use super::format::{html_escape, px};
use super::style::{ChartColor, TextAnchor};
use crate::chart::{BarGeometry, LineGeometry};
use crate::format::{NumberLocale, format_number};
use crate::scale::UNIT;

/// Grid rows drawn behind a line chart, including both edges.
const GRID_STEPS: u32 = 4;

/// X-axis labels longer than this are shortened with an ellipsis.
const MAX_LABEL_CHARS: usize = 10;

/// Padded drawing area inside the `viewBox`; maps the 0–100 unit space to pixels.
#[derive(Debug, Clone, Copy)]
struct PlotArea {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl PlotArea {
    fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            left: padding,
            top: padding,
            width: padding.mul_add(-2.0, width).max(0.0),
            height: padding.mul_add(-2.0, height).max(0.0),
        }
    }

    fn x(self, unit: f64) -> f64 {
        (unit / UNIT).mul_add(self.width, self.left)
    }

    fn y(self, unit: f64) -> f64 {
        (unit / UNIT).mul_add(self.height, self.top)
    }

    fn bottom(self) -> f64 {
        self.top + self.height
    }

    fn right(self) -> f64 {
        self.left + self.width
    }
}

fn open_svg(output: &mut String, width: f64, height: f64, title: &str) {
    let _ = writeln!(
        output,
        r#"<svg viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg" role="img">"#
    );
    let _ = writeln!(output, r"    <title>{}</title>", html_escape(title));
}

fn push_element<E: SvgElement>(output: &mut String, element: &E) {
    for line in element.render().lines() {
        let _ = writeln!(output, "    {line}");
    }
}

fn empty_state(output: &mut String, width: f64, height: f64) {
    let label = Label::new(width / 2.0, height / 2.0, "No data available").with_font_size(14.0);
    push_element(output, &label);
    output.push_str("</svg>");
}

fn shorten(label: &str) -> String {
    if label.chars().count() > MAX_LABEL_CHARS {
        let head: String = label.chars().take(MAX_LABEL_CHARS - 1).collect();
        format!("{head}…")
    } else {
        label.to_string()
    }
}

/// Vertical bar chart over [`BarGeometry`].
#[derive(Debug)]
pub struct BarChartSvg<'a> {
    pub title: &'a str,
    pub bars: &'a [BarGeometry],
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub bar_color: ChartColor,
    pub show_values: bool,
}

impl<'a> BarChartSvg<'a> {
    #[must_use]
    pub fn new(title: &'a str, bars: &'a [BarGeometry]) -> Self {
        Self {
            title,
            bars,
            width: 400.0,
            height: 200.0,
            padding: 40.0,
            bar_color: ChartColor::css_var("chart-primary"),
            show_values: true,
        }
    }

    #[must_use]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.bar_color = color;
        self
    }
}

impl SvgElement for BarChartSvg<'_> {
    fn render(&self) -> String {
        let mut output = String::new();
        open_svg(&mut output, self.width, self.height, self.title);

        if self.bars.is_empty() {
            empty_state(&mut output, self.width, self.height);
            return output;
        }

        let area = PlotArea::new(self.width, self.height, self.padding);
        push_element(
            &mut output,
            &GridLine {
                x1: area.left,
                x2: area.right(),
                y: area.bottom(),
                dashed: false,
            },
        );

        for bar in self.bars {
            let x = area.x(bar.band_start);
            let width = bar.band_width / UNIT * area.width;
            let height = bar.height_percent / UNIT * area.height;
            let y = area.bottom() - height;
            let center = x + width / 2.0;

            push_element(
                &mut output,
                &Bar {
                    x,
                    y,
                    width,
                    height,
                    color: self.bar_color.clone(),
                    hover: format!("{}: {}", bar.label, bar.display_value),
                },
            );

            if self.show_values {
                let value = Label::new(center, y - 4.0, &bar.display_value)
                    .with_color(ChartColor::css_var("text"));
                push_element(&mut output, &value);
            }

            let label = Label::new(center, self.height - 8.0, shorten(&bar.label));
            push_element(&mut output, &label);
        }

        output.push_str("</svg>");
        output
    }
}

/// Multi-series line chart over [`LineGeometry`].
#[derive(Debug)]
pub struct LineChartSvg<'a> {
    pub title: &'a str,
    pub geometry: &'a LineGeometry,
    pub locale: NumberLocale,
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub show_points: bool,
}

impl<'a> LineChartSvg<'a> {
    #[must_use]
    pub const fn new(title: &'a str, geometry: &'a LineGeometry) -> Self {
        Self {
            title,
            geometry,
            locale: NumberLocale::En,
            width: 500.0,
            height: 240.0,
            padding: 50.0,
            show_points: true,
        }
    }

    #[must_use]
    pub const fn with_locale(mut self, locale: NumberLocale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub const fn with_points(mut self, show: bool) -> Self {
        self.show_points = show;
        self
    }

    fn render_grid(&self, output: &mut String, area: PlotArea) {
        let domain = self.geometry.domain;
        for step in 0..=GRID_STEPS {
            let unit = UNIT * f64::from(step) / f64::from(GRID_STEPS);
            let y = area.y(unit);
            push_element(
                output,
                &GridLine {
                    x1: area.left,
                    x2: area.right(),
                    y,
                    dashed: true,
                },
            );
            let value = domain.range().mul_add(-unit / UNIT, domain.max);
            let label = Label::new(area.left - 8.0, y + 3.0, format_number(value, self.locale))
                .with_anchor(TextAnchor::End);
            push_element(output, &label);
        }

        if domain.range() > 0.0 {
            push_element(
                output,
                &GridLine {
                    x1: area.left,
                    x2: area.right(),
                    y: area.y(domain.value_to_position(0.0)),
                    dashed: false,
                },
            );
        }
    }

    fn render_series(&self, output: &mut String, area: PlotArea) {
        let scale_x = area.width / UNIT;
        let scale_y = area.height / UNIT;
        for series in &self.geometry.per_series {
            let color = ChartColor::parse(&series.color);
            if !series.path.is_empty() {
                let _ = writeln!(
                    output,
                    r#"    <path d="{}" transform="translate({},{}) scale({},{})" fill="none" stroke="{}" stroke-width="2" vector-effect="non-scaling-stroke" stroke-linecap="round" stroke-linejoin="round"/>"#,
                    series.path,
                    px(area.left),
                    px(area.top),
                    px(scale_x),
                    px(scale_y),
                    color.to_css()
                );
            }

            if self.show_points {
                for (point, hover) in series.points.iter().zip(&series.hover_labels) {
                    let marker = Marker {
                        cx: area.x(point.x),
                        cy: area.y(point.y),
                        color: color.clone(),
                        hover: hover.clone(),
                    };
                    push_element(output, &marker);
                }
            }
        }
    }

    fn render_x_labels(&self, output: &mut String, area: PlotArea) {
        let Some(series) = self.geometry.per_series.first() else {
            return;
        };
        let count = series.points.len();
        let stride = (count / 5).max(1);
        for (i, (point, category)) in series
            .points
            .iter()
            .zip(&self.geometry.categories)
            .enumerate()
        {
            if i == 0 || i == count - 1 || (count > 5 && i % stride == 0) {
                let label = Label::new(area.x(point.x), area.bottom() + 14.0, shorten(category))
                    .with_font_size(9.0);
                push_element(output, &label);
            }
        }
    }

    fn render_legend(&self, output: &mut String, area: PlotArea) {
        if self.geometry.per_series.len() < 2 {
            return;
        }
        let mut x = area.left;
        let y = area.top / 2.0;
        for series in &self.geometry.per_series {
            let color = ChartColor::parse(&series.color).to_css();
            let _ = writeln!(
                output,
                r#"    <rect x="{}" y="{}" width="10" height="10" fill="{color}" rx="2"/>"#,
                px(x),
                px(y - 8.0)
            );
            let label = Label::new(x + 14.0, y, &series.label)
                .with_anchor(TextAnchor::Start)
                .with_color(ChartColor::css_var("text"));
            push_element(output, &label);
            #[allow(clippy::cast_precision_loss)]
            let advance = (series.label.chars().count() as f64).mul_add(6.0, 30.0);
            x += advance;
        }
    }
}

impl SvgElement for LineChartSvg<'_> {
    fn render(&self) -> String {
        let mut output = String::new();
        open_svg(&mut output, self.width, self.height, self.title);

        if self.geometry.per_series.iter().all(|s| s.points.is_empty()) {
            empty_state(&mut output, self.width, self.height);
            return output;
        }

        let area = PlotArea::new(self.width, self.height, self.padding);
        self.render_grid(&mut output, area);
        self.render_series(&mut output, area);
        self.render_x_labels(&mut output, area);
        self.render_legend(&mut output, area);

        output.push_str("</svg>");
        output
    }
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
