//! SVG styling primitives: colors and text anchoring.

use std::fmt;

use super::format::html_escape;
use crate::trend::TrendColor;

/// CSS named colors, passed through as literals.
const NAMED_COLORS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue",
    "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki",
    "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon",
    "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise",
    "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick",
    "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod",
    "gray", "green", "greenyellow", "grey", "honeydew", "hotpink", "indianred", "indigo",
    "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon", "lightblue",
    "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey",
    "lightpink", "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray",
    "lightslategrey", "lightsteelblue", "lightyellow", "lime", "limegreen", "linen",
    "magenta", "maroon", "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple",
    "mediumseagreen", "mediumslateblue", "mediumspringgreen", "mediumturquoise",
    "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite",
    "navy", "oldlace", "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod",
    "palegreen", "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink",
    "plum", "powderblue", "purple", "rebeccapurple", "red", "rosybrown", "royalblue",
    "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver",
    "skyblue", "slateblue", "slategray", "slategrey", "snow", "springgreen", "steelblue",
    "tan", "teal", "thistle", "tomato", "transparent", "turquoise", "violet", "wheat",
    "white", "whitesmoke", "yellow", "yellowgreen", "currentcolor",
];

/// Color specification supporting CSS variables for dark mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartColor {
    /// Literal CSS color (e.g., "#22c55e")
    Hex(String),
    /// CSS variable reference (e.g., "success" → "var(--color-success)")
    CssVar(String),
}

impl ChartColor {
    #[must_use]
    pub fn css_var(name: &str) -> Self {
        Self::CssVar(name.to_string())
    }

    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self::Hex(color.to_string())
    }

    /// Interpret a configured series color.
    ///
    /// `#rrggbb`, functional notations (`rgb(...)`, `hsl(...)`) and CSS named colors
    /// are used as written; any other name refers to a `--color-<name>` variable.
    #[must_use]
    pub fn parse(color: &str) -> Self {
        let color = color.trim();
        if color.starts_with('#')
            || color.contains('(')
            || NAMED_COLORS.contains(&color.to_ascii_lowercase().as_str())
        {
            Self::hex(color)
        } else {
            Self::css_var(color)
        }
    }

    /// Convert to a CSS value string, escaped for use in an attribute.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Hex(h) => html_escape(h),
            Self::CssVar(name) => html_escape(&format!("var(--color-{name})")),
        }
    }
}

impl From<TrendColor> for ChartColor {
    fn from(color: TrendColor) -> Self {
        match color {
            TrendColor::Success => Self::css_var("success"),
            TrendColor::Danger => Self::css_var("danger"),
            TrendColor::Neutral => Self::css_var("text-muted"),
        }
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
