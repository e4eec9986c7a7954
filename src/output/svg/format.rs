/// Escape text for use inside SVG element content and attribute values.
#[must_use]
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render a pixel coordinate with at most two decimals.
#[must_use]
pub fn px(value: f64) -> String {
    crate::chart::format_coord(value)
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
