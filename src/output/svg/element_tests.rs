use super::*;

#[test]
fn bar_renders_rect_with_title() {
    let bar = Bar {
        x: 10.0,
        y: 20.5,
        width: 30.0,
        height: 40.0,
        color: ChartColor::hex("#22c55e"),
        hover: "Jan: 1,200".to_string(),
    };
    let svg = bar.render();
    assert!(svg.starts_with(r##"<rect x="10" y="20.5" width="30" height="40" fill="#22c55e""##));
    assert!(svg.contains("<title>Jan: 1,200</title>"));
}

#[test]
fn marker_escapes_hover() {
    let marker = Marker {
        cx: 1.0,
        cy: 2.0,
        color: ChartColor::css_var("chart-primary"),
        hover: "<Q1>: 5".to_string(),
    };
    let svg = marker.render();
    assert!(svg.contains(r#"cx="1" cy="2""#));
    assert!(svg.contains("fill=\"var(--color-chart-primary)\""));
    assert!(svg.contains("<title>&lt;Q1&gt;: 5</title>"));
}

#[test]
fn grid_line_dash_is_optional() {
    let dashed = GridLine {
        x1: 0.0,
        x2: 100.0,
        y: 50.0,
        dashed: true,
    };
    assert!(dashed.render().contains("stroke-dasharray"));

    let solid = GridLine {
        dashed: false,
        ..dashed
    };
    let svg = solid.render();
    assert!(!svg.contains("stroke-dasharray"));
    assert!(svg.contains(r#"y1="50" x2="100" y2="50""#));
}

#[test]
fn label_builder() {
    let label = Label::new(5.0, 6.0, "a & b")
        .with_anchor(TextAnchor::End)
        .with_color(ChartColor::css_var("text"))
        .with_font_size(12.0);
    assert_eq!(
        label.render(),
        r#"<text x="5" y="6" text-anchor="end" fill="var(--color-text)" font-size="12">a &amp; b</text>"#
    );
}
