//! Tests for composite chart types.

use super::*;
use crate::chart::{
    BarConfig, LineConfig, SeriesDescriptor, compute_bar_geometry, compute_line_geometry,
};
use crate::record::parse_records;

fn bars() -> Vec<BarGeometry> {
    let records = parse_records(r#"[{"m":"Jan","v":10},{"m":"Feb","v":5}]"#).unwrap();
    compute_bar_geometry(&records, &BarConfig::new("m", "v"))
}

fn lines(series: Vec<SeriesDescriptor>) -> LineGeometry {
    let records = parse_records(
        r#"[{"d":"Mon","a":10,"b":-5},{"d":"Tue","a":20,"b":5},{"d":"Wed","a":0,"b":0}]"#,
    )
    .unwrap();
    compute_line_geometry(&records, &LineConfig::new("d", series))
}

mod bar_chart_tests {
    use super::*;

    #[test]
    fn renders_svg_frame_with_title() {
        let data = bars();
        let svg = BarChartSvg::new("Revenue", &data).render();

        assert!(svg.starts_with("<svg viewBox=\"0 0 400 200\""));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("role=\"img\""));
        assert!(svg.contains("<title>Revenue</title>"));
    }

    #[test]
    fn maps_bands_into_plot_area() {
        let data = bars();
        let svg = BarChartSvg::new("Revenue", &data).render();

        assert!(svg.contains(r#"<rect x="56" y="40" width="128" height="120""#));
        assert!(svg.contains(r#"<rect x="216" y="100" width="128" height="60""#));
    }

    #[test]
    fn bars_carry_hover_labels() {
        let data = bars();
        let svg = BarChartSvg::new("Revenue", &data).render();

        assert!(svg.contains("<title>Jan: 10</title>"));
        assert!(svg.contains("<title>Feb: 5</title>"));
        assert!(svg.contains(">Jan</text>"));
    }

    #[test]
    fn custom_size_and_color() {
        let data = bars();
        let svg = BarChartSvg::new("Revenue", &data)
            .with_size(600.0, 300.0)
            .with_color(ChartColor::hex("#ff0000"))
            .render();

        assert!(svg.contains("viewBox=\"0 0 600 300\""));
        assert!(svg.contains("fill=\"#ff0000\""));
    }

    #[test]
    fn empty_shows_message() {
        let svg = BarChartSvg::new("Nothing", &[]).render();
        assert!(svg.contains("No data available"));
        assert!(!svg.contains("<rect"));
    }

    #[test]
    fn title_is_escaped() {
        let data = bars();
        let svg = BarChartSvg::new("R&D <2024>", &data).render();
        assert!(svg.contains("<title>R&amp;D &lt;2024&gt;</title>"));
    }
}

mod line_chart_tests {
    use super::*;

    #[test]
    fn series_color_is_escaped() {
        let geometry = lines(vec![SeriesDescriptor::new(
            "a",
            "Alpha",
            "#fff\" onmouseover=\"alert(1)",
        )]);
        let svg = LineChartSvg::new("Traffic", &geometry).render();
        assert!(!svg.contains(r#"onmouseover="alert(1)""#));
        assert!(svg.contains(r##"stroke="#fff&quot; onmouseover=&quot;alert(1)""##));
        assert!(svg.contains(r##"fill="#fff&quot; onmouseover=&quot;alert(1)""##));
    }

    #[test]
    fn draws_one_path_per_series() {
        let geometry = lines(vec![
            SeriesDescriptor::new("a", "Alpha", "#111111"),
            SeriesDescriptor::new("b", "Beta", "warning"),
        ]);
        let svg = LineChartSvg::new("Traffic", &geometry).render();

        assert_eq!(svg.matches("<path ").count(), 2);
        assert!(svg.contains(&format!("d=\"{}\"", geometry.per_series[0].path)));
        assert!(svg.contains("stroke=\"#111111\""));
        assert!(svg.contains("stroke=\"var(--color-warning)\""));
    }

    #[test]
    fn markers_carry_hover_labels() {
        let geometry = lines(vec![SeriesDescriptor::new("a", "Alpha", "")]);
        let svg = LineChartSvg::new("Traffic", &geometry).render();

        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains("<title>Mon: 10</title>"));
        assert!(svg.contains("<title>Tue: 20</title>"));
    }

    #[test]
    fn points_can_be_hidden() {
        let geometry = lines(vec![SeriesDescriptor::new("a", "Alpha", "")]);
        let svg = LineChartSvg::new("Traffic", &geometry)
            .with_points(false)
            .render();
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn grid_is_dashed_and_labelled_from_domain() {
        let geometry = lines(vec![SeriesDescriptor::new("a", "Alpha", "")]);
        let svg = LineChartSvg::new("Traffic", &geometry).render();

        assert_eq!(svg.matches("stroke-dasharray=\"4,4\"").count(), 5);
        assert!(svg.contains(">20</text>"));
        assert!(svg.contains(">15</text>"));
        assert!(svg.contains(">0</text>"));
    }

    #[test]
    fn axis_labels_use_locale() {
        let records =
            parse_records(r#"[{"d":"Mon","a":1000},{"d":"Tue","a":2500}]"#).unwrap();
        let geometry = compute_line_geometry(
            &records,
            &LineConfig::new("d", vec![SeriesDescriptor::new("a", "A", "")]),
        );
        let svg = LineChartSvg::new("Big", &geometry)
            .with_locale(NumberLocale::De)
            .render();
        assert!(svg.contains(">2.500</text>"));
    }

    #[test]
    fn x_axis_shows_categories() {
        let geometry = lines(vec![SeriesDescriptor::new("a", "Alpha", "")]);
        let svg = LineChartSvg::new("Traffic", &geometry).render();
        assert!(svg.contains(">Mon</text>"));
        assert!(svg.contains(">Wed</text>"));
    }

    #[test]
    fn legend_only_for_multiple_series() {
        let single = lines(vec![SeriesDescriptor::new("a", "Alpha", "")]);
        let svg = LineChartSvg::new("One", &single).render();
        assert!(!svg.contains(">Alpha</text>"));

        let multi = lines(vec![
            SeriesDescriptor::new("a", "Alpha", ""),
            SeriesDescriptor::new("b", "Beta", ""),
        ]);
        let svg = LineChartSvg::new("Two", &multi).render();
        assert!(svg.contains(">Alpha</text>"));
        assert!(svg.contains(">Beta</text>"));
    }

    #[test]
    fn empty_geometry_shows_message() {
        let geometry = LineGeometry::empty();
        let svg = LineChartSvg::new("Nothing", &geometry).render();
        assert!(svg.contains("No data available"));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn long_categories_are_shortened() {
        assert_eq!(shorten("September 2024"), "September…");
        assert_eq!(shorten("Q1"), "Q1");
    }
}
