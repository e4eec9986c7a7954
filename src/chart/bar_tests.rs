//! Tests for the bar renderer.

use serde_json::json;

use super::*;
use crate::record::parse_records;

fn sales() -> Vec<Record> {
    parse_records(
        &json!([
            {"month": "Jan", "sales": 100},
            {"month": "Feb", "sales": 0},
            {"month": "Mar", "sales": 50}
        ])
        .to_string(),
    )
    .unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn heights_are_percent_of_max() {
    let bars = compute_bar_geometry(&sales(), &BarConfig::new("month", "sales"));
    let heights: Vec<f64> = bars.iter().map(|b| b.height_percent).collect();
    assert_eq!(heights.len(), 3);
    assert!(approx(heights[0], 100.0));
    assert!(approx(heights[1], 0.0));
    assert!(approx(heights[2], 50.0));
}

#[test]
fn output_preserves_record_order() {
    let records = sales();
    let bars = compute_bar_geometry(&records, &BarConfig::new("month", "sales"));
    assert_eq!(bars.len(), records.len());
    let labels: Vec<&str> = bars.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, ["Jan", "Feb", "Mar"]);
}

#[test]
fn all_zero_values_give_zero_heights() {
    let records = parse_records(r#"[{"m":"a","v":0},{"m":"b","v":0}]"#).unwrap();
    let bars = compute_bar_geometry(&records, &BarConfig::new("m", "v"));
    for bar in &bars {
        assert!(approx(bar.height_percent, 0.0));
        assert!(!bar.height_percent.is_nan());
    }
}

#[test]
fn missing_value_renders_zero_height_bar() {
    let records = parse_records(r#"[{"m":"a","v":10},{"m":"b"},{"m":"c","v":null}]"#).unwrap();
    let bars = compute_bar_geometry(&records, &BarConfig::new("m", "v"));
    assert_eq!(bars.len(), 3);
    assert_eq!(bars[1].label, "b");
    assert!(approx(bars[1].value, 0.0));
    assert!(approx(bars[1].height_percent, 0.0));
    assert!(approx(bars[2].height_percent, 0.0));
}

#[test]
fn empty_records_give_no_bars() {
    let bars = compute_bar_geometry(&[], &BarConfig::new("m", "v"));
    assert!(bars.is_empty());
}

#[test]
fn blank_value_field_renders_nothing() {
    let bars = compute_bar_geometry(&sales(), &BarConfig::new("month", "  "));
    assert!(bars.is_empty());
}

#[test]
fn display_value_is_locale_formatted() {
    let records = parse_records(r#"[{"m":"a","v":1234.5}]"#).unwrap();
    let en = compute_bar_geometry(&records, &BarConfig::new("m", "v"));
    assert_eq!(en[0].display_value, "1,234.5");

    let de = compute_bar_geometry(
        &records,
        &BarConfig::new("m", "v").with_locale(NumberLocale::De),
    );
    assert_eq!(de[0].display_value, "1.234,5");
}

#[test]
fn bands_split_width_evenly() {
    let bars = compute_bar_geometry(&sales(), &BarConfig::new("month", "sales"));
    let slot = 100.0 / 3.0;
    for (i, bar) in bars.iter().enumerate() {
        assert!(approx(bar.band_width, slot * 0.8));
        #[allow(clippy::cast_precision_loss)]
        let centre = slot * (i as f64 + 0.5);
        assert!(approx(bar.band_start + bar.band_width / 2.0, centre));
    }
    let last = bars.last().unwrap();
    assert!(last.band_start + last.band_width <= 100.0);
}

#[test]
fn repeated_calls_are_identical() {
    let records = sales();
    let config = BarConfig::new("month", "sales");
    assert_eq!(
        compute_bar_geometry(&records, &config),
        compute_bar_geometry(&records, &config)
    );
}

#[test]
fn serializes_camel_case() {
    let bars = compute_bar_geometry(&sales(), &BarConfig::new("month", "sales"));
    let json = serde_json::to_value(&bars[0]).unwrap();
    assert_eq!(json["label"], "Jan");
    assert_eq!(json["heightPercent"], 100.0);
    assert_eq!(json["displayValue"], "100");
}
