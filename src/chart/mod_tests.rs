use super::*;
use crate::record::parse_records;

#[test]
fn request_dispatches_by_kind() {
    let records = parse_records(r#"[{"m":"Jan","v":4},{"m":"Feb","v":2}]"#).unwrap();

    let bar = compute_geometry(&records, &ChartRequest::Bar(BarConfig::new("m", "v")));
    assert!(matches!(bar, ChartGeometry::Bar(ref bars) if bars.len() == 2));

    let line = compute_geometry(
        &records,
        &ChartRequest::Line(LineConfig::new(
            "m",
            vec![SeriesDescriptor::new("v", "Value", "")],
        )),
    );
    assert!(matches!(line, ChartGeometry::Line(ref g) if g.per_series.len() == 1));
}

#[test]
fn request_kind_names() {
    assert_eq!(ChartRequest::Bar(BarConfig::new("a", "b")).kind(), "bar");
    assert_eq!(ChartRequest::Line(LineConfig::new("a", vec![])).kind(), "line");
}

#[test]
fn request_round_trips_through_tagged_json() {
    let json = r#"{"kind":"bar","category_field":"month","value_field":"sales"}"#;
    let request: ChartRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request, ChartRequest::Bar(BarConfig::new("month", "sales")));
}

#[test]
fn empty_geometry_detection() {
    assert!(ChartGeometry::Bar(Vec::new()).is_empty());
    assert!(ChartGeometry::Line(LineGeometry::empty()).is_empty());

    let records = parse_records(r#"[{"m":"Jan","v":4}]"#).unwrap();
    let bar = compute_geometry(&records, &ChartRequest::Bar(BarConfig::new("m", "v")));
    assert!(!bar.is_empty());
}

#[test]
fn geometry_serializes_without_tag() {
    let records = parse_records(r#"[{"m":"Jan","v":4}]"#).unwrap();
    let bar = compute_geometry(&records, &ChartRequest::Bar(BarConfig::new("m", "v")));
    let json = serde_json::to_value(&bar).unwrap();
    assert!(json.is_array());
    assert_eq!(json[0]["label"], "Jan");
}
