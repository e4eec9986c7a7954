//! Tests for record field access and loading.

use serde_json::json;

use super::*;

fn record(value: serde_json::Value) -> Record {
    match value {
        serde_json::Value::Object(map) => map.into_iter().collect(),
        _ => panic!("test record must be an object"),
    }
}

mod field_value_tests {
    use super::*;

    #[test]
    fn reads_numbers() {
        let r = record(json!({"sales": 100, "ratio": 0.25, "loss": -3}));
        assert!((field_value(&r, "sales") - 100.0).abs() < f64::EPSILON);
        assert!((field_value(&r, "ratio") - 0.25).abs() < f64::EPSILON);
        assert!((field_value(&r, "loss") + 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_and_null_are_zero() {
        let r = record(json!({"sales": null}));
        assert!(field_value(&r, "sales").abs() < f64::EPSILON);
        assert!(field_value(&r, "absent").abs() < f64::EPSILON);
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let r = record(json!({"sales": " 12.5 "}));
        assert!((field_value(&r, "sales") - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn non_numeric_values_are_zero() {
        let r = record(json!({"a": "n/a", "b": true, "c": [1, 2], "d": "NaN", "e": "inf"}));
        for field in ["a", "b", "c", "d", "e"] {
            assert!(field_value(&r, field).abs() < f64::EPSILON, "field {field}");
        }
    }
}

mod field_label_tests {
    use super::*;

    #[test]
    fn strings_verbatim() {
        let r = record(json!({"month": "Jan"}));
        assert_eq!(field_label(&r, "month"), "Jan");
    }

    #[test]
    fn numbers_are_written_plainly() {
        let r = record(json!({"year": 2024, "q": 1.5}));
        assert_eq!(field_label(&r, "year"), "2024");
        assert_eq!(field_label(&r, "q"), "1.5");
    }

    #[test]
    fn missing_is_empty() {
        let r = record(json!({"month": null}));
        assert_eq!(field_label(&r, "month"), "");
        assert_eq!(field_label(&r, "absent"), "");
    }
}

mod loader_tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::ChartError;

    #[test]
    fn parse_records_preserves_order() {
        let records =
            parse_records(r#"[{"month":"Jan","sales":1},{"month":"Feb","sales":2}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(field_label(&records[0], "month"), "Jan");
        assert_eq!(field_label(&records[1], "month"), "Feb");
        let keys: Vec<_> = records[0].keys().cloned().collect();
        assert_eq!(keys, vec!["month".to_string(), "sales".to_string()]);
    }

    #[test]
    fn parse_records_rejects_non_array() {
        let err = parse_records(r#"{"month":"Jan"}"#).unwrap_err();
        assert!(matches!(err, ChartError::InvalidRecords(_)));
    }

    #[test]
    fn parse_records_rejects_non_object_element() {
        let err = parse_records(r#"[{"a":1}, 5]"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid records: element 1 is a number, expected an object"
        );
    }

    #[test]
    fn parse_empty_array() {
        assert!(parse_records("[]").unwrap().is_empty());
    }

    #[test]
    fn load_records_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sales.json");
        fs::write(&path, r#"[{"month":"Jan","sales":100}]"#).unwrap();

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert!((field_value(&records[0], "sales") - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn load_records_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_records(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ChartError::FileRead { .. }));
    }

    #[test]
    fn load_records_bad_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "[{").unwrap();
        let err = load_records(&path).unwrap_err();
        assert!(matches!(err, ChartError::JsonParse { .. }));
    }
}
