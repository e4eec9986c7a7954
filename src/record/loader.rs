use std::path::Path;

use serde_json::Value;

use super::Record;
use crate::{ChartError, Result};

/// Load records from a JSON file holding an array of objects.
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid JSON, or is not an
/// array of objects.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let content = std::fs::read_to_string(path).map_err(|source| ChartError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|source| ChartError::JsonParse {
        path: path.to_path_buf(),
        source,
    })?;

    let records = records_from_value(value)?;
    log::debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse records from a JSON string.
///
/// # Errors
/// Returns an error if the text is not a JSON array of objects.
pub fn parse_records(json: &str) -> Result<Vec<Record>> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| ChartError::InvalidRecords(format!("invalid JSON: {e}")))?;
    records_from_value(value)
}

fn records_from_value(value: Value) -> Result<Vec<Record>> {
    let Value::Array(items) = value else {
        return Err(ChartError::InvalidRecords(
            "expected a JSON array of objects".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(map.into_iter().collect::<Record>()),
            other => Err(ChartError::InvalidRecords(format!(
                "element {index} is {}, expected an object",
                json_kind(&other)
            ))),
        })
        .collect()
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
