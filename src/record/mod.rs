//! Chart records: ordered field maps handed over by the data layer.

mod loader;

pub use loader::{load_records, parse_records};

use indexmap::IndexMap;
use serde_json::Value;

/// One data row keyed by field name. Field order is preserved.
pub type Record = IndexMap<String, Value>;

/// Numeric value of `field`, normalized to `0.0` when absent, `null`, or not a number.
///
/// Numeric strings such as `"12.5"` are accepted. Non-finite results normalize to `0.0`.
#[must_use]
pub fn field_value(record: &Record, field: &str) -> f64 {
    let value = match record.get(field) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match value {
        Some(v) if v.is_finite() => v,
        _ => {
            log::trace!("field '{field}' missing or non-numeric, using 0");
            0.0
        }
    }
}

/// Category label of `field`: strings verbatim, numbers and booleans as written, otherwise empty.
#[must_use]
pub fn field_label(record: &Record, field: &str) -> String {
    match record.get(field) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
