//! # Scalar Coercion
//!
//! Turns decoded JSON values into configuration strings.

use crate::warnings::Warnings;
use serde_json::{Number, Value};

/// Convert a scalar to its string form
///
/// Returns `None` for objects, arrays and `null`, which are not string compatible.
#[must_use]
pub fn coerce_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(number_to_string(n)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Coerce the value stored under `key` of input `input_name`
///
/// Values that are not string compatible become an empty string and are reported.
pub fn coerce_entry(input_name: &str, key: &str, value: &Value, warnings: &mut Warnings) -> String {
    coerce_scalar(value).unwrap_or_else(|| {
        warnings.push(format!(
            "Value for key \"{key}\" in input \"{input_name}\" is not string compatible."
        ));
        String::new()
    })
}

/// Integers print without a fractional part, floats in their shortest form (`1.5`, `3`)
fn number_to_string(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map_or_else(|| n.to_string(), |f| f.to_string())
    }
}
