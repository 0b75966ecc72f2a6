//! # Parse Errors
//!
//! Failures of the structured (JSON) decoding strategy.

use thiserror::Error;

/// Why a structured decode of configuration text was rejected
#[derive(Debug, Error)]
pub enum ParseError {
    /// Text is not JSON at all; callers may fall back to line-oriented parsing
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    /// Valid JSON, but not an object (array, null or scalar)
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),
    /// Valid JSON, but not an array
    #[error("expected a JSON array, found {0}")]
    NotAnArray(&'static str),
    /// Array element that is not a `{slot, value}` object with a non-empty value
    #[error("invalid secret slot at index {index}")]
    InvalidSlot { index: usize },
}

impl ParseError {
    /// Check if the text could not be decoded as JSON at all
    #[must_use]
    pub fn is_invalid_json(&self) -> bool {
        matches!(self, ParseError::InvalidJson(_))
    }
}

/// Short name of a JSON value's kind, used in error messages
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
