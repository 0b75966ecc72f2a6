//! # Dictionary Parsing
//!
//! Parses dictionary inputs (`env`, `rsp_headers`, `secrets`).
//!
//! ## Supported Formats
//!
//! - **JSON object**: `{"NODE_ENV": "production", "PORT": 8080}`
//! - **Key-value lines**: `NODE_ENV=production` per line, as produced by YAML
//!   block scalars in workflow files. Keys and values may be wrapped in
//!   matching single or double quotes.
//!
//! Text that is not valid JSON is parsed as key-value lines. Valid JSON that
//! is not an object yields an empty dictionary and a warning.

use crate::parser::error::{json_kind, ParseError};
use crate::parser::scalar::coerce_entry;
use crate::resource::{ConfigDict, SecretRef, SecretRefs};
use crate::warnings::Warnings;
use serde_json::{Map, Value};
use tracing::debug;

/// Parse a dictionary input, falling back to key-value lines when the text is not JSON
pub fn parse_dictionary(input_name: &str, input: &str, warnings: &mut Warnings) -> ConfigDict {
    let text = match input.trim() {
        "" => "{}",
        trimmed => trimmed,
    };

    match decode_json_object(text) {
        Ok(object) => object
            .iter()
            .map(|(key, value)| {
                let value = coerce_entry(input_name, key, value, warnings);
                (key.clone(), value)
            })
            .collect(),
        Err(ParseError::InvalidJson(e)) => {
            debug!(
                "Input \"{}\" is not JSON ({}), parsing as key-value lines",
                input_name, e
            );
            parse_dict_list(text)
        }
        Err(e) => {
            debug!("Input \"{}\" rejected: {}", input_name, e);
            warnings.push(format!(
                "Input \"{input_name}\" is not a valid JSON dictionary object."
            ));
            ConfigDict::new()
        }
    }
}

/// Decode text as a JSON object
///
/// # Errors
///
/// Returns [`ParseError::InvalidJson`] when the text is not JSON and
/// [`ParseError::NotAnObject`] when it decodes to anything but an object.
pub fn decode_json_object(text: &str) -> Result<Map<String, Value>, ParseError> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(object) => Ok(object),
        other => Err(ParseError::NotAnObject(json_kind(&other))),
    }
}

/// Parse `KEY=value` lines
///
/// Everything after the first `=` is the value, so values may contain `=`.
/// Lines with an empty key or value (before or after quote removal) are
/// skipped. Later keys overwrite earlier ones.
#[must_use]
pub fn parse_dict_list(text: &str) -> ConfigDict {
    let mut result = ConfigDict::new();

    for line in text.split('\n') {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || value.is_empty() {
            continue;
        }

        let key = remove_matching_quotes(key);
        let value = remove_matching_quotes(value);
        if key.is_empty() || value.is_empty() {
            continue;
        }

        result.insert(key.to_string(), value.to_string());
    }

    result
}

/// Strip one layer of matching `"` or `'` quotes from both ends
#[must_use]
pub fn remove_matching_quotes(s: &str) -> &str {
    if s.len() < 2 {
        return s;
    }
    ['"', '\'']
        .into_iter()
        .find_map(|quote| s.strip_prefix(quote)?.strip_suffix(quote))
        .unwrap_or(s)
}

/// Parse the `secrets` input into secret references
///
/// Each value is read as a base-10 integer prefix (`"123abc"` -> 123,
/// `"0x1A"` -> 0). Entries without a leading integer are dropped without a warning.
pub fn parse_secret_refs(input: &str, warnings: &mut Warnings) -> SecretRefs {
    parse_dictionary(crate::constants::INPUT_SECRETS, input, warnings)
        .into_iter()
        .filter_map(|(key, value)| match parse_int_prefix(&value) {
            Some(id) => Some((key, SecretRef { id })),
            None => {
                debug!("Dropping secret \"{}\": \"{}\" is not an id", key, value);
                None
            }
        })
        .collect()
}

/// Read a leading base-10 integer, ignoring anything after the digits
///
/// Leading whitespace and a single sign are accepted. Returns `None` when no
/// digit follows or the number does not fit in an `i64`.
#[must_use]
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let unsigned = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    let sign_len = s.len() - unsigned.len();
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}
