//! # Secret Slot Parsing
//!
//! Parses the `secret_slots` input: a JSON array of `{"slot": n, "value": "..."}`.
//!
//! Validation is all-or-nothing. A single malformed element rejects the whole
//! list, so a partially applied batch is never sent.

use crate::constants::LEGACY_SECRET_SLOT;
use crate::parser::error::{json_kind, ParseError};
use crate::resource::SecretSlot;
use crate::warnings::Warnings;
use serde_json::Value;
use tracing::debug;

/// Parse secret slots, returning an empty list (with a warning) on any problem
///
/// Empty input is read as `[]`.
pub fn parse_slots(input: &str, warnings: &mut Warnings) -> Vec<SecretSlot> {
    let text = match input.trim() {
        "" => "[]",
        trimmed => trimmed,
    };

    decode_slots(text).unwrap_or_else(|e| {
        debug!("secret_slots rejected: {}", e);
        warnings.push(match e {
            ParseError::InvalidJson(_) => "Failed to parse secret_slots as JSON",
            ParseError::NotAnArray(_) | ParseError::NotAnObject(_) => {
                "Failed to parse secret_slots as valid JSON array."
            }
            ParseError::InvalidSlot { .. } => {
                "Failed to validate secret_slots. Each slot must be an object with 'slot' and 'value' properties."
            }
        });
        Vec::new()
    })
}

/// Decode a JSON array of slots
///
/// # Errors
///
/// Returns [`ParseError::InvalidJson`] for text that is not JSON,
/// [`ParseError::NotAnArray`] for any other JSON value and
/// [`ParseError::InvalidSlot`] for the first element that is not a valid slot.
pub fn decode_slots(text: &str) -> Result<Vec<SecretSlot>, ParseError> {
    let items = match serde_json::from_str::<Value>(text)? {
        Value::Array(items) => items,
        other => return Err(ParseError::NotAnArray(json_kind(&other))),
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| slot_from_value(item).ok_or(ParseError::InvalidSlot { index }))
        .collect()
}

/// A valid slot is an object with a non-negative integer `slot` and a non-blank string `value`
fn slot_from_value(item: &Value) -> Option<SecretSlot> {
    let object = item.as_object()?;
    let slot = object
        .get("slot")?
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())?;
    let value = object.get("value")?.as_str()?;
    if value.trim().is_empty() {
        return None;
    }
    Some(SecretSlot {
        slot,
        value: value.to_string(),
    })
}

/// Parse slots, falling back to a single slot 0 holding `fallback_value`
///
/// Warns when neither input yields a slot.
pub fn resolve_slots(
    raw_slots: &str,
    fallback_value: &str,
    warnings: &mut Warnings,
) -> Vec<SecretSlot> {
    let mut slots = parse_slots(raw_slots, warnings);

    if slots.is_empty() && !fallback_value.trim().is_empty() {
        debug!("Using secret_value as slot {}", LEGACY_SECRET_SLOT);
        slots.push(SecretSlot {
            slot: LEGACY_SECRET_SLOT,
            value: fallback_value.to_string(),
        });
    }

    if slots.is_empty() {
        warnings.push("No secret_slots provided.");
    }

    slots
}
