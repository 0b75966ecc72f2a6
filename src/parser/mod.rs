//! # Parser
//!
//! Tolerant parsing of configuration text into typed values.
//!
//! Every parser takes a [`Warnings`](crate::warnings::Warnings) sink and
//! never fails: malformed input is reported and replaced with an empty value.

mod dictionary;
pub mod error;
mod scalar;
mod slots;

pub use dictionary::{
    decode_json_object, parse_dict_list, parse_dictionary, parse_int_prefix, parse_secret_refs,
    remove_matching_quotes,
};
pub use error::ParseError;
pub use scalar::{coerce_entry, coerce_scalar};
pub use slots::{decode_slots, parse_slots, resolve_slots};
