//! # Types
//!
//! Desired and remote representations of apps and secrets.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// String-to-string mapping parsed from configuration (env vars, response headers)
pub type ConfigDict = HashMap<String, String>;

/// Secret references keyed by the name the app sees them under
pub type SecretRefs = HashMap<String, SecretRef>;

/// Reference to a secret stored by the remote service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretRef {
    pub id: i64,
}

/// Desired application state built from inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppResource {
    pub name: String,
    pub comment: String,
    pub status: i32,
    pub env: ConfigDict,
    pub rsp_headers: ConfigDict,
    pub secrets: SecretRefs,
    /// Binary id; unset until a binary has been uploaded or resolved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary: Option<i64>,
}

/// Update body for an existing application
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppUpdate {
    pub id: i64,
    #[serde(flatten)]
    pub resource: AppResource,
}

/// Binary attached to a remote app when fetched with binary inclusion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteBinary {
    pub id: i64,
    /// MD5 hex digest of the uploaded WASM file
    #[serde(default)]
    pub checksum: Option<String>,
}

/// Application as stored by the remote service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteApp {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub env: ConfigDict,
    #[serde(default)]
    pub rsp_headers: ConfigDict,
    #[serde(default)]
    pub secrets: SecretRefs,
    pub binary: RemoteBinary,
}

/// One numbered value of a desired secret
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretSlot {
    pub slot: u32,
    pub value: String,
}

/// One numbered value of a remote secret
///
/// Older records carry no checksum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteSecretSlot {
    pub slot: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
}

/// Entry of a secret update body
///
/// Serializes as `{"slot": n, "value": "..."}` for creates and updates and as
/// `{"slot": n}` for deletions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotPatch {
    Upsert { slot: u32, value: String },
    Delete { slot: u32 },
}

impl SlotPatch {
    #[must_use]
    pub fn slot(&self) -> u32 {
        match self {
            SlotPatch::Upsert { slot, .. } | SlotPatch::Delete { slot } => *slot,
        }
    }

    #[must_use]
    pub fn is_deletion(&self) -> bool {
        matches!(self, SlotPatch::Delete { .. })
    }
}

impl From<SecretSlot> for SlotPatch {
    fn from(slot: SecretSlot) -> Self {
        SlotPatch::Upsert {
            slot: slot.slot,
            value: slot.value,
        }
    }
}

/// Desired secret state built from inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretResource {
    pub name: String,
    pub comment: String,
    pub secret_slots: Vec<SecretSlot>,
}

/// Secret after slot reconciliation: only the slots that must change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretPatch {
    pub name: String,
    pub comment: String,
    pub secret_slots: Vec<SlotPatch>,
}

/// Update body for an existing secret
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecretUpdate {
    pub id: i64,
    #[serde(flatten)]
    pub patch: SecretPatch,
}

/// Secret as stored by the remote service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteSecret {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub app_count: u32,
    #[serde(default)]
    pub secret_slots: Vec<RemoteSecretSlot>,
}
