//! # Resources
//!
//! Desired and remote representations of apps and secrets, and the builders
//! that assemble desired state from inputs.

mod builder;
mod types;

pub use builder::{build_app_resource, build_secret_resource};
pub use types::{
    AppResource, AppUpdate, ConfigDict, RemoteApp, RemoteBinary, RemoteSecret, RemoteSecretSlot,
    SecretPatch, SecretRef, SecretRefs, SecretResource, SecretSlot, SecretUpdate, SlotPatch,
};
