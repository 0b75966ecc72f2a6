//! Deploy Reconciler Library
//!
//! Decides whether an edge application or secret needs a remote update and
//! computes the minimal patch to send.
//!
//! The pipeline is:
//!
//! 1. Read raw configuration text through an [`inputs::InputSource`]
//! 2. Build the desired resource ([`resource::build_app_resource`],
//!    [`resource::build_secret_resource`])
//! 3. Compare it with the resource fetched from the remote service
//!    ([`reconciler::app_update_needed`], [`reconciler::reconcile_secret`],
//!    [`reconciler::secret_update_needed`])
//!
//! Nothing in the core performs network I/O. Malformed configuration never
//! fails a build; it is recorded in a [`warnings::Warnings`] sink and replaced
//! with a safe default.

pub mod binary;
pub mod config;
pub mod constants;
pub mod inputs;
pub mod parser;
pub mod reconciler;
pub mod resource;
pub mod warnings;

pub use inputs::{EnvInputs, InputSource, StaticInputs};
pub use reconciler::{
    app_update_needed, dict_changed, plan_app_update, plan_secret_update, reconcile_secret,
    reconcile_slots, secret_refs_changed, secret_update_needed,
};
pub use resource::{build_app_resource, build_secret_resource};
pub use warnings::Warnings;
