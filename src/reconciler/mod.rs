//! # Reconciler
//!
//! Compares desired resources with their remote counterparts.
//!
//! ## Flow
//!
//! - **Apps**: [`plan_app_update`] attaches the binary id and checks
//!   [`app_update_needed`], which diffs name, comment, binary, env, response
//!   headers and secret references.
//! - **Secrets**: [`reconcile_secret`] reduces the desired slots to the
//!   ones that must change (plus deletion markers), then
//!   [`secret_update_needed`] checks the result and the metadata.

mod decision;
mod diff;
mod slots;

pub use decision::{app_update_needed, plan_app_update, plan_secret_update, secret_update_needed};
pub use diff::{dict_changed, secret_refs_changed};
pub use slots::{reconcile_secret, reconcile_slots, slot_checksum};
