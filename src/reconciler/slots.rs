//! # Slot Reconciliation
//!
//! Computes the minimal slot patch for a secret.
//!
//! The remote service never returns plaintext slot values, only a SHA-256
//! checksum of each. A desired slot is sent only when it is new, when the
//! remote slot has no checksum, or when the checksums differ. Remote slots
//! missing from the desired list are sent as deletion markers.

use crate::resource::{
    RemoteSecret, RemoteSecretSlot, SecretPatch, SecretResource, SecretSlot, SlotPatch,
};
use crate::warnings::Warnings;
use sha2::{Digest, Sha256};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// SHA-256 hex digest of a slot value, as computed by the remote service
#[must_use]
pub fn slot_checksum(value: &str) -> String {
    format!("{:x}", Sha256::digest(value.as_bytes()))
}

/// Reconcile a desired secret against the remote one
///
/// Name and comment are passed through; slots are replaced by the patch list.
pub fn reconcile_secret(
    desired: SecretResource,
    remote: &RemoteSecret,
    warnings: &mut Warnings,
) -> SecretPatch {
    let secret_slots = reconcile_slots(
        &desired.name,
        &desired.secret_slots,
        &remote.secret_slots,
        warnings,
    );
    SecretPatch {
        name: desired.name,
        comment: desired.comment,
        secret_slots,
    }
}

/// Diff desired slots against remote slots
///
/// Returns creates and updates (in desired order) followed by deletion
/// markers (in remote order). Each slot number appears at most once.
pub fn reconcile_slots(
    secret_name: &str,
    desired: &[SecretSlot],
    remote: &[RemoteSecretSlot],
    warnings: &mut Warnings,
) -> Vec<SlotPatch> {
    let desired = dedupe_slots(secret_name, desired, warnings);
    let desired_numbers: HashSet<u32> = desired.iter().map(|s| s.slot).collect();
    let mut remote_by_slot: HashMap<u32, &RemoteSecretSlot> = HashMap::new();
    for remote_slot in remote {
        remote_by_slot.entry(remote_slot.slot).or_insert(remote_slot);
    }

    let mut patches: Vec<SlotPatch> = desired
        .into_iter()
        .filter(|slot| {
            slot_needs_update(
                secret_name,
                slot,
                remote_by_slot.get(&slot.slot).copied(),
                warnings,
            )
        })
        .map(SlotPatch::from)
        .collect();

    let mut deleted: HashSet<u32> = HashSet::new();
    for remote_slot in remote {
        if !desired_numbers.contains(&remote_slot.slot) && deleted.insert(remote_slot.slot) {
            debug!(
                "Secret \"{}\" slot {} marked for deletion",
                secret_name, remote_slot.slot
            );
            patches.push(SlotPatch::Delete {
                slot: remote_slot.slot,
            });
        }
    }

    patches
}

/// Keep the last definition of every slot number, at the position of its first
fn dedupe_slots(secret_name: &str, slots: &[SecretSlot], warnings: &mut Warnings) -> Vec<SecretSlot> {
    let mut positions: HashMap<u32, usize> = HashMap::new();
    let mut result: Vec<SecretSlot> = Vec::with_capacity(slots.len());
    for slot in slots {
        if let Some(&index) = positions.get(&slot.slot) {
            warnings.push(format!(
                "Secret \"{secret_name}\" slot: {} is defined more than once, using the last value",
                slot.slot
            ));
            result[index] = slot.clone();
        } else {
            positions.insert(slot.slot, result.len());
            result.push(slot.clone());
        }
    }
    result
}

fn slot_needs_update(
    secret_name: &str,
    slot: &SecretSlot,
    remote: Option<&RemoteSecretSlot>,
    warnings: &mut Warnings,
) -> bool {
    let Some(remote) = remote else {
        debug!("Secret \"{}\" slot {} is new", secret_name, slot.slot);
        return true;
    };
    if slot.value.is_empty() {
        warnings.push(format!(
            "Secret \"{secret_name}\" slot: {} has no value, skipping!",
            slot.slot
        ));
        return false;
    }
    match remote.checksum.as_deref() {
        Some(checksum) if checksum == slot_checksum(&slot.value) => {
            debug!("Secret \"{}\" slot {} unchanged", secret_name, slot.slot);
            false
        }
        _ => true,
    }
}
