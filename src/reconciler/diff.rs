//! # Dictionary Diff
//!
//! Order-independent comparison of desired and remote mappings.

use crate::resource::{ConfigDict, SecretRefs};

/// Check whether a remote dictionary differs from the desired one
///
/// An empty value on the remote side always counts as a change, even when the
/// desired value is empty too. Remote entries that were blanked out are thus
/// always rewritten.
#[must_use]
pub fn dict_changed(desired: &ConfigDict, remote: &ConfigDict) -> bool {
    if desired.len() != remote.len() {
        return true;
    }
    desired.iter().any(|(key, value)| match remote.get(key) {
        Some(remote_value) => remote_value.is_empty() || remote_value != value,
        None => true,
    })
}

/// Check whether remote secret references differ from the desired ones (by id)
#[must_use]
pub fn secret_refs_changed(desired: &SecretRefs, remote: &SecretRefs) -> bool {
    if desired.len() != remote.len() {
        return true;
    }
    desired
        .iter()
        .any(|(key, secret)| !matches!(remote.get(key), Some(r) if r.id == secret.id))
}
