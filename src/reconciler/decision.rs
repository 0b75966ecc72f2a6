//! # Update Decision
//!
//! Decides whether a remote app or secret must be updated and builds the
//! update body when it must.

use crate::reconciler::diff::{dict_changed, secret_refs_changed};
use crate::reconciler::slots::reconcile_secret;
use crate::resource::{
    AppResource, AppUpdate, RemoteApp, RemoteSecret, SecretPatch, SecretResource, SecretUpdate,
};
use crate::warnings::Warnings;
use tracing::{debug, info};

/// Check whether the remote app differs from the desired one
///
/// An unset desired binary never matches the remote binary.
#[must_use]
pub fn app_update_needed(desired: &AppResource, remote: &RemoteApp) -> bool {
    if desired.name != remote.name {
        debug!("App name changed: \"{}\" -> \"{}\"", remote.name, desired.name);
        return true;
    }
    if desired.comment != remote.comment {
        debug!("App \"{}\" comment changed", desired.name);
        return true;
    }
    if desired.binary != Some(remote.binary.id) {
        debug!(
            "App \"{}\" binary changed: {} -> {:?}",
            desired.name, remote.binary.id, desired.binary
        );
        return true;
    }
    if dict_changed(&desired.env, &remote.env) {
        debug!("App \"{}\" env changed", desired.name);
        return true;
    }
    if dict_changed(&desired.rsp_headers, &remote.rsp_headers) {
        debug!("App \"{}\" response headers changed", desired.name);
        return true;
    }
    if secret_refs_changed(&desired.secrets, &remote.secrets) {
        debug!("App \"{}\" secrets changed", desired.name);
        return true;
    }
    false
}

/// Check whether a reconciled secret requires an update
///
/// Any remaining slot patch (including a pure deletion) requires one, since
/// reconciliation already dropped unchanged slots.
#[must_use]
pub fn secret_update_needed(patch: &SecretPatch, remote: &RemoteSecret) -> bool {
    !patch.secret_slots.is_empty() || patch.name != remote.name || patch.comment != remote.comment
}

/// Attach the binary and remote id to the desired app, returning the update body if needed
#[must_use]
pub fn plan_app_update(
    mut desired: AppResource,
    remote: &RemoteApp,
    binary_id: i64,
) -> Option<AppUpdate> {
    desired.binary = Some(binary_id);
    if app_update_needed(&desired, remote) {
        info!("App \"{}\" (id {}) needs an update", desired.name, remote.id);
        Some(AppUpdate {
            id: remote.id,
            resource: desired,
        })
    } else {
        info!("App \"{}\" (id {}) is up to date", desired.name, remote.id);
        None
    }
}

/// Reconcile the desired secret's slots, returning the update body if needed
pub fn plan_secret_update(
    desired: SecretResource,
    remote: &RemoteSecret,
    warnings: &mut Warnings,
) -> Option<SecretUpdate> {
    let patch = reconcile_secret(desired, remote, warnings);
    if secret_update_needed(&patch, remote) {
        info!(
            "Secret \"{}\" (id {}) needs an update: {} slot change(s)",
            patch.name,
            remote.id,
            patch.secret_slots.len()
        );
        Some(SecretUpdate {
            id: remote.id,
            patch,
        })
    } else {
        info!("Secret \"{}\" (id {}) is up to date", patch.name, remote.id);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{ConfigDict, RemoteBinary, SecretRef, SecretRefs, SlotPatch};

    fn desired_app() -> AppResource {
        AppResource {
            name: "a".to_string(),
            comment: "c".to_string(),
            status: 1,
            env: ConfigDict::new(),
            rsp_headers: ConfigDict::new(),
            secrets: SecretRefs::new(),
            binary: Some(1),
        }
    }

    fn remote_app() -> RemoteApp {
        RemoteApp {
            id: 100,
            name: "a".to_string(),
            comment: "c".to_string(),
            status: 1,
            env: ConfigDict::new(),
            rsp_headers: ConfigDict::new(),
            secrets: SecretRefs::new(),
            binary: RemoteBinary {
                id: 1,
                checksum: Some("abc123".to_string()),
            },
        }
    }

    fn remote_secret() -> RemoteSecret {
        RemoteSecret {
            id: 789,
            name: "s".to_string(),
            comment: "c".to_string(),
            app_count: 0,
            secret_slots: Vec::new(),
        }
    }

    mod app_tests {
        use super::*;

        #[test]
        fn test_identical_app_needs_no_update() {
            assert!(!app_update_needed(&desired_app(), &remote_app()));
        }

        #[test]
        fn test_name_change() {
            let remote = RemoteApp {
                name: "b".to_string(),
                ..remote_app()
            };
            assert!(app_update_needed(&desired_app(), &remote));
        }

        #[test]
        fn test_comment_change() {
            let desired = AppResource {
                comment: "updated".to_string(),
                ..desired_app()
            };
            assert!(app_update_needed(&desired, &remote_app()));
        }

        #[test]
        fn test_binary_change_and_unset_binary() {
            let desired = AppResource {
                binary: Some(2),
                ..desired_app()
            };
            assert!(app_update_needed(&desired, &remote_app()));

            let unset = AppResource {
                binary: None,
                ..desired_app()
            };
            assert!(app_update_needed(&unset, &remote_app()));
        }

        #[test]
        fn test_env_headers_and_secrets_changes() {
            let mut desired = desired_app();
            desired
                .env
                .insert("NODE_ENV".to_string(), "production".to_string());
            assert!(app_update_needed(&desired, &remote_app()));

            let mut desired = desired_app();
            desired
                .rsp_headers
                .insert("X-Frame".to_string(), "DENY".to_string());
            assert!(app_update_needed(&desired, &remote_app()));

            let mut desired = desired_app();
            desired
                .secrets
                .insert("token".to_string(), SecretRef { id: 5 });
            assert!(app_update_needed(&desired, &remote_app()));
        }

        #[test]
        fn test_plan_app_update_sets_binary_and_id() {
            let mut desired = desired_app();
            desired.binary = None;
            desired
                .env
                .insert("NODE_ENV".to_string(), "production".to_string());

            let update = plan_app_update(desired, &remote_app(), 42).unwrap();

            assert_eq!(update.id, 100);
            assert_eq!(update.resource.binary, Some(42));
        }

        #[test]
        fn test_plan_app_update_skips_unchanged() {
            let mut desired = desired_app();
            desired.binary = None;
            assert_eq!(plan_app_update(desired, &remote_app(), 1), None);
        }
    }

    mod secret_tests {
        use super::*;
        use crate::reconciler::slots::slot_checksum;
        use crate::resource::{RemoteSecretSlot, SecretSlot};

        fn patch(slots: Vec<SlotPatch>) -> SecretPatch {
            SecretPatch {
                name: "s".to_string(),
                comment: "c".to_string(),
                secret_slots: slots,
            }
        }

        #[test]
        fn test_no_slots_same_metadata() {
            assert!(!secret_update_needed(&patch(Vec::new()), &remote_secret()));
        }

        #[test]
        fn test_any_slot_triggers_update() {
            let patch = patch(vec![SlotPatch::Delete { slot: 0 }]);
            assert!(secret_update_needed(&patch, &remote_secret()));
        }

        #[test]
        fn test_metadata_change_triggers_update() {
            let mut renamed = patch(Vec::new());
            renamed.name = "other".to_string();
            assert!(secret_update_needed(&renamed, &remote_secret()));

            let mut recommented = patch(Vec::new());
            recommented.comment = "new comment".to_string();
            assert!(secret_update_needed(&recommented, &remote_secret()));
        }

        #[test]
        fn test_plan_secret_update_unchanged() {
            let desired = SecretResource {
                name: "s".to_string(),
                comment: "c".to_string(),
                secret_slots: vec![SecretSlot {
                    slot: 0,
                    value: "v".to_string(),
                }],
            };
            let remote = RemoteSecret {
                secret_slots: vec![RemoteSecretSlot {
                    slot: 0,
                    value: None,
                    checksum: Some(slot_checksum("v")),
                }],
                ..remote_secret()
            };
            assert_eq!(
                plan_secret_update(desired, &remote, &mut Warnings::new()),
                None
            );
        }

        #[test]
        fn test_plan_secret_update_with_new_slot() {
            let desired = SecretResource {
                name: "s".to_string(),
                comment: "c".to_string(),
                secret_slots: vec![SecretSlot {
                    slot: 3,
                    value: "new-value".to_string(),
                }],
            };
            let remote = RemoteSecret {
                secret_slots: vec![RemoteSecretSlot {
                    slot: 0,
                    value: Some("encrypted-value".to_string()),
                    checksum: None,
                }],
                ..remote_secret()
            };

            let update = plan_secret_update(desired, &remote, &mut Warnings::new()).unwrap();

            assert_eq!(update.id, 789);
            assert_eq!(
                update.patch.secret_slots,
                vec![
                    SlotPatch::Upsert {
                        slot: 3,
                        value: "new-value".to_string()
                    },
                    SlotPatch::Delete { slot: 0 },
                ]
            );
        }
    }
}
