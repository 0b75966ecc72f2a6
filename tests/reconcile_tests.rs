//! # Reconciliation Tests
//!
//! End-to-end decisions: inputs -> desired resource -> comparison with a
//! remote document decoded from JSON -> update body.

use deploy_reconciler::reconciler::slot_checksum;
use deploy_reconciler::resource::{RemoteApp, RemoteSecret, SlotPatch};
use deploy_reconciler::{
    app_update_needed, build_app_resource, build_secret_resource, plan_app_update,
    plan_secret_update, reconcile_secret, secret_update_needed, StaticInputs, Warnings,
};
use serde_json::json;

fn remote_app(env: serde_json::Value) -> RemoteApp {
    serde_json::from_value(json!({
        "id": 789,
        "api_type": "proxy-wasm",
        "name": "test-app",
        "comment": "Original comment",
        "status": 1,
        "env": env,
        "rsp_headers": {"Content-Type": "application/json"},
        "secrets": {"db": {"id": 11, "name": "db-password"}},
        "binary": {"id": 123, "checksum": "abc123", "status": 1, "source": 1},
        "log": "kafka",
        "plan": "mock-plan",
        "plan_id": 1
    }))
    .unwrap()
}

fn app_inputs(env: &str) -> StaticInputs {
    StaticInputs::new()
        .with("app_name", "test-app")
        .with("comment", "Original comment")
        .with("env", env)
        .with("rsp_headers", "Content-Type=application/json")
        .with("secrets", "db=11")
}

mod app_tests {
    use super::*;

    #[test]
    fn test_unchanged_app_is_skipped() {
        let mut warnings = Warnings::new();
        let desired = build_app_resource(
            &app_inputs("NODE_ENV=production\nREGION=eu"),
            &mut warnings,
        );
        let remote = remote_app(json!({"REGION": "eu", "NODE_ENV": "production"}));

        assert_eq!(plan_app_update(desired, &remote, 123), None);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_env_change_produces_update_body() {
        let mut warnings = Warnings::new();
        let desired = build_app_resource(&app_inputs(r#"{"NODE_ENV": "production"}"#), &mut warnings);
        let remote = remote_app(json!({"NODE_ENV": "development"}));

        let update = plan_app_update(desired, &remote, 123).unwrap();
        let body = serde_json::to_value(&update).unwrap();

        assert_eq!(
            body,
            json!({
                "id": 789,
                "name": "test-app",
                "comment": "Original comment",
                "status": 1,
                "env": {"NODE_ENV": "production"},
                "rsp_headers": {"Content-Type": "application/json"},
                "secrets": {"db": {"id": 11}},
                "binary": 123
            })
        );
    }

    #[test]
    fn test_new_binary_triggers_update() {
        let mut warnings = Warnings::new();
        let desired = build_app_resource(&app_inputs("NODE_ENV=production"), &mut warnings);
        let remote = remote_app(json!({"NODE_ENV": "production"}));

        let update = plan_app_update(desired, &remote, 124).unwrap();

        assert_eq!(update.resource.binary, Some(124));
    }

    #[test]
    fn test_blank_remote_env_value_is_rewritten() {
        let mut warnings = Warnings::new();
        let mut desired = build_app_resource(&app_inputs("{}"), &mut warnings);
        desired.env.insert("EMPTY".to_string(), String::new());
        desired.binary = Some(123);
        let remote = remote_app(json!({"EMPTY": ""}));

        assert!(app_update_needed(&desired, &remote));
    }
}

mod secret_tests {
    use super::*;

    fn remote_secret(slots: serde_json::Value) -> RemoteSecret {
        serde_json::from_value(json!({
            "id": 555,
            "name": "database-password",
            "comment": "Test secret",
            "app_count": 2,
            "secret_slots": slots
        }))
        .unwrap()
    }

    fn secret_inputs(slots: &str) -> StaticInputs {
        StaticInputs::new()
            .with("secret_name", "database-password")
            .with("comment", "Test secret")
            .with("secret_slots", slots)
    }

    #[test]
    fn test_unchanged_secret_is_skipped() {
        let mut warnings = Warnings::new();
        let desired = build_secret_resource(
            &secret_inputs(r#"[{"slot": 0, "value": "a"}, {"slot": 1, "value": "b"}]"#),
            &mut warnings,
        );
        let remote = remote_secret(json!([
            {"slot": 0, "value": "encrypted", "checksum": slot_checksum("a")},
            {"slot": 1, "value": "encrypted", "checksum": slot_checksum("b")}
        ]));

        assert_eq!(plan_secret_update(desired, &remote, &mut warnings), None);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_deletion_completeness() {
        let mut warnings = Warnings::new();
        let desired = build_secret_resource(
            &secret_inputs(r#"[{"slot": 1, "value": "keep"}]"#),
            &mut warnings,
        );
        let remote = remote_secret(json!([
            {"slot": 0, "checksum": "c0"},
            {"slot": 1, "checksum": slot_checksum("keep")},
            {"slot": 2, "checksum": "c2"},
            {"slot": 5}
        ]));

        let patch = reconcile_secret(desired, &remote, &mut warnings);

        let deleted: Vec<u32> = patch
            .secret_slots
            .iter()
            .filter(|p| p.is_deletion())
            .map(SlotPatch::slot)
            .collect();
        assert_eq!(deleted, vec![0, 2, 5]);
        assert_eq!(patch.secret_slots.len(), 3);
        assert!(secret_update_needed(&patch, &remote));
    }

    #[test]
    fn test_update_body_serialization() {
        let mut warnings = Warnings::new();
        let desired = build_secret_resource(
            &secret_inputs(r#"[{"slot": 3, "value": "new-value"}]"#),
            &mut warnings,
        );
        let remote = remote_secret(json!([{"slot": 0, "value": "encrypted-value"}]));

        let update = plan_secret_update(desired, &remote, &mut warnings).unwrap();

        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({
                "id": 555,
                "name": "database-password",
                "comment": "Test secret",
                "secret_slots": [
                    {"slot": 3, "value": "new-value"},
                    {"slot": 0}
                ]
            })
        );
    }

    #[test]
    fn test_comment_change_without_slot_changes() {
        let mut warnings = Warnings::new();
        let inputs = StaticInputs::new()
            .with("secret_name", "database-password")
            .with("comment", "Rotated")
            .with("secret_value", "v");
        let desired = build_secret_resource(&inputs, &mut warnings);
        let remote = remote_secret(json!([{"slot": 0, "checksum": slot_checksum("v")}]));

        let update = plan_secret_update(desired, &remote, &mut warnings).unwrap();

        assert!(update.patch.secret_slots.is_empty());
        assert_eq!(update.patch.comment, "Rotated");
    }
}
