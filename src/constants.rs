//! # Constants
//!
//! Input names and defaults shared across the reconciler.

/// Name of the application being deployed
pub const INPUT_APP_NAME: &str = "app_name";

/// Environment variables for the application (JSON object or `KEY=value` lines)
pub const INPUT_ENV: &str = "env";

/// Response headers for the application (JSON object or `KEY=value` lines)
pub const INPUT_RSP_HEADERS: &str = "rsp_headers";

/// Secret references for the application, mapping a name to a secret id
pub const INPUT_SECRETS: &str = "secrets";

/// Free-form comment attached to apps and secrets
pub const INPUT_COMMENT: &str = "comment";

/// Path to the compiled WASM artifact
pub const INPUT_WASM_FILE: &str = "wasm_file";

/// Name of the secret being deployed
pub const INPUT_SECRET_NAME: &str = "secret_name";

/// JSON array of `{slot, value}` objects
pub const INPUT_SECRET_SLOTS: &str = "secret_slots";

/// Single secret value, stored in slot 0 when no slots are given
pub const INPUT_SECRET_VALUE: &str = "secret_value";

/// Status assigned to every app built from inputs (enabled)
pub const DEFAULT_APP_STATUS: i32 = 1;

/// Slot used for the legacy single-value secret input
pub const LEGACY_SECRET_SLOT: u32 = 0;

/// Default prefix of environment variables carrying CI inputs
pub const DEFAULT_INPUT_PREFIX: &str = "INPUT_";

/// Default log level when `RUST_LOG` is not set
pub const DEFAULT_LOG_LEVEL: &str = "info";
