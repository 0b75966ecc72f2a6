//! # Reconciler Configuration
//!
//! Process-level settings loaded from environment variables.

use crate::constants::{DEFAULT_INPUT_PREFIX, DEFAULT_LOG_LEVEL};

/// Process-level configuration
///
/// All settings have sensible defaults and can be overridden via environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcilerConfig {
    /// Log level used when `RUST_LOG` is not set (error, warn, info, debug, trace)
    pub log_level: String,
    /// Enable ANSI colors in log output
    pub log_ansi: bool,
    /// Prefix of environment variables carrying CI inputs
    /// (`INPUT_APP_NAME` for the `app_name` input with the default prefix)
    pub input_prefix: String,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_ansi: false,
            input_prefix: DEFAULT_INPUT_PREFIX.to_string(),
        }
    }
}

impl ReconcilerConfig {
    /// Load configuration from environment variables with defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            log_level: env_var_or_default_str("LOG_LEVEL", DEFAULT_LOG_LEVEL).to_lowercase(),
            log_ansi: env_var_or_default_bool("LOG_ANSI", false),
            input_prefix: env_var_or_default_str("INPUT_PREFIX", DEFAULT_INPUT_PREFIX),
        }
    }

    /// Default `EnvFilter` directive for this crate
    #[must_use]
    pub fn log_directive(&self) -> String {
        format!("deploy_reconciler={}", self.log_level)
    }
}

/// Read environment variable as boolean or return default
fn env_var_or_default_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|v| parse_bool(&v, default))
        .unwrap_or(default)
}

fn parse_bool(value: &str, default: bool) -> bool {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => true,
        "false" | "0" | "no" | "off" => false,
        _ => default,
    }
}

/// Read environment variable as string or return default
fn env_var_or_default_str(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReconcilerConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.input_prefix, "INPUT_");
        assert!(!config.log_ansi);
    }

    #[test]
    fn test_log_directive() {
        let config = ReconcilerConfig {
            log_level: "debug".to_string(),
            ..ReconcilerConfig::default()
        };
        assert_eq!(config.log_directive(), "deploy_reconciler=debug");
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("TRUE", false));
        assert!(parse_bool(" yes ", false));
        assert!(!parse_bool("0", true));
        assert!(parse_bool("maybe", true));
        assert!(!parse_bool("maybe", false));
    }
}
