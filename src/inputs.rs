//! # Inputs
//!
//! Sources of raw configuration text.
//!
//! CI runners expose step inputs as environment variables named
//! `INPUT_<NAME>`. [`EnvInputs`] reads them the same way; [`StaticInputs`]
//! holds them in memory for tests and embedders.

use std::collections::HashMap;

/// Lookup of a named configuration input
///
/// Missing inputs are returned as an empty string, never as an error.
pub trait InputSource {
    fn get(&self, name: &str) -> String;
}

/// Inputs read from prefixed environment variables
#[derive(Debug, Clone)]
pub struct EnvInputs {
    prefix: String,
}

impl EnvInputs {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Environment variable holding the given input (`app_name` -> `INPUT_APP_NAME`)
    #[must_use]
    pub fn variable_name(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name.replace(' ', "_").to_uppercase())
    }
}

impl Default for EnvInputs {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_INPUT_PREFIX)
    }
}

impl InputSource for EnvInputs {
    fn get(&self, name: &str) -> String {
        std::env::var(self.variable_name(name))
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }
}

/// Inputs held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticInputs {
    values: HashMap<String, String>,
}

impl StaticInputs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticInputs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl InputSource for StaticInputs {
    fn get(&self, name: &str) -> String {
        self.values
            .get(name)
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }
}
