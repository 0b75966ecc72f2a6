//! # Warnings
//!
//! Collects recoverable configuration problems.
//!
//! Parsing never fails on malformed input. Instead every problem is pushed
//! into a [`Warnings`] sink, which keeps the message for the caller (to
//! surface it through the CI runner) and mirrors it to the log.

use serde::Serialize;
use tracing::warn;

/// Ordered list of warning messages produced while building or reconciling a resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Warnings {
    messages: Vec<String>,
}

impl Warnings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning and emit it at `WARN` level
    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("{}", message);
        self.messages.push(message);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check whether an identical message was recorded
    #[must_use]
    pub fn contains(&self, message: &str) -> bool {
        self.messages.iter().any(|m| m == message)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.messages
    }
}
