//! Validation failure type.

use thiserror::Error;

/// Ordered collection of human-readable validation messages, one per
/// violated field rule.
///
/// Message order follows field declaration order (first name, last name,
/// email), so clients see a stable list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", .messages.join("; "))]
pub struct ValidationErrors {
    messages: Vec<String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violated rule.
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// The recorded messages, in violation order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}
