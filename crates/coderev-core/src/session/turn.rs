//! A single prompt/reply exchange.

use serde::{Deserialize, Serialize};

/// One (prompt, reply) exchange with the remote model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Text sent by the user.
    pub prompt: String,
    /// Text returned by the model.
    pub reply: String,
    /// Timestamp when the exchange completed (ISO 8601 format).
    pub timestamp: String,
}

impl Turn {
    /// Creates a turn stamped with the current time.
    pub fn new(prompt: impl Into<String>, reply: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            reply: reply.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
