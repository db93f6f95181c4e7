use serde::{Deserialize, Serialize};

/// A single submission to review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub source: String,
}

impl ReviewRequest {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// True when the submission is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.source.trim().is_empty()
    }
}

/// Outcome of a successful review: issue lines and corrected source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewResult {
    /// Bug report split into lines, in reply order. Never empty.
    pub issues: Vec<String>,
    /// Corrected source. Never empty.
    pub fixed_code: String,
}
