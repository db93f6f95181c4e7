//! Error types for coderev.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the whole review pipeline.
///
/// The first four variants are the failure kinds a single review request can
/// end with; the remaining ones come from configuration and storage access.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewError {
    /// Credential or model handle could not be set up
    #[error("Error initializing AI model: {0}")]
    Initialization(String),

    /// Remote call failed or returned no text payload
    #[error("Response error: {0}")]
    Response(String),

    /// Submitted text does not parse; `message` starts with `"Syntax Error: "`
    #[error("{message}")]
    Syntax { message: String },

    /// Blank or whitespace-only submission
    #[error("Empty input: nothing to review")]
    EmptyInput,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },
}

impl ReviewError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an Initialization error
    pub fn initialization(message: impl Into<String>) -> Self {
        Self::Initialization(message.into())
    }

    /// Creates a Response error
    pub fn response(message: impl Into<String>) -> Self {
        Self::Response(message.into())
    }

    /// Creates a Syntax error from a full diagnostic message
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_initialization(&self) -> bool {
        matches!(self, Self::Initialization(_))
    }

    pub fn is_response(&self) -> bool {
        matches!(self, Self::Response(_))
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }

    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput)
    }

    /// Text shown on the user-facing surface for this failure.
    ///
    /// Response failures collapse to a generic retry hint; the detail only
    /// goes to the log.
    pub fn user_message(&self) -> String {
        match self {
            Self::Initialization(_) => self.to_string(),
            Self::Response(_) => "Failed to generate a response. Please try again.".to_string(),
            Self::Syntax { message } => message.clone(),
            Self::EmptyInput => "Please enter your Rust code before clicking review.".to_string(),
            Self::Config(_) | Self::Io { .. } | Self::Serialization { .. } => self.to_string(),
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for ReviewError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for ReviewError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ReviewError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, ReviewError>`.
pub type Result<T> = std::result::Result<T, ReviewError>;
