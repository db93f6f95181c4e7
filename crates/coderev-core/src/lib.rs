//! Domain layer for coderev.
//!
//! Holds the review data model, the error type shared by every crate, the
//! traits implemented by the infrastructure and interaction layers, and the
//! two pure pipeline stages: the local syntax check and the reply extractor.

pub mod chat;
pub mod config;
pub mod error;
pub mod review;
pub mod secret;
pub mod session;

pub use chat::ChatBackend;
pub use error::{Result, ReviewError};
pub use review::{ReviewRequest, ReviewResult};
pub use session::{ChatSession, Turn};
