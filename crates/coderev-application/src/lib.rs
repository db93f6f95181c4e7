//! Application layer for coderev.
//!
//! Coordinates the domain and infrastructure layers: opening chat sessions,
//! running the review pipeline and keeping per-browser turn history.

pub mod bootstrap;
pub mod review_usecase;
pub mod session;

pub use bootstrap::{AppServices, ConfigOverrides};
pub use review_usecase::ReviewUseCase;
pub use session::{BackendProvider, GeminiBackendProvider, SessionManager, SessionStore};

#[cfg(test)]
pub(crate) mod test_support;
