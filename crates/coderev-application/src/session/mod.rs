mod manager;
mod store;

pub use manager::{BackendProvider, GeminiBackendProvider, SessionManager};
pub use store::SessionStore;
