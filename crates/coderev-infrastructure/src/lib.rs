//! Infrastructure layer for coderev.
//!
//! File-system backed configuration and credential loading.

pub mod config_service;
pub mod paths;
pub mod secret_service;

pub use config_service::ConfigService;
pub use paths::CoderevPaths;
pub use secret_service::SecretServiceImpl;
