//! Loads `config.toml`.

use crate::paths::CoderevPaths;
use coderev_core::config::AppConfig;
use coderev_core::{Result, ReviewError};
use std::path::{Path, PathBuf};

/// Reads application settings from `config.toml`.
///
/// A missing file is not an error; every setting has a default.
#[derive(Debug, Clone)]
pub struct ConfigService {
    config_path: PathBuf,
}

impl ConfigService {
    pub fn new(base_path: Option<&Path>) -> Result<Self> {
        let config_path = CoderevPaths::new(base_path)
            .config_file()
            .map_err(|e| ReviewError::config(format!("Failed to get config path: {e}")))?;
        Ok(Self { config_path })
    }

    /// Uses an explicit file instead of the resolved default location.
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub async fn load(&self) -> Result<AppConfig> {
        let content = match tokio::fs::read_to_string(&self.config_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(
                    "[ConfigService] {} not found, using defaults",
                    self.config_path.display()
                );
                return Ok(AppConfig::default());
            }
            Err(e) => return Err(e.into()),
        };

        toml::from_str(&content).map_err(|e| {
            ReviewError::config(format!(
                "Failed to parse {}: {}",
                self.config_path.display(),
                e
            ))
        })
    }
}
