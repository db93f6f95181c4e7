//! Secret service implementation.
//!
//! The Gemini key comes from the `GEMINI_API_KEY` environment variable when
//! set, otherwise from `secret.json`:
//!
//! ```json
//! { "gemini": { "api_key": "...", "model_name": "gemini-2.5-flash" } }
//! ```

use crate::paths::CoderevPaths;
use anyhow::Result;
use coderev_core::config::{GEMINI_API_KEY_ENV, GeminiConfig, SecretConfig};
use coderev_core::secret::SecretService;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Loads secrets from the environment and `secret.json`, caching the result.
#[derive(Clone)]
pub struct SecretServiceImpl {
    secret_path: PathBuf,
    /// Key taken from the environment at construction time
    env_api_key: Option<String>,
    secrets: Arc<RwLock<Option<SecretConfig>>>,
}

impl SecretServiceImpl {
    /// Creates a service reading `secret.json` under `base_path` (or the
    /// default config dir) and capturing `GEMINI_API_KEY`.
    pub fn new(base_path: Option<&Path>) -> Result<Self> {
        let secret_path = CoderevPaths::new(base_path)
            .secret_file()
            .map_err(|e| anyhow::anyhow!("Failed to get secret path: {}", e))?;

        let env_api_key = std::env::var(GEMINI_API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());

        Ok(Self {
            secret_path,
            env_api_key,
            secrets: Arc::new(RwLock::new(None)),
        })
    }

    /// Overrides the captured environment key.
    pub fn with_env_api_key(mut self, key: Option<String>) -> Self {
        self.env_api_key = key.filter(|k| !k.trim().is_empty());
        self
    }

    pub fn secret_path(&self) -> &Path {
        &self.secret_path
    }

    async fn read_secret_file(&self) -> Result<SecretConfig, String> {
        match tokio::fs::read_to_string(&self.secret_path).await {
            // Only the position is reported; type errors would echo the value.
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                format!(
                    "Failed to parse secret file at {}: {:?} error at line {}, column {}",
                    self.secret_path.display(),
                    e.classify(),
                    e.line(),
                    e.column()
                )
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(SecretConfig::default()),
            Err(e) => Err(format!(
                "Failed to read secret file at {}: {}",
                self.secret_path.display(),
                e
            )),
        }
    }

    async fn load_secrets_internal(&self) -> Result<SecretConfig, String> {
        {
            let cached = self.secrets.read().await;
            if let Some(ref config) = *cached {
                return Ok(config.clone());
            }
        }

        let mut loaded = self.read_secret_file().await?;
        if let Some(key) = &self.env_api_key {
            tracing::debug!("[SecretService] Using API key from {}", GEMINI_API_KEY_ENV);
            let model_name = loaded.gemini.and_then(|g| g.model_name);
            loaded.gemini = Some(GeminiConfig {
                api_key: key.clone(),
                model_name,
            });
        }

        *self.secrets.write().await = Some(loaded.clone());
        Ok(loaded)
    }
}

#[async_trait::async_trait]
impl SecretService for SecretServiceImpl {
    async fn load_secrets(&self) -> Result<SecretConfig, String> {
        self.load_secrets_internal().await
    }

    async fn secret_file_exists(&self) -> bool {
        tokio::fs::try_exists(&self.secret_path)
            .await
            .unwrap_or(false)
    }
}
