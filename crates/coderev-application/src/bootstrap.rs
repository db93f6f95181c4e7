//! Wires configuration, credentials and the review pipeline together.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use coderev_core::config::AppConfig;
use coderev_core::secret::SecretService;
use coderev_infrastructure::{ConfigService, SecretServiceImpl};

use crate::review_usecase::ReviewUseCase;
use crate::session::{GeminiBackendProvider, SessionManager, SessionStore};

/// Command-line overrides applied on top of `config.toml`.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub model: Option<String>,
    pub bind: Option<String>,
}

/// Services shared by every front end.
pub struct AppServices {
    pub config: AppConfig,
    pub config_service: ConfigService,
    pub secret_service: Arc<dyn SecretService>,
    pub review_usecase: Arc<ReviewUseCase>,
    pub session_store: SessionStore,
}

impl AppServices {
    /// Loads configuration from `config_dir` (or the default location) and
    /// builds the pipeline.
    ///
    /// The credential is not checked here; a missing key surfaces as an
    /// initialization error on the first review.
    pub async fn load(config_dir: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let config_service =
            ConfigService::new(config_dir).context("Failed to resolve config path")?;
        let mut config = config_service
            .load()
            .await
            .with_context(|| format!("Failed to load {}", config_service.config_path().display()))?;

        if let Some(model) = overrides.model {
            config.model.name = model;
        }
        if let Some(bind) = overrides.bind {
            config.server.bind = bind;
        }

        let secret_service: Arc<dyn SecretService> =
            Arc::new(SecretServiceImpl::new(config_dir).context("Failed to set up secrets")?);

        Ok(Self::with_secrets(config, config_service, secret_service))
    }

    /// Builds the pipeline around an already resolved config and secret source.
    pub fn with_secrets(
        config: AppConfig,
        config_service: ConfigService,
        secret_service: Arc<dyn SecretService>,
    ) -> Self {
        tracing::info!(
            "[Bootstrap] Model {} via {}",
            config.model.name,
            config.model.base_url
        );
        let provider = Arc::new(GeminiBackendProvider::new(
            secret_service.clone(),
            config.model.clone(),
        ));
        let session_manager = Arc::new(SessionManager::new(provider));
        let session_store = SessionStore::with_idle_timeout(Duration::from_secs(
            config.server.session_idle_minutes.saturating_mul(60),
        ));

        Self {
            config,
            config_service,
            secret_service,
            review_usecase: Arc::new(ReviewUseCase::new(session_manager)),
            session_store,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_overrides_win_over_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "[model]\nname = \"from-file\"\n[server]\nbind = \"127.0.0.1:1\"\nsession_idle_minutes = 5\n",
        )
        .unwrap();

        let services = AppServices::load(
            Some(dir.path()),
            ConfigOverrides {
                model: Some("from-cli".to_string()),
                bind: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(services.config.model.name, "from-cli");
        assert_eq!(services.config.server.bind, "127.0.0.1:1");
        assert_eq!(
            services.session_store.idle_timeout(),
            Duration::from_secs(5 * 60)
        );
    }

    #[tokio::test]
    async fn test_broken_config_fails_startup() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("config.toml"), "[model\n").unwrap();

        let result = AppServices::load(Some(dir.path()), ConfigOverrides::default()).await;
        assert!(result.is_err());
    }
}
