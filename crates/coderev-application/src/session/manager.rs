use std::sync::Arc;

use async_trait::async_trait;
use coderev_core::config::ModelConfig;
use coderev_core::secret::SecretService;
use coderev_core::{ChatBackend, ChatSession, Result, ReviewError, Turn};
use coderev_interaction::GeminiApiAgent;

/// Produces a ready-to-use model handle.
///
/// Called once per [`SessionManager::start`]; any failure becomes an
/// initialization error.
#[async_trait]
pub trait BackendProvider: Send + Sync {
    async fn connect(&self) -> Result<Arc<dyn ChatBackend>>;
}

/// Builds [`GeminiApiAgent`]s from the configured credential.
pub struct GeminiBackendProvider {
    secrets: Arc<dyn SecretService>,
    model: ModelConfig,
}

impl GeminiBackendProvider {
    pub fn new(secrets: Arc<dyn SecretService>, model: ModelConfig) -> Self {
        Self { secrets, model }
    }
}

#[async_trait]
impl BackendProvider for GeminiBackendProvider {
    async fn connect(&self) -> Result<Arc<dyn ChatBackend>> {
        let agent = GeminiApiAgent::try_from_secrets(self.secrets.as_ref(), &self.model).await?;
        Ok(Arc::new(agent))
    }
}

/// Opens chat sessions and sends prompts through them.
pub struct SessionManager {
    provider: Arc<dyn BackendProvider>,
}

impl SessionManager {
    pub fn new(provider: Arc<dyn BackendProvider>) -> Self {
        Self { provider }
    }

    /// Opens an empty session bound to `system_instruction`.
    ///
    /// Errors from the provider are reported as
    /// [`ReviewError::Initialization`]; there is no retry.
    pub async fn start(&self, system_instruction: &str) -> Result<ChatSession> {
        let backend = self.provider.connect().await.map_err(|e| match e {
            ReviewError::Initialization(_) => e,
            other => ReviewError::initialization(other.to_string()),
        })?;
        tracing::debug!("[SessionManager] Session started with model {}", backend.model());
        Ok(ChatSession::new(backend, system_instruction))
    }

    /// Sends `prompt` with the session's full history.
    ///
    /// On success the exchange is appended to the session; on failure the
    /// session is left untouched.
    pub async fn send(&self, session: &mut ChatSession, prompt: &str) -> Result<String> {
        let reply = session
            .backend()
            .send_chat(session.history(), session.system_instruction(), prompt)
            .await
            .map_err(|e| match e {
                ReviewError::Response(_) => e,
                other => ReviewError::response(other.to_string()),
            })?;

        session.record_turn(Turn::new(prompt, reply.clone()));
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FailingProvider, ScriptedBackend, ScriptedProvider};

    #[tokio::test]
    async fn test_start_binds_instruction() {
        let backend = ScriptedBackend::replying(["ok"]);
        let manager = SessionManager::new(Arc::new(ScriptedProvider::new(backend)));

        let session = manager.start("use the template").await.unwrap();
        assert_eq!(session.system_instruction(), "use the template");
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn test_start_failure_is_initialization_error() {
        let manager = SessionManager::new(Arc::new(FailingProvider::config("bad config")));
        let err = manager.start("x").await.unwrap_err();
        assert!(err.is_initialization());
        assert!(err.to_string().contains("bad config"));
    }

    #[tokio::test]
    async fn test_send_passes_history_and_records_turn() {
        let backend = ScriptedBackend::replying(["first reply", "second reply"]);
        let manager = SessionManager::new(Arc::new(ScriptedProvider::new(backend.clone())));
        let mut session = manager.start("sys").await.unwrap();

        assert_eq!(manager.send(&mut session, "one").await.unwrap(), "first reply");
        assert_eq!(manager.send(&mut session, "two").await.unwrap(), "second reply");

        let calls = backend.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].history_len, 0);
        assert_eq!(calls[1].history_len, 1);
        assert_eq!(calls[1].system_instruction, "sys");
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history()[1].reply, "second reply");
    }

    #[tokio::test]
    async fn test_failed_send_leaves_history_untouched() {
        let backend = ScriptedBackend::failing("connection reset");
        let manager = SessionManager::new(Arc::new(ScriptedProvider::new(backend)));
        let mut session = manager.start("sys").await.unwrap();

        let err = manager.send(&mut session, "one").await.unwrap_err();
        assert!(err.is_response());
        assert!(session.history().is_empty());
    }
}
