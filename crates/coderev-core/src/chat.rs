//! Chat backend abstraction.

use crate::error::Result;
use crate::session::Turn;

/// A chat-capable remote model.
///
/// Implementations are stateless with respect to the conversation: the full
/// prior history and the system instruction travel with every call.
#[async_trait::async_trait]
pub trait ChatBackend: Send + Sync {
    /// Model identifier, used for logging.
    fn model(&self) -> &str;

    /// Sends `prompt` after `history` and returns the reply text.
    ///
    /// Fails with [`crate::ReviewError::Response`] when the call fails or the
    /// payload carries no text.
    async fn send_chat(
        &self,
        history: &[Turn],
        system_instruction: &str,
        prompt: &str,
    ) -> Result<String>;
}
