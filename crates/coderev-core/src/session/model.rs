use std::sync::Arc;

use super::Turn;
use crate::chat::ChatBackend;

/// A conversational context with the remote model.
///
/// The session is owned by its caller and passed explicitly to every send;
/// nothing about it is global. Callers that need the history to outlive the
/// session object take it out with [`ChatSession::into_history`] and seed the
/// next one with [`ChatSession::with_history`].
pub struct ChatSession {
    /// Fixed instruction describing the required reply format
    system_instruction: String,
    /// Prior turns in submission order
    history: Vec<Turn>,
    /// Model handle the turns are sent through
    backend: Arc<dyn ChatBackend>,
}

impl ChatSession {
    /// Opens an empty session bound to `system_instruction`.
    pub fn new(backend: Arc<dyn ChatBackend>, system_instruction: impl Into<String>) -> Self {
        Self {
            system_instruction: system_instruction.into(),
            history: Vec::new(),
            backend,
        }
    }

    /// Replaces the history wholesale with a previously saved one.
    pub fn with_history(mut self, history: Vec<Turn>) -> Self {
        self.history = history;
        self
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn backend(&self) -> &Arc<dyn ChatBackend> {
        &self.backend
    }

    /// Appends a completed exchange.
    pub fn record_turn(&mut self, turn: Turn) {
        self.history.push(turn);
    }

    /// Consumes the session, returning its history for storage.
    pub fn into_history(self) -> Vec<Turn> {
        self.history
    }
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("model", &self.backend.model())
            .field("turns", &self.history.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;

    struct NullBackend;

    #[async_trait::async_trait]
    impl ChatBackend for NullBackend {
        fn model(&self) -> &str {
            "null"
        }

        async fn send_chat(&self, _: &[Turn], _: &str, _: &str) -> Result<String> {
            Ok(String::new())
        }
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = ChatSession::new(Arc::new(NullBackend), "be terse");
        assert!(session.history().is_empty());
        assert_eq!(session.system_instruction(), "be terse");
    }

    #[test]
    fn test_history_round_trips_through_storage() {
        let mut session = ChatSession::new(Arc::new(NullBackend), "be terse");
        session.record_turn(Turn::new("first", "one"));
        session.record_turn(Turn::new("second", "two"));

        let saved = session.into_history();
        let restored = ChatSession::new(Arc::new(NullBackend), "be terse").with_history(saved);

        let prompts: Vec<&str> = restored.history().iter().map(|t| t.prompt.as_str()).collect();
        assert_eq!(prompts, vec!["first", "second"]);
    }

    #[test]
    fn test_debug_shows_model_and_turn_count() {
        let mut session = ChatSession::new(Arc::new(NullBackend), "x");
        session.record_turn(Turn::new("p", "r"));
        let rendered = format!("{session:?}");
        assert!(rendered.contains("null"));
        assert!(rendered.contains("turns: 1"));
    }
}
