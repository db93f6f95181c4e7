//! In-memory doubles for the chat backend seam.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use coderev_core::{ChatBackend, Result, ReviewError, Turn};

use crate::session::BackendProvider;

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub history_len: usize,
    pub history_prompts: Vec<String>,
    pub system_instruction: String,
    pub prompt: String,
}

/// Replies from a fixed script and records every call.
#[derive(Clone, Default)]
pub struct ScriptedBackend {
    replies: Arc<Mutex<VecDeque<Result<String>>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl ScriptedBackend {
    pub fn replying<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let backend = Self::default();
        backend
            .replies
            .lock()
            .unwrap()
            .extend(replies.into_iter().map(|r| Ok(r.into())));
        backend
    }

    pub fn failing(message: &str) -> Self {
        let backend = Self::default();
        backend
            .replies
            .lock()
            .unwrap()
            .push_back(Err(ReviewError::response(message)));
        backend
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    fn model(&self) -> &str {
        "scripted"
    }

    async fn send_chat(
        &self,
        history: &[Turn],
        system_instruction: &str,
        prompt: &str,
    ) -> Result<String> {
        self.calls.lock().unwrap().push(RecordedCall {
            history_len: history.len(),
            history_prompts: history.iter().map(|t| t.prompt.clone()).collect(),
            system_instruction: system_instruction.to_string(),
            prompt: prompt.to_string(),
        });
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ReviewError::response("script exhausted")))
    }
}

/// Hands out the same scripted backend and counts connections.
pub struct ScriptedProvider {
    backend: ScriptedBackend,
    connects: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new(backend: ScriptedBackend) -> Self {
        Self {
            backend,
            connects: AtomicUsize::new(0),
        }
    }

    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BackendProvider for ScriptedProvider {
    async fn connect(&self) -> Result<Arc<dyn ChatBackend>> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(self.backend.clone()))
    }
}

/// Always fails to connect.
pub struct FailingProvider(ReviewError);

impl FailingProvider {
    pub fn config(message: &str) -> Self {
        Self(ReviewError::config(message))
    }
}

#[async_trait]
impl BackendProvider for FailingProvider {
    async fn connect(&self) -> Result<Arc<dyn ChatBackend>> {
        Err(self.0.clone())
    }
}
