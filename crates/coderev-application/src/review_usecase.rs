//! Review pipeline.
//!
//! Blank check, local syntax check, remote critique, reply extraction. The
//! first two stages short-circuit before any session is opened.

use std::sync::Arc;

use coderev_core::review::{self, REVIEW_SYSTEM_INSTRUCTION};
use coderev_core::{ChatSession, Result, ReviewError, ReviewRequest, ReviewResult};

use crate::session::{SessionManager, SessionStore};

pub struct ReviewUseCase {
    session_manager: Arc<SessionManager>,
}

impl ReviewUseCase {
    pub fn new(session_manager: Arc<SessionManager>) -> Self {
        Self { session_manager }
    }

    pub fn session_manager(&self) -> &Arc<SessionManager> {
        &self.session_manager
    }

    /// Rejects blank input, then input that does not parse.
    fn precheck(request: &ReviewRequest) -> Result<()> {
        if request.is_blank() {
            return Err(ReviewError::EmptyInput);
        }
        if let Some(message) = review::validate(&request.source) {
            tracing::info!("[ReviewUseCase] Rejected submission: {}", message);
            return Err(ReviewError::syntax(message));
        }
        Ok(())
    }

    /// Reviews `request` within an already open session.
    pub async fn review(
        &self,
        session: &mut ChatSession,
        request: &ReviewRequest,
    ) -> Result<ReviewResult> {
        Self::precheck(request)?;
        self.critique(session, request).await
    }

    /// Reviews `request` in the browser session `session_id`.
    ///
    /// Opens a session seeded with the stored history, and on success writes
    /// the extended history back to `store`.
    pub async fn review_in_session(
        &self,
        store: &SessionStore,
        session_id: &str,
        request: &ReviewRequest,
    ) -> Result<ReviewResult> {
        Self::precheck(request)?;

        let history = store.load(session_id).await;
        let mut session = self
            .session_manager
            .start(REVIEW_SYSTEM_INSTRUCTION)
            .await?
            .with_history(history);

        let result = self.critique(&mut session, request).await?;
        store.save(session_id, session.into_history()).await;
        Ok(result)
    }

    async fn critique(
        &self,
        session: &mut ChatSession,
        request: &ReviewRequest,
    ) -> Result<ReviewResult> {
        tracing::info!(
            "[ReviewUseCase] Requesting review ({} bytes, {} prior turns)",
            request.source.len(),
            session.history().len()
        );
        let reply = self
            .session_manager
            .send(session, &request.source)
            .await
            .inspect_err(|e| tracing::error!("[ReviewUseCase] Review request failed: {}", e))?;

        let result = review::extract(&reply);
        tracing::debug!(
            "[ReviewUseCase] Extracted {} issue lines",
            result.issues.len()
        );
        Ok(result)
    }
}
