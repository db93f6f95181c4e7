use coderev_core::Turn;
use coderev_core::config::DEFAULT_SESSION_IDLE_MINUTES;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

struct StoredHistory {
    turns: Vec<Turn>,
    last_access: Instant,
}

/// In-memory turn history per browser session.
///
/// Histories are read and written wholesale: callers load one, run a review
/// on a session seeded with it, then save the session's history back. The
/// last save for an id wins. Nothing survives a restart.
///
/// A session left unused for longer than the idle timeout is treated as
/// ended: it reads back empty and is dropped on the next save.
#[derive(Clone)]
pub struct SessionStore {
    histories: Arc<RwLock<HashMap<String, StoredHistory>>>,
    idle_timeout: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_idle_timeout(Duration::from_secs(DEFAULT_SESSION_IDLE_MINUTES * 60))
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            histories: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout,
        }
    }

    pub fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }

    /// Generates a fresh, unguessable session id.
    pub fn new_session_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    /// Returns a copy of the history for `session_id` (empty if unknown or idle).
    pub async fn load(&self, session_id: &str) -> Vec<Turn> {
        let histories = self.histories.read().await;
        histories
            .get(session_id)
            .filter(|stored| !self.is_idle(stored))
            .map(|stored| stored.turns.clone())
            .unwrap_or_default()
    }

    /// Replaces the history for `session_id` and drops idle sessions.
    pub async fn save(&self, session_id: &str, history: Vec<Turn>) {
        let mut histories = self.histories.write().await;

        let before = histories.len();
        histories.retain(|_, stored| !self.is_idle(stored));
        let evicted = before - histories.len();
        if evicted > 0 {
            tracing::debug!("[SessionStore] Evicted {} idle session(s)", evicted);
        }

        histories.insert(
            session_id.to_string(),
            StoredHistory {
                turns: history,
                last_access: Instant::now(),
            },
        );
    }

    /// Discards the history for `session_id`.
    pub async fn clear(&self, session_id: &str) {
        let mut histories = self.histories.write().await;
        histories.remove(session_id);
    }

    /// Number of turns stored for `session_id`.
    pub async fn turn_count(&self, session_id: &str) -> usize {
        let histories = self.histories.read().await;
        histories
            .get(session_id)
            .filter(|stored| !self.is_idle(stored))
            .map_or(0, |stored| stored.turns.len())
    }

    /// Number of sessions currently held, idle ones included until swept.
    pub async fn session_count(&self) -> usize {
        self.histories.read().await.len()
    }

    fn is_idle(&self, stored: &StoredHistory) -> bool {
        stored.last_access.elapsed() > self.idle_timeout
    }
}
