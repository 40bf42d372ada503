use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tokio::time::Instant;

use cakeday_core::{SessionIdentity, SessionStore, SessionStoreError, SessionToken};

#[derive(Debug, Clone)]
struct SessionEntry {
    identity: SessionIdentity,
    created_at: Instant,
}

/// Process-local session table. Sessions do not survive a restart and are not
/// shared between processes.
///
/// Without a time to live an entry is only removed by logout or by a new
/// login from the same browser, so clients that never send the cookie back
/// leave one entry per login behind. The service configures a lifetime by
/// default (`session.time_to_live_secs`) and sweeps with [`Self::purge_expired`].
#[derive(Debug, Clone, Default)]
pub struct DashMapSessionStore {
    sessions: Arc<DashMap<SessionToken, SessionEntry>>,
    time_to_live: Option<Duration>,
}

impl DashMapSessionStore {
    /// Sessions never expire on their own and the table is unbounded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sessions expire `time_to_live` after login.
    pub fn with_time_to_live(time_to_live: Duration) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            time_to_live: Some(time_to_live),
        }
    }

    fn is_expired(&self, entry: &SessionEntry) -> bool {
        self.time_to_live
            .is_some_and(|ttl| entry.created_at.elapsed() >= ttl)
    }

    /// Drops every expired session and returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, entry| !self.is_expired(entry));
        before.saturating_sub(self.sessions.len())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[async_trait::async_trait]
impl SessionStore for DashMapSessionStore {
    async fn insert(
        &self,
        token: SessionToken,
        identity: SessionIdentity,
    ) -> Result<(), SessionStoreError> {
        self.sessions.insert(
            token,
            SessionEntry {
                identity,
                created_at: Instant::now(),
            },
        );
        Ok(())
    }

    async fn get(&self, token: &SessionToken) -> Result<Option<SessionIdentity>, SessionStoreError> {
        self.sessions
            .remove_if(token, |_, entry| self.is_expired(entry));
        Ok(self
            .sessions
            .get(token)
            .map(|entry| entry.identity.clone()))
    }

    async fn remove(&self, token: &SessionToken) -> Result<(), SessionStoreError> {
        self.sessions.remove(token);
        Ok(())
    }
}
