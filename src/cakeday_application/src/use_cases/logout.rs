use cakeday_core::{SessionStore, SessionStoreError, SessionToken};

/// Error types for logout use case
#[derive(Debug, thiserror::Error)]
pub enum LogoutError {
    #[error("Session store error: {0}")]
    SessionStoreError(#[from] SessionStoreError),
}

/// Logout use case - destroys the server-side session
pub struct LogoutUseCase<'a, S>
where
    S: SessionStore,
{
    session_store: &'a S,
}

impl<'a, S> LogoutUseCase<'a, S>
where
    S: SessionStore,
{
    pub fn new(session_store: &'a S) -> Self {
        Self { session_store }
    }

    /// Execute the logout use case
    ///
    /// Logging out without a session, or with one that is already gone,
    /// succeeds.
    #[tracing::instrument(name = "LogoutUseCase::execute", skip_all)]
    pub async fn execute(&self, token: Option<SessionToken>) -> Result<(), LogoutError> {
        if let Some(token) = token {
            self.session_store.remove(&token).await?;
        }
        Ok(())
    }
}
