use cakeday_core::{SessionIdentity, SessionStore, SessionStoreError, SessionToken};

/// Resolves the identity behind a session token. `None` means anonymous.
pub struct CurrentIdentityUseCase<'a, S>
where
    S: SessionStore,
{
    session_store: &'a S,
}

impl<'a, S> CurrentIdentityUseCase<'a, S>
where
    S: SessionStore,
{
    pub fn new(session_store: &'a S) -> Self {
        Self { session_store }
    }

    #[tracing::instrument(name = "CurrentIdentityUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        token: Option<&SessionToken>,
    ) -> Result<Option<SessionIdentity>, SessionStoreError> {
        match token {
            Some(token) => self.session_store.get(token).await,
            None => Ok(None),
        }
    }
}
