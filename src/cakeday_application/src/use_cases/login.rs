use cakeday_core::{
    AccountStore, PasswordHasher, SessionIdentity, SessionStore, SessionStoreError, SessionToken,
};
use secrecy::Secret;

use super::verify_identity::{VerifyIdentityError, VerifyIdentityUseCase};

/// A freshly bound session, ready to be handed to the client.
#[derive(Debug, Clone)]
pub struct EstablishedSession {
    pub token: SessionToken,
    pub identity: SessionIdentity,
}

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error(transparent)]
    VerifyIdentityError(#[from] VerifyIdentityError),
    #[error("Session store error: {0}")]
    SessionStoreError(#[from] SessionStoreError),
}

/// Login use case - verifies credentials and binds the identity to a new session
pub struct LoginUseCase<'a, A, H, S>
where
    A: AccountStore,
    H: PasswordHasher,
    S: SessionStore,
{
    account_store: &'a A,
    hasher: &'a H,
    session_store: &'a S,
}

impl<'a, A, H, S> LoginUseCase<'a, A, H, S>
where
    A: AccountStore,
    H: PasswordHasher,
    S: SessionStore,
{
    pub fn new(account_store: &'a A, hasher: &'a H, session_store: &'a S) -> Self {
        Self {
            account_store,
            hasher,
            session_store,
        }
    }

    /// Execute the login use case
    ///
    /// # Returns
    /// The new session token together with the `{id, username, role}` snapshot
    /// stored under it
    #[tracing::instrument(name = "LoginUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        username: String,
        password: Secret<String>,
    ) -> Result<EstablishedSession, LoginError> {
        let account = VerifyIdentityUseCase::new(self.account_store, self.hasher)
            .execute(username, password)
            .await?;

        let identity = SessionIdentity::from(&account);
        let token = SessionToken::generate();

        self.session_store
            .insert(token.clone(), identity.clone())
            .await?;

        tracing::info!(id = %identity.id, username = %identity.username, role = %identity.role, "Session established");

        Ok(EstablishedSession { token, identity })
    }
}
