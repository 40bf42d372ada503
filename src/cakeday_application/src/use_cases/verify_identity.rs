use cakeday_core::{
    Account, AccountStore, AccountStoreError, Password, PasswordHasher, PasswordHasherError,
    Username,
};
use secrecy::Secret;

/// Error types for identity verification.
///
/// Unknown usernames and wrong passwords both surface as `AuthenticationFailed`
/// so callers cannot tell which accounts exist.
#[derive(Debug, thiserror::Error)]
pub enum VerifyIdentityError {
    #[error("Invalid username or password")]
    AuthenticationFailed,
    #[error("Account store error: {0}")]
    AccountStoreError(AccountStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
}

impl From<AccountStoreError> for VerifyIdentityError {
    fn from(error: AccountStoreError) -> Self {
        match error {
            AccountStoreError::NotFound => VerifyIdentityError::AuthenticationFailed,
            other => VerifyIdentityError::AccountStoreError(other),
        }
    }
}

/// Verify identity use case - checks a username/password pair against the store
pub struct VerifyIdentityUseCase<'a, A, H>
where
    A: AccountStore,
    H: PasswordHasher,
{
    account_store: &'a A,
    hasher: &'a H,
}

impl<'a, A, H> VerifyIdentityUseCase<'a, A, H>
where
    A: AccountStore,
    H: PasswordHasher,
{
    pub fn new(account_store: &'a A, hasher: &'a H) -> Self {
        Self {
            account_store,
            hasher,
        }
    }

    #[tracing::instrument(name = "VerifyIdentityUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        username: String,
        password: Secret<String>,
    ) -> Result<Account, VerifyIdentityError> {
        let username =
            Username::try_from(username).map_err(|_| VerifyIdentityError::AuthenticationFailed)?;
        let password =
            Password::try_from(password).map_err(|_| VerifyIdentityError::AuthenticationFailed)?;

        let account = match self.account_store.find_by_username(&username).await {
            Ok(account) => account,
            Err(AccountStoreError::NotFound) => {
                // Same hash work as a wrong password, so timing does not reveal
                // which usernames exist.
                self.hasher.verify(&password, &self.hasher.dummy_hash()).await?;
                tracing::debug!(%username, "Unknown username");
                return Err(VerifyIdentityError::AuthenticationFailed);
            }
            Err(e) => return Err(e.into()),
        };

        if !self.hasher.verify(&password, account.password_hash()).await? {
            tracing::debug!(%username, "Password mismatch");
            return Err(VerifyIdentityError::AuthenticationFailed);
        }

        Ok(account)
    }
}
