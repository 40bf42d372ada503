use cakeday_core::{
    AccountId, AccountStore, AccountStoreError, Clock, NewAccount, PasswordHasher,
    PasswordHasherError, RegistrationError, RegistrationForm, RegistrationPolicy,
};

#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error(transparent)]
    Rejected(#[from] RegistrationError),
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
}

/// Register use case - validates a signup against the policy and stores the account
pub struct RegisterUseCase<'a, A, H, C>
where
    A: AccountStore,
    H: PasswordHasher,
    C: Clock,
{
    account_store: &'a A,
    hasher: &'a H,
    clock: &'a C,
    policy: &'a RegistrationPolicy,
}

impl<'a, A, H, C> RegisterUseCase<'a, A, H, C>
where
    A: AccountStore,
    H: PasswordHasher,
    C: Clock,
{
    pub fn new(
        account_store: &'a A,
        hasher: &'a H,
        clock: &'a C,
        policy: &'a RegistrationPolicy,
    ) -> Self {
        Self {
            account_store,
            hasher,
            clock,
            policy,
        }
    }

    /// Execute the register use case
    ///
    /// # Returns
    /// The new account id, `Rejected` when the policy refuses the form, or
    /// `AccountStoreError::DuplicateUsername` when the name is taken
    #[tracing::instrument(name = "RegisterUseCase::execute", skip_all)]
    pub async fn execute(&self, form: RegistrationForm) -> Result<AccountId, RegisterError> {
        let registration = self.policy.validate(form, self.clock.today())?;

        let password_hash = self.hasher.hash(&registration.password).await?;

        let account = NewAccount::new(
            registration.username,
            password_hash,
            registration.birthdate,
            registration.role,
        );
        let username = account.username().clone();
        let role = account.role();

        let id = self.account_store.create(account).await?;
        tracing::info!(%id, %username, %role, "Account registered");

        Ok(id)
    }
}
