use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    account::{Account, AccountId, NewAccount},
    session::{SessionIdentity, SessionToken},
    username::Username,
};

// AccountStore port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("Username is already taken")]
    DuplicateUsername,
    #[error("Account not found")]
    NotFound,
    #[error("Account store unavailable: {0}")]
    Unavailable(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::DuplicateUsername, Self::DuplicateUsername)
                | (Self::NotFound, Self::NotFound)
                | (Self::Unavailable(_), Self::Unavailable(_))
        )
    }
}

/// Row order for [`AccountStore::list_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountOrder {
    #[default]
    Insertion,
    /// Oldest birthdate first, ties by id.
    Birthdate,
}

/// Persistent account storage. Username uniqueness is the store's job.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn create(&self, account: NewAccount) -> Result<AccountId, AccountStoreError>;
    async fn find_by_username(&self, username: &Username) -> Result<Account, AccountStoreError>;
    async fn find_by_id(&self, id: AccountId) -> Result<Account, AccountStoreError>;
    async fn list_all(&self, order: AccountOrder) -> Result<Vec<Account>, AccountStoreError>;
}

// SessionStore port trait and errors
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Session store error: {0}")]
    UnexpectedError(String),
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn insert(
        &self,
        token: SessionToken,
        identity: SessionIdentity,
    ) -> Result<(), SessionStoreError>;

    /// Expired and unknown tokens both come back as `None`.
    async fn get(&self, token: &SessionToken) -> Result<Option<SessionIdentity>, SessionStoreError>;

    /// Removing a token that is not present is not an error.
    async fn remove(&self, token: &SessionToken) -> Result<(), SessionStoreError>;
}
