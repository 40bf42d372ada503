use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{account::HashedPassword, password::Password};

#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Password hashing failed: {0}")]
    UnexpectedError(String),
}

/// Salted slow hash used for stored credentials.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<HashedPassword, PasswordHasherError>;

    /// `Ok(false)` on mismatch; `Err` only when the stored hash is unusable.
    async fn verify(
        &self,
        password: &Password,
        expected: &HashedPassword,
    ) -> Result<bool, PasswordHasherError>;

    /// A hash no submitted password is expected to match, costing as much to
    /// verify as a freshly stored one.
    /// Checked against when the username is unknown.
    fn dummy_hash(&self) -> HashedPassword;
}

/// Source of "today" for age and birthday checks.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
