use std::fmt;

use rand::distr::{Alphanumeric, SampleString};
use serde::Serialize;

use super::{
    account::{Account, AccountId},
    role::Role,
    username::Username,
};

const TOKEN_LENGTH: usize = 48;

/// Opaque session key handed to the client in a cookie.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn generate() -> Self {
        Self(Alphanumeric.sample_string(&mut rand::rng(), TOKEN_LENGTH))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SessionToken {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken([REDACTED])")
    }
}

/// Identity snapshot bound to a session at login.
///
/// Not refreshed from the store afterwards: a role change only shows up after
/// the account logs in again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionIdentity {
    pub id: AccountId,
    pub username: Username,
    pub role: Role,
}

impl From<&Account> for SessionIdentity {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id(),
            username: account.username().clone(),
            role: account.role(),
        }
    }
}
