use std::fmt;

use secrecy::Secret;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{birthdate::Birthdate, role::Role, username::Username};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Username must not be empty")]
    EmptyUsername,
    #[error("Password must not be empty")]
    EmptyPassword,
    #[error("Birthdate must not be empty")]
    EmptyBirthdate,
    #[error("Invalid birthdate '{0}', expected YYYY-MM-DD")]
    InvalidBirthdate(String),
    #[error("Unknown role '{0}'")]
    UnknownRole(String),
}

/// Store-assigned account identifier. Increases with every insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Password digest (PHC string, or a bcrypt digest from older deployments).
/// Opaque to everything except the hasher.
#[derive(Debug, Clone)]
pub struct HashedPassword(Secret<String>);

impl HashedPassword {
    pub fn new(hash: Secret<String>) -> Self {
        Self(hash)
    }
}

impl AsRef<Secret<String>> for HashedPassword {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// An account that has not been persisted yet.
#[derive(Debug, Clone)]
pub struct NewAccount {
    username: Username,
    password_hash: HashedPassword,
    birthdate: Birthdate,
    role: Role,
}

impl NewAccount {
    pub fn new(
        username: Username,
        password_hash: HashedPassword,
        birthdate: Birthdate,
        role: Role,
    ) -> Self {
        Self {
            username,
            password_hash,
            birthdate,
            role,
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password_hash(&self) -> &HashedPassword {
        &self.password_hash
    }

    pub fn birthdate(&self) -> &Birthdate {
        &self.birthdate
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn into_account(self, id: AccountId) -> Account {
        Account {
            id,
            username: self.username,
            password_hash: self.password_hash,
            birthdate: self.birthdate,
            role: self.role,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    username: Username,
    password_hash: HashedPassword,
    birthdate: Birthdate,
    role: Role,
}

impl Account {
    pub fn new(
        id: AccountId,
        username: Username,
        password_hash: HashedPassword,
        birthdate: Birthdate,
        role: Role,
    ) -> Self {
        Self {
            id,
            username,
            password_hash,
            birthdate,
            role,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password_hash(&self) -> &HashedPassword {
        &self.password_hash
    }

    pub fn birthdate(&self) -> &Birthdate {
        &self.birthdate
    }

    pub fn role(&self) -> Role {
        self.role
    }
}
