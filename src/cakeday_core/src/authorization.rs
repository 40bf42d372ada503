//! Privilege checks for protected operations.
//!
//! The only input is the identity snapshot held by the session. The check is
//! made against its `role` field; usernames carry no privilege of their own.

use thiserror::Error;

use crate::domain::{role::Role, session::SessionIdentity};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationError {
    #[error("Login required")]
    Unauthenticated,
    #[error("{required} privileges required")]
    Forbidden { required: Role },
}

/// Any logged-in identity passes.
pub fn require_login(
    identity: Option<&SessionIdentity>,
) -> Result<&SessionIdentity, AuthorizationError> {
    identity.ok_or(AuthorizationError::Unauthenticated)
}

/// Anonymous callers are rejected as forbidden, same as an identity whose role
/// does not grant `required`.
pub fn require_role(
    identity: Option<&SessionIdentity>,
    required: Role,
) -> Result<&SessionIdentity, AuthorizationError> {
    match identity {
        Some(identity) if identity.role.grants(required) => Ok(identity),
        _ => Err(AuthorizationError::Forbidden { required }),
    }
}
