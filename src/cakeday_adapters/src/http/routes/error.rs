use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use cakeday_application::{LoginError, LogoutError, RegisterError, VerifyIdentityError};
use cakeday_core::{
    AccountStoreError, AuthorizationError, PasswordHasherError, RegistrationError,
    SessionStoreError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of every non-listing response, success or failure.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Rejected(#[from] RegistrationError),

    #[error("Username already taken")]
    UsernameTaken,

    #[error("Invalid username or password")]
    AuthenticationFailed,

    #[error(transparent)]
    Unauthorized(#[from] AuthorizationError),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ApiError::Rejected(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::UsernameTaken => StatusCode::CONFLICT,
            ApiError::AuthenticationFailed
            | ApiError::Unauthorized(AuthorizationError::Unauthenticated) => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::Unauthorized(AuthorizationError::Forbidden { .. }) => StatusCode::FORBIDDEN,
            ApiError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Store and hasher details stay in the log.
        let message = match &self {
            ApiError::UnexpectedError(e) => {
                tracing::error!(error = %e, "Request failed");
                String::from("Internal server error")
            }
            _ => self.to_string(),
        };

        (status_code, MessageResponse::new(message)).into_response()
    }
}

impl From<AccountStoreError> for ApiError {
    fn from(error: AccountStoreError) -> Self {
        match error {
            AccountStoreError::DuplicateUsername => ApiError::UsernameTaken,
            // No route looks an account up by a client-supplied key and expects a miss.
            AccountStoreError::NotFound | AccountStoreError::Unavailable(_) => {
                ApiError::UnexpectedError(error.to_string())
            }
        }
    }
}

impl From<SessionStoreError> for ApiError {
    fn from(error: SessionStoreError) -> Self {
        ApiError::UnexpectedError(error.to_string())
    }
}

impl From<PasswordHasherError> for ApiError {
    fn from(error: PasswordHasherError) -> Self {
        ApiError::UnexpectedError(error.to_string())
    }
}

impl From<RegisterError> for ApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::Rejected(e) => e.into(),
            RegisterError::AccountStoreError(e) => e.into(),
            RegisterError::PasswordHasherError(e) => e.into(),
        }
    }
}

impl From<VerifyIdentityError> for ApiError {
    fn from(error: VerifyIdentityError) -> Self {
        match error {
            VerifyIdentityError::AuthenticationFailed => ApiError::AuthenticationFailed,
            VerifyIdentityError::AccountStoreError(e) => e.into(),
            VerifyIdentityError::PasswordHasherError(e) => e.into(),
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::VerifyIdentityError(e) => e.into(),
            LoginError::SessionStoreError(e) => e.into(),
        }
    }
}

impl From<LogoutError> for ApiError {
    fn from(error: LogoutError) -> Self {
        match error {
            LogoutError::SessionStoreError(e) => e.into(),
        }
    }
}
