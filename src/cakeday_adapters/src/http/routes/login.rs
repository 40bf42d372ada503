use axum::{extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use cakeday_application::{LoginUseCase, LogoutUseCase};
use cakeday_core::{AccountStore, PasswordHasher, SessionStore};
use secrecy::Secret;
use serde::Deserialize;

use super::error::{ApiError, MessageResponse};
use crate::http::{JsonOrForm, SessionCookie};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<Secret<String>>,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<A, H, S>(
    State((account_store, hasher, session_store, session_cookie)): State<(
        A,
        H,
        S,
        SessionCookie,
    )>,
    jar: CookieJar,
    JsonOrForm(request): JsonOrForm<LoginRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    A: AccountStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    // Missing credentials fail verification like any other mismatch.
    let username = request.username.unwrap_or_default();
    let password = request
        .password
        .unwrap_or_else(|| Secret::new(String::new()));

    let session = LoginUseCase::new(&account_store, &hasher, &session_store)
        .execute(username, password)
        .await?;

    // A browser carries one session at a time; the one it replaces is revoked.
    LogoutUseCase::new(&session_store)
        .execute(session_cookie.token(&jar))
        .await?;

    let jar = jar.add(session_cookie.build(&session.token));

    Ok((jar, MessageResponse::new("Login successful")))
}
