use axum::{extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use cakeday_application::LogoutUseCase;
use cakeday_core::SessionStore;

use super::error::{ApiError, MessageResponse};
use crate::http::SessionCookie;

/// Logging out without a session is not an error.
#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout<S>(
    State((session_store, session_cookie)): State<(S, SessionCookie)>,
    jar: CookieJar,
) -> Result<impl IntoResponse, ApiError>
where
    S: SessionStore + Clone + 'static,
{
    LogoutUseCase::new(&session_store)
        .execute(session_cookie.token(&jar))
        .await?;

    let jar = jar.remove(session_cookie.removal());

    Ok((jar, MessageResponse::new("Logged out")))
}
