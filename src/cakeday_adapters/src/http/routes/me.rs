use axum::{Json, extract::State};
use axum_extra::extract::CookieJar;
use cakeday_application::BirthdayQueryUseCase;
use cakeday_core::{AccountStore, Clock, SessionIdentity, SessionStore};
use serde::Serialize;

use super::error::ApiError;
use crate::http::SessionCookie;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionIdentity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday_today: Option<bool>,
}

impl MeResponse {
    fn anonymous() -> Self {
        Self {
            logged_in: false,
            user: None,
            birthday_today: None,
        }
    }
}

#[tracing::instrument(name = "Me", skip_all)]
pub async fn me<A, S, C>(
    State((account_store, session_store, clock, session_cookie)): State<(
        A,
        S,
        C,
        SessionCookie,
    )>,
    jar: CookieJar,
) -> Result<Json<MeResponse>, ApiError>
where
    A: AccountStore + Clone + 'static,
    S: SessionStore + Clone + 'static,
    C: Clock + Clone + 'static,
{
    let Some(identity) = session_cookie
        .current_identity(&session_store, &jar)
        .await?
    else {
        return Ok(Json(MeResponse::anonymous()));
    };

    let birthday_today = BirthdayQueryUseCase::new(&account_store, &clock)
        .is_account_birthday_today(identity.id)
        .await?;

    Ok(Json(MeResponse {
        logged_in: true,
        user: Some(identity),
        birthday_today: Some(birthday_today),
    }))
}
