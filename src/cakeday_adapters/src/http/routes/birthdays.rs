use axum::{Json, extract::State};
use axum_extra::extract::CookieJar;
use cakeday_application::{BirthdayEntry, BirthdayListing, BirthdayQueryUseCase};
use cakeday_core::{AccountStore, Clock, Role, SessionStore, require_login, require_role};

use super::error::ApiError;
use crate::http::SessionCookie;

type BirthdayState<A, S, C> = (A, S, C, SessionCookie);

#[tracing::instrument(name = "Todays birthdays", skip_all)]
pub async fn todays_birthdays<A, S, C>(
    State((account_store, session_store, clock, session_cookie)): State<BirthdayState<A, S, C>>,
    jar: CookieJar,
) -> Result<Json<Vec<BirthdayEntry>>, ApiError>
where
    A: AccountStore + Clone + 'static,
    S: SessionStore + Clone + 'static,
    C: Clock + Clone + 'static,
{
    let identity = session_cookie
        .current_identity(&session_store, &jar)
        .await?;
    require_login(identity.as_ref())?;

    let entries = BirthdayQueryUseCase::new(&account_store, &clock)
        .todays_birthdays()
        .await?;

    Ok(Json(entries))
}

#[tracing::instrument(name = "Admin todays birthdays", skip_all)]
pub async fn admin_todays_birthdays<A, S, C>(
    State((account_store, session_store, clock, session_cookie)): State<BirthdayState<A, S, C>>,
    jar: CookieJar,
) -> Result<Json<Vec<BirthdayEntry>>, ApiError>
where
    A: AccountStore + Clone + 'static,
    S: SessionStore + Clone + 'static,
    C: Clock + Clone + 'static,
{
    let identity = session_cookie
        .current_identity(&session_store, &jar)
        .await?;
    require_role(identity.as_ref(), Role::Admin)?;

    let entries = BirthdayQueryUseCase::new(&account_store, &clock)
        .todays_birthdays()
        .await?;

    Ok(Json(entries))
}

#[tracing::instrument(name = "Admin all birthdays", skip_all)]
pub async fn admin_all_birthdays<A, S, C>(
    State((account_store, session_store, clock, session_cookie)): State<BirthdayState<A, S, C>>,
    jar: CookieJar,
) -> Result<Json<Vec<BirthdayListing>>, ApiError>
where
    A: AccountStore + Clone + 'static,
    S: SessionStore + Clone + 'static,
    C: Clock + Clone + 'static,
{
    let identity = session_cookie
        .current_identity(&session_store, &jar)
        .await?;
    require_role(identity.as_ref(), Role::Admin)?;

    let listings = BirthdayQueryUseCase::new(&account_store, &clock)
        .all_birthdays_sorted()
        .await?;

    Ok(Json(listings))
}
