use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use cakeday_application::RegisterUseCase;
use cakeday_core::{AccountStore, Clock, PasswordHasher, RegistrationForm, RegistrationPolicy};
use secrecy::Secret;
use serde::Deserialize;

use super::error::{ApiError, MessageResponse};
use crate::http::JsonOrForm;

#[derive(Deserialize)]
pub struct SignupRequest {
    pub username: Option<String>,
    pub password: Option<Secret<String>>,
    pub birthdate: Option<String>,
}

impl From<SignupRequest> for RegistrationForm {
    fn from(request: SignupRequest) -> Self {
        RegistrationForm {
            username: request.username,
            password: request.password,
            birthdate: request.birthdate,
        }
    }
}

#[tracing::instrument(name = "Signup", skip_all)]
pub async fn signup<A, H, C>(
    State((account_store, hasher, clock, policy)): State<(A, H, C, Arc<RegistrationPolicy>)>,
    JsonOrForm(request): JsonOrForm<SignupRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    A: AccountStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    C: Clock + Clone + 'static,
{
    let use_case = RegisterUseCase::new(&account_store, &hasher, &clock, &policy);

    use_case.execute(request.into()).await?;

    Ok((
        StatusCode::CREATED,
        MessageResponse::new("Registration successful"),
    ))
}
