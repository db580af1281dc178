use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::AuthResponseBody;
use crate::domain::auth::models::LoginOutcome;
use crate::domain::auth::models::UserCredentials;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<Json<AuthResponseBody>, ApiError> {
    let Json(body) = payload?;

    state
        .auth_service
        .login(body.into())
        .await
        .map_err(ApiError::from)
        .map(|outcome| Json(outcome.into()))
}

/// Missing fields decode as empty strings and are rejected by the use case.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

impl From<LoginRequestBody> for UserCredentials {
    fn from(body: LoginRequestBody) -> Self {
        UserCredentials::new(String::new(), body.email, body.password)
    }
}

impl From<LoginOutcome> for AuthResponseBody {
    fn from(outcome: LoginOutcome) -> Self {
        Self {
            status: outcome.status.code(),
            message: outcome.status.label(),
            token: outcome.token,
        }
    }
}
