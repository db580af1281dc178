use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::AuthResponseBody;
use crate::domain::auth::models::RegisterStatus;
use crate::domain::auth::models::UserCredentials;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequestBody>, JsonRejection>,
) -> Result<Json<AuthResponseBody>, ApiError> {
    let Json(body) = payload?;

    state
        .auth_service
        .register(body.into())
        .await
        .map_err(ApiError::from)
        .map(|status| Json(status.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

impl From<RegisterRequestBody> for UserCredentials {
    fn from(body: RegisterRequestBody) -> Self {
        UserCredentials::new(body.name, body.email, body.password)
    }
}

impl From<RegisterStatus> for AuthResponseBody {
    fn from(status: RegisterStatus) -> Self {
        Self {
            status: status.code(),
            message: status.label(),
            token: None,
        }
    }
}
