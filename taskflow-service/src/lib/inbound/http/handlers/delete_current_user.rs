use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_current_user(
    State(state): State<AppState>,
    Extension(authenticated_user): Extension<AuthenticatedUser>,
) -> Result<StatusCode, ApiError> {
    let user = state
        .user_service
        .get_user(&authenticated_user.user_uuid)
        .await?;

    state.user_service.delete_user(user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
