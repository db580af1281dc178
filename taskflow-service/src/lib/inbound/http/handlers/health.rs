use axum::Json;
use serde::Serialize;

pub async fn health() -> Json<HealthResponseBody> {
    Json(HealthResponseBody {
        status: "OK",
        message: "Server is healthy",
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponseBody {
    pub status: &'static str,
    pub message: &'static str,
}
