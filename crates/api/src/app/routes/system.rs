use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Public entry point and the gate's unauthenticated-redirect target:
/// points the caller at the sign-in surface.
pub async fn index() -> impl IntoResponse {
    Json(json!({
        "service": "atrio",
        "login": "POST /api/users/login",
        "register": "POST /api/users",
    }))
}
