use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use atrio_auth::IssuerError;

pub fn issuer_error_to_response(err: IssuerError) -> axum::response::Response {
    match err {
        IssuerError::InvalidCredentials => json_error(
            StatusCode::UNAUTHORIZED,
            "invalid_credentials",
            "invalid email or password",
        ),
        IssuerError::EmailTaken => json_error(
            StatusCode::CONFLICT,
            "email_taken",
            "email is already registered",
        ),
        IssuerError::Unavailable(msg) => {
            json_error(StatusCode::BAD_GATEWAY, "issuer_unavailable", msg)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
