use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::json;

use atrio_auth::{PUBLIC_ENTRY, Role, SESSION_COOKIE, UserSession, encode};

use crate::app::{dto, errors, services::AppServices};

/// Cookie lifetime: one day.
const SESSION_MAX_AGE_SECS: u32 = 86_400;

pub fn router() -> Router {
    Router::new()
        .route("/", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoginRequest>,
) -> Response {
    let session = match services.issuer.authenticate(&body.email, &body.password).await {
        Ok(session) => session,
        Err(e) => return errors::issuer_error_to_response(e),
    };

    session_response(StatusCode::OK, &services, &session, "login ok")
}

pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::RegisterRequest>,
) -> Response {
    let role: Role = match body.role.parse() {
        Ok(role) => role,
        Err(_) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_role",
                "role must be one of: cliente, suporte",
            );
        }
    };

    let session = match services
        .issuer
        .register(atrio_auth::NewUser {
            name: body.name,
            email: body.email,
            password: body.password,
            role,
        })
        .await
    {
        Ok(session) => session,
        Err(e) => return errors::issuer_error_to_response(e),
    };

    // Registration establishes a session right away; no separate login step.
    session_response(StatusCode::CREATED, &services, &session, "registered")
}

pub async fn logout() -> Response {
    let clear = format!("{SESSION_COOKIE}=; Path=/; Max-Age=0; HttpOnly");
    (
        StatusCode::OK,
        [(header::SET_COOKIE, clear)],
        Json(json!({ "message": "logged out", "redirect_to": PUBLIC_ENTRY })),
    )
        .into_response()
}

/// Establish the session: attach the credential cookie and point the client
/// at the area its role owns.
///
/// The cookie value is the percent-encoded codec output, so display names
/// outside ASCII survive the header round trip.
fn session_response(
    status: StatusCode,
    services: &AppServices,
    session: &UserSession,
    message: &str,
) -> Response {
    let value = urlencoding::encode(&encode(session)).into_owned();
    let cookie =
        format!("{SESSION_COOKIE}={value}; Path=/; Max-Age={SESSION_MAX_AGE_SECS}; HttpOnly");
    let redirect_to = services
        .policy
        .home_prefix(session.role)
        .unwrap_or(PUBLIC_ENTRY);

    (
        status,
        [(header::SET_COOKIE, cookie)],
        Json(json!({
            "message": message,
            "user": {
                "id": session.id,
                "name": session.name,
                "email": session.email,
                "role": session.role.as_str(),
            },
            "redirect_to": redirect_to,
        })),
    )
        .into_response()
}
