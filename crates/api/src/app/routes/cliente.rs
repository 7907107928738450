use axum::{Json, Router, extract::Extension, response::IntoResponse, routing::get};
use serde_json::json;

use crate::context::SessionContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(overview))
        .route("/dashboard", get(dashboard))
}

/// Area landing data: the signed-in user's own record.
pub async fn overview(Extension(ctx): Extension<SessionContext>) -> impl IntoResponse {
    let session = ctx.session();
    Json(json!({
        "area": "cliente",
        "title": "Área do Cliente",
        "user": {
            "id": session.id,
            "name": session.name,
            "email": session.email,
        },
    }))
}

pub async fn dashboard(Extension(ctx): Extension<SessionContext>) -> impl IntoResponse {
    Json(json!({
        "area": "cliente",
        "user_id": ctx.session().id,
        "services": [],
        "message": "Aqui você pode gerenciar seus serviços e solicitações.",
    }))
}
