use axum::{Json, Router, extract::Extension, response::IntoResponse, routing::get};
use serde_json::json;

use crate::context::SessionContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(overview))
        .route("/tickets", get(tickets))
}

/// Area landing data: the signed-in agent's own record.
pub async fn overview(Extension(ctx): Extension<SessionContext>) -> impl IntoResponse {
    let session = ctx.session();
    Json(json!({
        "area": "suporte",
        "title": "Área de Suporte",
        "user": {
            "id": session.id,
            "name": session.name,
            "email": session.email,
        },
    }))
}

pub async fn tickets(Extension(ctx): Extension<SessionContext>) -> impl IntoResponse {
    Json(json!({
        "area": "suporte",
        "agent_id": ctx.session().id,
        "tickets": [],
        "message": "Aqui você pode visualizar e gerenciar os tickets de suporte.",
    }))
}
