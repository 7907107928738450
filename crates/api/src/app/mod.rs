//! HTTP application wiring (axum router + service wiring).
//!
//! - `services.rs`: service wiring (credential issuer, policy table)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
///
/// The gate is layered over the whole router: protected prefixes are
/// intercepted, everything else (public entry, health, session routes)
/// passes through untouched.
pub fn build_app(services: Arc<AppServices>) -> Router {
    let gate = middleware::GateState {
        policy: services.policy.clone(),
    };

    Router::new()
        .route("/", get(routes::system::index))
        .route("/health", get(routes::system::health))
        .nest("/api/users", routes::session::router())
        .nest("/cliente", routes::cliente::router())
        .nest("/suporte", routes::suporte::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn_with_state(
                    gate,
                    middleware::session_gate,
                ))
                .layer(Extension(services)),
        )
}
