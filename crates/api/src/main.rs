use std::sync::Arc;

use atrio_auth::RoutePolicy;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    atrio_observability::init();

    // Protected prefixes and their owning roles; changing the mapping
    // changes the gate's behavior without a code change.
    let policy = match std::env::var("ATRIO_ROUTES") {
        Ok(table) => RoutePolicy::parse(&table)?,
        Err(_) => RoutePolicy::default(),
    };

    let bind = std::env::var("ATRIO_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let services = Arc::new(atrio_api::app::services::build_services(policy));
    let app = atrio_api::app::build_app(services);

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
