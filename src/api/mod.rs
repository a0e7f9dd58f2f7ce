pub mod handlers;
pub mod types;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::risk::RiskEngine;

pub struct AppState {
    pub engine: RiskEngine,
}

pub fn router(engine: RiskEngine) -> Router {
    let state = Arc::new(AppState { engine });

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/test", get(handlers::test))
        .route(
            "/api/analyzeTransaction",
            post(handlers::analyze_transaction),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

pub async fn serve(engine: RiskEngine, host: &str, port: u16) -> eyre::Result<()> {
    let app = router(engine);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "API server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
