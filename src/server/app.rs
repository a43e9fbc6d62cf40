//! Router assembly and process entry for the HTTP surface.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::adapters::http::build_client;
use crate::config::AppConfig;
use crate::core::handler::RecommendationService;
use crate::core::recommendations::EdhrecSource;
use crate::core::resolver::ScryfallResolver;
use crate::core::{CardResolver, RecommendationSource};
use crate::server::routes::recommendations_handler;
use crate::utils::error::Result;

pub type LiveService = RecommendationService<ScryfallResolver, EdhrecSource>;

/// Wires the Scryfall and EDHREC clients from configuration.
pub fn build_service(config: &AppConfig) -> Result<LiveService> {
    let client = build_client(config)?;
    Ok(RecommendationService::new(
        ScryfallResolver::from_config(client.clone(), config),
        EdhrecSource::from_config(client, config),
    ))
}

/// Build the router. Any origin may call it.
pub fn build_router<R, S>(service: Arc<RecommendationService<R, S>>) -> Router
where
    R: CardResolver + 'static,
    S: RecommendationSource + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/recommendations/:commanderName",
            get(recommendations_handler::<R, S>),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Binds the configured address and serves until the process stops.
pub async fn serve(config: &AppConfig) -> anyhow::Result<()> {
    use anyhow::Context;

    let service = Arc::new(build_service(config).context("Failed to build upstream clients")?);
    let app = build_router(service);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Server running at http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
