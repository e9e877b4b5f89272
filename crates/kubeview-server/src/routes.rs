use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::routing::any;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

use crate::{ApiError, ServerConfig};
use kubeview_k8s::ClusterInventory;
use kubeview_types::{NodeSummary, PodSummary};

/// State shared by the listing handlers
#[derive(Clone)]
struct AppState {
    inventory: Arc<dyn ClusterInventory>,
}

/// Build the application router around the given inventory
pub fn router(inventory: Arc<dyn ClusterInventory>, config: &ServerConfig) -> Router {
    Router::new()
        // Listings answer every method, not only GET
        .route("/nodes", any(list_nodes))
        .route("/pods", any(list_pods))
        .with_state(AppState { inventory })
        // Everything else gets the static page
        .fallback_service(ServeFile::new(&config.index_file))
        .layer(TraceLayer::new_for_http())
}

/// Bind the configured address and serve until the listener fails
pub async fn serve(inventory: Arc<dyn ClusterInventory>, config: ServerConfig) -> Result<()> {
    let app = router(inventory, &config);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .context(format!("Failed to bind {}", config.bind_addr))?;

    tracing::info!("Starting server at port {}", config.bind_addr.port());

    axum::serve(listener, app).await.context("HTTP server error")?;

    Ok(())
}

async fn list_nodes(State(state): State<AppState>) -> Result<Json<Vec<NodeSummary>>, ApiError> {
    let nodes = state.inventory.list_nodes().await?;
    Ok(Json(nodes))
}

async fn list_pods(State(state): State<AppState>) -> Result<Json<Vec<PodSummary>>, ApiError> {
    let pods = state.inventory.list_pods().await?;
    Ok(Json(pods))
}
