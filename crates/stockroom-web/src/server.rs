//! Axum server setup and router construction.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use stockroom::tools::ToolSet;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use crate::api::{self, AppState, ServerInfo};

/// Build the full axum router.
///
/// The router serves the REST API at `/api/*`.
pub fn build_router(tools: Arc<ToolSet>, info: ServerInfo) -> Router {
    let app_state = AppState {
        tools,
        info: Arc::new(info),
    };

    // Agent runtimes may call from any origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/server", get(api::get_server))
        .route("/api/tools", get(api::list_tools))
        .route("/api/tools/{name}", post(api::call_tool))
        .route("/api/prompts", get(api::list_prompts))
        .route("/api/prompts/{name}", post(api::get_prompt))
        .with_state(app_state)
        .layer(cors)
}

/// Bind `bind_addr`, serve `router` on a background task and return the
/// bound address.
pub async fn start_server(router: Router, bind_addr: SocketAddr) -> std::io::Result<SocketAddr> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    let addr = listener.local_addr()?;
    info!("Serving inventory API on {addr}");

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            error!("Server on {addr} stopped: {e}");
        }
    });

    Ok(addr)
}
