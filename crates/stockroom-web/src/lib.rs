//! HTTP/JSON surface for the stockroom inventory server.
//!
//! `stockroom-web` exposes a [`ToolSet`] and the `manage_inventory` prompt
//! over a small REST API, so any agent runtime that speaks HTTP can discover
//! and call the inventory tools.
//!
//! # Quick start
//!
//! ```ignore
//! use stockroom::config::InventoryConfig;
//! use stockroom_web::{WebConfig, spawn_web};
//!
//! let inventory = InventoryConfig::default();
//! let tools = inventory.build_tool_set(inventory.build_store());
//!
//! let addr = spawn_web(tools, &inventory, WebConfig::default()).await?;
//! println!("Listening on http://{addr}");
//! ```
//!
//! # Endpoints
//!
//! | Route | Description |
//! |-------|-------------|
//! | `GET /api/server` | Name, description and version. |
//! | `GET /api/tools` | Tool definitions in function-calling format. |
//! | `POST /api/tools/{name}` | Call a tool; the body is its JSON arguments. |
//! | `GET /api/prompts` | Prompt definitions. |
//! | `POST /api/prompts/{name}` | Render a prompt for `{"query": ...}`. |

mod api;
mod server;

pub use api::{CallToolResponse, PromptRequest, PromptResponse, ServerInfo};

use std::net::SocketAddr;
use std::sync::Arc;

use stockroom::config::InventoryConfig;
use stockroom::tools::ToolSet;

/// Configuration for the web server.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Address to bind to. Default: `0.0.0.0:8000`.
    pub bind_addr: SocketAddr,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
        }
    }
}

/// Spawn the web server on a Tokio task and return the bound address.
///
/// The server runs until the Tokio runtime shuts down. Binding to port 0
/// picks a free port.
pub async fn spawn_web(
    tools: ToolSet,
    inventory: &InventoryConfig,
    config: WebConfig,
) -> std::io::Result<SocketAddr> {
    let info = ServerInfo {
        name: inventory.name.clone(),
        description: inventory.description.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let router = server::build_router(Arc::new(tools), info);
    server::start_server(router, config.bind_addr).await
}
