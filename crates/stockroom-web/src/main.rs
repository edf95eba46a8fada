//! Inventory tool server.
//!
//! Serves the five inventory tools and the `manage_inventory` prompt over
//! HTTP/JSON. State is in memory and resets on restart.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p stockroom-web
//! cargo run -p stockroom-web -- --port 9000 --log-level debug
//! cargo run -p stockroom-web -- --empty --timeout-secs 0
//! ```
//!
//! ## Calling a tool
//!
//! ```bash
//! curl -X POST localhost:8000/api/tools/search_items -d '{"keyword": "mo"}'
//! ```
//!
//! ## Rendering the prompt
//!
//! ```bash
//! curl -X POST localhost:8000/api/prompts/manage_inventory \
//!      -H 'content-type: application/json' -d '{"query": "list items"}'
//! ```

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use stockroom::config::InventoryConfig;
use stockroom_web::{WebConfig, spawn_web};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Inventory tool server.
#[derive(Parser)]
#[command(about = "Serve the inventory tools and manage_inventory prompt over HTTP")]
struct Args {
    /// Interface to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: std::net::IpAddr,

    /// Port to listen on.
    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// Start with an empty inventory instead of the five seed items.
    #[arg(long)]
    empty: bool,

    /// Skip JSON Schema validation of tool arguments.
    #[arg(long)]
    no_arg_validation: bool,

    /// Per-call tool timeout in seconds. 0 disables it.
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Default log level; `RUST_LOG` takes precedence.
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .map_err(|e| format!("invalid log level '{}': {e}", args.log_level))?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    let timeout = (args.timeout_secs > 0).then(|| Duration::from_secs(args.timeout_secs));
    let inventory = InventoryConfig::default()
        .with_seed(!args.empty)
        .with_arg_validation(!args.no_arg_validation)
        .with_tool_timeout(timeout);

    let store = inventory.build_store();
    info!("Inventory loaded with {} items", store.len());
    let tools = inventory.build_tool_set(store);

    let web_config = WebConfig {
        bind_addr: SocketAddr::new(args.host, args.port),
    };
    let addr = spawn_web(tools, &inventory, web_config)
        .await
        .map_err(|e| format!("failed to bind {}:{}: {e}", args.host, args.port))?;
    println!("{} listening on http://{addr}", inventory.name);

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| format!("failed to wait for shutdown signal: {e}"))?;
    info!("Shutting down");
    Ok(())
}
