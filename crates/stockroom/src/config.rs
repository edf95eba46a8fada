//! Server configuration with sensible defaults.
//!
//! [`InventoryConfig`] captures the settings an inventory server needs and
//! turns them into a store via [`build_store`](InventoryConfig::build_store)
//! and a dispatch table via [`build_tool_set`](InventoryConfig::build_tool_set).

use std::sync::Arc;
use std::time::Duration;

use crate::inventory::InventoryStore;
use crate::tools::{DEFAULT_MAX_RESULT_BYTES, DEFAULT_TOOL_TIMEOUT, InventoryToolsExt, ToolSet};
use crate::{SERVER_DESCRIPTION, SERVER_NAME};

/// Configuration for an inventory server.
#[derive(Debug, Clone)]
pub struct InventoryConfig {
    /// Name announced to callers. Default: `"inventory-mcp"`.
    pub name: String,
    /// Description announced to callers.
    pub description: String,
    /// Tool results longer than this are truncated. Default: `30000`.
    pub max_result_bytes: usize,
    /// Check tool arguments against their JSON Schema. Default: `true`.
    pub validate_args: bool,
    /// Per-call tool timeout; `None` disables it. Default: 30 seconds.
    pub tool_timeout: Option<Duration>,
    /// Start with the five seed items. Default: `true`.
    pub seed: bool,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            name: SERVER_NAME.to_string(),
            description: SERVER_DESCRIPTION.to_string(),
            max_result_bytes: DEFAULT_MAX_RESULT_BYTES,
            validate_args: true,
            tool_timeout: Some(DEFAULT_TOOL_TIMEOUT),
            seed: true,
        }
    }
}

impl InventoryConfig {
    pub fn with_seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_arg_validation(mut self, enabled: bool) -> Self {
        self.validate_args = enabled;
        self
    }

    pub fn with_tool_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.tool_timeout = timeout;
        self
    }

    pub fn with_max_result_bytes(mut self, max: usize) -> Self {
        self.max_result_bytes = max;
        self
    }

    /// A new store, seeded unless `seed` is off.
    pub fn build_store(&self) -> Arc<InventoryStore> {
        Arc::new(if self.seed {
            InventoryStore::seeded()
        } else {
            InventoryStore::new()
        })
    }

    /// A [`ToolSet`] with the five inventory tools bound to `store`.
    pub fn build_tool_set(&self, store: Arc<InventoryStore>) -> ToolSet {
        ToolSet::new()
            .with_max_result_bytes(self.max_result_bytes)
            .with_arg_validation(self.validate_args)
            .with_default_timeout(self.tool_timeout)
            .with_inventory_tools(store)
    }
}
