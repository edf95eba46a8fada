//! In-memory product inventory exposed as agent-callable tools.
//!
//! `stockroom` is the core of a small tool server. A calling agent (an LLM
//! runtime) first renders the `manage_inventory` prompt for a free-text query,
//! then calls the inventory tools in whatever order the instructions imply.
//!
//! ```ignore
//! use std::sync::Arc;
//! use stockroom::prelude::*;
//!
//! let store = Arc::new(InventoryStore::seeded());
//! let tools = ToolSet::new().with_inventory_tools(store.clone());
//!
//! let instructions = manage_inventory("list items with low stock");
//! let listing = tools.execute("get_all_items", "{}").await;
//! ```
//!
//! # Layers
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`inventory`] | [`Item`](inventory::Item) records and the lock-guarded [`InventoryStore`](inventory::InventoryStore). No validation. |
//! | [`tools`] | [`Tool`](tools::Tool) trait, [`ToolSet`](tools::ToolSet) dispatch, and the five inventory tools. |
//! | [`orchestrator`] | The `manage_inventory` prompt, its rule table, and the policy helpers (category inference, add validation, table and summary rendering). |
//! | [`config`] | [`InventoryConfig`](config::InventoryConfig) defaults for building a store and tool set. |
//!
//! The store and tools stay unvalidated on purpose: everything that decides
//! whether an add request is acceptable belongs to the orchestrator.

pub mod config;
pub mod inventory;
pub mod orchestrator;
pub mod prelude;
pub mod tools;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// Re-export schemars for downstream crates.
pub use schemars;

/// Server name announced to callers.
pub const SERVER_NAME: &str = "inventory-mcp";

/// Server description announced to callers.
pub const SERVER_DESCRIPTION: &str = "Manages a simple product inventory";

// ── Schema generation ──────────────────────────────────────────────

/// Generate a JSON Schema `serde_json::Value` from a type that implements
/// `schemars::JsonSchema`.
///
/// ```
/// use stockroom::json_schema_for;
/// use schemars::JsonSchema;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, JsonSchema)]
/// struct SearchArgs {
///     keyword: String,
/// }
///
/// let schema = json_schema_for::<SearchArgs>();
/// assert_eq!(schema["type"], "object");
/// assert!(schema["required"].as_array().unwrap().contains(&"keyword".into()));
/// ```
pub fn json_schema_for<T: JsonSchema>() -> serde_json::Value {
    let schema = schemars::schema_for!(T);
    serde_json::to_value(schema)
        .unwrap_or_else(|_| serde_json::json!({"type": "object", "properties": {}}))
}

// ── Tool types ─────────────────────────────────────────────────────

/// The type of a tool definition. Currently always `Function`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum ToolType {
    #[serde(rename = "function")]
    Function,
}

/// Tool definition advertised to callers (function-calling format).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ToolDef {
    #[serde(rename = "type")]
    pub tool_type: ToolType,
    pub function: FunctionDef,
}

impl ToolDef {
    /// Create a function-calling tool definition.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: serde_json::Value,
    ) -> Self {
        Self {
            tool_type: ToolType::Function,
            function: FunctionDef {
                name: name.into(),
                description: description.into(),
                parameters,
            },
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FunctionDef {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

// ── Prompt types ───────────────────────────────────────────────────

/// A prompt template advertised to callers.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PromptDef {
    pub name: String,
    pub description: String,
    pub arguments: Vec<PromptArgument>,
}

/// One named argument of a [`PromptDef`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PromptArgument {
    pub name: String,
    pub description: String,
    pub required: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_def_serializes_in_function_format() {
        let def = ToolDef::new(
            "get_all_items",
            "Get all items in the inventory",
            serde_json::json!({"type": "object", "properties": {}}),
        );
        let json = serde_json::to_value(&def).unwrap();
        assert_eq!(json["type"], "function");
        assert_eq!(json["function"]["name"], "get_all_items");
    }

    #[test]
    fn schema_for_unit_struct_is_object() {
        #[derive(JsonSchema)]
        struct NoArgs {}
        let schema = json_schema_for::<NoArgs>();
        assert_eq!(schema["type"], "object");
    }
}
