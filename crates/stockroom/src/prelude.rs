//! Convenience re-exports for building an inventory server.
//!
//! ```ignore
//! use stockroom::prelude::*;
//! ```

pub use crate::config::InventoryConfig;
pub use crate::inventory::{Category, InventoryError, InventoryStore, Item, ItemId, NewItem};
pub use crate::orchestrator::{
    ADD_ITEM_ERROR, AddError, AddRequest, InvalidAddRequest, InventorySummary, LOW_STOCK_THRESHOLD,
    Orchestrator, infer_category, manage_inventory, manage_inventory_definition, render_table,
};
pub use crate::tools::names;
pub use crate::tools::{InventoryToolsExt, Tool, ToolFuture, ToolSet};
pub use crate::{PromptArgument, PromptDef, SERVER_DESCRIPTION, SERVER_NAME, ToolDef};
