//! The five inventory tools.
//!
//! | Tool | Name | Result |
//! |------|------|--------|
//! | [`GetLatestId`] | `get_latest_id` | highest id as a JSON integer |
//! | [`AddItem`] | `add_item` | `null` |
//! | [`UpdateStock`] | `update_stock` | `true` if the item exists, else `false` |
//! | [`SearchItems`] | `search_items` | JSON array of matching items |
//! | [`GetAllItems`] | `get_all_items` | JSON array of every item |
//!
//! None of these validate the business meaning of their input. An `add_item`
//! with an empty name is appended as-is; rejecting it is the orchestrator's
//! job (see [`crate::orchestrator::policy`]).

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;

use super::core::{ERROR_PREFIX, Tool, ToolFuture, ToolSet, parse_tool_args, to_json_result};
use super::names;
use super::spec::ToolSpec;
use crate::ToolDef;
use crate::inventory::{InventoryStore, ItemId, NewItem};

/// Arguments for tools that take none.
#[derive(Deserialize, JsonSchema)]
pub struct NoArgs {}

// ── GetLatestId ────────────────────────────────────────────────────

/// Report the highest item id.
pub struct GetLatestId {
    store: Arc<InventoryStore>,
}

impl GetLatestId {
    pub fn new(store: Arc<InventoryStore>) -> Self {
        Self { store }
    }
}

impl Tool for GetLatestId {
    fn definition(&self) -> ToolDef {
        ToolSpec::builder(names::GET_LATEST_ID, "Get the latest item ID in the inventory")
            .when_to_use("Before add_item: the new item's id is the latest id plus 1")
            .parameters_for::<NoArgs>()
            .example("get_latest_id()", "5")
            .output_format("JSON integer")
            .to_tool_def()
    }

    fn execute(&self, _arguments: &str) -> ToolFuture<'_> {
        let result = match self.store.latest_id() {
            Ok(id) => to_json_result(&id),
            Err(e) => format!("{ERROR_PREFIX} {e}"),
        };
        Box::pin(async move { result })
    }
}

// ── AddItem ────────────────────────────────────────────────────────

/// Arguments for `add_item`.
#[derive(Deserialize, JsonSchema)]
pub struct AddItemArgs {
    /// The item to append.
    pub item: NewItem,
}

/// Append an item to the inventory unmodified.
pub struct AddItem {
    store: Arc<InventoryStore>,
}

impl AddItem {
    pub fn new(store: Arc<InventoryStore>) -> Self {
        Self { store }
    }
}

impl Tool for AddItem {
    fn definition(&self) -> ToolDef {
        ToolSpec::builder(
            names::ADD_ITEM,
            "Add a new item to the inventory. Need to use get_latest_id to get the latest \
             item ID and add 1 to it for the new item ID.",
        )
        .when_to_use("After the add request has been validated and its category inferred")
        .when_not_to_use("To change the stock of an existing item — use update_stock instead")
        .parameters_for::<AddItemArgs>()
        .example(
            r#"add_item(item={"id": 6, "name": "Headphones", "category": "Electronics", "stock": 15, "price": 79.99})"#,
            "null",
        )
        .output_format("null")
        .to_tool_def()
    }

    fn is_mutation(&self) -> bool {
        true
    }

    fn execute(&self, arguments: &str) -> ToolFuture<'_> {
        let result = match parse_tool_args::<AddItemArgs>(arguments) {
            Ok(AddItemArgs { item }) => {
                let requested_id = item.id;
                let appended = match requested_id {
                    Some(id) => {
                        self.store.append(item.into_item(id));
                        Ok(())
                    }
                    None => self
                        .store
                        .append_with_next_id(|id| item.into_item(id))
                        .map(|_| ()),
                };
                match appended {
                    Ok(()) => to_json_result(&()),
                    Err(e) => format!("{ERROR_PREFIX} {e}"),
                }
            }
            Err(e) => e,
        };
        Box::pin(async move { result })
    }
}

// ── UpdateStock ────────────────────────────────────────────────────

/// Arguments for `update_stock`.
#[derive(Deserialize, JsonSchema)]
pub struct UpdateStockArgs {
    /// Id of the item to update.
    pub item_id: ItemId,
    /// The new stock level.
    pub new_stock: u32,
}

/// Overwrite the stock level of one item.
pub struct UpdateStock {
    store: Arc<InventoryStore>,
}

impl UpdateStock {
    pub fn new(store: Arc<InventoryStore>) -> Self {
        Self { store }
    }
}

impl Tool for UpdateStock {
    fn definition(&self) -> ToolDef {
        ToolSpec::builder(names::UPDATE_STOCK, "Update the stock level for an item")
            .when_not_to_use("To create an item — use add_item instead")
            .parameters_for::<UpdateStockArgs>()
            .example("update_stock(item_id=5, new_stock=20)", "true")
            .example("update_stock(item_id=99, new_stock=5)", "false (no such item)")
            .output_format("JSON boolean")
            .to_tool_def()
    }

    fn is_mutation(&self) -> bool {
        true
    }

    fn execute(&self, arguments: &str) -> ToolFuture<'_> {
        let result = match parse_tool_args::<UpdateStockArgs>(arguments) {
            Ok(args) => to_json_result(&self.store.update_stock(args.item_id, args.new_stock)),
            Err(e) => e,
        };
        Box::pin(async move { result })
    }
}

// ── SearchItems ────────────────────────────────────────────────────

/// Arguments for `search_items`.
#[derive(Deserialize, JsonSchema)]
pub struct SearchItemsArgs {
    /// Case-insensitive text to look for in item names.
    pub keyword: String,
}

/// Find items by name.
pub struct SearchItems {
    store: Arc<InventoryStore>,
}

impl SearchItems {
    pub fn new(store: Arc<InventoryStore>) -> Self {
        Self { store }
    }
}

impl Tool for SearchItems {
    fn definition(&self) -> ToolDef {
        ToolSpec::builder(names::SEARCH_ITEMS, "Search for items in the inventory")
            .when_to_use("When the query names a product or keyword")
            .when_not_to_use("When every item is needed — use get_all_items instead")
            .parameters_for::<SearchItemsArgs>()
            .example(r#"search_items(keyword="mo")"#, "Mouse and Monitor")
            .output_format("JSON array of items, possibly empty")
            .to_tool_def()
    }

    fn truncatable(&self) -> bool {
        false
    }

    fn execute(&self, arguments: &str) -> ToolFuture<'_> {
        let result = match parse_tool_args::<SearchItemsArgs>(arguments) {
            Ok(args) => to_json_result(&self.store.search(&args.keyword)),
            Err(e) => e,
        };
        Box::pin(async move { result })
    }
}

// ── GetAllItems ────────────────────────────────────────────────────

/// List the whole inventory.
pub struct GetAllItems {
    store: Arc<InventoryStore>,
}

impl GetAllItems {
    pub fn new(store: Arc<InventoryStore>) -> Self {
        Self { store }
    }
}

impl Tool for GetAllItems {
    fn definition(&self) -> ToolDef {
        ToolSpec::builder(names::GET_ALL_ITEMS, "Get all items in the inventory")
            .when_to_use("For listings and summaries of the whole inventory")
            .parameters_for::<NoArgs>()
            .output_format("JSON array of items in insertion order")
            .to_tool_def()
    }

    fn truncatable(&self) -> bool {
        false
    }

    fn execute(&self, _arguments: &str) -> ToolFuture<'_> {
        let result = to_json_result(&self.store.all_items());
        Box::pin(async move { result })
    }
}

// ── Extension trait ────────────────────────────────────────────────

/// Register all five inventory tools on a [`ToolSet`].
///
/// ```ignore
/// let store = Arc::new(InventoryStore::seeded());
/// let tools = ToolSet::new().with_inventory_tools(store);
/// ```
pub trait InventoryToolsExt {
    fn with_inventory_tools(self, store: Arc<InventoryStore>) -> Self;
}

impl InventoryToolsExt for ToolSet {
    fn with_inventory_tools(self, store: Arc<InventoryStore>) -> Self {
        self.with(GetLatestId::new(store.clone()))
            .with(AddItem::new(store.clone()))
            .with(UpdateStock::new(store.clone()))
            .with(SearchItems::new(store.clone()))
            .with(GetAllItems::new(store))
    }
}
