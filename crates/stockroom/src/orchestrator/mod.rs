//! Prompt orchestration and inventory policy.
//!
//! The store and tools accept anything. This module decides what is
//! acceptable and how answers look:
//!
//! - [`rules`] — the ordered intent → tools → rendering table.
//! - [`prompt`] — the `manage_inventory` template generated from that table.
//! - [`policy`] — low-stock threshold, category inference, add validation.
//! - [`render`] — item tables and inventory summaries.
//!
//! [`Orchestrator`] applies the same rules directly against a store, for
//! hosts that enforce policy server-side instead of trusting the agent.

pub mod policy;
pub mod prompt;
pub mod render;
pub mod rules;

pub use policy::{
    ADD_ITEM_ERROR, AddRequest, CATEGORY_RULES, InvalidAddRequest, LOW_STOCK_THRESHOLD,
    infer_category, is_low_stock, stock_status_marker,
};
pub use prompt::{InstructionBuilder, manage_inventory, manage_inventory_definition};
pub use render::{InventorySummary, TABLE_COLUMNS, render_table};
pub use rules::{Intent, IntentRule, ORCHESTRATION_RULES, Rendering, ToolPlan};

use std::sync::Arc;

use tracing::{info, warn};

use crate::inventory::{InventoryError, InventoryStore, Item, ItemId};

/// Why [`Orchestrator::add_from_query`] added nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddError {
    /// Displays as [`ADD_ITEM_ERROR`].
    #[error(transparent)]
    Invalid(#[from] InvalidAddRequest),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

/// Policy-enforcing front end to an [`InventoryStore`].
///
/// The HTTP server does not route through this type: over the wire the
/// calling agent applies the policy by following the `manage_inventory`
/// instructions. `Orchestrator` is library API for hosts that want the same
/// policy enforced in-process.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    store: Arc<InventoryStore>,
}

impl Orchestrator {
    pub fn new(store: Arc<InventoryStore>) -> Self {
        Self { store }
    }

    /// Add a validated request: infer its category, take the next id and
    /// append, atomically.
    pub fn add(&self, request: &AddRequest) -> Result<Item, InventoryError> {
        let item = self.store.append_with_next_id(|id| request.to_item(id))?;
        info!(
            "Added {} as item {} in {}",
            item.name, item.id, item.category
        );
        Ok(item)
    }

    /// Parse and validate a free-text add request, then add it. The store is
    /// untouched when validation fails.
    pub fn add_from_query(&self, query: &str) -> Result<Item, AddError> {
        let request = AddRequest::parse(query).inspect_err(|e| {
            warn!("Refused add request {query:?}: {}", e.detail());
        })?;
        Ok(self.add(&request)?)
    }

    pub fn update_stock(&self, id: ItemId, new_stock: u32) -> bool {
        self.store.update_stock(id, new_stock)
    }

    /// The listing table, scoped to `keyword` matches when given.
    pub fn listing(&self, keyword: Option<&str>) -> String {
        let items = match keyword {
            Some(keyword) => self.store.search(keyword),
            None => self.store.all_items(),
        };
        render_table(&items)
    }

    pub fn summary(&self) -> InventorySummary {
        InventorySummary::from_items(&self.store.all_items())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> (Arc<InventoryStore>, Orchestrator) {
        let store = Arc::new(InventoryStore::seeded());
        (store.clone(), Orchestrator::new(store))
    }

    #[test]
    fn add_from_query_assigns_category_and_next_id() {
        let (store, orchestrator) = seeded();
        let item = orchestrator
            .add_from_query("Add item: Headphones, 15, 79.99")
            .unwrap();
        assert_eq!(item, Item::new(6, "Headphones", "Electronics", 15, 79.99));
        assert_eq!(store.all_items().last(), Some(&item));
    }

    #[test]
    fn invalid_add_leaves_store_untouched() {
        let (store, orchestrator) = seeded();
        let err = orchestrator
            .add_from_query("Add item: Headphones, fifteen, 79.99")
            .unwrap_err();
        assert_eq!(err.to_string(), ADD_ITEM_ERROR);
        assert_eq!(err, AddError::Invalid(InvalidAddRequest::InvalidQuantity));
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn add_after_max_id_reports_exhaustion() {
        let (store, orchestrator) = seeded();
        store.append(Item::new(ItemId::MAX, "Sentinel", "Miscellaneous", 1, 1.0));
        let err = orchestrator
            .add_from_query("Add item: Headphones, 15, 79.99")
            .unwrap_err();
        assert_eq!(
            err,
            AddError::Inventory(InventoryError::IdsExhausted(ItemId::MAX))
        );
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn listing_scopes_to_keyword() {
        let (_, orchestrator) = seeded();
        let table = orchestrator.listing(Some("chair"));
        assert_eq!(table.lines().count(), 3);
        assert!(table.contains("Chair"));
        assert!(table.contains("❌"));

        assert_eq!(orchestrator.listing(None).lines().count(), 7);
    }

    #[test]
    fn summary_reflects_updates() {
        let (_, orchestrator) = seeded();
        assert_eq!(orchestrator.summary().low_stock.len(), 1);

        assert!(orchestrator.update_stock(5, 10));
        assert!(orchestrator.summary().low_stock.is_empty());

        assert!(orchestrator.update_stock(1, 3));
        assert_eq!(orchestrator.summary().low_stock[0].name, "Laptop");
        assert!(!orchestrator.update_stock(99, 1));
    }

    #[test]
    fn add_to_empty_store_starts_at_one() {
        let orchestrator = Orchestrator::new(Arc::new(InventoryStore::new()));
        let request = AddRequest::new("Novel", 2, 14.0).unwrap();
        let item = orchestrator.add(&request).unwrap();
        assert_eq!(item.id, 1);
        assert_eq!(item.category, "Miscellaneous");
    }
}
