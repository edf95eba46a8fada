//! The in-memory item collection.
//!
//! [`InventoryStore`] is deliberately dumb: it appends, looks up and updates
//! records without validating them. Policy (non-empty names, positive
//! quantities, category inference) lives in [`crate::orchestrator`].
//!
//! All access goes through one exclusive lock. Every public method performs
//! its whole read-modify-write under a single acquisition, so two callers can
//! never interleave inside an update or allocate the same id through
//! [`InventoryStore::append_with_next_id`].

use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info};

use super::item::{Item, ItemId};

/// Errors raised by store queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    /// `latest_id` has no maximum to report.
    #[error("inventory is empty, there is no latest item id")]
    Empty,
    /// The highest id in use is already the largest representable id.
    #[error("item id {0} is the largest possible id, no next id can be allocated")]
    IdsExhausted(ItemId),
}

/// The five items every process starts with.
pub fn seed_items() -> Vec<Item> {
    vec![
        Item::new(1, "Laptop", "Electronics", 12, 999.99),
        Item::new(2, "Keyboard", "Accessories", 35, 49.99),
        Item::new(3, "Mouse", "Accessories", 27, 29.99),
        Item::new(4, "Monitor", "Electronics", 10, 199.99),
        Item::new(5, "Chair", "Furniture", 8, 89.99),
    ]
}

/// Ordered, lock-guarded collection of inventory items.
///
/// Insertion order is display order; updates never reorder. Readers receive
/// snapshots, so a listing cannot change underneath a caller.
#[derive(Debug, Default)]
pub struct InventoryStore {
    items: Mutex<Vec<Item>>,
}

impl InventoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the [`seed_items`].
    pub fn seeded() -> Self {
        Self::with_items(seed_items())
    }

    /// Create a store holding `items` in the given order.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Item>> {
        self.items.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Snapshot of every item, in insertion order.
    pub fn all_items(&self) -> Vec<Item> {
        self.lock().clone()
    }

    /// The first item with the given id.
    pub fn find_by_id(&self, id: ItemId) -> Option<Item> {
        self.lock().iter().find(|item| item.id == id).cloned()
    }

    /// Append an item unmodified. Duplicate ids are not detected.
    pub fn append(&self, item: Item) {
        let mut items = self.lock();
        info!("Appending item {} ({})", item.id, item.name);
        items.push(item);
        debug!("Inventory now holds {} items", items.len());
    }

    /// Allocate `latest_id + 1` (or 1 when empty), build the item with it and
    /// append, all under one lock acquisition. Nothing is appended when the
    /// latest id is [`ItemId::MAX`].
    pub fn append_with_next_id(
        &self,
        build: impl FnOnce(ItemId) -> Item,
    ) -> Result<Item, InventoryError> {
        let mut items = self.lock();
        let next_id = match max_id(&items) {
            Some(latest) => latest
                .checked_add(1)
                .ok_or(InventoryError::IdsExhausted(latest))?,
            None => 1,
        };
        let item = build(next_id);
        info!("Appending item {} ({}) with allocated id", item.id, item.name);
        items.push(item.clone());
        Ok(item)
    }

    /// The largest id currently in the store.
    pub fn latest_id(&self) -> Result<ItemId, InventoryError> {
        max_id(&self.lock()).ok_or(InventoryError::Empty)
    }

    /// Set the stock of the first item with `id`. Returns `false` when no
    /// item matches, leaving the collection untouched.
    pub fn update_stock(&self, id: ItemId, new_stock: u32) -> bool {
        let mut items = self.lock();
        match items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                info!("Stock of item {id} changed {} -> {new_stock}", item.stock);
                item.stock = new_stock;
                true
            }
            None => {
                debug!("Stock update skipped: no item with id {id}");
                false
            }
        }
    }

    /// Items whose name contains `keyword`, ignoring case, in insertion order.
    pub fn search(&self, keyword: &str) -> Vec<Item> {
        let needle = keyword.to_lowercase();
        self.lock()
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

fn max_id(items: &[Item]) -> Option<ItemId> {
    items.iter().map(|item| item.id).max()
}
