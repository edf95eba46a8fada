//! Inventory data layer: item records and the shared store.

pub mod item;
pub mod store;

pub use item::{Category, Item, ItemId, NewItem};
pub use store::{InventoryError, InventoryStore, seed_items};
