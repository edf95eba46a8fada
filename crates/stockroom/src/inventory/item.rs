//! Inventory records as they travel over the tool surface.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an inventory item.
pub type ItemId = u64;

/// A single inventory record.
///
/// Serialized with exactly the fields `id`, `name`, `category`, `stock` and
/// `price`. `category` is free text: inference only ever produces one of the
/// [`Category`] values, but the store accepts whatever the caller sends.
#[derive(Serialize, Deserialize, JsonSchema, Clone, Debug, PartialEq)]
pub struct Item {
    /// Unique identifier, assigned as `get_latest_id() + 1`.
    pub id: ItemId,
    /// Product name.
    pub name: String,
    /// Product category, e.g. `Electronics`.
    pub category: String,
    /// Units on hand.
    pub stock: u32,
    /// Unit price.
    pub price: f64,
}

impl Item {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        category: impl Into<String>,
        stock: u32,
        price: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            stock,
            price,
        }
    }
}

/// Item payload accepted by the `add_item` tool.
///
/// Identical to [`Item`] except that `id` may be omitted, in which case the
/// store allocates the next free id.
#[derive(Serialize, Deserialize, JsonSchema, Clone, Debug, PartialEq)]
pub struct NewItem {
    /// Item id. Use `get_latest_id` + 1; omit to let the store allocate it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    /// Product name.
    pub name: String,
    /// Product category (Electronics, Accessories, Furniture or Miscellaneous).
    pub category: String,
    /// Units on hand.
    pub stock: u32,
    /// Unit price.
    pub price: f64,
}

impl NewItem {
    /// Turn the payload into a stored record with the given id.
    pub fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            category: self.category,
            stock: self.stock,
            price: self.price,
        }
    }
}

impl From<Item> for NewItem {
    fn from(item: Item) -> Self {
        Self {
            id: Some(item.id),
            name: item.name,
            category: item.category,
            stock: item.stock,
            price: item.price,
        }
    }
}

/// The categories produced by name-based inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Electronics,
    Accessories,
    Furniture,
    Miscellaneous,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Accessories => "Accessories",
            Category::Furniture => "Furniture",
            Category::Miscellaneous => "Miscellaneous",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
