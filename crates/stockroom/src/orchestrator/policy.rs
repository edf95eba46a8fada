//! Inventory policy: low-stock threshold, category inference, add validation.
//!
//! These constants are the observable contract of the `manage_inventory`
//! prompt. The prompt text is generated from them, and [`super::Orchestrator`]
//! enforces them when it performs an add itself.

use crate::inventory::{Category, Item, ItemId};

/// Items with stock strictly below this are low on stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Status cell for items at or above the threshold.
pub const IN_STOCK_MARKER: &str = "✅";

/// Status cell for low-stock items.
pub const LOW_STOCK_MARKER: &str = "❌";

/// The exact reply for an add request that is missing a field or has an
/// invalid one.
pub const ADD_ITEM_ERROR: &str =
    "Error: Please provide item name, quantity (positive integer), and price (positive float).";

/// Name keywords per category, checked in order. Names matching none of
/// them are [`Category::Miscellaneous`].
pub const CATEGORY_RULES: [(Category, &[&str]); 3] = [
    (
        Category::Electronics,
        &["laptop", "monitor", "phone", "tablet", "headphones"],
    ),
    (Category::Accessories, &["keyboard", "mouse", "cable"]),
    (Category::Furniture, &["chair", "desk", "table"]),
];

pub fn is_low_stock(stock: u32) -> bool {
    stock < LOW_STOCK_THRESHOLD
}

/// The stock-status table cell for a quantity.
pub fn stock_status_marker(stock: u32) -> &'static str {
    if is_low_stock(stock) {
        LOW_STOCK_MARKER
    } else {
        IN_STOCK_MARKER
    }
}

/// Infer a category from an item name (case-insensitive substring match,
/// first matching rule wins).
pub fn infer_category(name: &str) -> Category {
    let name = name.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| name.contains(k)))
        .map_or(Category::Miscellaneous, |(category, _)| *category)
}

/// Why an add request was refused. Every variant displays as
/// [`ADD_ITEM_ERROR`]; [`InvalidAddRequest::detail`] names the actual field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAddRequest {
    #[error("{}", ADD_ITEM_ERROR)]
    MissingFields { found: usize },
    #[error("{}", ADD_ITEM_ERROR)]
    MissingName,
    #[error("{}", ADD_ITEM_ERROR)]
    InvalidQuantity,
    #[error("{}", ADD_ITEM_ERROR)]
    InvalidPrice,
}

impl InvalidAddRequest {
    /// A diagnostic for logs; never shown to the caller.
    pub fn detail(&self) -> String {
        match self {
            Self::MissingFields { found } => {
                format!("expected name, quantity and price, found {found} field(s)")
            }
            Self::MissingName => "item name is empty".into(),
            Self::InvalidQuantity => "quantity is not a positive integer".into(),
            Self::InvalidPrice => "price is not a positive number".into(),
        }
    }
}

/// A validated request to add an item.
///
/// Can only be built through [`AddRequest::new`] or [`AddRequest::parse`],
/// so holding one means every field passed policy.
#[derive(Debug, Clone, PartialEq)]
pub struct AddRequest {
    name: String,
    quantity: u32,
    price: f64,
}

impl AddRequest {
    /// Validate the three fields: non-empty name, positive integer quantity,
    /// positive finite price.
    pub fn new(name: &str, quantity: i64, price: f64) -> Result<Self, InvalidAddRequest> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InvalidAddRequest::MissingName);
        }
        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or(InvalidAddRequest::InvalidQuantity)?;
        if !price.is_finite() || price <= 0.0 {
            return Err(InvalidAddRequest::InvalidPrice);
        }
        Ok(Self {
            name: name.to_string(),
            quantity,
            price,
        })
    }

    /// Parse a free-text request such as `"Add item: Headphones, 15, 79.99"`.
    ///
    /// Everything after the first `:` (or after a leading `add` / `add item`
    /// when there is no colon) must be `name, quantity, price`.
    pub fn parse(query: &str) -> Result<Self, InvalidAddRequest> {
        let body = strip_add_prefix(query);
        let fields: Vec<&str> = body.split(',').map(str::trim).collect();
        let [name, quantity, price] = fields.as_slice() else {
            return Err(InvalidAddRequest::MissingFields {
                found: fields.iter().filter(|f| !f.is_empty()).count(),
            });
        };
        if name.is_empty() {
            return Err(InvalidAddRequest::MissingName);
        }
        let quantity: i64 = quantity
            .parse()
            .map_err(|_| InvalidAddRequest::InvalidQuantity)?;
        let price: f64 = price
            .trim_start_matches('$')
            .parse()
            .map_err(|_| InvalidAddRequest::InvalidPrice)?;
        Self::new(name, quantity, price)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn category(&self) -> Category {
        infer_category(&self.name)
    }

    /// The record to store under `id`, with the inferred category.
    pub fn to_item(&self, id: ItemId) -> Item {
        Item::new(
            id,
            self.name.clone(),
            self.category().as_str(),
            self.quantity,
            self.price,
        )
    }
}

fn strip_add_prefix(query: &str) -> String {
    if let Some((_, rest)) = query.split_once(':') {
        return rest.to_string();
    }
    let mut words = query.split_whitespace().peekable();
    if words.peek().is_some_and(|w| w.eq_ignore_ascii_case("add")) {
        words.next();
        if words.peek().is_some_and(|w| w.eq_ignore_ascii_case("item")) {
            words.next();
        }
    }
    words.collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_inference_examples() {
        assert_eq!(infer_category("Gaming Mouse"), Category::Accessories);
        assert_eq!(infer_category("Office Desk"), Category::Furniture);
        assert_eq!(infer_category("Novel"), Category::Miscellaneous);
        assert_eq!(infer_category("Headphones"), Category::Electronics);
        assert_eq!(infer_category("USB-C CABLE"), Category::Accessories);
    }

    #[test]
    fn category_inference_is_substring_and_ordered() {
        // "phone" inside "Headphone" still counts.
        assert_eq!(infer_category("Wireless Headphone"), Category::Electronics);
        // Electronics is checked before Furniture.
        assert_eq!(infer_category("Tablet Table Stand"), Category::Electronics);
    }

    #[test]
    fn low_stock_boundary_is_ten() {
        assert!(is_low_stock(8));
        assert!(is_low_stock(9));
        assert!(!is_low_stock(10));
        assert_eq!(stock_status_marker(8), "❌");
        assert_eq!(stock_status_marker(10), "✅");
    }

    #[test]
    fn parse_canonical_add_request() {
        let request = AddRequest::parse("Add item: Headphones, 15, 79.99").unwrap();
        assert_eq!(request.name(), "Headphones");
        assert_eq!(request.quantity(), 15);
        assert!((request.price() - 79.99).abs() < f64::EPSILON);
        assert_eq!(request.category(), Category::Electronics);
    }

    #[test]
    fn parse_without_colon() {
        let request = AddRequest::parse("add Office Desk, 3, $249.50").unwrap();
        assert_eq!(request.name(), "Office Desk");
        assert_eq!(request.category(), Category::Furniture);
    }

    #[test]
    fn every_failure_displays_the_canonical_message() {
        let failures = [
            "Add item: Headphones, 15",
            "Add item: , 15, 79.99",
            "Add item: Headphones, 0, 79.99",
            "Add item: Headphones, -2, 79.99",
            "Add item: Headphones, 1.5, 79.99",
            "Add item: Headphones, 15, -1",
            "Add item: Headphones, 15, 0",
            "Add item: Headphones, 15, NaN",
            "Add item: Headphones, 15, cheap",
            "Add item:",
        ];
        for query in failures {
            let err = AddRequest::parse(query).unwrap_err();
            assert_eq!(err.to_string(), ADD_ITEM_ERROR, "query: {query}");
        }
    }

    #[test]
    fn failures_carry_a_specific_detail() {
        assert_eq!(
            AddRequest::parse("Add item: Lamp, ten, 5").unwrap_err(),
            InvalidAddRequest::InvalidQuantity
        );
        assert_eq!(
            AddRequest::parse("Add item: Lamp").unwrap_err(),
            InvalidAddRequest::MissingFields { found: 1 }
        );
        assert!(
            InvalidAddRequest::InvalidPrice
                .detail()
                .contains("price")
        );
    }

    #[test]
    fn new_trims_the_name() {
        let request = AddRequest::new("  Mouse Pad ", 4, 9.0).unwrap();
        assert_eq!(request.name(), "Mouse Pad");
        assert_eq!(AddRequest::new("   ", 4, 9.0), Err(InvalidAddRequest::MissingName));
    }

    #[test]
    fn to_item_uses_inferred_category() {
        let item = AddRequest::new("Standing Desk", 2, 399.0)
            .unwrap()
            .to_item(7);
        assert_eq!(item, Item::new(7, "Standing Desk", "Furniture", 2, 399.0));
    }
}
