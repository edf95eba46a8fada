//! Canonical tool and prompt name constants.
//!
//! Every tool-name literal (tool definitions, prompt text, routes, tests)
//! references these, so a rename touches one file.

pub const GET_LATEST_ID: &str = "get_latest_id";
pub const ADD_ITEM: &str = "add_item";
pub const UPDATE_STOCK: &str = "update_stock";
pub const SEARCH_ITEMS: &str = "search_items";
pub const GET_ALL_ITEMS: &str = "get_all_items";

/// All inventory tools, in the order the prompt lists them.
pub const INVENTORY_TOOLS: [&str; 5] = [
    GET_ALL_ITEMS,
    SEARCH_ITEMS,
    ADD_ITEM,
    UPDATE_STOCK,
    GET_LATEST_ID,
];

pub const MANAGE_INVENTORY: &str = "manage_inventory";
