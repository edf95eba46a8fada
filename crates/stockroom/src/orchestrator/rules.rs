//! The orchestration table: which tools each kind of query needs and how
//! the answer is rendered.
//!
//! [`ORCHESTRATION_RULES`] is the ordered source the `manage_inventory`
//! prompt is generated from. Order matters: the prompt numbers instructions
//! in this order, and the search rule refers back to the listing table.

use crate::tools::names;

/// What the user is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    List,
    Summarize,
    Search,
    Add,
    UpdateStock,
    LowStockAlert,
}

/// The tools an intent calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolPlan {
    /// Call each tool in order.
    Sequence(&'static [&'static str]),
    /// Call exactly one of these, depending on the query.
    OneOf(&'static [&'static str]),
    /// Reuse the results fetched for another intent.
    Inherited,
}

impl ToolPlan {
    pub fn tools(&self) -> &'static [&'static str] {
        match self {
            ToolPlan::Sequence(tools) | ToolPlan::OneOf(tools) => *tools,
            ToolPlan::Inherited => &[],
        }
    }
}

/// How the answer to an intent is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendering {
    /// Six-column table with a stock-status marker.
    StockTable,
    /// Item count, categories and low-stock alerts.
    Summary,
    /// Either the canonical add error or a confirmation of the new item.
    AddConfirmation,
    /// Confirmation of the update, or a not-found notice.
    UpdateConfirmation,
    /// Restock suggestions appended to a summary or search answer.
    RestockSuggestions,
}

/// One row of the orchestration table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentRule {
    pub intent: Intent,
    /// Instruction heading in the prompt.
    pub title: &'static str,
    /// Phrases that signal the intent.
    pub triggers: &'static [&'static str],
    /// A complete sample query, quoted in the prompt.
    pub example: Option<&'static str>,
    pub tools: ToolPlan,
    pub rendering: Rendering,
}

pub const ORCHESTRATION_RULES: [IntentRule; 6] = [
    IntentRule {
        intent: Intent::List,
        title: "Listing or Displaying Items",
        triggers: &["list items", "display items"],
        example: None,
        tools: ToolPlan::OneOf(&[names::GET_ALL_ITEMS, names::SEARCH_ITEMS]),
        rendering: Rendering::StockTable,
    },
    IntentRule {
        intent: Intent::Summarize,
        title: "Summarizing Inventory",
        triggers: &["summary", "summarize", "overview"],
        example: None,
        tools: ToolPlan::Sequence(&[names::GET_ALL_ITEMS]),
        rendering: Rendering::Summary,
    },
    IntentRule {
        intent: Intent::Search,
        title: "Searching Items",
        triggers: &["search", "find", "look up"],
        example: None,
        tools: ToolPlan::Sequence(&[names::SEARCH_ITEMS]),
        rendering: Rendering::StockTable,
    },
    IntentRule {
        intent: Intent::Add,
        title: "Adding Items",
        triggers: &["add item", "add"],
        example: Some("Add item: Headphones, 15, 79.99"),
        tools: ToolPlan::Sequence(&[names::GET_LATEST_ID, names::ADD_ITEM]),
        rendering: Rendering::AddConfirmation,
    },
    IntentRule {
        intent: Intent::UpdateStock,
        title: "Updating Stock",
        triggers: &["update stock", "set stock", "restock"],
        example: None,
        tools: ToolPlan::Sequence(&[names::UPDATE_STOCK]),
        rendering: Rendering::UpdateConfirmation,
    },
    IntentRule {
        intent: Intent::LowStockAlert,
        title: "Low Stock Alerts",
        triggers: &[],
        example: None,
        tools: ToolPlan::Inherited,
        rendering: Rendering::RestockSuggestions,
    },
];
