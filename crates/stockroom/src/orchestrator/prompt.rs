//! The `manage_inventory` prompt template.
//!
//! [`manage_inventory`] renders the instructions a calling agent follows to
//! answer a free-text inventory query. The text is assembled from
//! [`ORCHESTRATION_RULES`] and the policy constants, so the error string,
//! threshold and keyword lists appear exactly once in the codebase.

use super::policy::{
    ADD_ITEM_ERROR, CATEGORY_RULES, IN_STOCK_MARKER, LOW_STOCK_MARKER, LOW_STOCK_THRESHOLD,
};
use super::render::{TABLE_COLUMNS, render_table};
use super::rules::{Intent, IntentRule, ORCHESTRATION_RULES, Rendering, ToolPlan};
use crate::inventory::{Category, seed_items};
use crate::tools::names;
use crate::{PromptArgument, PromptDef};

const PROMPT_DESCRIPTION: &str = "Generate a summary of the inventory, suggest actions, or add \
                                  items with automatic category assignment";

const CLOSING: &str =
    "Provide a clear, concise response with actionable suggestions if applicable.";

/// Indentation for text nested under a numbered instruction.
const NESTED: &str = "   ";

/// The prompt as advertised to callers.
pub fn manage_inventory_definition() -> PromptDef {
    PromptDef {
        name: names::MANAGE_INVENTORY.to_string(),
        description: PROMPT_DESCRIPTION.to_string(),
        arguments: vec![PromptArgument {
            name: "query".to_string(),
            description: "The user's inventory request, in their own words".to_string(),
            required: true,
        }],
    }
}

/// Render the instructions for `query`.
pub fn manage_inventory(query: &str) -> String {
    let tools = names::INVENTORY_TOOLS
        .iter()
        .map(|t| format!("`{t}`"))
        .collect::<Vec<_>>()
        .join(", ");
    let preamble = format!(
        "You are an inventory management assistant. Use the provided tools ({tools}) to \
         process the following user query:\n\n\"{query}\""
    );

    ORCHESTRATION_RULES
        .iter()
        .enumerate()
        .fold(
            InstructionBuilder::new(preamble).heading("Instructions:"),
            |builder, (i, rule)| {
                let table_shown = ORCHESTRATION_RULES[..i]
                    .iter()
                    .any(|earlier| earlier.rendering == Rendering::StockTable);
                builder.step(rule.title, instruction_for(rule, table_shown))
            },
        )
        .closing(CLOSING)
        .build()
}

/// One numbered instruction. The tools come from `rule.tools` and the answer
/// format from `rule.rendering`; the intent only supplies the condition and
/// any intent-specific checks. `table_shown` is set once an earlier step has
/// described the stock table.
fn instruction_for(rule: &IntentRule, table_shown: bool) -> String {
    let tools = tool_clause(rule.tools);
    let render = rendering_clause(rule.rendering, table_shown);
    match rule.intent {
        Intent::List => format!(
            "If the query asks to {}, or similar, {tools} to retrieve the items, then {render}",
            quoted(rule.triggers),
        ),
        Intent::Summarize => format!("If the query asks for a summary, {tools} and {render}"),
        Intent::Search => {
            format!("If the query involves searching, {tools} with the keyword and {render}")
        }
        Intent::Add => {
            let example = rule
                .example
                .map(|e| format!(" (e.g., \"{e}\")"))
                .unwrap_or_default();
            let categories: String = CATEGORY_RULES
                .iter()
                .map(|(category, keywords)| {
                    format!("\n{NESTED}- {} → \"{category}\"", quoted(keywords))
                })
                .collect();
            format!(
                "If the query involves adding an item{example}, ensure the query provides:\n\
                 {NESTED}- Item name (string)\n\
                 {NESTED}- Quantity (positive integer)\n\
                 {NESTED}- Price (positive float)\n\
                 {NESTED}If any are missing or invalid, respond with: \"{ADD_ITEM_ERROR}\"\n\
                 {NESTED}Automatically assign a category based on the item name:{categories}\n\
                 {NESTED}- Otherwise → \"{misc}\"\n\
                 {NESTED}Then {tools}, giving the new item the latest ID + 1, and {render}",
                misc = Category::Miscellaneous,
            )
        }
        Intent::UpdateStock => format!(
            "If the query involves updating stock, {tools} with the item ID and new stock level, \
             then {render}"
        ),
        Intent::LowStockAlert => format!("For summaries or searches, {tools} to {render}"),
    }
}

/// The tools of a plan as an imperative clause, e.g. "call `a` then `b`".
fn tool_clause(plan: ToolPlan) -> String {
    let ticked: Vec<String> = plan.tools().iter().map(|t| format!("`{t}`")).collect();
    match plan {
        ToolPlan::Inherited => "reuse the items already retrieved".to_string(),
        ToolPlan::OneOf(_) => format!("use {}, whichever fits the query,", ticked.join(" or ")),
        ToolPlan::Sequence(_) if ticked.len() > 1 => format!("call {}", ticked.join(" then ")),
        ToolPlan::Sequence(_) => format!("use {}", ticked.join("")),
    }
}

fn rendering_clause(rendering: Rendering, table_shown: bool) -> String {
    match rendering {
        Rendering::StockTable if table_shown => {
            "present the results in the same tabular format as above if the intent is to list \
             or display them."
                .to_string()
        }
        Rendering::StockTable => format!(
            "present the results in a tabular format with columns: {columns}. The last \
             \"Stock\" column is a status column: show {IN_STOCK_MARKER} if stock >= \
             {LOW_STOCK_THRESHOLD}, otherwise show {LOW_STOCK_MARKER}.\n\
             {NESTED}Example table format:\n{NESTED}```\n{table}\n{NESTED}```",
            columns = TABLE_COLUMNS.join(", "),
            table = indent(&render_table(&seed_items())),
        ),
        Rendering::Summary => format!(
            "provide a concise summary of the inventory, including total items, categories, \
             and low stock alerts (stock < {LOW_STOCK_THRESHOLD})."
        ),
        Rendering::AddConfirmation => "confirm the new item's ID and category.".to_string(),
        Rendering::UpdateConfirmation => {
            "confirm the new level. The tool returns false when no item has that ID; say so \
             instead of retrying."
                .to_string()
        }
        Rendering::RestockSuggestions => format!(
            "identify items with stock < {LOW_STOCK_THRESHOLD} and suggest restocking."
        ),
    }
}

fn quoted(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| format!("\"{w}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

fn indent(block: &str) -> String {
    block
        .lines()
        .map(|line| format!("{NESTED}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builder for a preamble followed by numbered, titled instructions.
///
/// ```
/// use stockroom::orchestrator::InstructionBuilder;
///
/// let text = InstructionBuilder::new("You are a stock clerk.")
///     .heading("Instructions:")
///     .step("Counting", "Count every shelf.")
///     .step("Skipped", "")
///     .closing("Be brief.")
///     .build();
///
/// assert!(text.contains("1. **Counting**: Count every shelf."));
/// assert!(!text.contains("Skipped"));
/// assert!(text.ends_with("Be brief."));
/// ```
pub struct InstructionBuilder {
    preamble: String,
    heading: Option<String>,
    steps: Vec<String>,
    closing: Option<String>,
}

impl InstructionBuilder {
    pub fn new(preamble: impl Into<String>) -> Self {
        Self {
            preamble: preamble.into(),
            heading: None,
            steps: Vec::new(),
            closing: None,
        }
    }

    /// Line printed above the numbered steps.
    pub fn heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// Append the next numbered step. Skipped if `body` is empty.
    pub fn step(mut self, title: &str, body: impl Into<String>) -> Self {
        let body = body.into();
        if !body.is_empty() {
            let number = self.steps.len() + 1;
            self.steps.push(format!("{number}. **{title}**: {body}"));
        }
        self
    }

    /// Closing paragraph after the steps.
    pub fn closing(mut self, closing: impl Into<String>) -> Self {
        self.closing = Some(closing.into());
        self
    }

    /// Join preamble, steps and closing with blank lines between blocks.
    pub fn build(self) -> String {
        let mut blocks = vec![self.preamble];
        if !self.steps.is_empty() {
            let steps = self.steps.join("\n");
            blocks.push(match self.heading {
                Some(heading) => format!("{heading}\n{steps}"),
                None => steps,
            });
        }
        blocks.extend(self.closing);
        blocks.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_query_verbatim() {
        let text = manage_inventory("Show me everything with \"mo\" in it");
        assert!(text.contains("\"Show me everything with \"mo\" in it\""));
    }

    #[test]
    fn names_every_tool_in_the_preamble() {
        let text = manage_inventory("q");
        let preamble = text.split("Instructions:").next().unwrap();
        for tool in names::INVENTORY_TOOLS {
            assert!(preamble.contains(&format!("`{tool}`")), "{tool}");
        }
    }

    #[test]
    fn instructions_are_numbered_in_rule_order() {
        let text = manage_inventory("q");
        for (i, rule) in ORCHESTRATION_RULES.iter().enumerate() {
            let expected = format!("{}. **{}**:", i + 1, rule.title);
            assert!(text.contains(&expected), "missing {expected}");
        }
        let listing = text.find("1. **Listing").unwrap();
        let adding = text.find("4. **Adding").unwrap();
        assert!(listing < adding);
    }

    #[test]
    fn contains_exact_add_error() {
        let text = manage_inventory("Add item: Lamp");
        assert!(text.contains(
            "\"Error: Please provide item name, quantity (positive integer), and price (positive float).\""
        ));
    }

    #[test]
    fn contains_category_table() {
        let text = manage_inventory("q");
        assert!(text.contains(
            "- \"laptop\", \"monitor\", \"phone\", \"tablet\", \"headphones\" → \"Electronics\""
        ));
        assert!(text.contains("- \"keyboard\", \"mouse\", \"cable\" → \"Accessories\""));
        assert!(text.contains("- \"chair\", \"desk\", \"table\" → \"Furniture\""));
        assert!(text.contains("- Otherwise → \"Miscellaneous\""));
    }

    #[test]
    fn contains_six_column_example_table() {
        let text = manage_inventory("list items");
        assert!(text.contains("columns: ID, Name, Category, Stock, Price, Stock"));
        assert!(text.contains("   | ID | Name     | Category    | Stock | Price  | Stock |"));
        assert!(text.contains("   | 5  | Chair    | Furniture   | 8     | 89.99  | ❌     |"));
        assert!(text.contains("show ✅ if stock >= 10, otherwise show ❌"));
    }

    #[test]
    fn low_stock_threshold_is_stated() {
        let text = manage_inventory("summary please");
        assert!(text.contains("low stock alerts (stock < 10)"));
        assert!(text.contains("identify items with stock < 10 and suggest restocking"));
    }

    #[test]
    fn ends_with_closing_line() {
        assert!(manage_inventory("q").ends_with(CLOSING));
    }

    #[test]
    fn definition_requires_query() {
        let def = manage_inventory_definition();
        assert_eq!(def.name, "manage_inventory");
        assert_eq!(def.arguments.len(), 1);
        assert!(def.arguments[0].required);
        assert!(def.description.contains("automatic category assignment"));
    }

    /// Tool names appearing in `text`, in order of first appearance.
    fn tools_named_in(text: &str) -> Vec<&'static str> {
        let mut found: Vec<(usize, &'static str)> = names::INVENTORY_TOOLS
            .iter()
            .filter_map(|tool| text.find(&format!("`{tool}`")).map(|pos| (pos, *tool)))
            .collect();
        found.sort();
        found.into_iter().map(|(_, tool)| tool).collect()
    }

    #[test]
    fn each_step_names_exactly_its_planned_tools() {
        for (i, rule) in ORCHESTRATION_RULES.iter().enumerate() {
            let body = instruction_for(rule, i > 0);
            assert_eq!(tools_named_in(&body), rule.tools.tools(), "{}", rule.title);
        }
    }

    #[test]
    fn steps_follow_a_changed_plan() {
        let rule = IntentRule {
            tools: ToolPlan::Sequence(&[names::GET_ALL_ITEMS, names::UPDATE_STOCK]),
            ..ORCHESTRATION_RULES[4]
        };
        let body = instruction_for(&rule, true);
        assert!(body.contains("call `get_all_items` then `update_stock`"));
    }

    #[test]
    fn second_stock_table_refers_back() {
        let text = manage_inventory("find mouse");
        assert_eq!(text.matches("Example table format").count(), 1);
        assert!(text.contains("in the same tabular format as above"));
    }

    #[test]
    fn add_step_quotes_the_example_query() {
        let text = manage_inventory("q");
        assert!(text.contains("adding an item (e.g., \"Add item: Headphones, 15, 79.99\")"));
        assert!(text.contains("call `get_latest_id` then `add_item`"));
    }

    #[test]
    fn builder_without_steps() {
        let text = InstructionBuilder::new("Only a preamble").build();
        assert_eq!(text, "Only a preamble");
    }
}
