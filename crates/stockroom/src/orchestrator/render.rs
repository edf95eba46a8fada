//! Listing and summary rendering.

use std::fmt;

use super::policy::{LOW_STOCK_THRESHOLD, is_low_stock, stock_status_marker};
use crate::inventory::Item;

/// Column labels of an item table. The second "Stock" column holds the
/// status marker.
pub const TABLE_COLUMNS: [&str; 6] = ["ID", "Name", "Category", "Stock", "Price", "Stock"];

/// Render items as a markdown table with the [`TABLE_COLUMNS`], padding each
/// column to its widest cell.
///
/// ```
/// use stockroom::inventory::Item;
/// use stockroom::orchestrator::render_table;
///
/// let table = render_table(&[Item::new(5, "Chair", "Furniture", 8, 89.99)]);
/// assert!(table.ends_with("| 5  | Chair | Furniture | 8     | 89.99 | ❌     |"));
/// ```
pub fn render_table(items: &[Item]) -> String {
    let header = TABLE_COLUMNS.map(String::from);
    let rows: Vec<[String; 6]> = items.iter().map(table_row).collect();

    let mut widths = TABLE_COLUMNS.map(|c| c.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator: String = widths
        .iter()
        .map(|w| "-".repeat(w + 2))
        .fold(String::from("|"), |line, dashes| line + &dashes + "|");

    let mut lines = vec![table_line(&header, &widths), separator];
    lines.extend(rows.iter().map(|row| table_line(row, &widths)));
    lines.join("\n")
}

fn table_row(item: &Item) -> [String; 6] {
    [
        item.id.to_string(),
        item.name.clone(),
        item.category.clone(),
        item.stock.to_string(),
        format!("{:.2}", item.price),
        stock_status_marker(item.stock).to_string(),
    ]
}

fn table_line(cells: &[String; 6], widths: &[usize; 6]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!(" {cell:<width$} |", width = *width))
        .fold(String::from("|"), |line, cell| line + &cell)
}

/// Inventory overview: item count, categories and low-stock alerts.
#[derive(Debug, Clone, PartialEq)]
pub struct InventorySummary {
    /// Number of item records.
    pub total_items: usize,
    /// Sum of stock over all items.
    pub total_units: u64,
    /// Distinct categories in first-seen order.
    pub categories: Vec<String>,
    /// Items below [`LOW_STOCK_THRESHOLD`], in inventory order.
    pub low_stock: Vec<Item>,
}

impl InventorySummary {
    pub fn from_items(items: &[Item]) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for item in items {
            if !categories.contains(&item.category) {
                categories.push(item.category.clone());
            }
        }
        Self {
            total_items: items.len(),
            total_units: items.iter().map(|i| u64::from(i.stock)).sum(),
            categories,
            low_stock: items
                .iter()
                .filter(|i| is_low_stock(i.stock))
                .cloned()
                .collect(),
        }
    }
}

impl fmt::Display for InventorySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Total items: {} ({} units in stock)",
            self.total_items, self.total_units
        )?;
        if self.categories.is_empty() {
            writeln!(f, "Categories: none")?;
        } else {
            writeln!(f, "Categories: {}", self.categories.join(", "))?;
        }
        write!(f, "Low stock alerts (stock < {LOW_STOCK_THRESHOLD}):")?;
        if self.low_stock.is_empty() {
            return write!(f, " none");
        }
        for item in &self.low_stock {
            write!(
                f,
                "\n- {} (ID {}): {} left, consider restocking",
                item.name, item.id, item.stock
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::seed_items;

    #[test]
    fn seed_table_layout() {
        let table = render_table(&seed_items());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(
            lines[0],
            "| ID | Name     | Category    | Stock | Price  | Stock |"
        );
        assert_eq!(
            lines[1],
            "|----|----------|-------------|-------|--------|-------|"
        );
        assert_eq!(
            lines[6],
            "| 5  | Chair    | Furniture   | 8     | 89.99  | ❌     |"
        );
        // Monitor sits exactly on the threshold.
        assert!(lines[5].contains("| 10    |"));
        assert!(lines[5].ends_with("| ✅     |"));
    }

    #[test]
    fn empty_table_has_header_only() {
        let table = render_table(&[]);
        assert_eq!(table.lines().count(), 2);
    }

    #[test]
    fn summary_of_seed_data() {
        let summary = InventorySummary::from_items(&seed_items());
        assert_eq!(summary.total_items, 5);
        assert_eq!(summary.total_units, 92);
        assert_eq!(
            summary.categories,
            ["Electronics", "Accessories", "Furniture"]
        );
        assert_eq!(summary.low_stock.len(), 1);
        assert_eq!(summary.low_stock[0].name, "Chair");

        let text = summary.to_string();
        assert!(text.starts_with("Total items: 5 (92 units in stock)"));
        assert!(text.contains("Categories: Electronics, Accessories, Furniture"));
        assert!(text.contains("- Chair (ID 5): 8 left, consider restocking"));
    }

    #[test]
    fn summary_without_alerts() {
        let text = InventorySummary::from_items(&[]).to_string();
        assert!(text.contains("Categories: none"));
        assert!(text.ends_with("Low stock alerts (stock < 10): none"));
    }
}
