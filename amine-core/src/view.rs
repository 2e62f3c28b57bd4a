//! Display rows for the item table.

use crate::category::Category;
use crate::item::Item;

/// Column headers, left to right.
pub const COLUMNS: [&str; 5] = ["ID", "Name", "Category", "Price", "Action"];

/// Label for the per-row delete action.
pub const DELETE_ACTION: &str = "Delete";

/// Pre-formatted cells for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: String,
    pub action: &'static str,
}

impl ItemRow {
    pub fn new(item: &Item, icons: bool) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            category: category_cell(item.category.label(), icons),
            price: item.price.to_string(),
            action: DELETE_ACTION,
        }
    }

    pub fn cells(&self) -> [&str; 5] {
        [
            self.id.as_str(),
            self.name.as_str(),
            self.category.as_str(),
            self.price.as_str(),
            self.action,
        ]
    }
}

impl From<&Item> for ItemRow {
    fn from(item: &Item) -> Self {
        Self::new(item, true)
    }
}

/// Text for a category cell: the icon for a known label, otherwise the raw
/// text.
pub fn category_cell(raw: &str, icons: bool) -> String {
    match Category::from_label(raw) {
        Some(category) if icons => category.icon().to_string(),
        _ => raw.to_string(),
    }
}
