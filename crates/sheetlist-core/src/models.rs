use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::OnceLock;

use crate::constants::{HEADER_LABEL, ITEM_ID_PREFIX};

/// A list entry projected from one spreadsheet row.
///
/// `id` embeds the row position it was read from, so it goes stale as soon as
/// rows shift (append after blanking, reorder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl NewItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

impl From<&Item> for NewItem {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity.clone(),
            category: item.category.clone(),
        }
    }
}

/// The four cells written for one item; column D is reserved and always blank.
pub type RowCells = [String; 4];

pub fn row_cells(name: &str, quantity: Option<&str>, category: Option<&str>) -> RowCells {
    [
        name.to_string(),
        quantity.unwrap_or_default().to_string(),
        category.unwrap_or_default().to_string(),
        String::new(),
    ]
}

pub fn blank_row() -> RowCells {
    Default::default()
}

#[must_use]
pub fn format_item_id(row_index: usize, name: &str) -> String {
    format!("{ITEM_ID_PREFIX}{row_index}_{name}")
}

fn item_id_pattern() -> &'static Regex {
    static ITEM_ID_RE: OnceLock<Regex> = OnceLock::new();
    ITEM_ID_RE.get_or_init(|| Regex::new(r"^item_([0-9]+)_").expect("item id pattern compiles"))
}

/// Recovers the row index embedded by [`format_item_id`].
pub fn parse_item_index(item_id: &str) -> Option<usize> {
    let caps = item_id_pattern().captures(item_id)?;
    caps.get(1)?.as_str().parse().ok()
}

fn cell_text(cell: &Value) -> String {
    match cell {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Maps a fetched `A:D` value grid to items.
///
/// Row 0 is the header. Blank rows and rows without a name keep their index
/// so ids stay aligned with sheet positions.
pub fn items_from_rows(rows: &[Vec<Value>]) -> Vec<Item> {
    rows.iter()
        .enumerate()
        .skip(1)
        .filter_map(|(index, row)| {
            let cell = |column: usize| row.get(column).map(cell_text).unwrap_or_default();
            let name = cell(0).trim().to_string();
            if name.is_empty() || name.eq_ignore_ascii_case(HEADER_LABEL) {
                return None;
            }
            Some(Item {
                id: format_item_id(index, &name),
                quantity: Some(cell(1)),
                category: Some(cell(2)),
                name,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn grid(value: Value) -> Vec<Vec<Value>> {
        serde_json::from_value(value).expect("grid")
    }

    #[test]
    fn skips_header_blank_rows_and_keeps_indices() {
        let rows = grid(json!([
            ["Item", "Qty", "Cat"],
            ["Milk", "2", "Dairy"],
            ["", "", ""],
            ["Eggs", "12"]
        ]));
        let items = items_from_rows(&rows);
        assert_eq!(
            items,
            vec![
                Item {
                    id: "item_1_Milk".to_string(),
                    name: "Milk".to_string(),
                    quantity: Some("2".to_string()),
                    category: Some("Dairy".to_string()),
                },
                Item {
                    id: "item_3_Eggs".to_string(),
                    name: "Eggs".to_string(),
                    quantity: Some("12".to_string()),
                    category: Some(String::new()),
                },
            ]
        );
    }

    #[test]
    fn header_only_is_empty() {
        assert!(items_from_rows(&grid(json!([["Item", "Qty", "Cat"]]))).is_empty());
        assert!(items_from_rows(&[]).is_empty());
    }

    #[test]
    fn skips_duplicate_header_and_whitespace_names() {
        let rows = grid(json!([
            ["anything"],
            ["  ITEM ", "Qty"],
            [],
            ["   ", "3"],
            [" Bread ", 2, null]
        ]));
        let items = items_from_rows(&rows);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "item_4_Bread");
        assert_eq!(items[0].name, "Bread");
        assert_eq!(items[0].quantity.as_deref(), Some("2"));
        assert_eq!(items[0].category.as_deref(), Some(""));
    }

    #[test]
    fn parses_item_index() {
        assert_eq!(parse_item_index("item_3_Eggs"), Some(3));
        assert_eq!(parse_item_index("item_12_with_underscores"), Some(12));
        assert_eq!(parse_item_index("item_7_"), Some(7));
        assert_eq!(parse_item_index("item__Eggs"), None);
        assert_eq!(parse_item_index("item_3"), None);
        assert_eq!(parse_item_index("row_3_Eggs"), None);
        assert_eq!(parse_item_index(" item_3_Eggs"), None);
    }

    #[test]
    fn row_cells_fill_missing_columns() {
        assert_eq!(
            row_cells("Milk", None, Some("Dairy")),
            [
                "Milk".to_string(),
                String::new(),
                "Dairy".to_string(),
                String::new()
            ]
        );
        assert!(blank_row().iter().all(String::is_empty));
    }
}
