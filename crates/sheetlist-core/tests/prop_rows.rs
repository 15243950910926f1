use proptest::prelude::*;
use serde_json::Value;
use sheetlist_core::{format_item_id, items_from_rows, parse_item_index};

#[test]
fn header_row_is_always_skipped() {
    let rows = vec![vec![Value::String("Bread".to_string())]];
    assert!(items_from_rows(&rows).is_empty());
}

proptest! {
    #[test]
    fn item_id_recovers_row_index(index in 0usize..100_000, name in "[A-Za-z0-9 _]{0,24}") {
        let id = format_item_id(index, &name);
        prop_assert_eq!(parse_item_index(&id), Some(index));
    }

    #[test]
    fn listed_ids_point_at_their_rows(names in proptest::collection::vec("[a-z]{0,6}", 0..20)) {
        let mut rows = vec![vec![Value::String("Item".to_string())]];
        rows.extend(names.iter().map(|name| vec![Value::String(name.clone())]));

        let items = items_from_rows(&rows);
        let expected = names
            .iter()
            .filter(|name| !name.is_empty() && name.as_str() != "item")
            .count();
        prop_assert_eq!(items.len(), expected);
        for item in items {
            let index = parse_item_index(&item.id).expect("id carries index");
            let cell = rows[index][0].as_str().expect("string cell");
            prop_assert_eq!(cell, item.name.as_str());
        }
    }
}
