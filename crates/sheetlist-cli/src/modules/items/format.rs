use sheetlist_core::Item;

pub(crate) fn print_items_table(items: &[Item]) {
    let mut id_width = "ID".len();
    let mut name_width = "NAME".len();
    let mut quantity_width = "QTY".len();
    for item in items {
        id_width = id_width.max(item.id.len());
        name_width = name_width.max(item.name.len());
        quantity_width = quantity_width.max(item.quantity.as_deref().unwrap_or_default().len());
    }

    println!("{:<id_width$}  {:<name_width$}  {:<quantity_width$}  CATEGORY", "ID", "NAME", "QTY");
    for item in items {
        println!(
            "{:<id_width$}  {:<name_width$}  {:<quantity_width$}  {}",
            item.id,
            item.name,
            item.quantity.as_deref().unwrap_or_default(),
            item.category.as_deref().unwrap_or_default(),
        );
    }
}
