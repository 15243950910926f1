use std::collections::HashMap;

use sheetlist_client::RecordClient;
use sheetlist_core::{Item, NewItem};

use super::format::print_items_table;
use crate::cli_args::{AddArgs, DeleteArgs, ReorderArgs};

pub(crate) async fn handle_list(json: bool, client: &RecordClient) -> anyhow::Result<()> {
    let items = client.list().await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else if items.is_empty() {
        println!("No items");
    } else {
        print_items_table(&items);
    }
    Ok(())
}

pub(crate) async fn handle_add(args: AddArgs, client: &RecordClient) -> anyhow::Result<()> {
    let item = NewItem {
        name: args.name,
        quantity: args.quantity,
        category: args.category,
    };
    client.append(&item).await?;
    println!("Added {}", item.name.trim());
    Ok(())
}

pub(crate) async fn handle_delete(args: DeleteArgs, client: &RecordClient) -> anyhow::Result<()> {
    client.delete(&args.id).await?;
    println!("Deleted {}", args.id);
    Ok(())
}

pub(crate) async fn handle_reorder(
    args: ReorderArgs,
    client: &RecordClient,
) -> anyhow::Result<()> {
    let current = client.list().await?;
    let ordered = order_by_ids(current, &args.ids)?;
    client.reorder(&ordered).await?;
    println!("Reordered {} items", ordered.len());
    Ok(())
}

pub(crate) async fn handle_test(client: &RecordClient) -> anyhow::Result<()> {
    if !client.test_connection().await {
        println!("failed");
        anyhow::bail!("connection test failed; run with -v for details");
    }
    println!("ok");
    Ok(())
}

/// Arranges `items` in the order of `ids`, which must name each item exactly once.
fn order_by_ids(items: Vec<Item>, ids: &[String]) -> anyhow::Result<Vec<Item>> {
    if ids.len() != items.len() {
        anyhow::bail!(
            "expected {} item ids, got {}; pass every item id exactly once",
            items.len(),
            ids.len()
        );
    }
    let mut by_id: HashMap<String, Item> = items
        .into_iter()
        .map(|item| (item.id.clone(), item))
        .collect();
    ids.iter()
        .map(|id| {
            by_id
                .remove(id)
                .ok_or_else(|| anyhow::anyhow!("unknown or repeated item id: {id}"))
        })
        .collect()
}
