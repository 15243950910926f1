use sheetlist_client::RecordClient;

use crate::cli_args::*;
use crate::modules::items::{handle_add, handle_delete, handle_list, handle_reorder, handle_test};

pub(crate) async fn handle_command(
    command: Command,
    client: &RecordClient,
    json: bool,
) -> anyhow::Result<()> {
    match command {
        Command::List => handle_list(json, client).await?,
        Command::Add(args) => handle_add(args, client).await?,
        Command::Delete(args) => handle_delete(args, client).await?,
        Command::Reorder(args) => handle_reorder(args, client).await?,
        Command::Test => handle_test(client).await?,
        Command::Config(_) => unreachable!(),
    }

    Ok(())
}
