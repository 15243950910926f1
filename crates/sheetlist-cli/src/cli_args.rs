use clap::{ArgAction, Parser, Subcommand};

pub use crate::modules::config::args::*;
pub use crate::modules::items::args::*;

#[derive(Parser)]
#[command(name = "sheetlist")]
#[command(about = "Shopping list stored in a spreadsheet")]
pub struct Cli {
    #[arg(long, env = "SHEETLIST_TOKEN_URL", help = "Override the OAuth2 token endpoint")]
    pub token_url: Option<String>,
    #[arg(long, env = "SHEETLIST_SHEETS_URL", help = "Override the spreadsheet API base URL")]
    pub sheets_url: Option<String>,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[arg(long, global = true, help = "Print output as JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Manage stored credentials and spreadsheet settings")]
    Config(ConfigArgs),
    #[command(about = "List items")]
    List,
    #[command(about = "Append an item")]
    Add(AddArgs),
    #[command(about = "Blank the row of an item")]
    Delete(DeleteArgs),
    #[command(about = "Rewrite the list in the given id order")]
    Reorder(ReorderArgs),
    #[command(about = "Check that the spreadsheet can be read")]
    Test,
}
