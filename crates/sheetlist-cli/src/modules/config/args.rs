use clap::{Args, Subcommand, ValueEnum};
use sheetlist_core::keys;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Store a setting")]
    Set(SetArgs),
    #[command(about = "Remove a setting")]
    Unset(UnsetArgs),
    #[command(about = "Print settings with credentials redacted")]
    Show,
    #[command(about = "Store a service account JSON key file")]
    ImportCredentials(ImportCredentialsArgs),
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ConfigKey {
    SpreadsheetId,
    SheetName,
    ServiceAccountJson,
}

impl ConfigKey {
    pub fn as_key(self) -> &'static str {
        match self {
            Self::SpreadsheetId => keys::SPREADSHEET_ID,
            Self::SheetName => keys::SHEET_NAME,
            Self::ServiceAccountJson => keys::SERVICE_ACCOUNT_JSON,
        }
    }
}

#[derive(Args)]
pub struct SetArgs {
    #[arg(value_enum)]
    pub key: ConfigKey,
    pub value: String,
}

#[derive(Args)]
pub struct UnsetArgs {
    #[arg(value_enum)]
    pub key: ConfigKey,
}

#[derive(Args)]
pub struct ImportCredentialsArgs {
    #[arg(help = "Path to the downloaded service account key")]
    pub path: String,
}
