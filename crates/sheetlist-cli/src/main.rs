use clap::Parser;
use std::sync::Arc;

mod cli_args;
mod cli_command;
mod modules;

use sheetlist_client::{Endpoints, RecordClient};
use tracing_subscriber::EnvFilter;

use crate::cli_args::*;
use crate::cli_command::handle_command;
use crate::modules::config::{handle_config_command, load_config, save_config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let mut config = load_config()?;

    match cli.command {
        Command::Config(args) => {
            handle_config_command(args, &mut config)?;
            save_config(&config)?;
        }
        command => {
            let endpoints = resolve_endpoints(cli.token_url, cli.sheets_url);
            let http = reqwest::Client::builder().build()?;
            let client = RecordClient::from_source(http, Arc::new(config), endpoints);
            handle_command(command, &client, cli.json).await?;
        }
    }

    Ok(())
}

fn resolve_endpoints(token_url: Option<String>, sheets_url: Option<String>) -> Endpoints {
    let mut endpoints = Endpoints::default();
    if let Some(token_url) = token_url {
        endpoints.token_url = token_url;
    }
    if let Some(sheets_url) = sheets_url {
        endpoints.sheets_base_url = sheets_url;
    }
    endpoints
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
