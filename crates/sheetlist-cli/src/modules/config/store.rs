use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use sheetlist_core::{keys, CredentialRecord, CredentialSource};

use crate::cli_args::{ConfigArgs, ConfigCommand};

/// Settings persisted between runs; doubles as the credential source.
#[derive(Serialize, Deserialize, Default)]
pub struct CliConfig {
    #[serde(default)]
    pub entries: BTreeMap<String, String>,
}

impl CredentialSource for CliConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

pub(crate) fn handle_config_command(
    args: ConfigArgs,
    config: &mut CliConfig,
) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Set(args) => {
            let key = args.key.as_key();
            if key == keys::SERVICE_ACCOUNT_JSON {
                CredentialRecord::parse(&args.value)?;
            }
            config.entries.insert(key.to_string(), args.value);
            debug!(key, "stored setting");
        }
        ConfigCommand::Unset(args) => {
            config.entries.remove(args.key.as_key());
        }
        ConfigCommand::Show => {
            for line in describe_config(config) {
                println!("{line}");
            }
        }
        ConfigCommand::ImportCredentials(args) => {
            let contents = fs::read_to_string(&args.path)
                .map_err(|err| anyhow::anyhow!("failed to read {}: {err}", args.path))?;
            let record = CredentialRecord::parse(&contents)?;
            println!("Imported credentials for {}", record.client_email());
            config
                .entries
                .insert(keys::SERVICE_ACCOUNT_JSON.to_string(), contents);
        }
    }
    Ok(())
}

fn describe_config(config: &CliConfig) -> Vec<String> {
    config
        .entries
        .iter()
        .map(|(key, value)| {
            if key != keys::SERVICE_ACCOUNT_JSON {
                return format!("{key}={value}");
            }
            match CredentialRecord::parse(value) {
                Ok(record) => format!("{key}=<service account {}>", record.client_email()),
                Err(err) => format!("{key}=<invalid: {err}>"),
            }
        })
        .collect()
}

fn config_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("HOME is not set"))?;
    Ok(Path::new(&home).join(".sheetlist").join("config.json"))
}

pub(crate) fn load_config() -> anyhow::Result<CliConfig> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(CliConfig::default());
    }
    let contents = fs::read_to_string(path)?;
    let config = serde_json::from_str(&contents)?;
    Ok(config)
}

pub(crate) fn save_config(config: &CliConfig) -> anyhow::Result<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}
