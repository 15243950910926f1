pub(crate) mod args;
mod store;

pub(crate) use store::{handle_config_command, load_config, save_config, CliConfig};
