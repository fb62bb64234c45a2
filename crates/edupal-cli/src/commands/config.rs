//! Configuration management command.

use clap::Subcommand;
use std::path::Path;

use super::common::{config_path, load_config, CliResult};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., "assistant.poll_interval_secs")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value (empty string clears optional keys)
        value: String,
    },
    /// Show all config as TOML
    Show,
    /// Print the config file location
    Path,
}

pub fn run(action: ConfigAction, config_file: Option<&Path>) -> CliResult {
    match action {
        ConfigAction::Get { key } => {
            let cfg = load_config(config_file)?;
            match cfg.get(&key) {
                Some(val) => println!("{val}"),
                None => return Err(format!("unknown key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let path = config_path(config_file)?;
            let mut cfg = load_config(config_file)?;
            cfg.set(&key, &value)?;
            cfg.save_to(&path)?;
            println!("{key} = {value}");
        }
        ConfigAction::Show => {
            let cfg = load_config(config_file)?;
            println!("{}", toml::to_string_pretty(&cfg)?);
        }
        ConfigAction::Path => {
            println!("{}", config_path(config_file)?.display());
        }
    }
    Ok(())
}
