//! Helpers shared by the subcommands.

use chrono::{Local, NaiveTime};
use std::path::{Path, PathBuf};

use edupal_core::{
    ActiveSuggestion, Config, HttpUpdatesProvider, NoUpdates, StaticUpdatesProvider,
    UpdatesProvider,
};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Load the config from `path`, or from the default location.
pub fn load_config(path: Option<&Path>) -> edupal_core::Result<Config> {
    let cfg = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(cfg)
}

pub fn config_path(path: Option<&Path>) -> edupal_core::Result<PathBuf> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Config::path()?),
    }
}

/// Pick the updates source: a JSON file wins, then the configured backend.
pub fn build_provider(
    config: &Config,
    updates_file: Option<&Path>,
) -> edupal_core::Result<Box<dyn UpdatesProvider>> {
    if let Some(file) = updates_file {
        return Ok(Box::new(StaticUpdatesProvider::from_json_file(file)?));
    }
    match HttpUpdatesProvider::from_config(&config.updates)? {
        Some(provider) => Ok(Box::new(provider)),
        None => Ok(Box::new(NoUpdates)),
    }
}

/// Parse `--at HH:MM`, defaulting to the local time.
pub fn time_of_day(at: Option<&str>) -> Result<NaiveTime, Box<dyn std::error::Error>> {
    match at {
        Some(at) => NaiveTime::parse_from_str(at, "%H:%M")
            .map_err(|_| format!("invalid time '{at}', expected HH:MM").into()),
        None => Ok(Local::now().time()),
    }
}

/// One-line human rendering of a suggestion.
pub fn describe(suggestion: &ActiveSuggestion, auto_open_enabled: bool) -> String {
    let mut line = String::new();
    if let Some(icon) = &suggestion.icon {
        line.push_str(icon);
        line.push(' ');
    }
    line.push_str(&suggestion.text);
    line.push_str(&format!(" [{}]", suggestion.kind.name()));
    if auto_open_enabled && suggestion.should_auto_open() {
        line.push_str(" (opens assistant)");
    }
    line
}
