//! Polling host loop.
//!
//! Plays the part of the portal's suggestion timer: resolve once per tick
//! and print only when the suggestion changes.

use clap::Args;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use edupal_core::{ActiveSuggestion, SuggestionResolver};

use super::common::{build_provider, describe, load_config, CliResult};

#[derive(Args)]
pub struct WatchArgs {
    /// Current portal route
    #[arg(long)]
    path: Option<String>,
    /// Child to fetch important updates for (defaults to assistant.default_child_id)
    #[arg(long)]
    child_id: Option<u64>,
    /// Seconds between polls (defaults to assistant.poll_interval_secs)
    #[arg(long)]
    interval: Option<u64>,
    /// Stop after this many polls
    #[arg(long)]
    ticks: Option<u64>,
    /// Read important updates from a JSON file instead of the backend
    #[arg(long)]
    updates_file: Option<PathBuf>,
}

pub async fn run(args: WatchArgs, config_file: Option<&Path>) -> CliResult {
    let config = load_config(config_file)?;
    let provider = build_provider(&config, args.updates_file.as_deref())?;
    let child_id = args.child_id.or(config.assistant.default_child_id);
    let period = args.interval.unwrap_or(config.assistant.poll_interval_secs).max(1);

    let resolver = SuggestionResolver::new(provider);
    let mut interval = tokio::time::interval(Duration::from_secs(period));
    let mut shown: Option<Option<ActiveSuggestion>> = None;
    let mut polls = 0u64;

    loop {
        tokio::select! {
            _ = interval.tick() => {}
            _ = tokio::signal::ctrl_c() => break,
        }

        let suggestion = resolver.resolve(args.path.as_deref(), child_id).await;
        polls += 1;
        let changed = shown.as_ref() != Some(&suggestion);
        debug!(polls, changed, "poll");

        if changed {
            match &suggestion {
                Some(s) => println!("{}", describe(s, config.assistant.auto_open_on_high_priority)),
                None => println!("No suggestion right now."),
            }
            shown = Some(suggestion);
        }

        if args.ticks.is_some_and(|limit| polls >= limit) {
            break;
        }
    }
    Ok(())
}
