//! One-shot suggestion resolution.

use clap::Args;
use std::path::{Path, PathBuf};

use edupal_core::SuggestionResolver;

use super::common::{build_provider, describe, load_config, time_of_day, CliResult};

#[derive(Args)]
pub struct SuggestArgs {
    /// Current portal route, e.g. /parent/dashboard/attendance
    #[arg(long)]
    path: Option<String>,
    /// Child to fetch important updates for (defaults to assistant.default_child_id)
    #[arg(long)]
    child_id: Option<u64>,
    /// Evaluate at this time of day (HH:MM) instead of now
    #[arg(long)]
    at: Option<String>,
    /// Read important updates from a JSON file instead of the backend
    #[arg(long)]
    updates_file: Option<PathBuf>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(args: SuggestArgs, config_file: Option<&Path>) -> CliResult {
    let config = load_config(config_file)?;
    let provider = build_provider(&config, args.updates_file.as_deref())?;
    let now = time_of_day(args.at.as_deref())?;
    let child_id = args.child_id.or(config.assistant.default_child_id);

    let resolver = SuggestionResolver::new(provider);
    let suggestion = resolver
        .resolve_at(args.path.as_deref(), child_id, now)
        .await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&suggestion)?);
        return Ok(());
    }

    match suggestion {
        Some(s) => println!("{}", describe(&s, config.assistant.auto_open_on_high_priority)),
        None => println!("No suggestion right now."),
    }
    Ok(())
}
