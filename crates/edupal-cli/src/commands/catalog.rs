//! Static reminder tables.

use clap::Subcommand;
use serde_json::json;

use edupal_core::catalog::{contextual_entries, ContextTag};
use edupal_core::ReminderCatalog;

use super::common::CliResult;

#[derive(Subcommand)]
pub enum CatalogAction {
    /// Time-of-day entries
    Scheduled {
        #[arg(long)]
        json: bool,
    },
    /// Entries per portal section
    Contextual {
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: CatalogAction) -> CliResult {
    match action {
        CatalogAction::Scheduled { json } => show_scheduled(json),
        CatalogAction::Contextual { json } => show_contextual(json),
    }
}

fn show_scheduled(as_json: bool) -> CliResult {
    let entries = ReminderCatalog::scheduled_entries();
    if as_json {
        let value: Vec<_> = entries
            .iter()
            .map(|e| {
                json!({
                    "timeOfDay": e.time_of_day,
                    "context": e.context.key(),
                    "message": e.message,
                    "icon": e.icon,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    for e in entries {
        println!("{}  {:<10}  {} {}", e.time_of_day, e.context.key(), e.icon, e.message);
    }
    Ok(())
}

fn show_contextual(as_json: bool) -> CliResult {
    if as_json {
        let mut value = serde_json::Map::new();
        for tag in ContextTag::ALL {
            let list: Vec<_> = contextual_entries(tag)
                .iter()
                .map(|e| json!({ "message": e.message, "icon": e.icon }))
                .collect();
            value.insert(tag.key().to_string(), serde_json::Value::Array(list));
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    for tag in ContextTag::ALL {
        println!("{tag}:");
        for e in contextual_entries(tag) {
            println!("  {} {}", e.icon, e.message);
        }
    }
    Ok(())
}
