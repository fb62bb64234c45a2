//! Raw route reminders, before tier selection.

use clap::Args;

use edupal_core::ReminderCatalog;

use super::common::{time_of_day, CliResult};

#[derive(Args)]
pub struct RemindersArgs {
    /// Current portal route
    #[arg(long)]
    path: Option<String>,
    /// Evaluate at this time of day (HH:MM) instead of now
    #[arg(long)]
    at: Option<String>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: RemindersArgs) -> CliResult {
    let now = time_of_day(args.at.as_deref())?;
    let reminders = ReminderCatalog::contextual_reminders_for(args.path.as_deref(), now);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reminders)?);
        return Ok(());
    }

    if reminders.is_empty() {
        println!("No reminders for this route.");
        return Ok(());
    }

    for (i, reminder) in reminders.iter().enumerate() {
        println!(
            "{}. {} {} ({}, {})",
            i + 1,
            reminder.icon.as_deref().unwrap_or(" "),
            reminder.message,
            reminder.priority,
            reminder.frequency,
        );
    }
    Ok(())
}
