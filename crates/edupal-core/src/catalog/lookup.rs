//! Pure lookups over the reminder tables.

use chrono::{NaiveTime, Timelike};

use super::candidate::{ContextTag, Frequency, Priority, ReminderCandidate};
use super::entries::{contextual_entries, DayPart, ScheduledEntry, SCHEDULED_ENTRIES};

/// Route fragment that disables the catch-all for scheduled entries.
const DASHBOARD_SEGMENT: &str = "dashboard";

/// Tag carried by every time-derived candidate.
pub const TIME_TAG: &str = "time";

/// Stateless access to the reminder tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReminderCatalog;

impl ReminderCatalog {
    /// Whether `now` falls within one hour of `scheduled_time` ("HH:MM").
    ///
    /// Only hours are compared, so "08:00" matches 07:00 through 09:59.
    /// Unparseable times never match.
    pub fn is_within_window(scheduled_time: &str, now: NaiveTime) -> bool {
        match NaiveTime::parse_from_str(scheduled_time, "%H:%M") {
            Ok(scheduled) => scheduled.hour().abs_diff(now.hour()) <= 1,
            Err(_) => false,
        }
    }

    /// Candidates for the current route, scheduled entries first.
    ///
    /// A missing route matches nothing.
    pub fn contextual_reminders_for(path: Option<&str>, now: NaiveTime) -> Vec<ReminderCandidate> {
        let Some(path) = path else {
            return Vec::new();
        };
        let on_tagged_page = ContextTag::ALL.iter().any(|tag| tag.matches(path));
        let catch_all = !on_tagged_page && !path.contains(DASHBOARD_SEGMENT);

        let mut reminders: Vec<ReminderCandidate> = SCHEDULED_ENTRIES
            .iter()
            .filter(|entry| Self::is_within_window(entry.time_of_day, now))
            .filter(|entry| entry.context.matches(path) || catch_all)
            .map(scheduled_candidate)
            .collect();

        for tag in ContextTag::detect(path) {
            reminders.extend(contextual_entries(tag).iter().map(|entry| {
                ReminderCandidate::new(entry.message, Priority::Low, Frequency::Once)
                    .with_tag(tag.key())
                    .with_icon(entry.icon)
            }));
        }

        reminders
    }

    /// Greeting for the current part of the school day, if any.
    pub fn time_of_day_suggestion(now: NaiveTime) -> Option<ReminderCandidate> {
        let part = DayPart::from_hour(now.hour())?;
        Some(
            ReminderCandidate::new(part.message(), Priority::Low, Frequency::Daily)
                .with_tag(TIME_TAG)
                .with_icon(part.icon()),
        )
    }

    /// The scheduled table, for inspection.
    pub fn scheduled_entries() -> &'static [ScheduledEntry] {
        &SCHEDULED_ENTRIES
    }
}

fn scheduled_candidate(entry: &ScheduledEntry) -> ReminderCandidate {
    ReminderCandidate::new(entry.message, Priority::Medium, Frequency::Daily)
        .with_tag(entry.context.key())
        .with_tag(TIME_TAG)
        .with_icon(entry.icon)
}
