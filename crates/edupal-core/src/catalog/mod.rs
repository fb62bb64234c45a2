//! Reminder catalog.
//!
//! Two static tables drive every route- and time-based suggestion:
//! - scheduled entries, each tied to a coarse +/- one hour window
//! - contextual entries, keyed by the portal section found in the route
//!
//! Every lookup is a pure function of the route and the wall-clock time.
//! Candidates get fresh ids on every call and nothing is remembered
//! between calls.

mod candidate;
mod entries;
mod lookup;

pub use candidate::{ContextTag, Frequency, Priority, ReminderCandidate};
pub use entries::{contextual_entries, ContextualEntry, DayPart, ScheduledEntry, SCHEDULED_ENTRIES};
pub use lookup::{ReminderCatalog, TIME_TAG};
