//! # EduPal Core Library
//!
//! This library decides what the EduPal assistant of the school-engagement
//! portal should suggest right now. Hosts (the web UI, the `edupal` CLI)
//! call it from a polling timer and on route changes.
//!
//! ## Architecture
//!
//! - **Catalog**: static scheduled and contextual reminder tables with pure
//!   lookups over the current route and time of day
//! - **Updates**: the important-updates collaborator behind an async trait,
//!   with HTTP and in-memory implementations
//! - **Suggestion**: a stateless three-tier resolver where important updates
//!   beat route reminders, which beat time-of-day prompts
//!
//! ## Key Components
//!
//! - [`ReminderCatalog`]: scheduled/contextual reminder lookups
//! - [`SuggestionResolver`]: picks the single suggestion to show
//! - [`UpdatesProvider`]: trait for important-update sources
//! - [`Config`]: application configuration management

pub mod catalog;
pub mod config;
pub mod error;
pub mod suggestion;
pub mod updates;

pub use catalog::{ContextTag, Frequency, Priority, ReminderCandidate, ReminderCatalog};
pub use config::{AssistantConfig, Config, UpdatesConfig};
pub use error::{ConfigError, CoreError, Result, UpdatesError};
pub use suggestion::{ActiveSuggestion, SuggestionResolver, SuggestionType};
pub use updates::{
    EducationUpdate, HttpUpdatesProvider, NoUpdates, StaticUpdatesProvider, UpdateType,
    UpdatesProvider,
};
