//! Suggestion resolution.
//!
//! [`SuggestionResolver`] turns a route, an optional child and the time of
//! day into at most one [`ActiveSuggestion`]. Hosts call it from their
//! polling timer and on route changes, and keep only the latest result.

mod active;
mod resolver;

pub use active::{ActiveSuggestion, SuggestionType};
pub use resolver::SuggestionResolver;
