//! Three-tier suggestion resolver.

use chrono::{Local, NaiveTime};
use tracing::{debug, warn};

use super::active::{ActiveSuggestion, SuggestionType};
use crate::catalog::ReminderCatalog;
use crate::updates::UpdatesProvider;

/// Picks the one suggestion to surface for a route and child.
///
/// Tiers are tried in order and the first hit wins:
/// 1. pending important updates from the provider
/// 2. reminders for the current route
/// 3. the time-of-day prompt
///
/// The resolver keeps no state between calls.
pub struct SuggestionResolver<P> {
    provider: P,
}

impl<P: UpdatesProvider> SuggestionResolver<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Resolve against the local wall clock.
    pub async fn resolve(&self, path: Option<&str>, child_id: Option<u64>) -> Option<ActiveSuggestion> {
        self.resolve_at(path, child_id, Local::now().time()).await
    }

    /// Resolve at an explicit time of day. Never fails: provider errors are
    /// logged and treated as "no updates".
    pub async fn resolve_at(
        &self,
        path: Option<&str>,
        child_id: Option<u64>,
        now: NaiveTime,
    ) -> Option<ActiveSuggestion> {
        if let Some(child_id) = child_id {
            if let Some(suggestion) = self.important_update_suggestion(child_id).await {
                debug!(child_id, text = %suggestion.text, "resolved important update");
                return Some(suggestion);
            }
        }

        if let Some(candidate) = ReminderCatalog::contextual_reminders_for(path, now)
            .into_iter()
            .next()
        {
            debug!(path = ?path, text = %candidate.message, "resolved contextual reminder");
            return Some(ActiveSuggestion::from_candidate(candidate, SuggestionType::Context));
        }

        let suggestion = ReminderCatalog::time_of_day_suggestion(now)
            .map(|candidate| ActiveSuggestion::from_candidate(candidate, SuggestionType::Time));
        if suggestion.is_none() {
            debug!(path = ?path, "no suggestion");
        }
        suggestion
    }

    async fn important_update_suggestion(&self, child_id: u64) -> Option<ActiveSuggestion> {
        match self.provider.important_updates(child_id).await {
            Ok(updates) => updates.first().map(ActiveSuggestion::from_update),
            Err(err) => {
                warn!(child_id, error = %err, "failed to fetch important updates");
                None
            }
        }
    }
}
