use serde::{Deserialize, Serialize};

use crate::catalog::{Priority, ReminderCandidate};
use crate::updates::EducationUpdate;

/// Which tier produced a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionType {
    /// From a pending important update
    Smart,
    /// From the current route
    Context,
    /// From the time of day
    Time,
}

impl SuggestionType {
    pub fn name(&self) -> &'static str {
        match self {
            SuggestionType::Smart => "smart",
            SuggestionType::Context => "context",
            SuggestionType::Time => "time",
        }
    }
}

/// The single suggestion the assistant should surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveSuggestion {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: SuggestionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Priority of the originating update; only set for `Smart`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl ActiveSuggestion {
    pub(crate) fn from_update(update: &EducationUpdate) -> Self {
        Self {
            text: update.headline(),
            kind: SuggestionType::Smart,
            icon: Some(update.kind.icon().to_string()),
            priority: Some(update.priority),
        }
    }

    pub(crate) fn from_candidate(candidate: ReminderCandidate, kind: SuggestionType) -> Self {
        Self {
            text: candidate.message,
            kind,
            icon: None,
            priority: None,
        }
    }

    /// Host policy: open the assistant panel instead of showing a bubble.
    pub fn should_auto_open(&self) -> bool {
        self.kind == SuggestionType::Smart && self.priority == Some(Priority::High)
    }
}
