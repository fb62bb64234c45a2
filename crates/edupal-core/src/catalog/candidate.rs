//! Reminder candidates and the tags used to match them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

/// Ordinal priority shared by reminders and education updates.
///
/// Variants are declared low to high so the derived `Ord` gives
/// `High > Medium > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Get display name.
    pub fn name(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How often a reminder is meant to be shown.
///
/// Advisory only. Nothing in the engine suppresses a candidate that was
/// already shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Once,
    Daily,
}

impl Frequency {
    /// Get display name.
    pub fn name(&self) -> &'static str {
        match self {
            Frequency::Once => "once",
            Frequency::Daily => "daily",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Portal sections that have their own contextual reminders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextTag {
    Academics,
    Attendance,
    Messages,
}

impl ContextTag {
    /// Every known tag, in table order.
    pub const ALL: [ContextTag; 3] = [
        ContextTag::Academics,
        ContextTag::Attendance,
        ContextTag::Messages,
    ];

    /// Route fragment that identifies this section.
    pub fn key(&self) -> &'static str {
        match self {
            ContextTag::Academics => "academics",
            ContextTag::Attendance => "attendance",
            ContextTag::Messages => "messages",
        }
    }

    /// Parse a tag from its route key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.key() == key)
    }

    /// Whether the tag's key occurs anywhere in `path`.
    pub fn matches(&self, path: &str) -> bool {
        path.contains(self.key())
    }

    /// All tags whose key is a substring of `path`, in table order.
    pub fn detect(path: &str) -> Vec<ContextTag> {
        Self::ALL
            .into_iter()
            .filter(|tag| tag.matches(path))
            .collect()
    }
}

impl fmt::Display for ContextTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A reminder produced by one catalog evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderCandidate {
    /// Fresh per evaluation; not stable across calls
    pub id: String,
    /// Display text
    pub message: String,
    pub priority: Priority,
    /// Used for matching only, never for identity
    pub context_tags: BTreeSet<String>,
    pub frequency: Frequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl ReminderCandidate {
    /// Create a candidate with a freshly generated id and no tags or icon.
    pub fn new(message: impl Into<String>, priority: Priority, frequency: Frequency) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            message: message.into(),
            priority,
            context_tags: BTreeSet::new(),
            frequency,
            icon: None,
        }
    }

    /// Add a matching tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.context_tags.insert(tag.into());
        self
    }

    /// Attach a display icon.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.context_tags.contains(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_ordering_is_total() {
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
        let mut all = vec![Priority::Medium, Priority::High, Priority::Low];
        all.sort();
        assert_eq!(all, vec![Priority::Low, Priority::Medium, Priority::High]);
    }

    #[test]
    fn priority_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        let parsed: Priority = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, Priority::Medium);
    }

    #[test]
    fn detect_finds_tags_in_table_order() {
        assert_eq!(
            ContextTag::detect("/parent/messages/attendance"),
            vec![ContextTag::Attendance, ContextTag::Messages]
        );
        assert!(ContextTag::detect("/parent/dashboard").is_empty());
        assert!(ContextTag::detect("").is_empty());
    }

    #[test]
    fn from_key_round_trips_every_tag() {
        for tag in ContextTag::ALL {
            assert_eq!(ContextTag::from_key(tag.key()), Some(tag));
        }
        assert_eq!(ContextTag::from_key("behavior"), None);
    }

    #[test]
    fn frequency_displays_like_its_wire_name() {
        assert_eq!(Frequency::Daily.to_string(), "daily");
        assert_eq!(Frequency::Once.to_string(), "once");
        assert_eq!(
            serde_json::to_value(Frequency::Daily).unwrap(),
            Frequency::Daily.name()
        );
    }

    #[test]
    fn candidate_ids_are_unique_per_instance() {
        let a = ReminderCandidate::new("Same text", Priority::Low, Frequency::Once);
        let b = ReminderCandidate::new("Same text", Priority::Low, Frequency::Once);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn candidate_builders_set_tags_and_icon() {
        let c = ReminderCandidate::new("Check", Priority::Medium, Frequency::Daily)
            .with_tag("academics")
            .with_tag("time")
            .with_tag("academics")
            .with_icon("📚");
        assert_eq!(c.context_tags.len(), 2);
        assert!(c.has_tag("time"));
        assert_eq!(c.icon.as_deref(), Some("📚"));
    }

    #[test]
    fn candidate_serializes_camel_case_without_missing_icon() {
        let c = ReminderCandidate::new("Check", Priority::Low, Frequency::Once).with_tag("time");
        let json = serde_json::to_value(&c).unwrap();
        assert!(json.get("contextTags").is_some());
        assert!(json.get("icon").is_none());
        assert_eq!(json["frequency"], "once");
    }
}
