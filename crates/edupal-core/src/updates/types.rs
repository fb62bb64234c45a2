//! Education updates as delivered by the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::Priority;

/// Kind of event behind an update.
///
/// Unknown wire values are kept as [`UpdateType::Other`] so a new backend
/// type never fails the whole response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UpdateType {
    Grade,
    Attendance,
    Behavior,
    Homework,
    Event,
    Other(String),
}

impl UpdateType {
    /// Wire name, lowercase.
    pub fn name(&self) -> &str {
        match self {
            UpdateType::Grade => "grade",
            UpdateType::Attendance => "attendance",
            UpdateType::Behavior => "behavior",
            UpdateType::Homework => "homework",
            UpdateType::Event => "event",
            UpdateType::Other(name) => name,
        }
    }

    /// Display glyph. Anything without its own glyph gets the megaphone.
    pub fn icon(&self) -> &'static str {
        match self {
            UpdateType::Grade => "📊",
            UpdateType::Attendance => "📅",
            UpdateType::Homework => "📚",
            _ => "📣",
        }
    }
}

impl From<String> for UpdateType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "grade" => UpdateType::Grade,
            "attendance" => UpdateType::Attendance,
            "behavior" => UpdateType::Behavior,
            "homework" => UpdateType::Homework,
            "event" => UpdateType::Event,
            _ => UpdateType::Other(value),
        }
    }
}

impl From<UpdateType> for String {
    fn from(value: UpdateType) -> Self {
        match value {
            UpdateType::Other(name) => name,
            known => known.name().to_string(),
        }
    }
}

impl fmt::Display for UpdateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A high-signal event about a child (new grade, attendance flag, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationUpdate {
    #[serde(rename = "type")]
    pub kind: UpdateType,
    pub priority: Priority,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl EducationUpdate {
    pub fn new(kind: UpdateType, priority: Priority, message: impl Into<String>) -> Self {
        Self {
            kind,
            priority,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    /// Message trimmed with whitespace runs collapsed to one space.
    pub fn formatted_message(&self) -> String {
        self.message.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Assistant text for this update.
    pub fn headline(&self) -> String {
        format!("New {} update: {}", self.kind, self.formatted_message())
    }
}
