//! Static reminder tables.

use super::candidate::ContextTag;

/// A reminder tied to a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledEntry {
    /// "HH:MM", 24-hour clock
    pub time_of_day: &'static str,
    pub context: ContextTag,
    pub message: &'static str,
    pub icon: &'static str,
}

/// A reminder tied to a portal section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextualEntry {
    pub message: &'static str,
    pub icon: &'static str,
}

pub const SCHEDULED_ENTRIES: [ScheduledEntry; 3] = [
    ScheduledEntry {
        time_of_day: "08:00",
        context: ContextTag::Attendance,
        message: "Today's schedule and attendance check",
        icon: "📅",
    },
    ScheduledEntry {
        time_of_day: "13:00",
        context: ContextTag::Academics,
        message: "Review today's homework and assignments",
        icon: "📚",
    },
    ScheduledEntry {
        time_of_day: "19:00",
        context: ContextTag::Messages,
        message: "Check messages from teachers",
        icon: "💬",
    },
];

const ACADEMICS_ENTRIES: [ContextualEntry; 2] = [
    ContextualEntry {
        message: "Review recent grades",
        icon: "📊",
    },
    ContextualEntry {
        message: "Check upcoming assignments",
        icon: "📝",
    },
];

const ATTENDANCE_ENTRIES: [ContextualEntry; 2] = [
    ContextualEntry {
        message: "Show this week's attendance",
        icon: "📅",
    },
    ContextualEntry {
        message: "Check upcoming holidays",
        icon: "🗓",
    },
];

const MESSAGES_ENTRIES: [ContextualEntry; 2] = [
    ContextualEntry {
        message: "Unread messages from teachers",
        icon: "📨",
    },
    ContextualEntry {
        message: "Schedule a parent-teacher meeting",
        icon: "🤝",
    },
];

/// Contextual reminders for a section, in display order.
pub fn contextual_entries(tag: ContextTag) -> &'static [ContextualEntry] {
    match tag {
        ContextTag::Academics => &ACADEMICS_ENTRIES,
        ContextTag::Attendance => &ATTENDANCE_ENTRIES,
        ContextTag::Messages => &MESSAGES_ENTRIES,
    }
}

/// Coarse part of the school day used for time-based prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPart {
    Morning,
    Afternoon,
    Evening,
}

impl DayPart {
    /// First hour that gets a time-based prompt.
    pub const FIRST_HOUR: u32 = 8;
    /// Last hour that gets a time-based prompt (inclusive).
    pub const LAST_HOUR: u32 = 20;

    /// Bucket an hour, or `None` outside school/homework hours.
    pub fn from_hour(hour: u32) -> Option<Self> {
        if !(Self::FIRST_HOUR..=Self::LAST_HOUR).contains(&hour) {
            return None;
        }
        Some(match hour {
            h if h < 12 => DayPart::Morning,
            h if h < 17 => DayPart::Afternoon,
            _ => DayPart::Evening,
        })
    }

    pub fn message(&self) -> &'static str {
        match self {
            DayPart::Morning => "Good morning! Would you like to see today's schedule?",
            DayPart::Afternoon => "Time to check on homework progress?",
            DayPart::Evening => "Would you like to review today's progress?",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DayPart::Morning => "☀️",
            DayPart::Afternoon => "📚",
            DayPart::Evening => "🌙",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tag_has_two_entries() {
        for tag in ContextTag::ALL {
            assert_eq!(contextual_entries(tag).len(), 2, "tag {tag}");
        }
    }

    #[test]
    fn scheduled_entries_cover_morning_afternoon_evening() {
        let times: Vec<_> = SCHEDULED_ENTRIES.iter().map(|e| e.time_of_day).collect();
        assert_eq!(times, vec!["08:00", "13:00", "19:00"]);
    }

    #[test]
    fn day_part_boundaries() {
        assert_eq!(DayPart::from_hour(7), None);
        assert_eq!(DayPart::from_hour(8), Some(DayPart::Morning));
        assert_eq!(DayPart::from_hour(11), Some(DayPart::Morning));
        assert_eq!(DayPart::from_hour(12), Some(DayPart::Afternoon));
        assert_eq!(DayPart::from_hour(16), Some(DayPart::Afternoon));
        assert_eq!(DayPart::from_hour(17), Some(DayPart::Evening));
        assert_eq!(DayPart::from_hour(20), Some(DayPart::Evening));
        assert_eq!(DayPart::from_hour(21), None);
    }
}
