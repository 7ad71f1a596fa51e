//! Event log entry types and the per-category trigger policy.

use chrono::{DateTime, Local};

use crate::models::{Category, SeverityLabel, SeverityValue};

/// Kind of a logged event. Only warnings exist today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Warning,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::Warning => write!(f, "Warning"),
        }
    }
}

/// One immutable entry in the event log. In-memory display state only,
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct EventLogEntry {
    /// Monotonic sequence number within this log instance.
    pub seq: u64,
    /// Human-readable event name ("Drowsiness", "Phone usage", ...).
    pub event_name: &'static str,
    /// Short display code: category prefix + last four digits of the
    /// timestamp in milliseconds. Collision-tolerant, not a durable key.
    pub code: String,
    pub kind: EventKind,
    pub timestamp: DateTime<Local>,
    pub severity: SeverityLabel,
}

/// Threshold and logged severity for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    /// Minimum score (inclusive) that produces a log entry.
    pub threshold: SeverityValue,
    /// Severity recorded on the entry.
    pub severity: SeverityLabel,
}

/// The trigger policy for a category, if it has one.
///
/// Drinking has no trigger: neither observed backend deployment logs it.
pub fn trigger_for(category: Category) -> Option<Trigger> {
    match category {
        Category::Drowsiness => Some(Trigger {
            threshold: 70,
            severity: SeverityLabel::High,
        }),
        Category::Phone => Some(Trigger {
            threshold: 60,
            severity: SeverityLabel::Medium,
        }),
        Category::Smoking => Some(Trigger {
            threshold: 60,
            severity: SeverityLabel::Medium,
        }),
        Category::Drinking => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drinking_has_no_trigger() {
        assert!(trigger_for(Category::Drinking).is_none());
    }

    #[test]
    fn thresholds_match_policy() {
        assert_eq!(trigger_for(Category::Drowsiness).unwrap().threshold, 70);
        assert_eq!(trigger_for(Category::Phone).unwrap().threshold, 60);
        assert_eq!(trigger_for(Category::Smoking).unwrap().threshold, 60);
        assert_eq!(
            trigger_for(Category::Drowsiness).unwrap().severity,
            SeverityLabel::High
        );
        assert_eq!(
            trigger_for(Category::Phone).unwrap().severity,
            SeverityLabel::Medium
        );
    }
}
