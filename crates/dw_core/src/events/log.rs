//! The bounded, newest-first event log.

use std::collections::VecDeque;

use chrono::{DateTime, Local};

use crate::models::{Category, MonitorSnapshot};

use super::types::{trigger_for, EventKind, EventLogEntry};

/// Maximum number of retained entries.
pub const EVENT_LOG_CAPACITY: usize = 20;

/// Append-biased, bounded, ordered record of high-severity detections.
///
/// Entries are prepended (newest-first) and the oldest end is trimmed once
/// the capacity is exceeded. The log is in-memory UI state owned by the
/// capture loop's tick handler; nothing else mutates it.
#[derive(Debug, Default)]
pub struct EventLog {
    entries: VecDeque<EventLogEntry>,
    next_seq: u64,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry for a category, evicting from the oldest end if the
    /// log is over capacity.
    pub fn append(&mut self, category: Category, timestamp: DateTime<Local>) {
        let trigger = match trigger_for(category) {
            Some(t) => t,
            None => return,
        };

        self.next_seq += 1;
        let code = format!(
            "{}{:04}",
            category.code_prefix(),
            timestamp.timestamp_millis().rem_euclid(10_000)
        );

        self.entries.push_front(EventLogEntry {
            seq: self.next_seq,
            event_name: category.event_name(),
            code,
            kind: EventKind::Warning,
            timestamp,
            severity: trigger.severity,
        });

        self.entries.truncate(EVENT_LOG_CAPACITY);
    }

    /// Apply the trigger policy to a freshly computed snapshot, appending
    /// one entry per category whose score meets its threshold.
    ///
    /// A category that stays above threshold re-triggers every tick; the log
    /// is a live warning feed, so repetition is intentional.
    pub fn apply_triggers(&mut self, snapshot: &MonitorSnapshot, at: DateTime<Local>) -> usize {
        let mut appended = 0;
        for (category, value) in snapshot.iter() {
            if let Some(trigger) = trigger_for(category) {
                if value >= trigger.threshold {
                    self.append(category, at);
                    appended += 1;
                }
            }
        }
        appended
    }

    /// Entries in display order, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &EventLogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
