//! Pure projection from monitor state to display state.

use dw_core::events::{EventKind, EventLog};
use dw_core::models::{Category, MonitorSnapshot, SeverityLabel, SeverityValue};
use dw_core::severity::label_from_value;

/// One category's display row: bar percentage and coarse label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    pub category: Category,
    pub percent: SeverityValue,
    pub label: SeverityLabel,
}

/// One event log row, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub seq: u64,
    pub event_name: &'static str,
    pub code: String,
    pub kind: EventKind,
    /// Local wall-clock time, `HH:MM:SS`.
    pub time: String,
    pub severity: SeverityLabel,
}

/// The full display state, recomputed from scratch every tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    /// Category rows in display order.
    pub rows: Vec<CategoryRow>,
    /// Event rows, newest first.
    pub events: Vec<EventRow>,
}

impl UiState {
    /// Find a category's row.
    pub fn row(&self, category: Category) -> &CategoryRow {
        self.rows
            .iter()
            .find(|r| r.category == category)
            .unwrap_or_else(|| unreachable!("all categories are projected"))
    }
}

/// Compute the next display state. Pure: no rendering, no mutation.
pub fn project(snapshot: &MonitorSnapshot, events: &EventLog) -> UiState {
    let rows = snapshot
        .iter()
        .map(|(category, value)| CategoryRow {
            category,
            percent: value,
            label: label_from_value(value),
        })
        .collect();

    let events = events
        .entries()
        .map(|entry| EventRow {
            seq: entry.seq,
            event_name: entry.event_name,
            code: entry.code.clone(),
            kind: entry.kind,
            time: entry.timestamp.format("%H:%M:%S").to_string(),
            severity: entry.severity,
        })
        .collect();

    UiState { rows, events }
}
