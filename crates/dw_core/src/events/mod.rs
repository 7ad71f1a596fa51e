//! Bounded event log for high-severity detections.
//!
//! The log is a live warning feed, not an audit trail: entries are appended
//! on every qualifying tick (no deduplication), ordered newest-first, and
//! the oldest entries are evicted once the fixed capacity is exceeded.

mod log;
mod types;

pub use log::{EventLog, EVENT_LOG_CAPACITY};
pub use types::{trigger_for, EventKind, EventLogEntry, Trigger};
