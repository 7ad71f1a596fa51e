//! Core enums used throughout the client.

use serde::{Deserialize, Serialize};

/// One of the monitored risk dimensions.
///
/// Categories are independent: each carries its own severity value and its
/// own UI projection, and they never interact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Drowsiness,
    Phone,
    Drinking,
    Smoking,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 4] = [
        Category::Drowsiness,
        Category::Phone,
        Category::Drinking,
        Category::Smoking,
    ];

    /// Human-readable event name used in the event log.
    pub fn event_name(&self) -> &'static str {
        match self {
            Category::Drowsiness => "Drowsiness",
            Category::Phone => "Phone usage",
            Category::Drinking => "Drinking",
            Category::Smoking => "Smoking",
        }
    }

    /// Three-letter prefix for synthesized event codes.
    pub fn code_prefix(&self) -> &'static str {
        match self {
            Category::Drowsiness => "DRV",
            Category::Phone => "PHN",
            Category::Drinking => "DRK",
            Category::Smoking => "SMK",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Drowsiness => write!(f, "drowsiness"),
            Category::Phone => write!(f, "phone"),
            Category::Drinking => write!(f, "drinking"),
            Category::Smoking => write!(f, "smoking"),
        }
    }
}

/// Coarse severity label derived from a normalized severity value.
///
/// `None` renders as an em-dash and means "no reading this tick"; the other
/// four bands follow the fixed breakpoints in [`crate::severity::label_from_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SeverityLabel {
    /// No reading (value exactly zero).
    #[default]
    None,
    /// Below the low band (1-24).
    No,
    /// Low severity (25-49).
    Low,
    /// Medium severity (50-74).
    Medium,
    /// High severity (75 and above).
    High,
}

impl std::fmt::Display for SeverityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeverityLabel::None => write!(f, "\u{2014}"),
            SeverityLabel::No => write!(f, "No"),
            SeverityLabel::Low => write!(f, "Low"),
            SeverityLabel::Medium => write!(f, "Medium"),
            SeverityLabel::High => write!(f, "High"),
        }
    }
}
