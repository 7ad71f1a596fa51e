//! Severity normalization.
//!
//! The inference backend returns heterogeneous values per category: numeric
//! fractions in [0,1] or free-form strings. This module maps both onto a
//! uniform integer scale and derives the coarse display label.

use serde::{Deserialize, Serialize};

use crate::models::{Category, MonitorSnapshot, RiskPayload, RiskValue, SeverityLabel, SeverityValue};

/// Behavior switches for the normalizer.
///
/// The two observed backend deployments diverge on two points; both are
/// surfaced here as named options rather than silently merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerOptions {
    /// Parse strings that match no keyword as integers ("42" -> 42).
    #[serde(default)]
    pub parse_numeric_strings: bool,

    /// Treat a missing `drinking` field as the string "No" instead of zero.
    #[serde(default = "default_true")]
    pub assume_no_drinking: bool,
}

fn default_true() -> bool {
    true
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self {
            parse_numeric_strings: false,
            assume_no_drinking: true,
        }
    }
}

/// Normalize one raw model output value to the 0-100 scale.
///
/// Numeric input is scaled by 100 and rounded, without clamping: values
/// outside [0,1] produce out-of-range scores. String input is matched
/// case-insensitively by substring, in this exact priority order:
/// "no" -> 4, "low" -> 30, "medium" -> 55, "high"/"yes" -> 85.
/// Everything else yields 0.
pub fn normalize(value: &RiskValue, options: &NormalizerOptions) -> SeverityValue {
    match value {
        RiskValue::Number(n) => (n * 100.0).round() as SeverityValue,
        RiskValue::Text(s) => {
            let lower = s.to_lowercase();
            if lower.contains("no") {
                4
            } else if lower.contains("low") {
                30
            } else if lower.contains("medium") {
                55
            } else if lower.contains("high") || lower.contains("yes") {
                85
            } else if options.parse_numeric_strings {
                lower.trim().parse::<SeverityValue>().unwrap_or(0)
            } else {
                0
            }
        }
    }
}

/// Derive the coarse label from a normalized score.
///
/// Exact step function: 0 -> None, <25 -> No, <50 -> Low, <75 -> Medium,
/// else High. Pure and total.
pub fn label_from_value(value: SeverityValue) -> SeverityLabel {
    if value == 0 {
        SeverityLabel::None
    } else if value < 25 {
        SeverityLabel::No
    } else if value < 50 {
        SeverityLabel::Low
    } else if value < 75 {
        SeverityLabel::Medium
    } else {
        SeverityLabel::High
    }
}

/// Normalize a full payload into a fresh snapshot.
///
/// Missing categories score 0, except `drinking` when
/// `assume_no_drinking` is set: an absent drinking field then scores as
/// the string "No" would.
pub fn snapshot_from_payload(payload: &RiskPayload, options: &NormalizerOptions) -> MonitorSnapshot {
    let mut snapshot = MonitorSnapshot::default();
    for category in Category::ALL {
        let value = match payload.get(category) {
            Some(raw) => normalize(raw, options),
            None if category == Category::Drinking && options.assume_no_drinking => {
                normalize(&RiskValue::Text("No".into()), options)
            }
            None => 0,
        };
        snapshot.set(category, value);
    }
    snapshot
}
