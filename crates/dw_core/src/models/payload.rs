//! Wire payload types for model output.
//!
//! The inference backend returns a JSON object with zero or more category
//! fields, each either a numeric fraction in [0,1] or a free-form string
//! ("No", "High", "Yes", ...). Both shapes are accepted; normalization to a
//! uniform scale happens in [`crate::severity`].

use serde::{Deserialize, Serialize};

use super::enums::Category;

/// A single model output value: numeric fraction or descriptive string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RiskValue {
    Number(f64),
    Text(String),
}

impl From<f64> for RiskValue {
    fn from(v: f64) -> Self {
        RiskValue::Number(v)
    }
}

impl From<&str> for RiskValue {
    fn from(v: &str) -> Self {
        RiskValue::Text(v.to_string())
    }
}

/// The structured inference result for one frame.
///
/// Every field is optional: partial payloads are tolerated and missing
/// categories normalize to zero. The backend is free to send `drink`
/// instead of `drinking`; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drowsiness: Option<RiskValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<RiskValue>,

    #[serde(default, alias = "drink", skip_serializing_if = "Option::is_none")]
    pub drinking: Option<RiskValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smoking: Option<RiskValue>,
}

impl RiskPayload {
    /// Get the raw value for a category, if present.
    pub fn get(&self, category: Category) -> Option<&RiskValue> {
        match category {
            Category::Drowsiness => self.drowsiness.as_ref(),
            Category::Phone => self.phone.as_ref(),
            Category::Drinking => self.drinking.as_ref(),
            Category::Smoking => self.smoking.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_mixed_types() {
        let json = r#"{"drowsiness": 0.42, "phone": "No", "smoking": "Yes"}"#;
        let payload: RiskPayload = serde_json::from_str(json).unwrap();

        assert_eq!(payload.drowsiness, Some(RiskValue::Number(0.42)));
        assert_eq!(payload.phone, Some(RiskValue::Text("No".into())));
        assert_eq!(payload.drinking, None);
    }

    #[test]
    fn accepts_drink_alias() {
        let json = r#"{"drink": "Yes"}"#;
        let payload: RiskPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.drinking, Some(RiskValue::Text("Yes".into())));
    }

    #[test]
    fn ignores_unknown_fields() {
        let json = r#"{"phone": "No", "seatbelt": "Yes"}"#;
        let payload: RiskPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.phone, Some(RiskValue::Text("No".into())));
    }
}
