//! Synthetic payload generation for backend outages.
//!
//! When the inference backend is unreachable the tick handler substitutes a
//! locally generated result with the same shape, so the UI keeps behaving
//! plausibly. Generation never fails and never surfaces an error.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::{RiskPayload, RiskValue};

/// Draw probabilities for the synthesizer.
///
/// These are plausibility tunables, not correctness-critical values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallbackTunables {
    /// Probability of a "High" drowsiness outcome.
    #[serde(default = "default_drowsiness_high")]
    pub drowsiness_high: f64,
    /// Probability of a "Medium" drowsiness outcome (second draw).
    #[serde(default = "default_drowsiness_medium")]
    pub drowsiness_medium: f64,
    /// Probability of a "High" phone outcome.
    #[serde(default = "default_phone_high")]
    pub phone_high: f64,
    /// Probability of a "Yes" smoking outcome.
    #[serde(default = "default_smoking_yes")]
    pub smoking_yes: f64,
    /// Probability of a "Yes" drinking outcome.
    #[serde(default = "default_drinking_yes")]
    pub drinking_yes: f64,
}

fn default_drowsiness_high() -> f64 {
    0.10
}

fn default_drowsiness_medium() -> f64 {
    0.04
}

fn default_phone_high() -> f64 {
    0.05
}

fn default_smoking_yes() -> f64 {
    0.02
}

fn default_drinking_yes() -> f64 {
    0.01
}

impl Default for FallbackTunables {
    fn default() -> Self {
        Self {
            drowsiness_high: default_drowsiness_high(),
            drowsiness_medium: default_drowsiness_medium(),
            phone_high: default_phone_high(),
            smoking_yes: default_smoking_yes(),
            drinking_yes: default_drinking_yes(),
        }
    }
}

/// Generates stand-in inference results with independent draws per category.
#[derive(Debug)]
pub struct Synthesizer {
    tunables: FallbackTunables,
    rng: StdRng,
}

impl Synthesizer {
    pub fn new(tunables: FallbackTunables) -> Self {
        Self {
            tunables,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic synthesizer for tests.
    pub fn seeded(tunables: FallbackTunables, seed: u64) -> Self {
        Self {
            tunables,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Produce one synthetic payload. All four categories are present.
    pub fn synthesize(&mut self) -> RiskPayload {
        let drowsiness = if self.rng.gen::<f64>() < self.tunables.drowsiness_high {
            "High"
        } else if self.rng.gen::<f64>() < self.tunables.drowsiness_medium {
            "Medium"
        } else {
            "No"
        };
        let phone = if self.rng.gen::<f64>() < self.tunables.phone_high {
            "High"
        } else {
            "No"
        };
        let smoking = if self.rng.gen::<f64>() < self.tunables.smoking_yes {
            "Yes"
        } else {
            "No"
        };
        let drinking = if self.rng.gen::<f64>() < self.tunables.drinking_yes {
            "Yes"
        } else {
            "No"
        };

        RiskPayload {
            drowsiness: Some(RiskValue::Text(drowsiness.to_string())),
            phone: Some(RiskValue::Text(phone.to_string())),
            smoking: Some(RiskValue::Text(smoking.to_string())),
            drinking: Some(RiskValue::Text(drinking.to_string())),
        }
    }
}
