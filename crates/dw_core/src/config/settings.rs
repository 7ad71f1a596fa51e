//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Every field has a serde default so partial files and first runs work.

use serde::{Deserialize, Serialize};

use crate::camera::DEFAULT_JPEG_QUALITY;
use crate::fallback::FallbackTunables;
use crate::logging::LogLevel;
use crate::severity::NormalizerOptions;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Frame capture settings.
    #[serde(default)]
    pub capture: CaptureSettings,

    /// Inference backend settings.
    #[serde(default)]
    pub backend: BackendSettings,

    /// Severity normalizer behavior switches.
    #[serde(default)]
    pub normalizer: NormalizerOptions,

    /// Fallback synthesizer tunables.
    #[serde(default)]
    pub fallback: FallbackTunables,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Camera and tick-loop configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureSettings {
    /// Milliseconds between capture ticks.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// JPEG quality (0-100) for submitted frames.
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,

    /// Requested capture width.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Requested capture height.
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_interval_ms() -> u64 {
    500
}

fn default_jpeg_quality() -> u8 {
    DEFAULT_JPEG_QUALITY
}

fn default_width() -> u32 {
    640
}

fn default_height() -> u32 {
    480
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            jpeg_quality: default_jpeg_quality(),
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Inference backend endpoint configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendSettings {
    /// Frame submission endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-request timeout in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_endpoint() -> String {
    "http://localhost:3000/process-frame".to_string()
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Minimum level for the global subscriber.
    #[serde(default)]
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_backend_contract() {
        let settings = Settings::default();
        assert_eq!(settings.capture.interval_ms, 500);
        assert_eq!(settings.capture.jpeg_quality, 70);
        assert_eq!(
            settings.backend.endpoint,
            "http://localhost:3000/process-frame"
        );
        assert!(settings.normalizer.assume_no_drinking);
        assert!(!settings.normalizer.parse_numeric_strings);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [capture]
            interval_ms = 250

            [normalizer]
            parse_numeric_strings = true
            "#,
        )
        .unwrap();

        assert_eq!(settings.capture.interval_ms, 250);
        assert_eq!(settings.capture.width, 640);
        assert!(settings.normalizer.parse_numeric_strings);
        assert_eq!(settings.backend.request_timeout_ms, 10_000);
    }

    #[test]
    fn settings_roundtrip_through_toml() {
        let settings = Settings::default();
        let text = toml::to_string(&settings).unwrap();
        let back: Settings = toml::from_str(&text).unwrap();
        assert_eq!(settings, back);
    }
}
