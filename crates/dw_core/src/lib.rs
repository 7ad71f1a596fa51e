//! DriveWatch Core - Monitoring logic for the DriveWatch client
//!
//! This crate contains all domain logic with zero UI or network dependencies.
//! It can be used by the monitoring client binary or embedded in other hosts.

pub mod camera;
pub mod config;
pub mod events;
pub mod fallback;
pub mod logging;
pub mod models;
pub mod severity;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
