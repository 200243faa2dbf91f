//! Configuration for logging

use serde::{Deserialize, Serialize};

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Name attached to the root span
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Enable the stderr fmt layer
    #[serde(default = "default_true")]
    pub enable_console: bool,

    /// Log level filter (e.g., "warn", "debug", "themeshift_core=trace")
    /// Falls back to `RUST_LOG`, then "warn"
    pub log_level: Option<String>,

    /// Emit ANSI colors on stderr
    #[serde(default = "default_true")]
    pub ansi: bool,
}

fn default_service_name() -> String {
    "themeshift".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            enable_console: true,
            log_level: None,
            ansi: true,
        }
    }
}

impl ObservabilityConfig {
    /// Create a new configuration with service name
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Build from environment variables
    ///
    /// Reads:
    /// - `THEMESHIFT_LOG` or `RUST_LOG` → log_level
    /// - `NO_COLOR` (any value) → ansi = false
    pub fn from_env() -> Self {
        let log_level = std::env::var("THEMESHIFT_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok()
            .filter(|level| !level.trim().is_empty());

        Self {
            log_level,
            ansi: std::env::var_os("NO_COLOR").is_none(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = ObservabilityConfig::new("themeshift").with_log_level("debug");

        assert_eq!(config.service_name, "themeshift");
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert!(config.enable_console);
    }

    #[test]
    fn test_deserialize_defaults() {
        let config: ObservabilityConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.service_name, "themeshift");
        assert!(config.enable_console);
        assert!(config.ansi);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_serialize_round_trip_fields() {
        let config = ObservabilityConfig::new("svc").with_log_level("info");
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["service_name"], "svc");
        assert_eq!(json["log_level"], "info");
    }
}
