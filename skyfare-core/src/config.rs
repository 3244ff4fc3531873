//! Simulated latencies, loaded from `flow.json`.
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fixed delays standing in for network work, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    pub payment_latency_ms: u32,
    pub class_redirect_ms: u32,
    pub download_latency_ms: u32,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            payment_latency_ms: 2000,
            class_redirect_ms: 500,
            download_latency_ms: 1500,
        }
    }
}

impl FlowConfig {
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let cfg = FlowConfig::from_json(r#"{"payment_latency_ms": 10}"#).unwrap();
        assert_eq!(cfg.payment_latency_ms, 10);
        assert_eq!(cfg.class_redirect_ms, 500);
    }

    #[test]
    fn unknown_latencies_are_ignored() {
        let cfg = FlowConfig::from_json(r#"{"boarding_latency_ms": 900}"#).unwrap();
        assert_eq!(cfg, FlowConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(FlowConfig::from_json("[").is_err());
    }
}
