use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_FILTER;

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive string, e.g. `amtp=debug,amtp_codec=trace`.
    pub log_filter: String,
    /// Emit JSON lines instead of human-readable text.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            json_logs: false,
        }
    }
}
