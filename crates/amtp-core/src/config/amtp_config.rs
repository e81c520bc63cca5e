//! Top-level AMTP configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{DetectionConfig, ObservabilityConfig};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`AMTP_*`)
/// 2. Project config (`amtp.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AmtpConfig {
    pub detection: DetectionConfig,
    pub observability: ObservabilityConfig,
}

impl AmtpConfig {
    /// Load configuration with layered resolution and validate the result.
    ///
    /// A missing `amtp.toml` is not an error; defaults apply.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let project_config_path = root.join(CONFIG_FILE_NAME);
        let mut config = if project_config_path.exists() {
            Self::from_file(&project_config_path)?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing and embedding).
    /// Unknown keys are ignored; missing keys take their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &AmtpConfig) -> Result<(), ConfigError> {
        for (name, value) in config.detection.thresholds() {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("detection.{name}"),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if config.observability.log_filter.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_filter".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `AMTP_DETECTION_ARABIC_THRESHOLD`, `AMTP_LOG_FILTER`, etc.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut AmtpConfig) {
        let detection = &mut config.detection;
        for (key, slot) in [
            ("AMTP_DETECTION_ARABIC_THRESHOLD", &mut detection.arabic_threshold),
            ("AMTP_DETECTION_CYRILLIC_THRESHOLD", &mut detection.cyrillic_threshold),
            ("AMTP_DETECTION_HANGUL_THRESHOLD", &mut detection.hangul_threshold),
            ("AMTP_DETECTION_KANA_THRESHOLD", &mut detection.kana_threshold),
            ("AMTP_DETECTION_CJK_THRESHOLD", &mut detection.cjk_threshold),
            ("AMTP_DETECTION_LATIN_THRESHOLD", &mut detection.latin_threshold),
        ] {
            if let Ok(val) = std::env::var(key) {
                if let Ok(v) = val.parse::<f64>() {
                    *slot = v;
                }
            }
        }
        if let Ok(val) = std::env::var("AMTP_LOG_FILTER") {
            config.observability.log_filter = val;
        }
        if let Ok(val) = std::env::var("AMTP_JSON_LOGS") {
            if let Ok(v) = val.parse::<bool>() {
                config.observability.json_logs = v;
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
