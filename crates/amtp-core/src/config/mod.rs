//! Configuration system for AMTP.
//! TOML-based, 3-layer resolution: env > project file > defaults.

pub mod amtp_config;
pub mod detection_config;
pub mod observability_config;

pub use amtp_config::AmtpConfig;
pub use detection_config::DetectionConfig;
pub use observability_config::ObservabilityConfig;
