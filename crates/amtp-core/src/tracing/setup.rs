//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::constants::DEFAULT_LOG_FILTER;

static INIT: Once = Once::new();

/// Initialize the AMTP tracing/logging system.
///
/// Reads the `AMTP_LOG` environment variable for per-crate log levels.
/// Format: `AMTP_LOG=amtp_decoder=debug,amtp_codec=warn`
///
/// Falls back to `amtp=info` if `AMTP_LOG` is not set or is invalid.
///
/// Idempotent: only the first call (of this or [`init_tracing_with`]) installs
/// a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("AMTP_LOG")
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}

/// Initialize tracing from an [`ObservabilityConfig`].
///
/// `AMTP_LOG` still wins over `config.log_filter` when set.
pub fn init_tracing_with(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("AMTP_LOG")
            .or_else(|_| EnvFilter::try_new(&config.log_filter))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let registry = tracing_subscriber::registry().with(filter);
        let _ = if config.json_logs {
            registry
                .with(fmt::layer().with_target(true).json())
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_thread_ids(true))
                .try_init()
        };
    });
}
