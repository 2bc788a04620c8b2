//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::logging_config::{LoggingConfig, DEFAULT_LOG_FILTER};

/// Environment variable holding per-component levels, e.g.
/// `NMAGRADE_LOG=nmagrade_analysis::grade=debug,nmagrade_analysis::network=info`.
pub const LOG_ENV_VAR: &str = "NMAGRADE_LOG";

static INIT: Once = Once::new();

/// The filter the subscriber would install for `config`.
///
/// `NMAGRADE_LOG` wins when it parses. Otherwise the configured directive is
/// used, and an unparsable one falls back to `nmagrade=info`.
pub fn resolve_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(config.effective_filter()))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Initialize tracing with default logging settings.
pub fn init_tracing() {
    init_tracing_with(&LoggingConfig::default());
}

/// Initialize tracing from the `[logging]` config section.
/// Only the first call in a process takes effect.
pub fn init_tracing_with(config: &LoggingConfig) {
    INIT.call_once(|| {
        let location = config.effective_source_location();
        // A host may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(location)
                    .with_line_number(location),
            )
            .with(resolve_filter(config))
            .try_init();
    });
}
