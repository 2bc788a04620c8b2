//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Directive used when neither `NMAGRADE_LOG` nor the config names one.
pub const DEFAULT_LOG_FILTER: &str = "nmagrade=info";

/// Configuration for the tracing subscriber.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `nmagrade_analysis::grade=debug`.
    /// `NMAGRADE_LOG` takes precedence. Default: `nmagrade=info`.
    pub filter: Option<String>,
    /// Include source file and line in each event. Default: true.
    pub source_location: Option<bool>,
}

impl LoggingConfig {
    pub fn effective_filter(&self) -> &str {
        self.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    pub fn effective_source_location(&self) -> bool {
        self.source_location.unwrap_or(true)
    }

    pub(crate) fn merge(&mut self, other: &LoggingConfig) {
        if other.filter.is_some() {
            self.filter.clone_from(&other.filter);
        }
        if other.source_location.is_some() {
            self.source_location = other.source_location;
        }
    }
}
