//! GRADE cascade configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the certainty-of-evidence cascade.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GradeConfig {
    /// Number of top-ranked treatments used as bridges. Default: 2.
    pub bridge_count: Option<usize>,
    /// Certainty level (1 = Very low … 4 = High) assigned to an arm with no
    /// rated bridge connection. Default: 2 (Low).
    pub default_certainty_level: Option<u8>,
}

impl GradeConfig {
    /// Returns the effective bridge count, defaulting to 2.
    pub fn effective_bridge_count(&self) -> usize {
        self.bridge_count.unwrap_or(2)
    }

    /// Returns the effective fallback certainty level, defaulting to 2.
    pub fn effective_default_certainty_level(&self) -> u8 {
        self.default_certainty_level.unwrap_or(2)
    }

    pub(crate) fn merge(&mut self, other: &GradeConfig) {
        if other.bridge_count.is_some() {
            self.bridge_count = other.bridge_count;
        }
        if other.default_certainty_level.is_some() {
            self.default_certainty_level = other.default_certainty_level;
        }
    }
}
