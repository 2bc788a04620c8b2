//! Data quality validation configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the data quality validator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ValidationConfig {
    /// Emit a study-level warning for studies with fewer than two
    /// treatments. Default: true.
    pub warn_single_arm_studies: Option<bool>,
}

impl ValidationConfig {
    /// Returns whether single-arm studies are reported, defaulting to true.
    pub fn effective_warn_single_arm_studies(&self) -> bool {
        self.warn_single_arm_studies.unwrap_or(true)
    }

    pub(crate) fn merge(&mut self, other: &ValidationConfig) {
        if other.warn_single_arm_studies.is_some() {
            self.warn_single_arm_studies = other.warn_single_arm_studies;
        }
    }
}
