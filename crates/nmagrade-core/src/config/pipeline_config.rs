//! Analysis pipeline configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the validate → characterize → recommend pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PipelineConfig {
    /// Stop before characterization when validation reports errors.
    /// Default: true.
    pub block_on_invalid: Option<bool>,
}

impl PipelineConfig {
    /// Returns whether invalid data blocks the pipeline, defaulting to true.
    pub fn effective_block_on_invalid(&self) -> bool {
        self.block_on_invalid.unwrap_or(true)
    }

    pub(crate) fn merge(&mut self, other: &PipelineConfig) {
        if other.block_on_invalid.is_some() {
            self.block_on_invalid = other.block_on_invalid;
        }
    }
}
