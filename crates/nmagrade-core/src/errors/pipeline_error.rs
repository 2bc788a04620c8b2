//! Pipeline errors.

use super::error_code::{self, NmaErrorCode};
use super::{ConfigError, InputError, RecommendationError};

/// Errors that can occur while running the analysis pipeline.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Recommendation error: {0}")]
    Recommendation(#[from] RecommendationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Data set '{label}' failed validation with {errors} error(s)")]
    InvalidData { label: String, errors: usize },
}

impl NmaErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Input(e) => e.error_code(),
            Self::Recommendation(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::InvalidData { .. } => error_code::INVALID_DATA,
        }
    }
}
