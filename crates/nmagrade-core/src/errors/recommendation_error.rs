//! Methodology recommendation errors.

use super::error_code::{self, NmaErrorCode};
use crate::types::OutcomeType;

/// Errors that can occur while deriving methodology recommendations.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error("Outcome type mismatch: characteristics were computed for {computed}, requested {requested}")]
    OutcomeTypeMismatch {
        computed: OutcomeType,
        requested: OutcomeType,
    },
}

impl NmaErrorCode for RecommendationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::OutcomeTypeMismatch { .. } => error_code::RECOMMENDATION_ERROR,
        }
    }
}
