//! Input errors raised at the boundary where host data enters the engine.

use super::error_code::{self, NmaErrorCode};

/// Errors for caller-supplied values outside a closed vocabulary.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Unsupported outcome type '{0}': expected 'binary' or 'continuous'")]
    UnsupportedOutcomeType(String),
}

impl NmaErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedOutcomeType(_) => error_code::UNSUPPORTED_OUTCOME_TYPE,
        }
    }
}
