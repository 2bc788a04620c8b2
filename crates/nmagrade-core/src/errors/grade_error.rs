//! Grade table errors.

use super::error_code::{self, NmaErrorCode};

/// Errors raised by edits to a grade table. The cascade itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum GradeError {
    #[error("Row {index} is out of range for a table of {len} row(s)")]
    RowOutOfRange { index: usize, len: usize },
}

impl NmaErrorCode for GradeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RowOutOfRange { .. } => error_code::GRADE_ERROR,
        }
    }
}
