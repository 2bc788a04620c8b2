//! NmaErrorCode trait for host-facing error codes.

/// Every error enum implements this to expose a stable, machine-readable
/// code alongside its human-readable message.
pub trait NmaErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const UNSUPPORTED_OUTCOME_TYPE: &str = "UNSUPPORTED_OUTCOME_TYPE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const RECOMMENDATION_ERROR: &str = "RECOMMENDATION_ERROR";
pub const INVALID_DATA: &str = "INVALID_DATA";
pub const GRADE_ERROR: &str = "GRADE_ERROR";
