//! Error handling for nmagrade.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod grade_error;
pub mod input_error;
pub mod pipeline_error;
pub mod recommendation_error;

pub use config_error::ConfigError;
pub use error_code::NmaErrorCode;
pub use grade_error::GradeError;
pub use input_error::InputError;
pub use pipeline_error::PipelineError;
pub use recommendation_error::RecommendationError;
