//! Configuration system for nmagrade.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod grade_config;
pub mod logging_config;
pub mod nmagrade_config;
pub mod pipeline_config;
pub mod recommendation_config;
pub mod validation_config;

pub use grade_config::GradeConfig;
pub use logging_config::LoggingConfig;
pub use nmagrade_config::{CliOverrides, NmaConfig};
pub use pipeline_config::PipelineConfig;
pub use recommendation_config::RecommendationConfig;
pub use validation_config::ValidationConfig;
