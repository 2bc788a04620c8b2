//! Rule-based methodology recommendation engine.
//!
//! Each decision is a small ordered rule list evaluated against
//! [`Characteristics`](crate::network::Characteristics); the first matching
//! rule produces a choice, a reason, a confidence and the rule id. Thresholds
//! come from [`RecommendationConfig`](nmagrade_core::config::RecommendationConfig).

pub mod considerations;
pub mod continuity;
pub mod effect_measure;
pub mod engine;
pub mod heterogeneity;
pub mod model;
pub mod types;

pub use engine::{recommend, recommend_with_config};
pub use types::*;
