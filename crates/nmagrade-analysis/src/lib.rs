//! nmagrade-analysis: evidence network analysis and grading engine.
//!
//! Four components, each independently invokable:
//! - **Validation**: structural data-quality gate over per-arm study records
//! - **Network**: treatment graph topology, outcome statistics, complexity score
//! - **Recommendation**: rule-based methodology recommendations with confidence
//! - **Grade**: seven-stage certainty-of-evidence cascade over comparison rows
//!
//! `pipeline` chains the first three in dependency order.

pub mod grade;
pub mod network;
pub mod pipeline;
pub mod recommendation;
pub mod records;
pub mod validation;

pub use records::{RiskOfBias, StudyArmRecord};
