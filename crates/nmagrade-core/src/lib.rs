//! nmagrade-core: shared types, errors, configuration and tracing for the
//! evidence-network analysis and grading engine.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;
