//! Data quality validation: precondition gate over per-arm study records.
//!
//! Structural defects (empty input, missing columns) short-circuit with a
//! single issue. Record-level defects are itemized; warnings never block.

pub mod checks;
pub mod types;
pub mod validator;

pub use types::*;
pub use validator::{validate, DataValidator};
