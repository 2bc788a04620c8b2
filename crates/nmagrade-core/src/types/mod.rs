//! Shared data types for nmagrade.

pub mod collections;
pub mod outcome;

pub use collections::{ArmVec, BTreeMap, BTreeSet, FxHashMap};
pub use outcome::OutcomeType;
