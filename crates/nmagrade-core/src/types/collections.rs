//! Re-exports of performance-oriented collection types.

pub use rustc_hash::FxHashMap;
use smallvec::SmallVec;
pub use std::collections::{BTreeMap, BTreeSet};

/// SmallVec sized for the arms of one study (usually 2–4).
pub type ArmVec<T> = SmallVec<[T; 4]>;
