//! Treatment network topology and complexity analysis.
//!
//! Builds an arena-indexed treatment graph from per-arm records, then
//! computes density, connected components (DFS), diameter (Floyd–Warshall),
//! outcome-type statistics and a composite 0–100 complexity score.

pub mod analyzer;
pub mod comparisons;
pub mod complexity;
pub mod graph;
pub mod stats;
pub mod types;

pub use analyzer::characterize;
pub use graph::TreatmentGraph;
pub use types::*;
