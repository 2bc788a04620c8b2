//! Core types for network characterization.

use nmagrade_core::types::OutcomeType;
use serde::{Deserialize, Serialize};

/// Study- and participant-level counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicStats {
    pub n_studies: usize,
    pub n_treatments: usize,
    pub total_arms: usize,
    pub total_participants: i64,
    /// Mean of per-study participant totals.
    pub mean_study_size: f64,
    /// Studies with three or more distinct treatments.
    pub multi_arm_studies: usize,
}

/// A treatment pair observed in at least one study. `treatment_a < treatment_b`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservedComparison {
    pub treatment_a: String,
    pub treatment_b: String,
    /// Number of studies in which the pair co-occurs.
    pub study_count: usize,
}

/// Graph-level metrics of the treatment network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkStats {
    pub density: f64,
    pub is_connected: bool,
    pub actual_comparisons: usize,
    pub possible_comparisons: usize,
    pub diameter: u32,
    pub n_components: usize,
    /// Component membership, each sorted by name; components ordered by
    /// their first member.
    pub components: Vec<Vec<String>>,
    pub observed_comparisons: Vec<ObservedComparison>,
}

/// Inclusive range of a statistic across arms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

/// Statistics specific to binary outcomes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BinaryStats {
    /// Studies with at least one zero-event arm.
    pub zero_event_studies: usize,
    pub zero_event_proportion: Option<f64>,
    pub mean_event_rate: Option<f64>,
    pub event_rate_range: Option<ValueRange>,
    pub total_events: i64,
    pub total_participants: i64,
}

/// Statistics specific to continuous outcomes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContinuousStats {
    pub zero_sd_arms: usize,
    /// Share of arms reporting an SD whose SD is zero.
    pub zero_sd_proportion: Option<f64>,
    pub mean_range: Option<ValueRange>,
    pub sd_range: Option<ValueRange>,
    /// Coefficient of variation `sd / |mean|`; arms with zero mean are skipped.
    pub cv_range: Option<ValueRange>,
    pub mean_cv: Option<f64>,
    /// Sample-size-weighted mean of arm means.
    pub pooled_mean: Option<f64>,
    /// `sqrt(Σ(n_i − 1)·sd_i² / (ΣN − k))`.
    pub pooled_sd: Option<f64>,
}

/// Outcome-type-specific statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TypeSpecificStats {
    Binary(BinaryStats),
    Continuous(ContinuousStats),
}

impl TypeSpecificStats {
    pub fn outcome_type(&self) -> OutcomeType {
        match self {
            Self::Binary(_) => OutcomeType::Binary,
            Self::Continuous(_) => OutcomeType::Continuous,
        }
    }

    pub fn as_binary(&self) -> Option<&BinaryStats> {
        match self {
            Self::Binary(stats) => Some(stats),
            Self::Continuous(_) => None,
        }
    }

    pub fn as_continuous(&self) -> Option<&ContinuousStats> {
        match self {
            Self::Continuous(stats) => Some(stats),
            Self::Binary(_) => None,
        }
    }
}

/// Immutable characterization of a record set, consumed by the
/// recommendation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Characteristics {
    pub outcome_type: OutcomeType,
    pub basic_stats: BasicStats,
    pub network_stats: NetworkStats,
    pub type_specific_stats: TypeSpecificStats,
    /// Composite score clamped to [0, 100].
    pub complexity_score: f64,
}
