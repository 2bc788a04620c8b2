//! Methodology recommendation thresholds.

use serde::{Deserialize, Serialize};

/// Thresholds for the rule-based methodology recommendations.
/// Every field is optional; `effective_*` accessors supply the defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Below this many studies the heterogeneity estimator falls back to
    /// DerSimonian–Laird. Default: 5.
    pub few_studies_threshold: Option<u32>,
    /// At or above this many studies the network counts as well populated. Default: 10.
    pub many_studies_threshold: Option<u32>,
    /// Treatment count at which a Bayesian alternative is suggested. Default: 8.
    pub bayesian_treatment_threshold: Option<u32>,
    /// Lower bound of the event-rate band favoring a risk ratio. Default: 0.10.
    pub event_rate_lower: Option<f64>,
    /// Upper bound of the event-rate band favoring a risk ratio. Default: 0.90.
    pub event_rate_upper: Option<f64>,
    /// Zero-event study proportion above which a continuity correction is
    /// recommended. Default: 0.20.
    pub zero_event_threshold: Option<f64>,
    /// Continuity correction value added to zero cells. Default: 0.5.
    pub continuity_correction_value: Option<f64>,
    /// Below this many studies only a fixed-effect model is supported. Default: 3.
    pub fixed_effect_max_studies: Option<u32>,
    /// Complexity score below which a network is "simple". Default: 30.
    pub simple_complexity: Option<f64>,
    /// Complexity score at or above which a network is "complex". Default: 70.
    pub complex_complexity: Option<f64>,
    /// Density below which the network is flagged as sparse. Default: 0.3.
    pub sparse_density_threshold: Option<f64>,
    /// Treatment count above which the network is flagged as large. Default: 10.
    pub large_network_treatments: Option<u32>,
    /// Multiplier applied to overall confidence for disconnected networks. Default: 0.7.
    pub disconnected_penalty: Option<f64>,
}

impl RecommendationConfig {
    pub fn effective_few_studies_threshold(&self) -> u32 {
        self.few_studies_threshold.unwrap_or(5)
    }

    pub fn effective_many_studies_threshold(&self) -> u32 {
        self.many_studies_threshold.unwrap_or(10)
    }

    pub fn effective_bayesian_treatment_threshold(&self) -> u32 {
        self.bayesian_treatment_threshold.unwrap_or(8)
    }

    pub fn effective_event_rate_band(&self) -> (f64, f64) {
        (
            self.event_rate_lower.unwrap_or(0.10),
            self.event_rate_upper.unwrap_or(0.90),
        )
    }

    pub fn effective_zero_event_threshold(&self) -> f64 {
        self.zero_event_threshold.unwrap_or(0.20)
    }

    pub fn effective_continuity_correction_value(&self) -> f64 {
        self.continuity_correction_value.unwrap_or(0.5)
    }

    pub fn effective_fixed_effect_max_studies(&self) -> u32 {
        self.fixed_effect_max_studies.unwrap_or(3)
    }

    pub fn effective_simple_complexity(&self) -> f64 {
        self.simple_complexity.unwrap_or(30.0)
    }

    pub fn effective_complex_complexity(&self) -> f64 {
        self.complex_complexity.unwrap_or(70.0)
    }

    pub fn effective_sparse_density_threshold(&self) -> f64 {
        self.sparse_density_threshold.unwrap_or(0.3)
    }

    pub fn effective_large_network_treatments(&self) -> u32 {
        self.large_network_treatments.unwrap_or(10)
    }

    pub fn effective_disconnected_penalty(&self) -> f64 {
        self.disconnected_penalty.unwrap_or(0.7)
    }

    pub(crate) fn merge(&mut self, other: &RecommendationConfig) {
        if other.few_studies_threshold.is_some() {
            self.few_studies_threshold = other.few_studies_threshold;
        }
        if other.many_studies_threshold.is_some() {
            self.many_studies_threshold = other.many_studies_threshold;
        }
        if other.bayesian_treatment_threshold.is_some() {
            self.bayesian_treatment_threshold = other.bayesian_treatment_threshold;
        }
        if other.event_rate_lower.is_some() {
            self.event_rate_lower = other.event_rate_lower;
        }
        if other.event_rate_upper.is_some() {
            self.event_rate_upper = other.event_rate_upper;
        }
        if other.zero_event_threshold.is_some() {
            self.zero_event_threshold = other.zero_event_threshold;
        }
        if other.continuity_correction_value.is_some() {
            self.continuity_correction_value = other.continuity_correction_value;
        }
        if other.fixed_effect_max_studies.is_some() {
            self.fixed_effect_max_studies = other.fixed_effect_max_studies;
        }
        if other.simple_complexity.is_some() {
            self.simple_complexity = other.simple_complexity;
        }
        if other.complex_complexity.is_some() {
            self.complex_complexity = other.complex_complexity;
        }
        if other.sparse_density_threshold.is_some() {
            self.sparse_density_threshold = other.sparse_density_threshold;
        }
        if other.large_network_treatments.is_some() {
            self.large_network_treatments = other.large_network_treatments;
        }
        if other.disconnected_penalty.is_some() {
            self.disconnected_penalty = other.disconnected_penalty;
        }
    }
}
