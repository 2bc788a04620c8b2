//! Recommendation result types and closed rule-id enums.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One methodology decision: the chosen option, alternatives worth
/// considering, a human-readable reason, a confidence in [0, 1], and the id
/// of the rule that fired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation<C, R> {
    pub choice: C,
    pub alternatives: Vec<C>,
    pub reason: String,
    pub confidence: f64,
    pub rule_applied: R,
}

/// Between-study variance estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeterogeneityMethod {
    DerSimonianLaird,
    Reml,
    BayesianHierarchical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeterogeneityRule {
    FewStudies,
    ModerateStudies,
    ManyStudies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectMeasure {
    MeanDifference,
    StandardizedMeanDifference,
    OddsRatio,
    RiskRatio,
    RiskDifference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectMeasureRule {
    ContinuousOutcome,
    MissingEventRate,
    ModerateEventRate,
    ExtremeEventRate,
}

/// Zero-cell handling for binary outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum ContinuityCorrection {
    NotApplicable,
    None,
    Constant { value: f64 },
    TreatmentArm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContinuityRule {
    ContinuousOutcome,
    MissingZeroEventData,
    FrequentZeroEvents,
    RareZeroEvents,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    FixedEffect,
    RandomEffects,
    /// Fit both and compare.
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelRule {
    VeryFewStudies,
    FewStudies,
    SimpleNetwork,
    ComplexNetwork,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityLevel {
    Simple,
    Moderate,
    Complex,
}

impl ComplexityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Moderate => "moderate",
            Self::Complex => "complex",
        }
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deterministic warnings raised alongside the recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsiderationKind {
    DisconnectedNetwork,
    SparseNetwork,
    FrequentZeroEvents,
    ZeroSdArms,
    ExtremeEventRate,
    FewStudies,
    LargeNetwork,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialConsideration {
    pub kind: ConsiderationKind,
    pub message: String,
}

pub type HeterogeneityRecommendation = Recommendation<HeterogeneityMethod, HeterogeneityRule>;
pub type EffectMeasureRecommendation = Recommendation<EffectMeasure, EffectMeasureRule>;
pub type ContinuityRecommendation = Recommendation<ContinuityCorrection, ContinuityRule>;
pub type ModelRecommendation = Recommendation<ModelType, ModelRule>;

/// Full set of methodology recommendations for one characterized network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub heterogeneity: HeterogeneityRecommendation,
    pub effect_measure: EffectMeasureRecommendation,
    pub continuity_correction: ContinuityRecommendation,
    pub model_type: ModelRecommendation,
    /// Weighted mean of the four confidences, penalized for disconnected
    /// networks.
    pub overall_confidence: f64,
    pub complexity_level: ComplexityLevel,
    pub special_considerations: Vec<SpecialConsideration>,
}

impl Recommendations {
    pub fn has_consideration(&self, kind: ConsiderationKind) -> bool {
        self.special_considerations.iter().any(|c| c.kind == kind)
    }
}
