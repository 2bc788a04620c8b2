//! Aggregation of the individual recommendation rules.

use nmagrade_core::config::RecommendationConfig;
use nmagrade_core::errors::RecommendationError;
use nmagrade_core::types::OutcomeType;
use tracing::debug;

use super::considerations::{complexity_level, special_considerations};
use super::continuity::recommend_continuity_correction;
use super::effect_measure::recommend_effect_measure;
use super::heterogeneity::recommend_heterogeneity;
use super::model::recommend_model_type;
use super::types::Recommendations;
use crate::network::Characteristics;

const HETEROGENEITY_WEIGHT: f64 = 0.3;
const EFFECT_MEASURE_WEIGHT: f64 = 0.3;
const CONTINUITY_WEIGHT: f64 = 0.2;
const MODEL_WEIGHT: f64 = 0.2;

/// Recommend methods using the default thresholds.
pub fn recommend(
    characteristics: &Characteristics,
    outcome_type: OutcomeType,
) -> Result<Recommendations, RecommendationError> {
    recommend_with_config(characteristics, outcome_type, &RecommendationConfig::default())
}

/// Recommend methods using explicit thresholds.
///
/// Fails when `outcome_type` disagrees with the outcome type the
/// characteristics were computed for.
pub fn recommend_with_config(
    characteristics: &Characteristics,
    outcome_type: OutcomeType,
    config: &RecommendationConfig,
) -> Result<Recommendations, RecommendationError> {
    if characteristics.outcome_type != outcome_type {
        return Err(RecommendationError::OutcomeTypeMismatch {
            computed: characteristics.outcome_type,
            requested: outcome_type,
        });
    }

    let heterogeneity = recommend_heterogeneity(characteristics, config);
    let effect_measure = recommend_effect_measure(characteristics, config);
    let continuity_correction = recommend_continuity_correction(characteristics, config);
    let model_type = recommend_model_type(characteristics, config);

    let mut overall_confidence = HETEROGENEITY_WEIGHT * heterogeneity.confidence
        + EFFECT_MEASURE_WEIGHT * effect_measure.confidence
        + CONTINUITY_WEIGHT * continuity_correction.confidence
        + MODEL_WEIGHT * model_type.confidence;
    if !characteristics.network_stats.is_connected {
        overall_confidence *= config.effective_disconnected_penalty();
    }

    let level = complexity_level(characteristics.complexity_score, config);
    let considerations = special_considerations(characteristics, config);

    debug!(
        outcome = %outcome_type,
        heterogeneity = ?heterogeneity.rule_applied,
        effect_measure = ?effect_measure.rule_applied,
        continuity = ?continuity_correction.rule_applied,
        model = ?model_type.rule_applied,
        confidence = overall_confidence,
        complexity_level = %level,
        considerations = considerations.len(),
        "methodology recommended"
    );

    Ok(Recommendations {
        heterogeneity,
        effect_measure,
        continuity_correction,
        model_type,
        overall_confidence: overall_confidence.clamp(0.0, 1.0),
        complexity_level: level,
        special_considerations: considerations,
    })
}
