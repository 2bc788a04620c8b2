//! Effect measure selection.

use nmagrade_core::config::RecommendationConfig;
use nmagrade_core::types::OutcomeType;

use super::types::{EffectMeasure, EffectMeasureRecommendation, EffectMeasureRule, Recommendation};
use crate::network::Characteristics;

/// Mean difference for continuous outcomes. For binary outcomes the mean
/// event rate decides between risk ratio and odds ratio.
pub fn recommend_effect_measure(
    ch: &Characteristics,
    config: &RecommendationConfig,
) -> EffectMeasureRecommendation {
    if ch.outcome_type == OutcomeType::Continuous {
        return Recommendation {
            choice: EffectMeasure::MeanDifference,
            alternatives: vec![EffectMeasure::StandardizedMeanDifference],
            reason: "Continuous outcome: mean difference on the original scale; use SMD if \
                     studies measure the outcome on different scales"
                .to_string(),
            confidence: 0.95,
            rule_applied: EffectMeasureRule::ContinuousOutcome,
        };
    }

    let rate = ch
        .type_specific_stats
        .as_binary()
        .and_then(|b| b.mean_event_rate);
    let (lower, upper) = config.effective_event_rate_band();

    match rate {
        None => Recommendation {
            choice: EffectMeasure::OddsRatio,
            alternatives: vec![EffectMeasure::RiskRatio],
            reason: "Event rate unavailable: odds ratio is the safest default".to_string(),
            confidence: 0.7,
            rule_applied: EffectMeasureRule::MissingEventRate,
        },
        Some(rate) if (lower..=upper).contains(&rate) => Recommendation {
            choice: EffectMeasure::RiskRatio,
            alternatives: vec![EffectMeasure::OddsRatio, EffectMeasure::RiskDifference],
            reason: format!(
                "Mean event rate {rate:.3} lies within [{lower:.2}, {upper:.2}]: risk ratio is \
                 interpretable and stable"
            ),
            confidence: 0.9,
            rule_applied: EffectMeasureRule::ModerateEventRate,
        },
        Some(rate) => Recommendation {
            choice: EffectMeasure::OddsRatio,
            alternatives: vec![EffectMeasure::RiskRatio],
            reason: format!(
                "Mean event rate {rate:.3} lies outside [{lower:.2}, {upper:.2}]: odds ratio \
                 behaves better for rare or very common events"
            ),
            confidence: 0.85,
            rule_applied: EffectMeasureRule::ExtremeEventRate,
        },
    }
}
