//! Continuity correction for zero-event cells.

use nmagrade_core::config::RecommendationConfig;
use nmagrade_core::types::OutcomeType;

use super::types::{ContinuityCorrection, ContinuityRecommendation, ContinuityRule, Recommendation};
use crate::network::Characteristics;

pub fn recommend_continuity_correction(
    ch: &Characteristics,
    config: &RecommendationConfig,
) -> ContinuityRecommendation {
    if ch.outcome_type == OutcomeType::Continuous {
        return Recommendation {
            choice: ContinuityCorrection::NotApplicable,
            alternatives: Vec::new(),
            reason: "Continuous outcome: no zero cells to correct".to_string(),
            confidence: 1.0,
            rule_applied: ContinuityRule::ContinuousOutcome,
        };
    }

    let proportion = ch
        .type_specific_stats
        .as_binary()
        .and_then(|b| b.zero_event_proportion);
    let threshold = config.effective_zero_event_threshold();
    let value = config.effective_continuity_correction_value();

    match proportion {
        None => Recommendation {
            choice: ContinuityCorrection::None,
            alternatives: vec![ContinuityCorrection::Constant { value }],
            reason: "Zero-event data unavailable: no correction applied".to_string(),
            confidence: 0.5,
            rule_applied: ContinuityRule::MissingZeroEventData,
        },
        Some(p) if p > threshold => Recommendation {
            choice: ContinuityCorrection::Constant { value },
            alternatives: vec![ContinuityCorrection::TreatmentArm],
            reason: format!(
                "{:.0}% of studies have a zero-event arm (above {:.0}%): add {value} to zero cells",
                p * 100.0,
                threshold * 100.0
            ),
            confidence: 0.9,
            rule_applied: ContinuityRule::FrequentZeroEvents,
        },
        Some(p) => Recommendation {
            choice: ContinuityCorrection::None,
            alternatives: vec![ContinuityCorrection::Constant { value }],
            reason: format!(
                "{:.0}% of studies have a zero-event arm: correction not needed",
                p * 100.0
            ),
            confidence: 0.9,
            rule_applied: ContinuityRule::RareZeroEvents,
        },
    }
}
