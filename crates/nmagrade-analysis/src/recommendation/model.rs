//! Fixed- versus random-effects model selection.

use nmagrade_core::config::RecommendationConfig;

use super::types::{ModelRecommendation, ModelRule, ModelType, Recommendation};
use crate::network::Characteristics;

pub fn recommend_model_type(
    ch: &Characteristics,
    config: &RecommendationConfig,
) -> ModelRecommendation {
    let n_studies = ch.basic_stats.n_studies;
    let score = ch.complexity_score;

    if n_studies < config.effective_fixed_effect_max_studies() as usize {
        Recommendation {
            choice: ModelType::FixedEffect,
            alternatives: Vec::new(),
            reason: format!(
                "Only {n_studies} studies: between-study variance cannot be estimated reliably"
            ),
            confidence: 0.9,
            rule_applied: ModelRule::VeryFewStudies,
        }
    } else if n_studies < config.effective_few_studies_threshold() as usize {
        Recommendation {
            choice: ModelType::Both,
            alternatives: vec![ModelType::FixedEffect, ModelType::RandomEffects],
            reason: format!(
                "{n_studies} studies: fit fixed and random effects and compare as a sensitivity analysis"
            ),
            confidence: 0.8,
            rule_applied: ModelRule::FewStudies,
        }
    } else if score < config.effective_simple_complexity() {
        Recommendation {
            choice: ModelType::FixedEffect,
            alternatives: vec![ModelType::RandomEffects],
            reason: format!("Simple network (complexity {score:.1}): fixed effect is adequate"),
            confidence: 0.8,
            rule_applied: ModelRule::SimpleNetwork,
        }
    } else {
        Recommendation {
            choice: ModelType::RandomEffects,
            alternatives: vec![ModelType::FixedEffect],
            reason: format!(
                "Network complexity {score:.1}: random effects accounts for between-study heterogeneity"
            ),
            confidence: 0.9,
            rule_applied: ModelRule::ComplexNetwork,
        }
    }
}
