//! Heterogeneity estimator selection.

use nmagrade_core::config::RecommendationConfig;

use super::types::{HeterogeneityMethod, HeterogeneityRecommendation, HeterogeneityRule, Recommendation};
use crate::network::Characteristics;

/// DerSimonian–Laird for few studies, REML otherwise. When REML is chosen,
/// large treatment sets add a Bayesian hierarchical alternative.
pub fn recommend_heterogeneity(
    ch: &Characteristics,
    config: &RecommendationConfig,
) -> HeterogeneityRecommendation {
    let n_studies = ch.basic_stats.n_studies;
    let few = config.effective_few_studies_threshold() as usize;
    let many = config.effective_many_studies_threshold() as usize;

    let (choice, mut alternatives, reason, confidence, rule_applied) = if n_studies < few {
        (
            HeterogeneityMethod::DerSimonianLaird,
            vec![HeterogeneityMethod::Reml],
            format!(
                "Only {n_studies} studies: DerSimonian-Laird is stable with few studies, \
                 REML may fail to converge"
            ),
            0.9,
            HeterogeneityRule::FewStudies,
        )
    } else if n_studies < many {
        (
            HeterogeneityMethod::Reml,
            vec![HeterogeneityMethod::DerSimonianLaird],
            format!("{n_studies} studies: REML gives less biased between-study variance"),
            0.95,
            HeterogeneityRule::ModerateStudies,
        )
    } else {
        (
            HeterogeneityMethod::Reml,
            Vec::new(),
            format!("{n_studies} studies: REML is the preferred estimator for well-populated networks"),
            0.95,
            HeterogeneityRule::ManyStudies,
        )
    };

    if choice == HeterogeneityMethod::Reml
        && ch.basic_stats.n_treatments >= config.effective_bayesian_treatment_threshold() as usize
    {
        alternatives.push(HeterogeneityMethod::BayesianHierarchical);
    }

    Recommendation {
        choice,
        alternatives,
        reason,
        confidence,
        rule_applied,
    }
}
