//! Special considerations and complexity classification.

use nmagrade_core::config::RecommendationConfig;

use super::types::{ComplexityLevel, ConsiderationKind, SpecialConsideration};
use crate::network::{Characteristics, TypeSpecificStats};

/// Classify a complexity score against the configured cut-offs.
pub fn complexity_level(score: f64, config: &RecommendationConfig) -> ComplexityLevel {
    if score < config.effective_simple_complexity() {
        ComplexityLevel::Simple
    } else if score < config.effective_complex_complexity() {
        ComplexityLevel::Moderate
    } else {
        ComplexityLevel::Complex
    }
}

/// Evaluate the fixed rule set; output order follows [`ConsiderationKind`].
pub fn special_considerations(
    ch: &Characteristics,
    config: &RecommendationConfig,
) -> Vec<SpecialConsideration> {
    let mut out = Vec::new();
    let mut push = |kind, message: String| out.push(SpecialConsideration { kind, message });

    let net = &ch.network_stats;
    let basic = &ch.basic_stats;

    if !net.is_connected {
        push(
            ConsiderationKind::DisconnectedNetwork,
            format!(
                "Network has {} components; treatments in different components cannot be compared",
                net.n_components
            ),
        );
    }

    let sparse = config.effective_sparse_density_threshold();
    if net.density < sparse {
        push(
            ConsiderationKind::SparseNetwork,
            format!(
                "Sparse network (density {:.2} < {sparse:.2}); estimates rely heavily on indirect evidence",
                net.density
            ),
        );
    }

    match &ch.type_specific_stats {
        TypeSpecificStats::Binary(b) => {
            if let Some(p) = b.zero_event_proportion {
                if p > config.effective_zero_event_threshold() {
                    push(
                        ConsiderationKind::FrequentZeroEvents,
                        format!(
                            "{} studies ({:.0}%) contain zero-event arms",
                            b.zero_event_studies,
                            p * 100.0
                        ),
                    );
                }
            }
            if let Some(rate) = b.mean_event_rate {
                let (lower, upper) = config.effective_event_rate_band();
                if rate < lower || rate > upper {
                    push(
                        ConsiderationKind::ExtremeEventRate,
                        format!("Mean event rate {rate:.3} is outside [{lower:.2}, {upper:.2}]"),
                    );
                }
            }
        }
        TypeSpecificStats::Continuous(c) => {
            if c.zero_sd_arms > 0 {
                push(
                    ConsiderationKind::ZeroSdArms,
                    format!("{} arms report a standard deviation of zero", c.zero_sd_arms),
                );
            }
        }
    }

    if basic.n_studies < config.effective_few_studies_threshold() as usize {
        push(
            ConsiderationKind::FewStudies,
            format!(
                "Only {} studies; heterogeneity estimates are imprecise",
                basic.n_studies
            ),
        );
    }

    if basic.n_treatments > config.effective_large_network_treatments() as usize {
        push(
            ConsiderationKind::LargeNetwork,
            format!(
                "{} treatments; consider grouping or ranking uncertainty",
                basic.n_treatments
            ),
        );
    }

    out.sort_by_key(|c| c.kind);
    out
}
