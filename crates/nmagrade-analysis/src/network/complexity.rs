//! Composite network complexity score.

use super::types::{BasicStats, NetworkStats, TypeSpecificStats};

pub const MAX_SCORE: f64 = 100.0;

/// Score in [0, 100] combining size, treatment count, density, connectivity
/// and outcome-type data quality.
///
/// `min(S/20·25, 25) + min(T/10·25, 25) + density·20 − 10·[disconnected] + type_term`
pub fn complexity_score(
    basic: &BasicStats,
    network: &NetworkStats,
    type_stats: &TypeSpecificStats,
) -> f64 {
    let study_term = (basic.n_studies as f64 / 20.0 * 25.0).min(25.0);
    let treatment_term = (basic.n_treatments as f64 / 10.0 * 25.0).min(25.0);
    let density_term = network.density * 20.0;
    let disconnected_penalty = if network.is_connected { 0.0 } else { 10.0 };

    let score = study_term + treatment_term + density_term - disconnected_penalty
        + type_term(type_stats);
    score.clamp(0.0, MAX_SCORE)
}

/// Up to 30 points for data quality; missing statistics contribute 0.
fn type_term(type_stats: &TypeSpecificStats) -> f64 {
    match type_stats {
        TypeSpecificStats::Binary(b) => {
            let zero_events = b
                .zero_event_proportion
                .map_or(0.0, |p| 15.0 * (1.0 - p));
            let balance = b
                .mean_event_rate
                .map_or(0.0, |r| 15.0 * (1.0 - 2.0 * (r - 0.5).abs()).max(0.0));
            zero_events + balance
        }
        TypeSpecificStats::Continuous(c) => {
            let zero_sd = c.zero_sd_proportion.map_or(0.0, |p| 15.0 * (1.0 - p));
            let spread = c.mean_cv.map_or(0.0, |cv| 15.0 * (1.0 - cv).max(0.0));
            zero_sd + spread
        }
    }
}
