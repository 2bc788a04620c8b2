//! Network characterization entry point.

use nmagrade_core::types::OutcomeType;
use tracing::debug;

use super::comparisons::{self, group_by_study};
use super::complexity::complexity_score;
use super::graph::TreatmentGraph;
use super::stats;
use super::types::{Characteristics, NetworkStats, TypeSpecificStats};
use crate::records::StudyArmRecord;

/// Characterize a record set for the given outcome type.
///
/// Accepts unvalidated input. Records lacking the numeric fields a statistic
/// needs are skipped for that statistic, duplicate arms collapse into one
/// treatment occurrence per study, and blank study or treatment labels are
/// ignored. Run the validator first when the numbers must be trusted.
pub fn characterize(records: &[StudyArmRecord], outcome_type: OutcomeType) -> Characteristics {
    let studies = group_by_study(records);
    let basic_stats = stats::basic_stats(records, &studies);

    let graph = TreatmentGraph::build(&studies);
    let observed = comparisons::observed_comparisons(&studies);
    let possible = comparisons::possible_comparisons(graph.treatment_count());
    let actual = observed.len();
    let components = graph.components();

    let network_stats = NetworkStats {
        density: comparisons::density(actual, possible),
        is_connected: graph.treatment_count() >= 2 && components.len() == 1,
        actual_comparisons: actual,
        possible_comparisons: possible,
        diameter: graph.diameter(),
        n_components: components.len(),
        components,
        observed_comparisons: observed,
    };

    let type_specific_stats = match outcome_type {
        OutcomeType::Binary => TypeSpecificStats::Binary(stats::binary_stats(records)),
        OutcomeType::Continuous => TypeSpecificStats::Continuous(stats::continuous_stats(records)),
    };

    let complexity_score = complexity_score(&basic_stats, &network_stats, &type_specific_stats);

    debug!(
        outcome = %outcome_type,
        studies = basic_stats.n_studies,
        treatments = basic_stats.n_treatments,
        density = network_stats.density,
        connected = network_stats.is_connected,
        diameter = network_stats.diameter,
        complexity = complexity_score,
        "network characterized"
    );

    Characteristics {
        outcome_type,
        basic_stats,
        network_stats,
        type_specific_stats,
        complexity_score,
    }
}
