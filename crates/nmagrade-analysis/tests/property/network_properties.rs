use nmagrade_analysis::network::{characterize, TypeSpecificStats};
use nmagrade_analysis::StudyArmRecord;
use nmagrade_core::types::OutcomeType;
use proptest::prelude::*;

const TREATMENTS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

/// Mostly ordinary counts, occasionally near the top of the `i64` range.
fn count() -> impl Strategy<Value = i64> {
    prop_oneof![
        4 => -5i64..60,
        1 => (i64::MAX / 4)..=i64::MAX,
    ]
}

fn binary_records() -> impl Strategy<Value = Vec<StudyArmRecord>> {
    prop::collection::vec((0usize..8, 0usize..6, count(), count()), 0..30).prop_map(|rows| {
        rows.into_iter()
            .map(|(s, t, event, n)| {
                StudyArmRecord::binary(format!("S{s}"), TREATMENTS[t], event, n)
            })
            .collect()
    })
}

fn continuous_records() -> impl Strategy<Value = Vec<StudyArmRecord>> {
    prop::collection::vec(
        (0usize..8, 0usize..6, count(), -50.0f64..50.0, -1.0f64..10.0),
        0..30,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(s, t, n, mean, sd)| {
                StudyArmRecord::continuous(format!("S{s}"), TREATMENTS[t], n, mean, sd)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn density_is_bounded(records in binary_records()) {
        let ch = characterize(&records, OutcomeType::Binary);
        let net = &ch.network_stats;
        prop_assert!((0.0..=1.0).contains(&net.density));
        prop_assert!(net.actual_comparisons <= net.possible_comparisons);
        let complete = net.possible_comparisons > 0 && net.actual_comparisons == net.possible_comparisons;
        prop_assert_eq!(net.density == 1.0, complete);
    }

    #[test]
    fn complexity_is_clamped_binary(records in binary_records()) {
        let ch = characterize(&records, OutcomeType::Binary);
        prop_assert!((0.0..=100.0).contains(&ch.complexity_score));
    }

    #[test]
    fn complexity_is_clamped_continuous(records in continuous_records()) {
        let ch = characterize(&records, OutcomeType::Continuous);
        prop_assert!((0.0..=100.0).contains(&ch.complexity_score));
    }

    #[test]
    fn components_partition_treatments(records in binary_records()) {
        let ch = characterize(&records, OutcomeType::Binary);
        let net = &ch.network_stats;
        let members: usize = net.components.iter().map(Vec::len).sum();
        prop_assert_eq!(members, ch.basic_stats.n_treatments);
        prop_assert_eq!(net.n_components, net.components.len());
        prop_assert_eq!(
            net.is_connected,
            net.n_components == 1 && ch.basic_stats.n_treatments >= 2
        );
    }

    #[test]
    fn diameter_bounded_by_treatment_count(records in binary_records()) {
        let ch = characterize(&records, OutcomeType::Binary);
        let t = ch.basic_stats.n_treatments as u32;
        prop_assert!(ch.network_stats.diameter <= t.saturating_sub(1));
    }

    #[test]
    fn characterize_is_deterministic(records in continuous_records()) {
        let a = characterize(&records, OutcomeType::Continuous);
        let b = characterize(&records, OutcomeType::Continuous);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn participant_totals_saturate(records in binary_records()) {
        let ch = characterize(&records, OutcomeType::Binary);
        let expected = records
            .iter()
            .filter_map(|r| r.n)
            .fold(0i64, i64::saturating_add);
        prop_assert_eq!(ch.basic_stats.total_participants, expected);
        prop_assert!(ch.complexity_score.is_finite());
    }

    #[test]
    fn pooled_moments_stay_finite(records in continuous_records()) {
        let ch = characterize(&records, OutcomeType::Continuous);
        if let TypeSpecificStats::Continuous(stats) = &ch.type_specific_stats {
            prop_assert!(stats.pooled_mean.map_or(true, f64::is_finite));
            prop_assert!(stats.pooled_sd.map_or(true, f64::is_finite));
        }
    }
}
