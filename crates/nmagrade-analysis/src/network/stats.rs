//! Basic and outcome-type-specific statistics over arm records.
//!
//! Every statistic skips records lacking the fields it needs, so
//! unvalidated input degrades instead of failing. Integer totals saturate
//! at the `i64` bounds; pooled moments accumulate in `f64`.

use nmagrade_core::types::{BTreeMap, BTreeSet};
use statrs::statistics::Statistics;

use super::comparisons::StudyArms;
use super::types::{BasicStats, BinaryStats, ContinuousStats, ValueRange};
use crate::records::StudyArmRecord;

/// Study, treatment and participant counts.
pub fn basic_stats(records: &[StudyArmRecord], studies: &[StudyArms<'_>]) -> BasicStats {
    let treatments: BTreeSet<&str> = studies
        .iter()
        .flat_map(|s| s.treatments.iter().copied())
        .collect();

    let mut per_study: BTreeMap<&str, i64> = studies.iter().map(|s| (s.study, 0)).collect();
    let mut total_participants = 0i64;
    for r in records {
        let Some(n) = r.n else { continue };
        total_participants = total_participants.saturating_add(n);
        if let Some(total) = per_study.get_mut(r.study_key()) {
            *total = total.saturating_add(n);
        }
    }

    let study_sizes: Vec<f64> = per_study.values().map(|&n| n as f64).collect();
    let mean_study_size = if study_sizes.is_empty() {
        0.0
    } else {
        Statistics::mean(&study_sizes)
    };

    BasicStats {
        n_studies: studies.len(),
        n_treatments: treatments.len(),
        total_arms: studies.iter().map(|s| s.treatments.len()).sum(),
        total_participants,
        mean_study_size,
        multi_arm_studies: studies.iter().filter(|s| s.treatments.len() >= 3).count(),
    }
}

/// Zero-event prevalence and event-rate distribution.
pub fn binary_stats(records: &[StudyArmRecord]) -> BinaryStats {
    let mut studies_with_events: BTreeMap<&str, bool> = BTreeMap::new();
    let mut rates = Vec::new();
    let mut total_events = 0i64;
    let mut total_participants = 0i64;

    for r in records {
        if let Some(n) = r.n {
            total_participants = total_participants.saturating_add(n);
        }
        let Some(event) = r.event else { continue };
        total_events = total_events.saturating_add(event);

        let study = r.study_key();
        if !study.is_empty() {
            let zero = studies_with_events.entry(study).or_insert(false);
            *zero |= event == 0;
        }

        if let Some(n) = r.n.filter(|&n| n > 0) {
            rates.push(event as f64 / n as f64);
        }
    }

    let zero_event_studies = studies_with_events.values().filter(|&&z| z).count();
    let zero_event_proportion = if studies_with_events.is_empty() {
        None
    } else {
        Some(zero_event_studies as f64 / studies_with_events.len() as f64)
    };

    BinaryStats {
        zero_event_studies,
        zero_event_proportion,
        mean_event_rate: mean_of(&rates),
        event_rate_range: range_of(&rates),
        total_events,
        total_participants,
    }
}

/// Spread of means and SDs, coefficient of variation, and pooled moments.
pub fn continuous_stats(records: &[StudyArmRecord]) -> ContinuousStats {
    let means: Vec<f64> = records.iter().filter_map(|r| r.mean).collect();
    let sds: Vec<f64> = records.iter().filter_map(|r| r.sd).collect();
    let zero_sd_arms = sds.iter().filter(|&&sd| sd == 0.0).count();

    let cvs: Vec<f64> = records
        .iter()
        .filter_map(|r| match (r.mean, r.sd) {
            (Some(mean), Some(sd)) if mean != 0.0 => Some(sd / mean.abs()),
            _ => None,
        })
        .collect();

    ContinuousStats {
        zero_sd_arms,
        zero_sd_proportion: if sds.is_empty() {
            None
        } else {
            Some(zero_sd_arms as f64 / sds.len() as f64)
        },
        mean_range: range_of(&means),
        sd_range: range_of(&sds),
        cv_range: range_of(&cvs),
        mean_cv: mean_of(&cvs),
        pooled_mean: pooled_mean(records),
        pooled_sd: pooled_sd(records),
    }
}

/// Sample-size-weighted mean of arm means.
fn pooled_mean(records: &[StudyArmRecord]) -> Option<f64> {
    let (weighted, total) = records
        .iter()
        .filter_map(|r| Some((r.n.filter(|&n| n > 0)?, r.mean?)))
        .fold((0.0, 0.0), |(sum, total), (n, mean)| {
            let n = n as f64;
            (sum + n * mean, total + n)
        });
    (total > 0.0).then(|| weighted / total)
}

/// `sqrt(Σ(n_i − 1)·sd_i² / (ΣN − k))` over arms reporting both n and SD.
fn pooled_sd(records: &[StudyArmRecord]) -> Option<f64> {
    let arms: Vec<(i64, f64)> = records
        .iter()
        .filter_map(|r| Some((r.n.filter(|&n| n > 0)?, r.sd?)))
        .collect();
    let total: f64 = arms.iter().map(|&(n, _)| n as f64).sum();
    let dof = total - arms.len() as f64;
    if dof <= 0.0 {
        return None;
    }
    let ss: f64 = arms.iter().map(|&(n, sd)| (n - 1) as f64 * sd * sd).sum();
    Some((ss / dof).sqrt())
}

fn mean_of(values: &[f64]) -> Option<f64> {
    (!values.is_empty()).then(|| Statistics::mean(values))
}

fn range_of(values: &[f64]) -> Option<ValueRange> {
    (!values.is_empty()).then(|| ValueRange {
        min: Statistics::min(values),
        max: Statistics::max(values),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::comparisons::group_by_study;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_basic_stats_counts() {
        let records = vec![
            StudyArmRecord::binary("S1", "A", 1, 10),
            StudyArmRecord::binary("S1", "B", 1, 20),
            StudyArmRecord::binary("S1", "C", 1, 30),
            StudyArmRecord::binary("S2", "A", 1, 40),
            StudyArmRecord::binary("S2", "B", 1, 50),
        ];
        let studies = group_by_study(&records);
        let stats = basic_stats(&records, &studies);
        assert_eq!(stats.n_studies, 2);
        assert_eq!(stats.n_treatments, 3);
        assert_eq!(stats.total_arms, 5);
        assert_eq!(stats.total_participants, 150);
        assert!(approx(stats.mean_study_size, 75.0));
        assert_eq!(stats.multi_arm_studies, 1);
    }

    #[test]
    fn test_binary_zero_events_counted_per_study() {
        let records = vec![
            StudyArmRecord::binary("S1", "A", 0, 10),
            StudyArmRecord::binary("S1", "B", 0, 10),
            StudyArmRecord::binary("S2", "A", 5, 10),
            StudyArmRecord::binary("S2", "B", 5, 10),
        ];
        let stats = binary_stats(&records);
        assert_eq!(stats.zero_event_studies, 1);
        assert_eq!(stats.zero_event_proportion, Some(0.5));
        assert_eq!(stats.mean_event_rate, Some(0.25));
        assert_eq!(stats.event_rate_range, Some(ValueRange { min: 0.0, max: 0.5 }));
        assert_eq!(stats.total_events, 10);
        assert_eq!(stats.total_participants, 40);
    }

    #[test]
    fn test_binary_without_events_is_missing() {
        let records = vec![StudyArmRecord {
            study: "S1".into(),
            treatment: "A".into(),
            n: Some(10),
            ..Default::default()
        }];
        let stats = binary_stats(&records);
        assert_eq!(stats.zero_event_proportion, None);
        assert_eq!(stats.mean_event_rate, None);
    }

    #[test]
    fn test_continuous_pooled_moments() {
        let records = vec![
            StudyArmRecord::continuous("S1", "A", 10, 2.0, 1.0),
            StudyArmRecord::continuous("S1", "B", 30, 4.0, 2.0),
        ];
        let stats = continuous_stats(&records);
        assert!(approx(stats.pooled_mean.unwrap(), 3.5));
        // (9·1 + 29·4) / (40 − 2) = 125 / 38
        assert!(approx(stats.pooled_sd.unwrap(), (125.0f64 / 38.0).sqrt()));
        assert!(approx(stats.mean_cv.unwrap(), 0.5));
        assert_eq!(stats.zero_sd_arms, 0);
    }

    #[test]
    fn test_huge_sample_sizes_saturate() {
        let big = i64::MAX / 2 + 1;
        let records = vec![
            StudyArmRecord::binary("S1", "A", big, big),
            StudyArmRecord::binary("S1", "B", big, big),
        ];
        let studies = group_by_study(&records);
        assert_eq!(basic_stats(&records, &studies).total_participants, i64::MAX);
        let binary = binary_stats(&records);
        assert_eq!(binary.total_participants, i64::MAX);
        assert_eq!(binary.total_events, i64::MAX);
        assert_eq!(binary.mean_event_rate, Some(1.0));

        let records = vec![
            StudyArmRecord::continuous("S1", "A", big, 2.0, 1.0),
            StudyArmRecord::continuous("S1", "B", big, 4.0, 1.0),
        ];
        let stats = continuous_stats(&records);
        assert!(approx(stats.pooled_mean.unwrap(), 3.0));
        assert!(approx(stats.pooled_sd.unwrap(), 1.0));
    }

    #[test]
    fn test_continuous_zero_mean_skipped_for_cv() {
        let records = vec![
            StudyArmRecord::continuous("S1", "A", 10, 0.0, 1.0),
            StudyArmRecord::continuous("S1", "B", 10, 2.0, 0.0),
        ];
        let stats = continuous_stats(&records);
        assert_eq!(stats.zero_sd_arms, 1);
        assert_eq!(stats.zero_sd_proportion, Some(0.5));
        assert_eq!(stats.cv_range, Some(ValueRange { min: 0.0, max: 0.0 }));
    }
}
