//! Study grouping and pairwise comparison enumeration.

use nmagrade_core::types::collections::ArmVec;
use nmagrade_core::types::{BTreeMap, BTreeSet};

use super::types::ObservedComparison;
use crate::records::StudyArmRecord;

/// The distinct treatments of one study, sorted by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyArms<'a> {
    pub study: &'a str,
    pub treatments: ArmVec<&'a str>,
}

/// Group records by study. Studies are returned in name order; a treatment
/// listed twice in one study counts once. Records with a blank study or
/// treatment label are skipped.
pub fn group_by_study(records: &[StudyArmRecord]) -> Vec<StudyArms<'_>> {
    let mut grouped: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for r in records {
        if r.study_key().is_empty() || r.treatment_key().is_empty() {
            continue;
        }
        grouped
            .entry(r.study_key())
            .or_default()
            .insert(r.treatment_key());
    }

    grouped
        .into_iter()
        .map(|(study, treatments)| StudyArms {
            study,
            treatments: treatments.into_iter().collect(),
        })
        .collect()
}

/// Every unordered pair of distinct treatments within one study, with the
/// lexicographically smaller name first.
pub fn study_pairs<'a>(arms: &StudyArms<'a>) -> Vec<(&'a str, &'a str)> {
    let mut pairs = Vec::new();
    for (i, a) in arms.treatments.iter().enumerate() {
        for b in arms.treatments.iter().skip(i + 1) {
            // treatments are sorted, so a < b already
            pairs.push((*a, *b));
        }
    }
    pairs
}

/// Deduplicated observed pairs across all studies with per-pair study counts,
/// ordered by (treatment_a, treatment_b).
pub fn observed_comparisons(studies: &[StudyArms<'_>]) -> Vec<ObservedComparison> {
    let mut counts: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    for arms in studies {
        for pair in study_pairs(arms) {
            *counts.entry(pair).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .map(|((a, b), study_count)| ObservedComparison {
            treatment_a: a.to_string(),
            treatment_b: b.to_string(),
            study_count,
        })
        .collect()
}

/// `T·(T−1)/2` for `T` treatments.
pub fn possible_comparisons(n_treatments: usize) -> usize {
    n_treatments * n_treatments.saturating_sub(1) / 2
}

/// `actual / possible`, 0 when no comparison is possible.
pub fn density(actual: usize, possible: usize) -> f64 {
    if possible == 0 {
        return 0.0;
    }
    (actual as f64 / possible as f64).clamp(0.0, 1.0)
}
