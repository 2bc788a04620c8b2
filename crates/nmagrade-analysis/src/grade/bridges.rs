//! Stage 2: bridge ranking and per-arm certainty.

use nmagrade_core::types::BTreeMap;
use serde::{Deserialize, Serialize};

use super::row::ComparisonRow;
use super::types::CertaintyLevel;

/// A treatment with its summed sample size over arm1/arm2 appearances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTreatment {
    pub treatment: String,
    pub total_sample_size: f64,
}

/// Treatments ranked by total sample size, descending, ties broken by name
/// ascending. The first `bridge_count` are the bridges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeRanking {
    pub ranked: Vec<RankedTreatment>,
    pub bridges: Vec<String>,
}

impl BridgeRanking {
    pub fn compute(rows: &[ComparisonRow], bridge_count: usize) -> Self {
        let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
        for row in rows {
            let size = if row.sample_size.is_finite() { row.sample_size } else { 0.0 };
            for arm in [row.arm1.trim(), row.arm2.trim()] {
                if !arm.is_empty() {
                    *totals.entry(arm).or_insert(0.0) += size;
                }
            }
        }

        // BTreeMap yields names ascending; a stable sort keeps that order on ties.
        let mut ranked: Vec<RankedTreatment> = totals
            .into_iter()
            .map(|(treatment, total)| RankedTreatment {
                treatment: treatment.to_string(),
                total_sample_size: total,
            })
            .collect();
        ranked.sort_by(|a, b| b.total_sample_size.total_cmp(&a.total_sample_size));

        let bridges = ranked
            .iter()
            .take(bridge_count)
            .map(|r| r.treatment.clone())
            .collect();

        Self { ranked, bridges }
    }

    pub fn is_bridge(&self, treatment: &str) -> bool {
        self.bridges.iter().any(|b| b == treatment)
    }

    /// Certainty for `arm`: the direct rating of the first row linking it to
    /// the highest-priority bridge (other than itself) that has any rated
    /// row with it. Falls back to `default` without such a link.
    ///
    /// First match by bridge priority wins, even when a lower-priority
    /// bridge link carries a higher rating.
    pub fn certainty_for(
        &self,
        arm: &str,
        rows: &[ComparisonRow],
        direct: &[Option<CertaintyLevel>],
        default: CertaintyLevel,
    ) -> CertaintyLevel {
        let arm = arm.trim();
        for bridge in self.bridges.iter().filter(|b| b.as_str() != arm) {
            let rated = rows
                .iter()
                .zip(direct)
                .find_map(|(row, rating)| match rating {
                    Some(level) if row.connects(arm, bridge) => Some(*level),
                    _ => None,
                });
            if let Some(level) = rated {
                return level;
            }
        }
        default
    }
}
