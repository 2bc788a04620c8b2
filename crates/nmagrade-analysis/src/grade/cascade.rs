//! Full seven-stage recomputation over a row set.

use nmagrade_core::config::GradeConfig;
use tracing::debug;

use super::bridges::BridgeRanking;
use super::direct::direct_ratings;
use super::evidence::{combined_rating, evidence_type};
use super::final_rating::{final_rating, StageRatings};
use super::indirect::indirect_rating;
use super::reason::final_rating_reason;
use super::row::ComparisonRow;
use super::types::{CertaintyLevel, EvidenceType};

/// Recompute every computed field of every row with default settings.
pub fn recompute_all(rows: Vec<ComparisonRow>) -> Vec<ComparisonRow> {
    recompute_all_with_config(rows, &GradeConfig::default())
}

/// Recompute every computed field of every row.
///
/// Each stage reads an immutable snapshot of the previous stages; the rows
/// are written only once all stages are done. The result depends only on
/// the editable fields, except that rows with unknown evidence keep their
/// previous final rating.
pub fn recompute_all_with_config(
    mut rows: Vec<ComparisonRow>,
    config: &GradeConfig,
) -> Vec<ComparisonRow> {
    let default_certainty =
        CertaintyLevel::from_level(i32::from(config.effective_default_certainty_level()));

    // Stage 1
    let direct = direct_ratings(&rows);

    // Stage 2
    let ranking = BridgeRanking::compute(&rows, config.effective_bridge_count());
    let arm_certainty: Vec<(CertaintyLevel, CertaintyLevel)> = rows
        .iter()
        .map(|row| {
            (
                ranking.certainty_for(&row.arm1, &rows, &direct, default_certainty),
                ranking.certainty_for(&row.arm2, &rows, &direct, default_certainty),
            )
        })
        .collect();

    // Stage 3
    let indirect: Vec<Option<CertaintyLevel>> = rows
        .iter()
        .zip(&arm_certainty)
        .map(|(row, &(a1, a2))| indirect_rating(row, a1, a2))
        .collect();

    // Stages 4-7
    let mut unknown = 0usize;
    for (i, row) in rows.iter_mut().enumerate() {
        let ratings = StageRatings {
            direct: direct[i],
            indirect: indirect[i],
            combined: combined_rating(direct[i], indirect[i]),
        };
        let evidence = evidence_type(row, ratings.direct, ratings.indirect);
        if evidence == EvidenceType::Unknown {
            unknown += 1;
        }
        let final_level = final_rating(row, evidence, ratings, row.final_rating);
        let reason = final_rating_reason(row, evidence, ratings, final_level);

        row.direct_rating = ratings.direct;
        row.certainty_arm1 = Some(arm_certainty[i].0);
        row.certainty_arm2 = Some(arm_certainty[i].1);
        row.indirect_rating = ratings.indirect;
        row.combined_rating = ratings.combined;
        row.evidence_type = Some(evidence);
        row.final_rating = final_level;
        row.final_rating_reason = Some(reason);
    }

    debug!(
        rows = rows.len(),
        bridges = ?ranking.bridges,
        unknown_evidence = unknown,
        "grade cascade recomputed"
    );

    rows
}
