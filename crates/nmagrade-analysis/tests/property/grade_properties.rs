use nmagrade_analysis::grade::{recompute_all, ComparisonRow, Domain, EvidenceType};
use proptest::prelude::*;

const ARMS: [&str; 5] = ["Placebo", "A", "B", "C", "D"];
const JUDGMENTS: [&str; 8] = [
    "Not serious",
    "Serious",
    "Very serious",
    "Extremely serious",
    "Undetected",
    "",
    "n/a",
    "very  serious",
];

fn judgment() -> impl Strategy<Value = Option<String>> {
    prop::option::of((0usize..JUDGMENTS.len()).prop_map(|i| JUDGMENTS[i].to_string()))
}

fn row() -> impl Strategy<Value = ComparisonRow> {
    (
        0usize..ARMS.len(),
        0usize..ARMS.len(),
        0.0f64..1000.0,
        prop::option::of(-2.0f64..2.0),
        prop::option::of(-2.0f64..2.0),
        prop::collection::vec(judgment(), Domain::ALL.len()),
    )
        .prop_map(|(a1, a2, size, direct, indirect, judgments)| {
            let mut row = ComparisonRow::new(ARMS[a1], ARMS[a2], size);
            row.direct_estimate = direct;
            row.indirect_estimate = indirect;
            for (domain, text) in Domain::ALL.iter().zip(judgments) {
                if let Some(text) = text {
                    row = row.with_judgment(*domain, &text);
                }
            }
            row
        })
}

proptest! {
    #[test]
    fn recompute_is_idempotent(rows in prop::collection::vec(row(), 0..12)) {
        let once = recompute_all(rows);
        let twice = recompute_all(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn every_row_gets_arm_certainties(rows in prop::collection::vec(row(), 1..12)) {
        let out = recompute_all(rows);
        for row in &out {
            prop_assert!(row.certainty_arm1.is_some());
            prop_assert!(row.certainty_arm2.is_some());
            prop_assert!(row.evidence_type.is_some());
            prop_assert!(row.final_rating_reason.is_some());
        }
    }

    #[test]
    fn final_never_exceeds_chosen_rating(rows in prop::collection::vec(row(), 1..12)) {
        let out = recompute_all(rows);
        for row in &out {
            let base = match row.evidence_type {
                Some(EvidenceType::Network) => row.combined_rating,
                Some(EvidenceType::Direct) => row.direct_rating,
                Some(EvidenceType::Indirect) => row.indirect_rating,
                _ => continue,
            };
            prop_assert!(row.final_rating <= base);
            prop_assert!(row.final_rating.is_some());
        }
    }
}
