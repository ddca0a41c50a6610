//! Property-based tests for score normalisation and category scoring.
//!
//! # Invariants tested
//!
//! - **Range:** normalised scores stay within `0..=100`.
//! - **Monotonicity:** a larger raw score never normalises lower.
//! - **Zero:** the total is zero exactly when the raw score is zero.
//! - **Totality:** every category scores any point list without panicking.

use cityscore_core::test_support::{QUERY, poi_at};
use cityscore_core::{AmenityScorer, AmenityType, Category};
use cityscore_scorer::{CategoryProfile, CategoryScorer, normalise};
use proptest::prelude::*;

fn scale_strategy() -> impl Strategy<Value = f64> {
    prop::sample::select(
        Category::ALL
            .iter()
            .map(|category| CategoryProfile::reference(*category).scale)
            .collect::<Vec<_>>(),
    )
}

fn kind_strategy() -> impl Strategy<Value = AmenityType> {
    prop::sample::select(AmenityType::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn normalised_scores_stay_in_range(raw in 0.0_f64..1e12, scale in scale_strategy()) {
        prop_assert!(normalise(raw, scale) <= 100);
    }

    #[test]
    fn normalisation_is_monotonic(
        a in 0.0_f64..1e6,
        b in 0.0_f64..1e6,
        scale in scale_strategy(),
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(normalise(low, scale) <= normalise(high, scale));
    }

    #[test]
    fn zero_total_iff_zero_raw(raw in 0.0_f64..1e6, scale in scale_strategy()) {
        prop_assert_eq!(normalise(raw, scale) == 0, raw == 0.0);
    }

    #[test]
    fn category_scores_respect_the_invariants(
        placements in prop::collection::vec((kind_strategy(), 0.0_f64..2_500.0), 0..30),
    ) {
        let points: Vec<_> = placements
            .iter()
            .enumerate()
            .map(|(i, (kind, metres))| poi_at(&format!("p{i}"), *kind, *metres))
            .collect();
        for category in Category::ALL {
            let present = points.iter().any(|p| p.category() == category && p.has_valid_location());
            let score = CategoryScorer::reference(category).score(QUERY, &points);
            prop_assert_eq!(score.is_some(), present);
            if let Some(result) = score {
                prop_assert!(result.total_score <= 100);
                prop_assert!(result.raw_score >= 0.0);
                prop_assert_eq!(result.total_score == 0, result.raw_score == 0.0);
            }
        }
    }
}
