//! Score records produced by category scorers and the combined aggregator.

use std::collections::BTreeMap;

use crate::{AmenityType, BAND_COUNT, Category, cumulative_bands};

/// Per-type point counts, overall and within each distance band.
///
/// The band slots are cumulative: a point at 100 m counts in all four.
///
/// # Examples
/// ```
/// use cityscore_core::DistanceBandCounts;
///
/// let mut counts = DistanceBandCounts::default();
/// counts.record(100.0);
/// counts.record(600.0);
/// counts.record(1_500.0);
///
/// assert_eq!(counts.total, 3);
/// assert_eq!(counts.cumulative_within, [1, 1, 2, 2]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DistanceBandCounts {
    /// Number of points of the type, regardless of distance.
    pub total: u32,
    /// Number of points within 250, 500, 750 and 1000 metres.
    pub cumulative_within: [u32; BAND_COUNT],
}

impl DistanceBandCounts {
    /// Count a point at `distance_m` metres.
    pub fn record(&mut self, distance_m: f64) {
        self.total = self.total.saturating_add(1);
        for band in cumulative_bands(distance_m) {
            if let Some(slot) = self.cumulative_within.get_mut(band) {
                *slot = slot.saturating_add(1);
            }
        }
    }
}

/// Per-type detail behind a category score.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScoreBreakdown {
    /// Contribution of each type to the raw score.
    pub by_type: BTreeMap<AmenityType, f64>,
    /// Distance band counts of each type.
    pub counts: BTreeMap<AmenityType, DistanceBandCounts>,
}

/// Normalised score of one category.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CategoryScore {
    /// Score on the 0 to 100 scale. Zero exactly when `raw_score` is zero.
    pub total_score: u8,
    /// Sum of the per-type contributions before normalisation.
    pub raw_score: f64,
    /// Per-type detail.
    pub breakdown: ScoreBreakdown,
}

/// Weighted average of the available category scores.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CombinedScore {
    /// Overall score on the 0 to 100 scale.
    pub total_score: u8,
    /// Number of categories included in the average.
    pub contributing_factors: usize,
    /// Total score of each contributing category.
    pub breakdown: BTreeMap<Category, u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[], 0, [0, 0, 0, 0])]
    #[case(&[250.0], 1, [1, 1, 1, 1])]
    #[case(&[251.0, 749.0], 2, [0, 2, 2, 2])]
    #[case(&[1_000.0, 1_000.5], 2, [0, 0, 0, 1])]
    fn counts_are_cumulative(
        #[case] distances: &[f64],
        #[case] total: u32,
        #[case] within: [u32; BAND_COUNT],
    ) {
        let mut counts = DistanceBandCounts::default();
        for distance in distances {
            counts.record(*distance);
        }
        assert_eq!(counts.total, total);
        assert_eq!(counts.cumulative_within, within);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn combined_score_serialises_with_category_keys() {
        let score = CombinedScore {
            total_score: 53,
            contributing_factors: 2,
            breakdown: BTreeMap::from([(Category::Transportation, 60), (Category::Education, 40)]),
        };
        let json = serde_json::to_value(&score).expect("serialisable");
        assert_eq!(json["totalScore"], 53);
        assert_eq!(json["contributingFactors"], 2);
        assert_eq!(json["breakdown"]["education"], 40);
    }
}
