//! The shared category scoring algorithm.

use std::collections::BTreeMap;

use cityscore_core::{
    AmenityScorer, AmenityType, BAND_COUNT, Category, CategoryScore, DISTANCE_DECAY,
    DistanceBandCounts, PointOfInterest, ScoreBreakdown, cumulative_bands, exclusive_band,
};
use geo::Coord;
use log::debug;

use crate::profile::{BandRegime, CategoryProfile};

/// Number of points of one type above which diminishing returns apply.
const DIMINISHING_RETURNS_THRESHOLD: u32 = 5;

/// Map a raw score onto the `0..=100` scale.
///
/// Returns `min(100, round(log10(raw + 1) * scale))`, except that the
/// result is floored at one for any positive raw score. This departs from
/// the plain formula for tiny raw scores, which would otherwise round to
/// zero: a zero total always means nothing was found nearby. A zero (or
/// negative, or `NaN`) raw score yields zero without taking the logarithm.
///
/// # Examples
/// ```
/// use cityscore_scorer::normalise;
///
/// assert_eq!(normalise(0.0, 40.0), 0);
/// assert_eq!(normalise(1.0, 40.0), 12);
/// assert_eq!(normalise(2.3, 40.0), 21);
/// assert_eq!(normalise(0.002, 40.0), 1);
/// assert_eq!(normalise(1e9, 40.0), 100);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "normalisation is a logarithmic curve"
)]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is rounded and clamped to 1..=100 before the cast"
)]
#[must_use]
pub fn normalise(raw: f64, scale: f64) -> u8 {
    if raw.is_nan() || raw <= 0.0 {
        return 0;
    }
    ((raw + 1.0).log10() * scale).round().clamp(1.0, 100.0) as u8
}

/// Scores one category according to its [`CategoryProfile`].
///
/// # Examples
/// ```
/// use cityscore_core::{AmenityScorer, AmenityType, Category, PointOfInterest};
/// use cityscore_scorer::CategoryScorer;
/// use geo::Coord;
///
/// let query = Coord { x: 21.0122, y: 52.2297 };
/// let mut pharmacy = PointOfInterest::new("p", AmenityType::Pharmacy, Coord { x: 21.0122, y: 52.2306 });
/// pharmacy.distance_from_query = Some(100.0);
///
/// let score = CategoryScorer::reference(Category::Healthcare)
///     .score(query, &[pharmacy])
///     .expect("one pharmacy is enough data");
/// assert_eq!(score.raw_score, 1.0);
/// assert_eq!(score.total_score, 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryScorer {
    profile: &'static CategoryProfile,
}

impl CategoryScorer {
    /// Construct a scorer from an explicit profile.
    #[must_use]
    pub const fn new(profile: &'static CategoryProfile) -> Self {
        Self { profile }
    }

    /// Construct a scorer using the reference profile of `category`.
    #[must_use]
    pub const fn reference(category: Category) -> Self {
        Self::new(CategoryProfile::reference(category))
    }

    /// Return the profile driving this scorer.
    #[must_use]
    pub const fn profile(&self) -> &'static CategoryProfile {
        self.profile
    }

    /// Score the points of one type.
    #[expect(
        clippy::float_arithmetic,
        reason = "contributions are weighted sums of decay factors"
    )]
    fn score_type(
        &self,
        weight: f64,
        distances: &[(f64, &PointOfInterest)],
    ) -> (f64, DistanceBandCounts) {
        let mut counts = DistanceBandCounts::default();
        let mut score = 0.0;
        // Cumulative regime: per-band sums of point multipliers and bonuses.
        let mut band_factor = [0.0; BAND_COUNT];
        let mut band_bonus = [0.0; BAND_COUNT];

        for (distance, point) in distances {
            counts.record(*distance);
            let factor = self.profile.point_factor(point);
            let bonus = self.profile.point_bonus(point);
            match self.profile.regime {
                BandRegime::Exclusive => {
                    let decay = decay_of(exclusive_band(*distance));
                    score += weight * decay * factor + bonus * decay;
                }
                BandRegime::Cumulative => {
                    for band in cumulative_bands(*distance) {
                        if let Some(slot) = band_factor.get_mut(band) {
                            *slot += factor;
                        }
                        if let Some(slot) = band_bonus.get_mut(band) {
                            *slot += bonus;
                        }
                    }
                }
            }
        }

        if self.profile.regime == BandRegime::Cumulative {
            score = band_factor
                .iter()
                .zip(&band_bonus)
                .zip(DISTANCE_DECAY)
                .map(|((factor, bonus), decay)| (factor * weight + bonus) * decay)
                .sum();
        }

        if let Some(k) = self.profile.diminishing_returns
            && counts.total > DIMINISHING_RETURNS_THRESHOLD
        {
            let ratio = f64::from(counts.total) / f64::from(DIMINISHING_RETURNS_THRESHOLD);
            score *= 1.0 + ratio.log10() * k;
        }
        (score, counts)
    }
}

fn decay_of(band: usize) -> f64 {
    DISTANCE_DECAY.get(band).copied().unwrap_or_default()
}

impl AmenityScorer for CategoryScorer {
    fn category(&self) -> Category {
        self.profile.category
    }

    #[expect(clippy::float_arithmetic, reason = "the raw score sums contributions")]
    fn score(&self, query: Coord<f64>, points: &[PointOfInterest]) -> Option<CategoryScore> {
        let mut by_kind: BTreeMap<AmenityType, Vec<(f64, &PointOfInterest)>> = BTreeMap::new();
        for point in points {
            if point.category() != self.profile.category || !point.has_valid_location() {
                continue;
            }
            by_kind
                .entry(point.kind)
                .or_default()
                .push((point.distance_from(query), point));
        }
        let scored: usize = by_kind.values().map(Vec::len).sum();
        if scored == 0 {
            debug!("{}: no scorable points", self.profile.category);
            return None;
        }

        let mut breakdown = ScoreBreakdown::default();
        let mut raw_score = 0.0;
        for (kind, weight) in self.profile.type_weights {
            let distances = by_kind.get(kind).map_or(&[][..], Vec::as_slice);
            let (score, counts) = self.score_type(*weight, distances);
            raw_score += score;
            breakdown.by_type.insert(*kind, score);
            breakdown.counts.insert(*kind, counts);
        }

        let total_score = normalise(raw_score, self.profile.scale);
        debug!(
            "{}: {scored} points, raw score {raw_score:.3}, total {total_score}",
            self.profile.category
        );
        Some(CategoryScore {
            total_score,
            raw_score,
            breakdown,
        })
    }
}
