//! Weighted merge of category scores into one overall score.

use std::collections::BTreeMap;

use cityscore_core::{Category, CategoryScore, CategorySelection, CombinedScore};

use crate::WeightsError;

/// Relative importance of each category in the combined score.
///
/// Categories without an explicit weight use
/// [`default_weight`](Self::default_weight).
///
/// # Examples
/// ```
/// use cityscore_core::Category;
/// use cityscore_scorer::CategoryWeights;
///
/// let weights = CategoryWeights::default();
/// assert_eq!(weights.weight(Category::GreenSpaces), 0.8);
/// assert_eq!(weights.weight(Category::Cultural), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CategoryWeights {
    /// Explicit weights.
    pub weights: BTreeMap<Category, f64>,
    /// Weight of every category missing from `weights`.
    pub default_weight: f64,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            weights: BTreeMap::from([
                (Category::Transportation, 1.0),
                (Category::GreenSpaces, 0.8),
                (Category::Education, 0.7),
            ]),
            default_weight: 1.0,
        }
    }
}

impl CategoryWeights {
    /// Return the weight applied to `category`.
    #[must_use]
    pub fn weight(&self, category: Category) -> f64 {
        self.weights
            .get(&category)
            .copied()
            .unwrap_or(self.default_weight)
    }

    /// Set the weight of `category` and return the table.
    #[must_use]
    pub fn with_weight(mut self, category: Category, weight: f64) -> Self {
        self.weights.insert(category, weight);
        self
    }

    /// Validate the weights and return the table.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when any weight is not finite or not strictly
    /// positive.
    pub fn validate(self) -> Result<Self, WeightsError> {
        if !is_usable(self.default_weight) {
            return Err(WeightsError::InvalidDefault(self.default_weight));
        }
        for (category, weight) in &self.weights {
            let (category, weight) = (*category, *weight);
            if !weight.is_finite() {
                return Err(WeightsError::NonFinite { category, weight });
            }
            if weight <= 0.0 {
                return Err(WeightsError::NotPositive { category, weight });
            }
        }
        Ok(self)
    }
}

const fn is_usable(weight: f64) -> bool {
    weight.is_finite() && weight > 0.0
}

/// Merges the category scores of enabled categories into a weighted average.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use cityscore_core::{Category, CategoryScore, CategorySelection, ScoreBreakdown};
/// use cityscore_scorer::CombinedAggregator;
///
/// let score = |total_score| Some(CategoryScore {
///     total_score,
///     raw_score: 1.0,
///     breakdown: ScoreBreakdown::default(),
/// });
/// let scores = BTreeMap::from([
///     (Category::Transportation, score(60)),
///     (Category::Education, score(40)),
///     (Category::Cultural, None),
/// ]);
/// let selection = CategorySelection::all();
///
/// let combined = CombinedAggregator::default()
///     .combine(&scores, &selection)
///     .expect("two categories are scored");
/// assert_eq!(combined.total_score, 52);
/// assert_eq!(combined.contributing_factors, 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombinedAggregator {
    weights: CategoryWeights,
}

impl CombinedAggregator {
    /// Construct an aggregator from validated weights.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when the weight table is unusable.
    pub fn new(weights: CategoryWeights) -> Result<Self, WeightsError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Return the weight table.
    #[must_use]
    pub const fn weights(&self) -> &CategoryWeights {
        &self.weights
    }

    /// Combine the present scores of enabled categories.
    ///
    /// Returns `None` when no enabled category has a score.
    #[expect(
        clippy::float_arithmetic,
        reason = "the combined score is a weighted mean"
    )]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "a weighted mean of 0..=100 values rounds into 0..=100"
    )]
    #[must_use]
    pub fn combine(
        &self,
        scores: &BTreeMap<Category, Option<CategoryScore>>,
        selection: &CategorySelection,
    ) -> Option<CombinedScore> {
        let available: BTreeMap<Category, u8> = scores
            .iter()
            .filter(|(category, _)| selection.is_enabled(**category))
            .filter_map(|(category, score)| score.as_ref().map(|s| (*category, s.total_score)))
            .collect();
        if available.is_empty() {
            return None;
        }

        let (weighted_sum, total_weight) = available.iter().fold(
            (0.0, 0.0),
            |(sum, total), (category, score)| {
                let weight = self.weights.weight(*category);
                (sum + f64::from(*score) * weight, total + weight)
            },
        );
        let total_score = (weighted_sum / total_weight).round().clamp(0.0, 100.0) as u8;
        Some(CombinedScore {
            total_score,
            contributing_factors: available.len(),
            breakdown: available,
        })
    }
}
