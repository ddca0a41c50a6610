//! Score every enabled category around one location.

use std::collections::BTreeMap;

use cityscore_core::{
    AmenityScorer, Category, CategoryScore, CategorySelection, CombinedScore, PointOfInterest,
};
use geo::Coord;
use log::debug;

use crate::{CategoryScorer, CombinedAggregator};

/// Scores for one query location, ready for presentation.
///
/// Every enabled category appears in `categories`; `None` marks a category
/// with no data, which is distinct from a zero score.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LocationScores {
    /// Score of each enabled category.
    pub categories: BTreeMap<Category, Option<CategoryScore>>,
    /// Weighted average of the present category scores.
    pub combined: Option<CombinedScore>,
}

impl LocationScores {
    /// Return the score of `category`, if it was enabled and had data.
    #[must_use]
    pub fn category(&self, category: Category) -> Option<&CategoryScore> {
        self.categories.get(&category).and_then(Option::as_ref)
    }
}

/// Runs one scorer per category and aggregates the results.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use cityscore_core::{AmenityType, Category, CategorySelection, PointOfInterest};
/// use cityscore_scorer::LocationScorer;
/// use geo::Coord;
///
/// let query = Coord { x: 21.0122, y: 52.2297 };
/// let museum = PointOfInterest::new("m", AmenityType::Museum, Coord { x: 21.0122, y: 52.2300 });
/// let points = BTreeMap::from([(Category::Cultural, vec![museum])]);
/// let selection = CategorySelection::default()
///     .with(Category::Cultural)
///     .with(Category::Healthcare);
///
/// let scores = LocationScorer::default().score(query, &points, &selection);
/// assert!(scores.category(Category::Cultural).is_some());
/// assert_eq!(scores.categories.get(&Category::Healthcare), Some(&None));
/// assert_eq!(scores.combined.map(|c| c.contributing_factors), Some(1));
/// ```
pub struct LocationScorer {
    scorers: Vec<Box<dyn AmenityScorer>>,
    aggregator: CombinedAggregator,
}

impl Default for LocationScorer {
    fn default() -> Self {
        Self::new(CombinedAggregator::default())
    }
}

impl LocationScorer {
    /// Construct a scorer using the reference profile of every category.
    #[must_use]
    pub fn new(aggregator: CombinedAggregator) -> Self {
        let scorers = Category::ALL
            .into_iter()
            .map(|category| Box::new(CategoryScorer::reference(category)) as Box<dyn AmenityScorer>)
            .collect();
        Self {
            scorers,
            aggregator,
        }
    }

    /// Replace the scorer of the category `scorer` handles.
    #[must_use]
    pub fn with_scorer(mut self, scorer: Box<dyn AmenityScorer>) -> Self {
        let category = scorer.category();
        self.scorers.retain(|existing| existing.category() != category);
        self.scorers.push(scorer);
        self
    }

    /// Score the enabled categories of `points` around `query`.
    ///
    /// Points are looked up by category; a category enabled in `selection`
    /// but missing from `points` has no data.
    #[must_use]
    pub fn score(
        &self,
        query: Coord<f64>,
        points: &BTreeMap<Category, Vec<PointOfInterest>>,
        selection: &CategorySelection,
    ) -> LocationScores {
        let categories: BTreeMap<Category, Option<CategoryScore>> = selection
            .enabled()
            .map(|category| {
                let score = self.scorer_for(category).and_then(|scorer| {
                    let input = points.get(&category).map_or(&[][..], Vec::as_slice);
                    scorer.score(query, input)
                });
                (category, score)
            })
            .collect();
        let combined = self.aggregator.combine(&categories, selection);
        debug!(
            "scored {} categories, combined score {:?}",
            categories.len(),
            combined.as_ref().map(|c| c.total_score)
        );
        LocationScores {
            categories,
            combined,
        }
    }

    fn scorer_for(&self, category: Category) -> Option<&dyn AmenityScorer> {
        self.scorers
            .iter()
            .find(|scorer| scorer.category() == category)
            .map(|scorer| &**scorer)
    }
}
