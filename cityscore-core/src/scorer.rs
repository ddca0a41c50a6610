//! Score a category of amenities around a query location.
//!
//! The `AmenityScorer` trait turns the normalised points of one
//! [`Category`](crate::Category) into a [`CategoryScore`](crate::CategoryScore).

use geo::Coord;

use crate::{Category, CategoryScore, PointOfInterest};

/// Calculate a category score for the amenities around `query`.
///
/// Implementations must be thread-safe (`Send` + `Sync`) and hold no state
/// between calls. The method is infallible: implementers return `None` when
/// no scorable point of their category is present, which callers report as
/// "no data" rather than as a zero score.
///
/// Implementations must:
/// - Ignore points of other categories and points with invalid coordinates.
/// - Keep `total_score` within `0..=100`.
/// - Return a zero `total_score` exactly when `raw_score` is zero.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use cityscore_core::{
///     AmenityScorer, AmenityType, Category, CategoryScore, PointOfInterest, ScoreBreakdown,
/// };
///
/// struct CountingScorer;
///
/// impl AmenityScorer for CountingScorer {
///     fn category(&self) -> Category {
///         Category::Cultural
///     }
///
///     fn score(&self, _query: Coord<f64>, points: &[PointOfInterest]) -> Option<CategoryScore> {
///         let count = points.iter().filter(|p| p.category() == self.category()).count();
///         (count > 0).then(|| CategoryScore {
///             total_score: 1,
///             raw_score: 1.0,
///             breakdown: ScoreBreakdown::default(),
///         })
///     }
/// }
///
/// let query = Coord { x: 21.0, y: 52.0 };
/// let museum = PointOfInterest::new("m", AmenityType::Museum, Coord { x: 21.001, y: 52.0 });
/// assert!(CountingScorer.score(query, &[museum]).is_some());
/// assert!(CountingScorer.score(query, &[]).is_none());
/// ```
pub trait AmenityScorer: Send + Sync {
    /// Return the category this scorer handles.
    fn category(&self) -> Category;

    /// Score `points` around `query`, or return `None` when there is no data.
    fn score(&self, query: Coord<f64>, points: &[PointOfInterest]) -> Option<CategoryScore>;
}
