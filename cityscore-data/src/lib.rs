//! Upstream shaping of provider data for the CityScore engine.
//!
//! Responsibilities:
//! - Collapse fragmented transit records into one point per physical stop.
//! - Merge adjacent same-type green spaces into one area.
//! - Drop records whose coordinates cannot be scored.
//!
//! Boundaries:
//! - Do not score anything (lives in `cityscore-scorer`).
//! - Do not fetch data; callers pass provider records in.
//!
//! Invariants:
//! - Output depends only on the input order and values.
//! - No global mutable state.

#![forbid(unsafe_code)]

mod cluster;
mod index;
mod transit;

use cityscore_core::PointOfInterest;
use log::warn;

pub use cluster::{CLUSTER_RADIUS_M, SpatialClusterer};
pub use transit::{PROXIMITY_THRESHOLD_M, ProximityDeduplicator, RawTransitRecord};

/// Keep the points whose coordinates can be scored.
///
/// # Examples
/// ```
/// use cityscore_core::{AmenityType, PointOfInterest};
/// use cityscore_data::retain_scorable;
/// use geo::Coord;
///
/// let points = vec![
///     PointOfInterest::new("ok", AmenityType::Cafe, Coord { x: 21.0, y: 52.2 }),
///     PointOfInterest::new("zero", AmenityType::Cafe, Coord { x: 0.0, y: 52.2 }),
/// ];
/// let kept = retain_scorable(points);
/// assert_eq!(kept.len(), 1);
/// ```
#[must_use]
pub fn retain_scorable(points: Vec<PointOfInterest>) -> Vec<PointOfInterest> {
    let before = points.len();
    let kept: Vec<_> = points
        .into_iter()
        .filter(PointOfInterest::has_valid_location)
        .collect();
    let dropped = before - kept.len();
    if dropped > 0 {
        warn!("dropped {dropped} points with unusable coordinates");
    }
    kept
}

/// Upper-case the first character of `label`.
pub(crate) fn capitalised(label: &str) -> String {
    let mut chars = label.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
