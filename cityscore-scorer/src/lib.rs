//! Amenity scoring for the CityScore engine.
//!
//! The crate provides:
//! - **Category scoring** through one shared algorithm, [`CategoryScorer`],
//!   parametrised by a declarative [`CategoryProfile`] per category. Each
//!   profile fixes the type weights, the distance weighting regime, the
//!   normalisation scale and any per-point modifiers.
//! - **Aggregation** of the category scores a caller enabled into a single
//!   weighted average with [`CombinedAggregator`].
//! - **Orchestration** of both for one query location with
//!   [`LocationScorer`].
//!
//! Scoring is pure: no scorer holds state between calls, so every type here
//! can be shared across threads and called re-entrantly.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use cityscore_core::{AmenityType, Category, CategorySelection, PointOfInterest};
//! use cityscore_scorer::LocationScorer;
//! use geo::Coord;
//!
//! let query = Coord { x: 21.0122, y: 52.2297 };
//! let mut stop = PointOfInterest::new("osm-1", AmenityType::Bus, Coord { x: 21.0122, y: 52.2306 });
//! stop.distance_from_query = Some(100.0);
//!
//! let points = BTreeMap::from([(Category::Transportation, vec![stop])]);
//! let scores = LocationScorer::default().score(query, &points, &CategorySelection::all());
//!
//! assert_eq!(scores.category(Category::Transportation).map(|s| s.total_score), Some(21));
//! assert_eq!(scores.combined.map(|c| c.total_score), Some(21));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod aggregate;
mod category;
mod error;
mod location;
mod profile;

pub use aggregate::{CategoryWeights, CombinedAggregator};
pub use category::{CategoryScorer, normalise};
pub use error::WeightsError;
pub use location::{LocationScorer, LocationScores};
pub use profile::{BandRegime, CategoryProfile, PointModifier, SizeModifiers};
