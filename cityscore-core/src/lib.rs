//! Core domain types for the CityScore amenity engine.
//!
//! The crate models points of interest around a query coordinate, the eight
//! amenity categories they belong to, and the score records produced by the
//! scoring crate. It also owns the great-circle distance calculation and the
//! shared distance bands every category scorer weighs proximity with.
//!
//! Coordinates follow the `geo` convention used throughout the workspace:
//! WGS84 with `x = longitude` and `y = latitude`.
//!
//! # Examples
//!
//! ```
//! use geo::Coord;
//! use cityscore_core::{AmenityType, Category, PointOfInterest};
//!
//! let query = Coord { x: 21.0122, y: 52.2297 };
//! let stop = PointOfInterest::new("osm-1", AmenityType::Bus, Coord { x: 21.0122, y: 52.2306 })
//!     .measured_from(query);
//!
//! assert_eq!(stop.category(), Category::Transportation);
//! assert!(stop.distance_from_query.is_some());
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod amenity;
pub mod bands;
pub mod category;
pub mod distance;
pub mod poi;
pub mod score;
pub mod scorer;
pub mod selection;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use amenity::{AmenityType, AmenityTypeParseError};
pub use bands::{BAND_COUNT, DISTANCE_BANDS_M, DISTANCE_DECAY, cumulative_bands, exclusive_band};
pub use category::{Category, CategoryParseError};
pub use distance::{EARTH_RADIUS_M, haversine_distance, is_valid_location};
pub use poi::{Attributes, PointOfInterest, SizeClass};
pub use score::{CategoryScore, CombinedScore, DistanceBandCounts, ScoreBreakdown};
pub use scorer::AmenityScorer;
pub use selection::CategorySelection;
