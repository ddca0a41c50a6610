//! Facade crate for the CityScore amenity scoring engine.
//!
//! This crate re-exports the data model, the upstream shaping passes and the
//! category scorers so that callers depend on a single crate.

#![forbid(unsafe_code)]

pub use cityscore_core::{
    AmenityScorer, AmenityType, Attributes, Category, CategoryScore, CategorySelection,
    CombinedScore, DistanceBandCounts, PointOfInterest, ScoreBreakdown, SizeClass,
    haversine_distance, is_valid_location,
};

pub use cityscore_data::{
    CLUSTER_RADIUS_M, PROXIMITY_THRESHOLD_M, ProximityDeduplicator, RawTransitRecord,
    SpatialClusterer, retain_scorable,
};

pub use cityscore_scorer::{
    CategoryScorer, CategoryWeights, CombinedAggregator, LocationScorer, LocationScores,
    WeightsError,
};
