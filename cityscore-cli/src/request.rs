//! JSON request accepted by the `score` command and its shaping pipeline.

use std::collections::BTreeMap;

use cityscore_core::{
    AmenityType, Attributes, Category, CategorySelection, PointOfInterest, is_valid_location,
};
use cityscore_data::{ProximityDeduplicator, RawTransitRecord, SpatialClusterer, retain_scorable};
use cityscore_scorer::{CategoryWeights, CombinedAggregator, LocationScorer, LocationScores};
use geo::Coord;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::CliError;

/// Latitude and longitude in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub(crate) struct GeoPoint {
    pub(crate) lat: f64,
    pub(crate) lon: f64,
}

impl From<GeoPoint> for Coord<f64> {
    fn from(point: GeoPoint) -> Self {
        Self {
            x: point.lon,
            y: point.lat,
        }
    }
}

/// A provider point whose type is still a free-form label.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct ProviderPoint {
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(rename = "type")]
    pub(crate) label: String,
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    #[serde(default)]
    pub(crate) lon: Option<f64>,
    #[serde(default)]
    pub(crate) attributes: Attributes,
}

impl ProviderPoint {
    /// Resolve the label within `category` and build a scorable point.
    fn into_point(self, category: Category) -> Option<PointOfInterest> {
        let Some(kind) = AmenityType::normalise(category, &self.label) else {
            debug!(
                "dropping {} point {}: unrecognised type {:?}",
                category, self.id, self.label
            );
            return None;
        };
        let (Some(lat), Some(lon)) = (self.lat, self.lon) else {
            warn!("dropping {} point {} without coordinates", category, self.id);
            return None;
        };
        let mut point = PointOfInterest::new(self.id, kind, Coord { x: lon, y: lat })
            .with_attributes(self.attributes);
        point.name = self.name;
        Some(point)
    }
}

/// Points around one location, grouped by category.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScoreRequest {
    /// Query coordinate.
    pub(crate) location: GeoPoint,
    /// Categories to score; all of them when omitted.
    #[serde(default = "CategorySelection::all")]
    pub(crate) enabled: CategorySelection,
    /// Overrides for the combined-score weights.
    #[serde(default)]
    pub(crate) weights: Option<CategoryWeights>,
    /// Raw transit elements, collapsed into stops before scoring.
    #[serde(default)]
    pub(crate) transit: Vec<RawTransitRecord>,
    /// Provider points keyed by category.
    #[serde(default)]
    pub(crate) points: BTreeMap<Category, Vec<ProviderPoint>>,
}

impl ScoreRequest {
    /// Shape the request's points and score every enabled category.
    pub(crate) fn evaluate(self) -> Result<LocationScores, CliError> {
        let query = Coord::from(self.location);
        if !is_valid_location(query) {
            return Err(CliError::InvalidLocation {
                lat: self.location.lat,
                lon: self.location.lon,
            });
        }
        let aggregator = CombinedAggregator::new(self.weights.unwrap_or_default())?;
        let points = shape_points(query, &self.transit, self.points);
        Ok(LocationScorer::new(aggregator).score(query, &points, &self.enabled))
    }
}

/// Resolve, deduplicate, cluster and measure the provider points.
pub(crate) fn shape_points(
    query: Coord<f64>,
    transit: &[RawTransitRecord],
    provided: BTreeMap<Category, Vec<ProviderPoint>>,
) -> BTreeMap<Category, Vec<PointOfInterest>> {
    let mut shaped: BTreeMap<Category, Vec<PointOfInterest>> = provided
        .into_iter()
        .map(|(category, points)| {
            let resolved = points
                .into_iter()
                .filter_map(|point| point.into_point(category))
                .collect();
            (category, retain_scorable(resolved))
        })
        .collect();

    if !transit.is_empty() {
        let stops = ProximityDeduplicator::default().deduplicate(transit, query);
        shaped
            .entry(Category::Transportation)
            .or_default()
            .extend(retain_scorable(stops));
    }
    if let Some(spaces) = shaped.get_mut(&Category::GreenSpaces) {
        *spaces = SpatialClusterer::default().cluster(spaces);
    }

    shaped
        .into_iter()
        .map(|(category, points)| {
            let measured = points
                .into_iter()
                .map(|point| point.measured_from(query))
                .collect();
            (category, measured)
        })
        .collect()
}
