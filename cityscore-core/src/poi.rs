//! Normalised points of interest and their optional attributes.

use geo::Coord;

use crate::{AmenityType, Category, haversine_distance, is_valid_location};

/// Declared size of a feature, used by shopping and green-space scoring and
/// to rank green-space cluster anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SizeClass {
    /// Small feature.
    Small,
    /// Medium feature.
    Medium,
    /// Large feature.
    Large,
}

impl SizeClass {
    /// Return the anchor rank of the size: larger sizes rank higher.
    ///
    /// # Examples
    /// ```
    /// use cityscore_core::SizeClass;
    ///
    /// assert!(SizeClass::Large.rank() > SizeClass::Small.rank());
    /// ```
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Small => 1,
            Self::Medium => 2,
            Self::Large => 3,
        }
    }

    /// Rank an optional size; unknown sizes rank lowest.
    #[must_use]
    pub const fn rank_of(size: Option<Self>) -> u8 {
        match size {
            Some(size) => size.rank(),
            None => 0,
        }
    }
}

/// Category-specific optional details about a point of interest.
///
/// Every field is optional; scorers only read the fields relevant to their
/// category and ignore the rest. `takeaway`, `theme`, `sport`, `level`,
/// `brand`, `speciality` and `indoor` are never scored and are carried
/// through for presentation.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Attributes {
    /// Declared size of the feature.
    pub size: Option<SizeClass>,
    /// Whether a healthcare facility has an emergency department.
    pub emergency: Option<bool>,
    /// Cuisine served by a food outlet.
    pub cuisine: Option<String>,
    /// Whether a food outlet offers outdoor seating.
    pub outdoor_seating: Option<bool>,
    /// Whether a food outlet offers takeaway.
    pub takeaway: Option<bool>,
    /// Access level, for example `public` or `private`.
    pub access: Option<String>,
    /// Facilities inside a green space, such as benches or toilets.
    pub amenities: Vec<String>,
    /// Operating organisation.
    pub operator: Option<String>,
    /// Theme of a cultural venue.
    pub theme: Option<String>,
    /// Sport played at a recreation venue.
    pub sport: Option<String>,
    /// Level of an education facility.
    pub level: Option<String>,
    /// Route or line identifiers served by a transit stop.
    pub lines: Vec<String>,
    /// Retail brand.
    pub brand: Option<String>,
    /// Medical speciality.
    pub speciality: Option<String>,
    /// Whether a recreation venue is indoors.
    pub indoor: Option<bool>,
    /// Number of source features merged into this point.
    pub cluster_count: Option<usize>,
}

/// A normalised amenity near the query location.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. The
/// category is derived from [`PointOfInterest::kind`].
///
/// # Examples
/// ```
/// use geo::Coord;
/// use cityscore_core::{AmenityType, PointOfInterest};
///
/// let museum = PointOfInterest::new("osm-7", AmenityType::Museum, Coord { x: 2.35, y: 48.86 })
///     .with_name("Musée");
///
/// assert_eq!(museum.name.as_deref(), Some("Musée"));
/// assert!(museum.distance_from_query.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PointOfInterest {
    /// Identifier, unique per data source.
    pub id: String,
    /// Display name, if the source provided one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    /// Amenity type within the category.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: AmenityType,
    /// Position of the amenity.
    pub location: Coord<f64>,
    /// Cached distance in metres from the query coordinate.
    #[cfg_attr(feature = "serde", serde(default))]
    pub distance_from_query: Option<f64>,
    /// Category-specific details.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: Attributes,
}

impl PointOfInterest {
    /// Construct an unnamed point without attributes or a cached distance.
    pub fn new(id: impl Into<String>, kind: AmenityType, location: Coord<f64>) -> Self {
        Self {
            id: id.into(),
            name: None,
            kind,
            location,
            distance_from_query: None,
            attributes: Attributes::default(),
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace the attributes.
    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Cache the distance from `query`.
    #[must_use]
    pub fn measured_from(mut self, query: Coord<f64>) -> Self {
        self.distance_from_query = Some(haversine_distance(query, self.location));
        self
    }

    /// Return the category the point belongs to.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.kind.category()
    }

    /// Return the cached distance, or compute it from `query` when absent.
    #[must_use]
    pub fn distance_from(&self, query: Coord<f64>) -> f64 {
        self.distance_from_query
            .unwrap_or_else(|| haversine_distance(query, self.location))
    }

    /// Report whether the point's coordinates can be scored.
    #[must_use]
    pub fn has_valid_location(&self) -> bool {
        is_valid_location(self.location)
    }
}
