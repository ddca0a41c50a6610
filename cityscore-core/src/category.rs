//! The eight amenity categories a location is scored on.
//!
//! Category identifiers double as the keys used by callers to enable
//! categories and by the presentation layer to look scores up.
//!
//! # Examples
//! ```
//! use cityscore_core::Category;
//!
//! assert_eq!(Category::GreenSpaces.as_str(), "greenSpaces");
//! assert_eq!("foodDining".parse::<Category>(), Ok(Category::FoodDining));
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::AmenityType;

/// Broad amenity category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// Public transport stops and stations.
    #[cfg_attr(feature = "serde", serde(rename = "transportation"))]
    Transportation,
    /// Parks, gardens, forests, playgrounds and nature reserves.
    #[cfg_attr(feature = "serde", serde(rename = "greenSpaces"))]
    GreenSpaces,
    /// Schools, universities and libraries.
    #[cfg_attr(feature = "serde", serde(rename = "education"))]
    Education,
    /// Hospitals, clinics, doctors and pharmacies.
    #[cfg_attr(feature = "serde", serde(rename = "healthcare"))]
    Healthcare,
    /// Supermarkets, convenience stores, malls and markets.
    #[cfg_attr(feature = "serde", serde(rename = "shopping"))]
    Shopping,
    /// Restaurants, cafes, pubs and fast food.
    #[cfg_attr(feature = "serde", serde(rename = "foodDining"))]
    FoodDining,
    /// Sports centres, pools, gyms, pitches and tennis courts.
    #[cfg_attr(feature = "serde", serde(rename = "recreationSports"))]
    RecreationSports,
    /// Museums, theatres, cinemas and galleries.
    #[cfg_attr(feature = "serde", serde(rename = "cultural"))]
    Cultural,
}

/// Error returned when parsing an unknown category identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}'")]
pub struct CategoryParseError(pub String);

impl Category {
    /// Every category in presentation order.
    pub const ALL: [Self; 8] = [
        Self::Transportation,
        Self::GreenSpaces,
        Self::Education,
        Self::Healthcare,
        Self::Shopping,
        Self::FoodDining,
        Self::RecreationSports,
        Self::Cultural,
    ];

    /// Return the stable identifier of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transportation => "transportation",
            Self::GreenSpaces => "greenSpaces",
            Self::Education => "education",
            Self::Healthcare => "healthcare",
            Self::Shopping => "shopping",
            Self::FoodDining => "foodDining",
            Self::RecreationSports => "recreationSports",
            Self::Cultural => "cultural",
        }
    }

    /// Return a human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Transportation => "Transportation",
            Self::GreenSpaces => "Green spaces",
            Self::Education => "Education",
            Self::Healthcare => "Healthcare",
            Self::Shopping => "Shopping",
            Self::FoodDining => "Food & dining",
            Self::RecreationSports => "Recreation & sports",
            Self::Cultural => "Culture",
        }
    }

    /// Return the amenity types that belong to this category.
    ///
    /// # Examples
    /// ```
    /// use cityscore_core::{AmenityType, Category};
    ///
    /// assert_eq!(
    ///     Category::Transportation.types(),
    ///     &[AmenityType::Metro, AmenityType::Train, AmenityType::Tram, AmenityType::Bus],
    /// );
    /// ```
    #[must_use]
    pub const fn types(self) -> &'static [AmenityType] {
        AmenityType::of_category(self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CategoryParseError(s.to_owned()))
    }
}
