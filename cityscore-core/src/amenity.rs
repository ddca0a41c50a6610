//! Category-specific amenity types.
//!
//! Every type belongs to exactly one [`Category`]; a point of interest derives
//! its category from its type, so the two can never disagree. Labels are the
//! snake_case identifiers providers classify records into.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::Category;

macro_rules! amenity_types {
    ($(
        $category:ident => [$( $(#[$doc:meta])* $variant:ident = $label:literal ),+ $(,)?]
    ),+ $(,)?) => {
        /// A specific kind of amenity within a category.
        ///
        /// # Examples
        /// ```
        /// use cityscore_core::{AmenityType, Category};
        ///
        /// assert_eq!(AmenityType::NatureReserve.as_str(), "nature_reserve");
        /// assert_eq!(AmenityType::Pharmacy.category(), Category::Healthcare);
        /// ```
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum AmenityType {
            $($(
                $(#[$doc])*
                #[cfg_attr(feature = "serde", serde(rename = $label))]
                $variant,
            )+)+
        }

        impl AmenityType {
            /// Every amenity type, grouped by category in presentation order.
            pub const ALL: &'static [Self] = &[$($(Self::$variant,)+)+];

            /// Return the snake_case label of the type.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($(Self::$variant => $label,)+)+
                }
            }

            /// Return the category the type belongs to.
            #[must_use]
            pub const fn category(self) -> Category {
                match self {
                    $($(Self::$variant => Category::$category,)+)+
                }
            }

            /// Return the types of `category` in presentation order.
            #[must_use]
            pub const fn of_category(category: Category) -> &'static [Self] {
                match category {
                    $(Category::$category => &[$(Self::$variant),+],)+
                }
            }
        }
    };
}

amenity_types! {
    Transportation => [
        /// Metro or subway station.
        Metro = "metro",
        /// Railway station or halt.
        Train = "train",
        /// Tram stop.
        Tram = "tram",
        /// Bus stop.
        Bus = "bus",
    ],
    GreenSpaces => [
        /// Park, including grass, meadow and village-green areas.
        Park = "park",
        /// Garden.
        Garden = "garden",
        /// Forest or wood.
        Forest = "forest",
        /// Playground.
        Playground = "playground",
        /// Nature reserve.
        NatureReserve = "nature_reserve",
    ],
    Education => [
        /// University.
        University = "university",
        /// College.
        College = "college",
        /// School.
        School = "school",
        /// Kindergarten or preschool.
        Kindergarten = "kindergarten",
        /// Library.
        Library = "library",
    ],
    Healthcare => [
        /// Hospital.
        Hospital = "hospital",
        /// Clinic.
        Clinic = "clinic",
        /// Doctor's practice.
        Doctor = "doctor",
        /// Pharmacy.
        Pharmacy = "pharmacy",
    ],
    Shopping => [
        /// Supermarket.
        Supermarket = "supermarket",
        /// Convenience store.
        Convenience = "convenience",
        /// Shopping mall.
        Mall = "mall",
        /// Marketplace.
        Market = "market",
    ],
    FoodDining => [
        /// Restaurant.
        Restaurant = "restaurant",
        /// Cafe.
        Cafe = "cafe",
        /// Pub.
        Pub = "pub",
        /// Fast food outlet.
        FastFood = "fast_food",
    ],
    RecreationSports => [
        /// Sports centre.
        SportsCentre = "sports_centre",
        /// Swimming pool.
        SwimmingPool = "swimming_pool",
        /// Fitness centre.
        FitnessCentre = "fitness_centre",
        /// Sports pitch other than tennis.
        Pitch = "pitch",
        /// Tennis court.
        Tennis = "tennis",
    ],
    Cultural => [
        /// Museum.
        Museum = "museum",
        /// Theatre.
        Theatre = "theatre",
        /// Cinema.
        Cinema = "cinema",
        /// Art gallery.
        Gallery = "gallery",
    ],
}

/// Error returned when a label does not name an amenity type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown amenity type '{0}'")]
pub struct AmenityTypeParseError(pub String);

impl AmenityType {
    /// Map a loosely labelled provider type onto a type of `category`.
    ///
    /// Transportation, green spaces and education accept free-form labels
    /// and fall back to their baseline type (bus, park, school). The other
    /// categories only accept their exact labels.
    ///
    /// # Examples
    /// ```
    /// use cityscore_core::{AmenityType, Category};
    ///
    /// assert_eq!(
    ///     AmenityType::normalise(Category::Transportation, "Subway entrance"),
    ///     Some(AmenityType::Metro),
    /// );
    /// assert_eq!(
    ///     AmenityType::normalise(Category::GreenSpaces, "woodland"),
    ///     Some(AmenityType::Forest),
    /// );
    /// assert_eq!(AmenityType::normalise(Category::Healthcare, "dentist"), None);
    /// ```
    #[must_use]
    pub fn normalise(category: Category, label: &str) -> Option<Self> {
        let lower = label.to_lowercase();
        let has = |needle: &str| lower.contains(needle);
        match category {
            Category::Transportation => Some(if has("metro") || has("subway") {
                Self::Metro
            } else if has("train") || has("rail") {
                Self::Train
            } else if has("tram") {
                Self::Tram
            } else {
                Self::Bus
            }),
            Category::GreenSpaces => Some(if has("park") {
                Self::Park
            } else if has("garden") {
                Self::Garden
            } else if has("forest") || has("wood") {
                Self::Forest
            } else if has("playground") {
                Self::Playground
            } else if has("nature") || has("reserve") {
                Self::NatureReserve
            } else {
                Self::Park
            }),
            Category::Education => Some(if has("university") {
                Self::University
            } else if has("college") {
                Self::College
            } else if has("school") {
                Self::School
            } else if has("kindergarten") || has("preschool") {
                Self::Kindergarten
            } else if has("library") {
                Self::Library
            } else {
                Self::School
            }),
            _ => category
                .types()
                .iter()
                .copied()
                .find(|kind| kind.as_str() == lower),
        }
    }

    /// Return the name shown next to counts of this type.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Metro => "Metro",
            Self::Train => "Train/Rail",
            Self::Tram => "Tram",
            Self::Bus => "Bus",
            Self::Park => "Park",
            Self::Garden => "Garden",
            Self::Forest => "Forest",
            Self::Playground => "Playground",
            Self::NatureReserve => "Nature Reserve",
            Self::University => "University",
            Self::College => "College",
            Self::School => "School",
            Self::Kindergarten => "Kindergarten",
            Self::Library => "Library",
            Self::Hospital => "Hospital",
            Self::Clinic => "Clinic",
            Self::Doctor => "Doctor",
            Self::Pharmacy => "Pharmacy",
            Self::Supermarket => "Supermarket",
            Self::Convenience => "Convenience Store",
            Self::Mall => "Shopping Mall",
            Self::Market => "Market",
            Self::Restaurant => "Restaurant",
            Self::Cafe => "Cafe",
            Self::Pub => "Pub",
            Self::FastFood => "Fast Food",
            Self::SportsCentre => "Sports Center",
            Self::SwimmingPool => "Swimming Pool",
            Self::FitnessCentre => "Fitness Center",
            Self::Pitch => "Sports Field",
            Self::Tennis => "Tennis Court",
            Self::Museum => "Museum",
            Self::Theatre => "Theater",
            Self::Cinema => "Cinema",
            Self::Gallery => "Art Gallery",
        }
    }
}

impl fmt::Display for AmenityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AmenityType {
    type Err = AmenityTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| AmenityTypeParseError(s.to_owned()))
    }
}
