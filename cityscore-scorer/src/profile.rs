//! Declarative scoring configuration for each category.
//!
//! One shared algorithm scores every category; the differences between
//! categories live entirely in the [`CategoryProfile`] table below.

use cityscore_core::{AmenityType, Category, PointOfInterest, SizeClass};

/// How a point's distance is weighed against the distance bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandRegime {
    /// A point contributes to the first band containing it only; points
    /// beyond the outermost radius fall into the last band.
    Exclusive,
    /// A point contributes to every band containing it; points beyond the
    /// outermost radius contribute nothing.
    Cumulative,
}

/// Multipliers applied according to a point's declared size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeModifiers {
    /// Multiplier for small features.
    pub small: f64,
    /// Multiplier for medium features.
    pub medium: f64,
    /// Multiplier for large features.
    pub large: f64,
}

impl SizeModifiers {
    /// Return the multiplier for `size`; unknown sizes are neutral.
    #[must_use]
    pub const fn factor(&self, size: Option<SizeClass>) -> f64 {
        match size {
            Some(SizeClass::Small) => self.small,
            Some(SizeClass::Medium) => self.medium,
            Some(SizeClass::Large) => self.large,
            None => 1.0,
        }
    }
}

/// Per-point adjustment of a category's contribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointModifier {
    /// Multiply facilities with an emergency department.
    Emergency(f64),
    /// Multiply outlets offering outdoor seating.
    OutdoorSeating(f64),
    /// Multiply restaurants that declare a cuisine.
    RestaurantCuisine(f64),
    /// Multiply venues whose access is `public`.
    PublicAccess(f64),
    /// Multiply by the declared size.
    Size(SizeModifiers),
    /// Add this amount per listed facility, scaled by the band decay.
    AmenityBonus(f64),
}

impl PointModifier {
    /// Return the multiplicative factor this modifier applies to `point`.
    #[must_use]
    pub fn factor(&self, point: &PointOfInterest) -> f64 {
        let attributes = &point.attributes;
        match *self {
            Self::Emergency(factor) if attributes.emergency == Some(true) => factor,
            Self::OutdoorSeating(factor) if attributes.outdoor_seating == Some(true) => factor,
            Self::RestaurantCuisine(factor)
                if point.kind == AmenityType::Restaurant && attributes.cuisine.is_some() =>
            {
                factor
            }
            Self::PublicAccess(factor) if attributes.access.as_deref() == Some("public") => factor,
            Self::Size(sizes) => sizes.factor(attributes.size),
            _ => 1.0,
        }
    }

    /// Return the additive bonus this modifier grants `point` before decay.
    #[expect(
        clippy::float_arithmetic,
        reason = "the bonus scales with the number of listed facilities"
    )]
    #[expect(
        clippy::cast_precision_loss,
        reason = "facility lists are far below 2^52 entries"
    )]
    #[must_use]
    pub fn bonus(&self, point: &PointOfInterest) -> f64 {
        match self {
            Self::AmenityBonus(per_amenity) => {
                point.attributes.amenities.len() as f64 * *per_amenity
            }
            _ => 0.0,
        }
    }
}

/// Scoring parameters of one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryProfile {
    /// Category scored with this profile.
    pub category: Category,
    /// Distance weighting regime.
    pub regime: BandRegime,
    /// Importance of each type, in breakdown order.
    pub type_weights: &'static [(AmenityType, f64)],
    /// Multiplier applied to `log10(raw + 1)` during normalisation.
    pub scale: f64,
    /// Dampening factor `k` applied when a type has more than five points.
    pub diminishing_returns: Option<f64>,
    /// Per-point adjustments, applied in order.
    pub modifiers: &'static [PointModifier],
}

const GREEN_SIZES: SizeModifiers = SizeModifiers {
    small: 0.1,
    medium: 1.0,
    large: 5.0,
};

const SHOP_SIZES: SizeModifiers = SizeModifiers {
    small: 0.7,
    medium: 1.0,
    large: 1.5,
};

const TRANSPORTATION: CategoryProfile = CategoryProfile {
    category: Category::Transportation,
    regime: BandRegime::Cumulative,
    type_weights: &[
        (AmenityType::Metro, 3.0),
        (AmenityType::Train, 2.0),
        (AmenityType::Tram, 1.5),
        (AmenityType::Bus, 1.0),
    ],
    scale: 40.0,
    diminishing_returns: Some(0.5),
    modifiers: &[],
};

const GREEN_SPACES: CategoryProfile = CategoryProfile {
    category: Category::GreenSpaces,
    regime: BandRegime::Cumulative,
    type_weights: &[
        (AmenityType::Park, 1.5),
        (AmenityType::Garden, 0.1),
        (AmenityType::Forest, 3.0),
        (AmenityType::Playground, 0.1),
        (AmenityType::NatureReserve, 4.0),
    ],
    scale: 35.0,
    diminishing_returns: None,
    modifiers: &[
        PointModifier::Size(GREEN_SIZES),
        PointModifier::AmenityBonus(0.2),
    ],
};

const EDUCATION: CategoryProfile = CategoryProfile {
    category: Category::Education,
    regime: BandRegime::Cumulative,
    type_weights: &[
        (AmenityType::University, 2.5),
        (AmenityType::College, 2.0),
        (AmenityType::School, 1.5),
        (AmenityType::Kindergarten, 1.0),
        (AmenityType::Library, 0.8),
    ],
    scale: 35.0,
    diminishing_returns: None,
    modifiers: &[],
};

const HEALTHCARE: CategoryProfile = CategoryProfile {
    category: Category::Healthcare,
    regime: BandRegime::Exclusive,
    type_weights: &[
        (AmenityType::Hospital, 3.0),
        (AmenityType::Clinic, 1.8),
        (AmenityType::Doctor, 1.2),
        (AmenityType::Pharmacy, 1.0),
    ],
    scale: 40.0,
    diminishing_returns: None,
    modifiers: &[PointModifier::Emergency(1.5)],
};

const SHOPPING: CategoryProfile = CategoryProfile {
    category: Category::Shopping,
    regime: BandRegime::Exclusive,
    type_weights: &[
        (AmenityType::Supermarket, 2.0),
        (AmenityType::Convenience, 1.0),
        (AmenityType::Mall, 2.5),
        (AmenityType::Market, 1.5),
    ],
    scale: 35.0,
    diminishing_returns: None,
    modifiers: &[PointModifier::Size(SHOP_SIZES)],
};

const FOOD_DINING: CategoryProfile = CategoryProfile {
    category: Category::FoodDining,
    regime: BandRegime::Exclusive,
    type_weights: &[
        (AmenityType::Restaurant, 1.8),
        (AmenityType::Cafe, 1.5),
        (AmenityType::Pub, 1.2),
        (AmenityType::FastFood, 1.0),
    ],
    scale: 50.0,
    diminishing_returns: Some(0.3),
    modifiers: &[
        PointModifier::OutdoorSeating(1.2),
        PointModifier::RestaurantCuisine(1.1),
    ],
};

const RECREATION_SPORTS: CategoryProfile = CategoryProfile {
    category: Category::RecreationSports,
    regime: BandRegime::Exclusive,
    type_weights: &[
        (AmenityType::SportsCentre, 2.0),
        (AmenityType::SwimmingPool, 1.8),
        (AmenityType::FitnessCentre, 1.5),
        (AmenityType::Pitch, 1.2),
        (AmenityType::Tennis, 1.0),
    ],
    scale: 35.0,
    diminishing_returns: None,
    modifiers: &[PointModifier::PublicAccess(1.3)],
};

const CULTURAL: CategoryProfile = CategoryProfile {
    category: Category::Cultural,
    regime: BandRegime::Exclusive,
    type_weights: &[
        (AmenityType::Museum, 1.8),
        (AmenityType::Theatre, 1.5),
        (AmenityType::Cinema, 1.2),
        (AmenityType::Gallery, 1.0),
    ],
    scale: 50.0,
    diminishing_returns: None,
    modifiers: &[],
};

impl CategoryProfile {
    /// Return the reference profile of `category`.
    ///
    /// # Examples
    /// ```
    /// use cityscore_core::Category;
    /// use cityscore_scorer::{BandRegime, CategoryProfile};
    ///
    /// let transport = CategoryProfile::reference(Category::Transportation);
    /// assert_eq!(transport.regime, BandRegime::Cumulative);
    /// assert_eq!(transport.scale, 40.0);
    /// ```
    #[must_use]
    pub const fn reference(category: Category) -> &'static Self {
        match category {
            Category::Transportation => &TRANSPORTATION,
            Category::GreenSpaces => &GREEN_SPACES,
            Category::Education => &EDUCATION,
            Category::Healthcare => &HEALTHCARE,
            Category::Shopping => &SHOPPING,
            Category::FoodDining => &FOOD_DINING,
            Category::RecreationSports => &RECREATION_SPORTS,
            Category::Cultural => &CULTURAL,
        }
    }

    /// Return the weight of `kind`, or `None` when the profile does not
    /// score it.
    #[must_use]
    pub fn type_weight(&self, kind: AmenityType) -> Option<f64> {
        self.type_weights
            .iter()
            .find_map(|(candidate, weight)| (*candidate == kind).then_some(*weight))
    }

    /// Return the product of every multiplicative modifier for `point`.
    #[expect(clippy::float_arithmetic, reason = "modifiers compose by multiplication")]
    #[must_use]
    pub fn point_factor(&self, point: &PointOfInterest) -> f64 {
        self.modifiers
            .iter()
            .fold(1.0, |factor, modifier| factor * modifier.factor(point))
    }

    /// Return the sum of every additive modifier for `point`.
    #[expect(clippy::float_arithmetic, reason = "bonuses compose by addition")]
    #[must_use]
    pub fn point_bonus(&self, point: &PointOfInterest) -> f64 {
        self.modifiers
            .iter()
            .fold(0.0, |bonus, modifier| bonus + modifier.bonus(point))
    }
}
