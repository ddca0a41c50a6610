//! Coordinate helpers shared by unit and behaviour tests.
//!
//! Fixtures place points at known distances from a query coordinate so that
//! band membership and proximity thresholds can be asserted exactly.

use geo::Coord;

use crate::{AmenityType, EARTH_RADIUS_M, PointOfInterest};

/// Query coordinate used by fixtures: central Warsaw.
pub const QUERY: Coord<f64> = Coord {
    x: 21.0122,
    y: 52.2297,
};

/// Return the coordinate `metres` due north of `origin`.
///
/// Moving along a meridian keeps the haversine distance equal to `metres`
/// up to floating-point rounding.
#[expect(
    clippy::float_arithmetic,
    reason = "degree offsets are derived from the arc length"
)]
#[must_use]
pub fn offset_north(origin: Coord<f64>, metres: f64) -> Coord<f64> {
    Coord {
        x: origin.x,
        y: origin.y + (metres / EARTH_RADIUS_M).to_degrees(),
    }
}

/// Return the coordinate `metres` due east of `origin` along its parallel.
#[expect(
    clippy::float_arithmetic,
    reason = "degree offsets are derived from the arc length"
)]
#[must_use]
pub fn offset_east(origin: Coord<f64>, metres: f64) -> Coord<f64> {
    let parallel_radius = EARTH_RADIUS_M * origin.y.to_radians().cos();
    Coord {
        x: origin.x + (metres / parallel_radius).to_degrees(),
        y: origin.y,
    }
}

/// Build a point of `kind` lying `metres` north of [`QUERY`], with its
/// distance already cached.
#[must_use]
pub fn poi_at(id: &str, kind: AmenityType, metres: f64) -> PointOfInterest {
    PointOfInterest::new(id, kind, offset_north(QUERY, metres)).measured_from(QUERY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::haversine_distance;
    use rstest::rstest;

    #[rstest]
    #[case(15.0)]
    #[case(250.0)]
    #[case(1_000.0)]
    fn offsets_land_at_the_requested_distance(#[case] metres: f64) {
        let north = haversine_distance(QUERY, offset_north(QUERY, metres));
        assert!((north - metres).abs() < 1e-6);
        // Parallels are not great circles, so the eastward offset is only close.
        let east = haversine_distance(QUERY, offset_east(QUERY, metres));
        assert!((east - metres).abs() < 0.01);
    }
}
