//! Great-circle distance between WGS84 coordinates.
//!
//! Distances use the haversine formula on a spherical earth. The function is
//! pure and symmetric, so callers may compute it in any order and cache the
//! result on the point it belongs to.

use geo::Coord;

/// Mean earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Return the haversine distance in metres between two coordinates.
///
/// The result is exactly `0.0` for identical coordinates and never `NaN` for
/// finite input.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use cityscore_core::haversine_distance;
///
/// let palace = Coord { x: 21.0122, y: 52.2297 };
/// let station = Coord { x: 21.0031, y: 52.2287 };
///
/// let there = haversine_distance(palace, station);
/// let back = haversine_distance(station, palace);
/// assert_eq!(there, back);
/// assert!((600.0..650.0).contains(&there));
/// assert_eq!(haversine_distance(palace, palace), 0.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
#[must_use]
pub fn haversine_distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    if a == b {
        return 0.0;
    }
    let lat_a = a.y.to_radians();
    let lat_b = b.y.to_radians();
    let half_d_lat = (b.y - a.y).to_radians() / 2.0;
    let half_d_lon = (b.x - a.x).to_radians() / 2.0;

    let h = half_d_lat.sin().powi(2) + lat_a.cos() * lat_b.cos() * half_d_lon.sin().powi(2);
    // Rounding can push `h` marginally above 1 for antipodal points.
    let central_angle = 2.0 * h.sqrt().min(1.0).asin();
    EARTH_RADIUS_M * central_angle
}

/// Report whether a coordinate can be scored.
///
/// Both components must be finite and non-zero; providers report a missing
/// latitude or longitude as zero.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use cityscore_core::is_valid_location;
///
/// assert!(is_valid_location(Coord { x: 21.0, y: 52.2 }));
/// assert!(!is_valid_location(Coord { x: 0.0, y: 52.2 }));
/// assert!(!is_valid_location(Coord { x: f64::NAN, y: 52.2 }));
/// ```
#[must_use]
pub fn is_valid_location(location: Coord<f64>) -> bool {
    location.x.is_finite() && location.y.is_finite() && location.x != 0.0 && location.y != 0.0
}
