//! Distance bands shared by every category scorer.
//!
//! Proximity is weighed in four radii around the query point. A point either
//! contributes to the first band that contains it (exclusive regime) or to
//! every band that contains it (cumulative regime); both views are derived
//! from the same constants.

/// Number of distance bands.
pub const BAND_COUNT: usize = 4;

/// Band radii in metres, nearest first.
pub const DISTANCE_BANDS_M: [f64; BAND_COUNT] = [250.0, 500.0, 750.0, 1000.0];

/// Decay weight applied to each band, aligned with [`DISTANCE_BANDS_M`].
pub const DISTANCE_DECAY: [f64; BAND_COUNT] = [1.0, 0.7, 0.4, 0.2];

/// Return the index of the first band whose radius contains `distance_m`.
///
/// Points beyond the outermost radius fall into the last band.
///
/// # Examples
/// ```
/// use cityscore_core::exclusive_band;
///
/// assert_eq!(exclusive_band(100.0), 0);
/// assert_eq!(exclusive_band(250.0), 0);
/// assert_eq!(exclusive_band(251.0), 1);
/// assert_eq!(exclusive_band(5_000.0), 3);
/// ```
#[must_use]
pub fn exclusive_band(distance_m: f64) -> usize {
    DISTANCE_BANDS_M
        .iter()
        .position(|radius| distance_m <= *radius)
        .unwrap_or(BAND_COUNT - 1)
}

/// Iterate over the indices of every band whose radius contains `distance_m`.
///
/// # Examples
/// ```
/// use cityscore_core::cumulative_bands;
///
/// assert_eq!(cumulative_bands(100.0).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
/// assert_eq!(cumulative_bands(900.0).collect::<Vec<_>>(), vec![3]);
/// assert_eq!(cumulative_bands(1_200.0).count(), 0);
/// ```
pub fn cumulative_bands(distance_m: f64) -> impl Iterator<Item = usize> {
    DISTANCE_BANDS_M
        .iter()
        .enumerate()
        .filter(move |(_, radius)| distance_m <= **radius)
        .map(|(index, _)| index)
}
