//! R\*-tree neighbour lookup over WGS84 coordinates.
//!
//! The tree indexes positions in degrees. Queries first select candidates
//! from a padded bounding box and then keep those whose haversine distance
//! passes the caller's predicate, so the result never depends on the box.

use cityscore_core::{EARTH_RADIUS_M, haversine_distance};
use geo::Coord;
use rstar::primitives::GeomWithData;
use rstar::{AABB, RTree};

type Entry = GeomWithData<[f64; 2], usize>;

/// Padding applied to the degree window around a query.
const WINDOW_PADDING: f64 = 1.5;

/// Latitude beyond which longitude windows degenerate and lookups scan.
const POLAR_LATITUDE: f64 = 89.0;

/// Spatial index mapping coordinates to caller-defined slots.
#[derive(Debug, Default)]
pub(crate) struct ProximityIndex {
    tree: RTree<Entry>,
}

impl ProximityIndex {
    /// Build an index over `coords`, keyed by their position in the slice.
    pub(crate) fn bulk_load(coords: &[Coord<f64>]) -> Self {
        let entries = coords
            .iter()
            .enumerate()
            .map(|(slot, coord)| Entry::new([coord.x, coord.y], slot))
            .collect();
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Add `coord` under `slot`.
    pub(crate) fn insert(&mut self, slot: usize, coord: Coord<f64>) {
        self.tree.insert(Entry::new([coord.x, coord.y], slot));
    }

    /// Return the slots whose distance to `centre` satisfies `accept`,
    /// considering only entries within `radius_m`, in ascending slot order.
    pub(crate) fn neighbours<F>(&self, centre: Coord<f64>, radius_m: f64, accept: F) -> Vec<usize>
    where
        F: Fn(f64) -> bool,
    {
        let keep = |entry: &Entry| {
            let [x, y] = *entry.geom();
            accept(haversine_distance(centre, Coord { x, y }))
        };
        let mut slots: Vec<usize> = match search_window(centre, radius_m) {
            Some(window) => self
                .tree
                .locate_in_envelope_intersecting(&window)
                .filter(|entry| keep(entry))
                .map(|entry| entry.data)
                .collect(),
            None => self
                .tree
                .iter()
                .filter(|entry| keep(entry))
                .map(|entry| entry.data)
                .collect(),
        };
        slots.sort_unstable();
        slots
    }
}

/// Return the degree box that contains every point within `radius_m` of
/// `centre`, or `None` when the box would wrap the antimeridian or a pole.
#[expect(
    clippy::float_arithmetic,
    reason = "the window converts an arc length into degree offsets"
)]
fn search_window(centre: Coord<f64>, radius_m: f64) -> Option<AABB<[f64; 2]>> {
    let d_lat = (radius_m / EARTH_RADIUS_M).to_degrees() * WINDOW_PADDING;
    let widest_lat = centre.y.abs() + d_lat;
    if widest_lat >= POLAR_LATITUDE {
        return None;
    }
    let d_lon = d_lat / widest_lat.to_radians().cos();
    let west = centre.x - d_lon;
    let east = centre.x + d_lon;
    if west < -180.0 || east > 180.0 {
        return None;
    }
    Some(AABB::from_corners(
        [west, centre.y - d_lat],
        [east, centre.y + d_lat],
    ))
}
