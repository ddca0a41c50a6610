//! Merge adjacent same-type green spaces into one area.
//!
//! Source data splits one contiguous park or forest into many polygons.
//! Larger spaces anchor clusters; every unclustered space of the same type
//! within the radius of an anchor joins it. Membership is measured from the
//! anchor only, never transitively.

use cityscore_core::{PointOfInterest, SizeClass};
use log::debug;

use crate::capitalised;
use crate::index::ProximityIndex;

/// Radius in metres around a cluster anchor.
pub const CLUSTER_RADIUS_M: f64 = 200.0;

/// Groups same-type green spaces around size-ranked anchors.
///
/// # Examples
/// ```
/// use cityscore_core::{AmenityType, PointOfInterest};
/// use cityscore_data::SpatialClusterer;
/// use geo::Coord;
///
/// let parks = [
///     PointOfInterest::new("w1", AmenityType::Park, Coord { x: 21.0100, y: 52.2300 }),
///     PointOfInterest::new("w2", AmenityType::Park, Coord { x: 21.0110, y: 52.2300 })
///         .with_name("Ogród Saski"),
/// ];
///
/// let areas = SpatialClusterer::default().cluster(&parks);
/// assert_eq!(areas.len(), 1);
/// assert_eq!(areas[0].name.as_deref(), Some("Ogród Saski (area with 2 parks)"));
/// assert_eq!(areas[0].attributes.cluster_count, Some(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialClusterer {
    /// Inclusive radius in metres around each anchor.
    pub radius_m: f64,
}

impl Default for SpatialClusterer {
    fn default() -> Self {
        Self {
            radius_m: CLUSTER_RADIUS_M,
        }
    }
}

impl SpatialClusterer {
    /// Construct a clusterer with a custom radius.
    #[must_use]
    pub const fn new(radius_m: f64) -> Self {
        Self { radius_m }
    }

    /// Return one point per cluster of `spaces`.
    ///
    /// Clusters are emitted in anchor order. An empty result means the
    /// category has no data.
    #[must_use]
    pub fn cluster(&self, spaces: &[PointOfInterest]) -> Vec<PointOfInterest> {
        let mut ordered: Vec<&PointOfInterest> = spaces
            .iter()
            .filter(|space| space.location.x.is_finite() && space.location.y.is_finite())
            .collect();
        // Stable sort: equal ranks keep input order.
        ordered.sort_by_key(|space| std::cmp::Reverse(SizeClass::rank_of(space.attributes.size)));

        let coords: Vec<_> = ordered.iter().map(|space| space.location).collect();
        let index = ProximityIndex::bulk_load(&coords);
        let radius = self.radius_m;
        let mut consumed = vec![false; ordered.len()];
        let mut areas = Vec::new();

        for (anchor_slot, anchor) in ordered.iter().enumerate() {
            if consumed.get(anchor_slot).copied().unwrap_or(true) {
                continue;
            }
            let mut members = vec![anchor_slot];
            members.extend(
                index
                    .neighbours(anchor.location, radius, |d| d <= radius)
                    .into_iter()
                    .filter(|slot| *slot != anchor_slot)
                    .filter(|slot| !consumed.get(*slot).copied().unwrap_or(true))
                    .filter(|slot| ordered.get(*slot).is_some_and(|s| s.kind == anchor.kind)),
            );
            for slot in &members {
                if let Some(flag) = consumed.get_mut(*slot) {
                    *flag = true;
                }
            }
            let group: Vec<&PointOfInterest> = members
                .iter()
                .filter_map(|slot| ordered.get(*slot).copied())
                .collect();
            areas.push(merge_cluster(anchor, &group));
        }

        debug!(
            "clustered {} green spaces into {} areas",
            ordered.len(),
            areas.len()
        );
        areas
    }
}

/// Build the representative of a cluster whose first member is `anchor`.
fn merge_cluster(anchor: &PointOfInterest, members: &[&PointOfInterest]) -> PointOfInterest {
    let label = anchor.kind.as_str();
    let placeholder = capitalised(label);
    let representative = members
        .iter()
        .copied()
        .find(|member| {
            member
                .name
                .as_deref()
                .is_some_and(|name| name != placeholder)
        })
        .unwrap_or(anchor);

    let mut area = representative.clone();
    if members.len() > 1 {
        let name = representative.name.as_deref().unwrap_or(&placeholder);
        area.name = Some(format!(
            "{name} (area with {} {label}s)",
            members.len()
        ));
        area.attributes.cluster_count = Some(members.len());
    }
    area
}

#[cfg(test)]
mod tests {
    use super::*;
    use cityscore_core::test_support::{QUERY, offset_east, offset_north, poi_at};
    use cityscore_core::{AmenityType, Attributes};
    use rstest::{fixture, rstest};

    fn sized(mut space: PointOfInterest, size: SizeClass) -> PointOfInterest {
        space.attributes = Attributes {
            size: Some(size),
            ..Attributes::default()
        };
        space
    }

    #[fixture]
    fn clusterer() -> SpatialClusterer {
        SpatialClusterer::default()
    }

    #[rstest]
    fn unnamed_parks_get_a_placeholder_area_name(clusterer: SpatialClusterer) {
        let parks = [
            poi_at("a", AmenityType::Park, 0.0),
            poi_at("b", AmenityType::Park, 80.0),
            poi_at("c", AmenityType::Park, 160.0),
        ];
        let areas = clusterer.cluster(&parks);
        let [area] = areas.as_slice() else {
            panic!("expected one area, got {areas:?}");
        };
        assert_eq!(area.id, "a");
        assert_eq!(area.name.as_deref(), Some("Park (area with 3 parks)"));
        assert_eq!(area.attributes.cluster_count, Some(3));
    }

    #[rstest]
    fn radius_is_measured_from_the_anchor(clusterer: SpatialClusterer) {
        let parks = [
            poi_at("a", AmenityType::Park, 0.0),
            poi_at("b", AmenityType::Park, 150.0),
            poi_at("c", AmenityType::Park, 300.0),
        ];
        let areas = clusterer.cluster(&parks);
        let ids: Vec<_> = areas.iter().map(|area| area.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(areas.get(1).is_some_and(|c| c.attributes.cluster_count.is_none()));
    }

    #[rstest]
    fn radius_is_inclusive(clusterer: SpatialClusterer) {
        let parks = [
            PointOfInterest::new("a", AmenityType::Forest, QUERY),
            PointOfInterest::new("b", AmenityType::Forest, offset_north(QUERY, 200.0)),
        ];
        assert_eq!(clusterer.cluster(&parks).len(), 1);
    }

    #[rstest]
    fn different_types_stay_apart(clusterer: SpatialClusterer) {
        let spaces = [
            poi_at("p", AmenityType::Park, 0.0),
            poi_at("g", AmenityType::Garden, 20.0),
        ];
        assert_eq!(clusterer.cluster(&spaces).len(), 2);
    }

    #[rstest]
    fn larger_spaces_anchor_clusters(clusterer: SpatialClusterer) {
        // The small park is listed first but the large one anchors, so the
        // far small park within 200 m of the large one joins it.
        let spaces = [
            sized(poi_at("small", AmenityType::Park, 0.0), SizeClass::Small),
            sized(
                PointOfInterest::new("large", AmenityType::Park, offset_east(QUERY, 150.0)),
                SizeClass::Large,
            ),
            PointOfInterest::new("far", AmenityType::Park, offset_east(QUERY, 320.0)),
        ];
        let areas = clusterer.cluster(&spaces);
        let [area] = areas.as_slice() else {
            panic!("expected one area, got {areas:?}");
        };
        assert_eq!(area.id, "large");
        assert_eq!(area.attributes.cluster_count, Some(3));
    }

    #[rstest]
    fn a_real_name_beats_the_placeholder(clusterer: SpatialClusterer) {
        let spaces = [
            poi_at("a", AmenityType::NatureReserve, 0.0).with_name("Nature_reserve"),
            poi_at("b", AmenityType::NatureReserve, 50.0).with_name("Las Kabacki"),
        ];
        let areas = clusterer.cluster(&spaces);
        assert_eq!(
            areas.first().and_then(|a| a.name.as_deref()),
            Some("Las Kabacki (area with 2 nature_reserves)")
        );
        assert_eq!(areas.first().map(|a| a.id.as_str()), Some("b"));
    }

    #[rstest]
    fn single_spaces_are_returned_unchanged(clusterer: SpatialClusterer) {
        let park = poi_at("solo", AmenityType::Park, 10.0).with_name("Skwer");
        assert_eq!(clusterer.cluster(std::slice::from_ref(&park)), vec![park]);
    }

    #[rstest]
    fn empty_input_yields_no_areas(clusterer: SpatialClusterer) {
        assert!(clusterer.cluster(&[]).is_empty());
    }
}
