//! Merge fragmented transit records into one point per physical stop.
//!
//! Providers often report a single stop as several platform and
//! stop-position elements a few metres apart. The deduplicator groups them
//! greedily, picks the most informative member of each group as the
//! representative and unions the route identifiers of every member.

use std::collections::HashMap;

use cityscore_core::{AmenityType, Attributes, PointOfInterest};
use geo::Coord;
use log::{debug, warn};

use crate::capitalised;
use crate::index::ProximityIndex;

/// Distance in metres below which two transit records are the same stop.
pub const PROXIMITY_THRESHOLD_M: f64 = 15.0;

/// Transit element as delivered by the geodata provider, before
/// classification.
///
/// # Examples
/// ```
/// use cityscore_data::RawTransitRecord;
///
/// let record = RawTransitRecord::new(42, 52.2297, 21.0122)
///     .with_tag("highway", "bus_stop")
///     .with_tag("route_ref", "175;128");
///
/// assert!(record.location().is_some());
/// assert_eq!(record.tag("highway"), Some("bus_stop"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawTransitRecord {
    /// Provider element identifier.
    pub id: u64,
    /// Latitude in decimal degrees, when the element carries one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lat: Option<f64>,
    /// Longitude in decimal degrees, when the element carries one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lon: Option<f64>,
    /// Free-form key/value tags.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: HashMap<String, String>,
}

impl RawTransitRecord {
    /// Construct an untagged record at `lat`, `lon`.
    #[must_use]
    pub fn new(id: u64, lat: f64, lon: f64) -> Self {
        Self {
            id,
            lat: Some(lat),
            lon: Some(lon),
            tags: HashMap::new(),
        }
    }

    /// Add a tag and return the record.
    #[must_use]
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Return the value of tag `key`.
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Return the record's position when both components are finite numbers.
    #[must_use]
    pub fn location(&self) -> Option<Coord<f64>> {
        match (self.lon, self.lat) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some(Coord { x, y }),
            _ => None,
        }
    }

    fn has_tag(&self, key: &str, value: &str) -> bool {
        self.tag(key) == Some(value)
    }

    /// Return the value of tag `key` unless it is empty.
    fn filled_tag(&self, key: &str) -> Option<&str> {
        self.tag(key).filter(|value| !value.is_empty())
    }

    /// Rank how much the record tells a reader about the stop.
    fn info_score(&self) -> u8 {
        let mut score = 0;
        if self.filled_tag("name").is_some() {
            score += 10;
        }
        if self.has_tag("railway", "station")
            || self.has_tag("railway", "tram_stop")
            || self.has_tag("highway", "bus_stop")
        {
            score += 5;
        }
        if self.filled_tag("route_ref").is_some() {
            score += 5;
        }
        if self.filled_tag("ref").is_some() {
            score += 3;
        }
        score
    }

    /// Classify the stop served by the record.
    fn stop_type(&self) -> AmenityType {
        if self.has_tag("station", "subway") || self.has_tag("subway", "yes") {
            AmenityType::Metro
        } else if self.has_tag("railway", "station") || self.has_tag("railway", "halt") {
            AmenityType::Train
        } else if self.has_tag("railway", "tram_stop") || self.has_tag("tram", "yes") {
            AmenityType::Tram
        } else {
            AmenityType::Bus
        }
    }

    /// Route identifiers listed on the record, split on `;`.
    fn route_refs(&self) -> impl Iterator<Item = &str> {
        self.filled_tag("route_ref")
            .or_else(|| self.filled_tag("ref"))
            .into_iter()
            .flat_map(|refs| refs.split(';'))
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }
}

/// Collapses transit records closer than a threshold into single stops.
///
/// Records join the first group containing any member closer than
/// [`threshold_m`](Self::threshold_m); groups never merge once formed.
///
/// # Examples
/// ```
/// use cityscore_data::{ProximityDeduplicator, RawTransitRecord};
/// use geo::Coord;
///
/// let query = Coord { x: 21.0122, y: 52.2297 };
/// let records = [
///     RawTransitRecord::new(1, 52.23000, 21.0122).with_tag("route_ref", "175"),
///     RawTransitRecord::new(2, 52.23005, 21.0122)
///         .with_tag("name", "Centrum")
///         .with_tag("route_ref", "128"),
/// ];
///
/// let stops = ProximityDeduplicator::default().deduplicate(&records, query);
/// assert_eq!(stops.len(), 1);
/// assert_eq!(stops[0].name.as_deref(), Some("Centrum"));
/// assert_eq!(stops[0].attributes.lines, vec!["175", "128"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityDeduplicator {
    /// Strict upper bound in metres on the distance between grouped records.
    pub threshold_m: f64,
}

impl Default for ProximityDeduplicator {
    fn default() -> Self {
        Self {
            threshold_m: PROXIMITY_THRESHOLD_M,
        }
    }
}

impl ProximityDeduplicator {
    /// Construct a deduplicator with a custom threshold.
    #[must_use]
    pub const fn new(threshold_m: f64) -> Self {
        Self { threshold_m }
    }

    /// Group `records` and return one transportation point per group, with
    /// its distance from `query` cached.
    ///
    /// Records lacking numeric coordinates are skipped.
    #[must_use]
    pub fn deduplicate(
        &self,
        records: &[RawTransitRecord],
        query: Coord<f64>,
    ) -> Vec<PointOfInterest> {
        let located: Vec<(&RawTransitRecord, Coord<f64>)> = records
            .iter()
            .filter_map(|record| match record.location() {
                Some(location) => Some((record, location)),
                None => {
                    warn!("skipping transit record {} without coordinates", record.id);
                    None
                }
            })
            .collect();

        let groups = self.partition(&located);
        debug!(
            "deduplicated {} transit records into {} stops",
            located.len(),
            groups.len()
        );
        groups
            .iter()
            .filter_map(|members| merge_group(&located, members, query))
            .collect()
    }

    /// Assign each record, in input order, to the first group holding a
    /// member within the threshold.
    fn partition(&self, located: &[(&RawTransitRecord, Coord<f64>)]) -> Vec<Vec<usize>> {
        let mut groups: Vec<Vec<usize>> = Vec::new();
        let mut group_of: Vec<usize> = Vec::with_capacity(located.len());
        let mut index = ProximityIndex::default();
        let threshold = self.threshold_m;

        for (slot, (_, location)) in located.iter().enumerate() {
            let first_group = index
                .neighbours(*location, threshold, |d| d < threshold)
                .into_iter()
                .filter_map(|member| group_of.get(member).copied())
                .min();
            let group = match first_group {
                Some(group) => group,
                None => {
                    groups.push(Vec::new());
                    groups.len() - 1
                }
            };
            if let Some(members) = groups.get_mut(group) {
                members.push(slot);
            }
            group_of.push(group);
            index.insert(slot, *location);
        }
        groups
    }
}

/// Build the representative point of a group.
fn merge_group(
    located: &[(&RawTransitRecord, Coord<f64>)],
    members: &[usize],
    query: Coord<f64>,
) -> Option<PointOfInterest> {
    let records: Vec<(&RawTransitRecord, Coord<f64>)> = members
        .iter()
        .filter_map(|slot| located.get(*slot).copied())
        .collect();

    // `max_by_key` keeps the last maximum; reversing keeps the first.
    let (best, location) = records
        .iter()
        .rev()
        .max_by_key(|(record, _)| record.info_score())
        .copied()?;

    let mut lines: Vec<String> = Vec::new();
    for line in records.iter().flat_map(|(record, _)| record.route_refs()) {
        if !lines.iter().any(|known| known == line) {
            lines.push(line.to_owned());
        }
    }

    let kind = best.stop_type();
    let name = best
        .filled_tag("name")
        .or_else(|| best.filled_tag("ref"))
        .map_or_else(|| format!("{} Stop", capitalised(kind.as_str())), str::to_owned);

    let attributes = Attributes {
        lines,
        operator: best.tag("operator").map(str::to_owned),
        ..Attributes::default()
    };
    Some(
        PointOfInterest::new(format!("osm-{}", best.id), kind, location)
            .with_name(name)
            .with_attributes(attributes)
            .measured_from(query),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cityscore_core::test_support::{QUERY, offset_east, offset_north};
    use rstest::{fixture, rstest};

    fn record_at(id: u64, location: Coord<f64>) -> RawTransitRecord {
        RawTransitRecord::new(id, location.y, location.x)
    }

    #[fixture]
    fn deduplicator() -> ProximityDeduplicator {
        ProximityDeduplicator::default()
    }

    #[rstest]
    #[case(10.0, 1)]
    #[case(14.9, 1)]
    #[case(15.1, 2)]
    #[case(20.0, 2)]
    fn threshold_is_strict(
        deduplicator: ProximityDeduplicator,
        #[case] separation: f64,
        #[case] expected: usize,
    ) {
        let records = [
            record_at(1, QUERY),
            record_at(2, offset_north(QUERY, separation)),
        ];
        assert_eq!(deduplicator.deduplicate(&records, QUERY).len(), expected);
    }

    #[rstest]
    fn first_fit_does_not_merge_groups(deduplicator: ProximityDeduplicator) {
        // The middle record is near both ends but joins only the first group.
        let records = [
            record_at(1, QUERY),
            record_at(2, offset_north(QUERY, 24.0)),
            record_at(3, offset_north(QUERY, 12.0)),
        ];
        let stops = deduplicator.deduplicate(&records, QUERY);
        let ids: Vec<_> = stops.iter().map(|stop| stop.id.as_str()).collect();
        assert_eq!(ids, vec!["osm-1", "osm-2"]);
    }

    #[rstest]
    fn membership_checks_every_existing_member(deduplicator: ProximityDeduplicator) {
        let records = [
            record_at(1, QUERY),
            record_at(2, offset_north(QUERY, 10.0)),
            record_at(3, offset_north(QUERY, 20.0)),
        ];
        assert_eq!(deduplicator.deduplicate(&records, QUERY).len(), 1);
    }

    #[rstest]
    fn informative_member_represents_the_group(deduplicator: ProximityDeduplicator) {
        let records = [
            record_at(1, QUERY).with_tag("ref", "A"),
            record_at(2, offset_east(QUERY, 5.0))
                .with_tag("name", "Dworzec Centralny")
                .with_tag("railway", "station"),
            record_at(3, offset_north(QUERY, 5.0)).with_tag("name", "Other"),
        ];
        let stops = deduplicator.deduplicate(&records, QUERY);
        let [stop] = stops.as_slice() else {
            panic!("expected one stop, got {stops:?}");
        };
        assert_eq!(stop.id, "osm-2");
        assert_eq!(stop.kind, AmenityType::Train);
        assert_eq!(stop.name.as_deref(), Some("Dworzec Centralny"));
        assert_eq!(stop.attributes.lines, vec!["A"]);
    }

    #[rstest]
    fn empty_names_fall_back_to_the_ref(deduplicator: ProximityDeduplicator) {
        let records = [
            record_at(1, QUERY).with_tag("name", "").with_tag("ref", "A7"),
            record_at(2, offset_north(QUERY, 4.0)).with_tag("ref", "B2"),
        ];
        let stops = deduplicator.deduplicate(&records, QUERY);
        let [stop] = stops.as_slice() else {
            panic!("expected one stop, got {stops:?}");
        };
        // An empty name earns nothing, so the tie keeps the first member.
        assert_eq!(stop.id, "osm-1");
        assert_eq!(stop.name.as_deref(), Some("A7"));
    }

    #[rstest]
    fn ties_keep_the_first_member(deduplicator: ProximityDeduplicator) {
        let records = [
            record_at(1, QUERY).with_tag("ref", "7"),
            record_at(2, offset_north(QUERY, 3.0)).with_tag("ref", "9"),
        ];
        let stops = deduplicator.deduplicate(&records, QUERY);
        assert_eq!(stops.first().map(|s| s.id.as_str()), Some("osm-1"));
        assert_eq!(stops.first().and_then(|s| s.name.as_deref()), Some("7"));
    }

    #[rstest]
    fn lines_are_split_trimmed_and_unioned(deduplicator: ProximityDeduplicator) {
        let records = [
            record_at(1, QUERY).with_tag("route_ref", "175; 128"),
            record_at(2, offset_north(QUERY, 8.0))
                .with_tag("route_ref", "128;222 ")
                .with_tag("ref", "ignored"),
        ];
        let stops = deduplicator.deduplicate(&records, QUERY);
        assert_eq!(
            stops.first().map(|s| s.attributes.lines.clone()),
            Some(vec!["175".to_owned(), "128".to_owned(), "222".to_owned()])
        );
    }

    #[rstest]
    #[case(&[("station", "subway")], AmenityType::Metro, "Metro Stop")]
    #[case(&[("railway", "halt")], AmenityType::Train, "Train Stop")]
    #[case(&[("tram", "yes")], AmenityType::Tram, "Tram Stop")]
    #[case(&[], AmenityType::Bus, "Bus Stop")]
    fn unnamed_stops_are_named_after_their_type(
        deduplicator: ProximityDeduplicator,
        #[case] tags: &[(&str, &str)],
        #[case] kind: AmenityType,
        #[case] name: &str,
    ) {
        let record = tags
            .iter()
            .fold(record_at(9, QUERY), |record, (k, v)| record.with_tag(*k, *v));
        let stops = deduplicator.deduplicate(&[record], QUERY);
        assert_eq!(stops.first().map(|s| s.kind), Some(kind));
        assert_eq!(stops.first().and_then(|s| s.name.as_deref()), Some(name));
    }

    #[rstest]
    fn records_without_coordinates_are_skipped(deduplicator: ProximityDeduplicator) {
        let missing = RawTransitRecord {
            id: 5,
            lat: Some(52.0),
            ..RawTransitRecord::default()
        };
        let not_a_number = RawTransitRecord::new(6, f64::NAN, 21.0);
        let stops = deduplicator.deduplicate(&[missing, not_a_number], QUERY);
        assert!(stops.is_empty());
    }

    #[rstest]
    fn distance_is_measured_from_the_representative(deduplicator: ProximityDeduplicator) {
        let records = [
            record_at(1, offset_north(QUERY, 100.0)),
            record_at(2, offset_north(QUERY, 110.0)).with_tag("name", "Plac"),
        ];
        let stops = deduplicator.deduplicate(&records, QUERY);
        let distance = stops.first().and_then(|s| s.distance_from_query);
        assert!(distance.is_some_and(|d| (d - 110.0).abs() < 1e-6));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn bare_provider_elements_deserialise_with_defaults() {
        let record: RawTransitRecord =
            serde_json::from_str(r#"{ "id": 42 }"#).expect("bare element");
        assert_eq!(record.id, 42);
        assert!(record.location().is_none());
        assert!(record.tags.is_empty());

        let tagged: RawTransitRecord = serde_json::from_str(
            r#"{ "id": 7, "lat": 52.23, "lon": 21.01, "tags": { "route_ref": "175" } }"#,
        )
        .expect("tagged element");
        assert_eq!(tagged.location(), Some(Coord { x: 21.01, y: 52.23 }));
        assert_eq!(tagged.tag("route_ref"), Some("175"));
    }
}
