//! Behaviour tests for transit deduplication and green-space clustering.

use std::cell::RefCell;

use cityscore_core::test_support::{QUERY, offset_north, poi_at};
use cityscore_core::{AmenityType, PointOfInterest};
use cityscore_data::{ProximityDeduplicator, RawTransitRecord, SpatialClusterer};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[fixture]
fn records() -> RefCell<Vec<RawTransitRecord>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn spaces() -> RefCell<Vec<PointOfInterest>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn output() -> RefCell<Vec<PointOfInterest>> {
    RefCell::new(Vec::new())
}

fn bus_stops(separation: f64) -> Vec<RawTransitRecord> {
    let far = offset_north(QUERY, separation);
    vec![
        RawTransitRecord::new(1, QUERY.y, QUERY.x)
            .with_tag("highway", "bus_stop")
            .with_tag("route_ref", "175"),
        RawTransitRecord::new(2, far.y, far.x)
            .with_tag("highway", "bus_stop")
            .with_tag("route_ref", "128;175"),
    ]
}

#[given("two bus stop records 10 metres apart serving lines \"175\" and \"128;175\"")]
fn given_close_stops(#[from(records)] records: &RefCell<Vec<RawTransitRecord>>) {
    *records.borrow_mut() = bus_stops(10.0);
}

#[given("two bus stop records 20 metres apart serving lines \"175\" and \"128;175\"")]
fn given_distant_stops(#[from(records)] records: &RefCell<Vec<RawTransitRecord>>) {
    *records.borrow_mut() = bus_stops(20.0);
}

#[given("three unnamed parks 90 metres apart")]
fn given_parks(#[from(spaces)] spaces: &RefCell<Vec<PointOfInterest>>) {
    *spaces.borrow_mut() = vec![
        poi_at("w1", AmenityType::Park, 300.0),
        poi_at("w2", AmenityType::Park, 390.0),
        poi_at("w3", AmenityType::Park, 480.0),
    ];
}

#[when("I deduplicate the transit records")]
fn when_deduplicate(
    #[from(records)] records: &RefCell<Vec<RawTransitRecord>>,
    #[from(output)] output: &RefCell<Vec<PointOfInterest>>,
) {
    *output.borrow_mut() = ProximityDeduplicator::default().deduplicate(&records.borrow(), QUERY);
}

#[when("I cluster the green spaces")]
fn when_cluster(
    #[from(spaces)] spaces: &RefCell<Vec<PointOfInterest>>,
    #[from(output)] output: &RefCell<Vec<PointOfInterest>>,
) {
    *output.borrow_mut() = SpatialClusterer::default().cluster(&spaces.borrow());
}

#[then("there is 1 stop")]
fn then_one_stop(#[from(output)] output: &RefCell<Vec<PointOfInterest>>) {
    assert_eq!(output.borrow().len(), 1);
}

#[then("there are 2 stops")]
fn then_two_stops(#[from(output)] output: &RefCell<Vec<PointOfInterest>>) {
    assert_eq!(output.borrow().len(), 2);
}

#[then("the stop serves lines \"175\" and \"128\"")]
fn then_lines(#[from(output)] output: &RefCell<Vec<PointOfInterest>>) {
    let output = output.borrow();
    let lines = output.first().map(|stop| stop.attributes.lines.clone());
    assert_eq!(lines, Some(vec!["175".to_owned(), "128".to_owned()]));
}

#[then("there is 1 area named \"Park (area with 3 parks)\" merging 3 spaces")]
fn then_area(#[from(output)] output: &RefCell<Vec<PointOfInterest>>) {
    let output = output.borrow();
    let [area] = output.as_slice() else {
        panic!("expected one area, got {} areas", output.len());
    };
    assert_eq!(area.name.as_deref(), Some("Park (area with 3 parks)"));
    assert_eq!(area.attributes.cluster_count, Some(3));
}

#[scenario(path = "tests/features/shaping.feature", index = 0)]
fn close_transit_records_collapse(
    records: RefCell<Vec<RawTransitRecord>>,
    output: RefCell<Vec<PointOfInterest>>,
) {
    let _ = (records, output);
}

#[scenario(path = "tests/features/shaping.feature", index = 1)]
fn distant_transit_records_stay_distinct(
    records: RefCell<Vec<RawTransitRecord>>,
    output: RefCell<Vec<PointOfInterest>>,
) {
    let _ = (records, output);
}

#[scenario(path = "tests/features/shaping.feature", index = 2)]
fn adjacent_parks_form_one_area(
    spaces: RefCell<Vec<PointOfInterest>>,
    output: RefCell<Vec<PointOfInterest>>,
) {
    let _ = (spaces, output);
}
