//! Test helpers for writing score requests to disk.

use camino::{Utf8Path, Utf8PathBuf};
use cityscore_core::test_support::{QUERY, offset_north};
use serde_json::{Value, json};
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

pub(super) fn temp_root() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// Return `{lat, lon}` for the point `metres` north of the query.
pub(super) fn north_of_query(metres: f64) -> Value {
    let coord = offset_north(QUERY, metres);
    json!({ "lat": coord.y, "lon": coord.x })
}

/// A request holding two fragments of one bus stop and a pharmacy, both
/// 100 metres from the query.
pub(super) fn sample_request() -> Value {
    let stop = offset_north(QUERY, 100.0);
    let fragment = offset_north(QUERY, 105.0);
    let pharmacy = north_of_query(100.0);
    json!({
        "location": { "lat": QUERY.y, "lon": QUERY.x },
        "enabled": { "transportation": true, "healthcare": true },
        "transit": [
            { "id": 1, "lat": stop.y, "lon": stop.x, "tags": { "name": "Centrum", "route_ref": "175" } },
            { "id": 2, "lat": fragment.y, "lon": fragment.x, "tags": { "route_ref": "128" } }
        ],
        "points": {
            "healthcare": [
                { "id": "ph-1", "type": "pharmacy", "lat": pharmacy["lat"], "lon": pharmacy["lon"] }
            ]
        }
    })
}

pub(super) fn write_request(path: &Utf8Path, request: &Value) {
    let payload = serde_json::to_vec_pretty(request).expect("serialise request");
    write_utf8(path, &payload);
}
