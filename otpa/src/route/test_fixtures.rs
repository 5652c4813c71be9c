use chrono::NaiveDate;
use geo::Point;
use otpa_core::model::{
    itinerary::Itinerary,
    trip::{Trip, TripCatalog, TripStart},
};
use serde_json::{json, Value};

/// 2013-05-06T08:00:00Z
pub const T0: i64 = 1_367_827_200_000;
const MIN: i64 = 60_000;

/// an itinerary walking to a bus, departing `start_min` minutes after T0
pub fn itinerary_json(start_min: i64, end_min: i64) -> Value {
    let walk_end = start_min + 5;
    json!({
        "startTime": T0 + start_min * MIN,
        "endTime": T0 + end_min * MIN,
        "walkTime": 300,
        "transitTime": (end_min - walk_end) * 60,
        "waitingTime": 0,
        "walkDistance": 400.0,
        "transfers": 0,
        "legs": [
            {
                "mode": "WALK",
                "startTime": T0 + start_min * MIN,
                "endTime": T0 + walk_end * MIN,
                "distance": 400.0,
                "duration": (walk_end - start_min) * MIN,
            },
            {
                "mode": "BUS",
                "startTime": T0 + walk_end * MIN,
                "endTime": T0 + end_min * MIN,
                "distance": 9000.0,
                "duration": (end_min - walk_end) * MIN,
                "agencyName": "Metro",
                "routeId": "900",
                "routeShortName": "900",
                "routeLongName": "Caulfield - Rowville",
            }
        ]
    })
}

pub fn itinerary_at(start_min: i64, end_min: i64) -> Itinerary {
    Itinerary::try_from(itinerary_json(start_min, end_min)).unwrap()
}

/// a `/plan` response body holding a single itinerary
pub fn plan_body(start_min: i64, end_min: i64) -> Vec<u8> {
    serde_json::to_vec(&json!({"plan": {"itineraries": [itinerary_json(start_min, end_min)]}})).unwrap()
}

pub fn planning_failure_body() -> Vec<u8> {
    br#"{"plan": null, "error": {"id": 404, "msg": "Trip is not possible."}}"#.to_vec()
}

/// trips with the given ids, all departing 2013-05-06 08:00
pub fn catalog(ids: &[&str]) -> TripCatalog {
    let start = NaiveDate::from_ymd_opt(2013, 5, 6)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    let trips = ids
        .iter()
        .map(|id| {
            Trip::new(
                id,
                Point::new(145.0, -37.8),
                Point::new(145.0, -37.9),
                TripStart::DateTime(start),
                "north",
                "south",
            )
        })
        .collect();
    TripCatalog::new(trips).unwrap()
}
