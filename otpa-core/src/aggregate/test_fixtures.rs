use chrono::{DateTime, FixedOffset, NaiveDate};
use geo::Point;
use serde_json::{json, Value};

use super::RoutedTrip;
use crate::model::{
    itinerary::Itinerary,
    trip::{Trip, TripStart},
};

/// 2013-05-06T08:00:00Z, a Monday
pub const T0: i64 = 1_367_827_200_000;
pub const MIN: i64 = 60_000;

pub struct LegSpec<'a> {
    pub mode: &'a str,
    pub start_min: i64,
    pub end_min: i64,
    pub distance: f64,
    pub agency: Option<&'a str>,
    pub route: Option<&'a str>,
}

pub fn leg<'a>(mode: &'a str, start_min: i64, end_min: i64, distance: f64) -> LegSpec<'a> {
    let agency = if mode == "WALK" { None } else { Some("Metro") };
    let route = if mode == "WALK" { None } else { Some("R1") };
    LegSpec {
        mode,
        start_min,
        end_min,
        distance,
        agency,
        route,
    }
}

pub fn itinerary(legs: &[LegSpec], transfers: i32, walk_distance: f64, waiting_s: i64) -> Itinerary {
    let start = legs.first().map(|l| l.start_min).unwrap_or(0);
    let end = legs.last().map(|l| l.end_min).unwrap_or(0);
    let legs_json: Vec<Value> = legs
        .iter()
        .map(|l| {
            json!({
                "mode": l.mode,
                "startTime": T0 + l.start_min * MIN,
                "endTime": T0 + l.end_min * MIN,
                "distance": l.distance,
                "duration": (l.end_min - l.start_min) * MIN,
                "agencyName": l.agency,
                "routeId": l.route,
                "routeShortName": l.route,
                "routeLongName": l.route.map(|r| format!("Route {r}")),
            })
        })
        .collect();
    Itinerary::try_from(json!({
        "startTime": T0 + start * MIN,
        "endTime": T0 + end * MIN,
        "walkTime": 0,
        "transitTime": 0,
        "waitingTime": waiting_s,
        "walkDistance": walk_distance,
        "transfers": transfers,
        "legs": legs_json,
    }))
    .expect("fixture itinerary should decode")
}

/// a trip departing at T0 from the origin, 0.1 degrees of latitude from its destination
pub fn trip(id: &str, origin_zone: &str, destination_zone: &str) -> Trip {
    let start = NaiveDate::from_ymd_opt(2013, 5, 6)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    Trip::new(
        id,
        Point::new(145.0, -37.8),
        Point::new(145.0, -37.9),
        TripStart::DateTime(start),
        origin_zone,
        destination_zone,
    )
}

pub fn routed<'a>(trip: &'a Trip, itinerary: &'a Itinerary) -> RoutedTrip<'a> {
    let requested_start: DateTime<FixedOffset> = DateTime::from_timestamp_millis(T0)
        .unwrap()
        .fixed_offset();
    RoutedTrip {
        trip,
        requested_start,
        itinerary,
    }
}
