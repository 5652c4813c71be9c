use std::collections::BTreeMap;

use chrono::FixedOffset;
use otpa_core::{
    aggregate::{routed_trips, RoutedTrip},
    model::{
        itinerary::Itinerary,
        trip::{TripCatalog, TripTimeZone},
    },
};

use crate::route::test_fixtures::{catalog, itinerary_at};

/// two trips from "north" to "south", each walking then taking bus 900
pub fn trips_and_itineraries() -> (TripCatalog, BTreeMap<String, Itinerary>) {
    let itineraries = BTreeMap::from([
        (String::from("1"), itinerary_at(2, 40)),
        (String::from("2"), itinerary_at(4, 34)),
    ]);
    (catalog(&["1", "2"]), itineraries)
}

pub fn routed<'a>(catalog: &'a TripCatalog, itineraries: &'a BTreeMap<String, Itinerary>) -> Vec<RoutedTrip<'a>> {
    routed_trips(
        catalog,
        itineraries.iter().map(|(id, it)| (id.as_str(), it)),
        None,
        TripTimeZone::Fixed(FixedOffset::east_opt(0).unwrap()),
    )
    .unwrap()
}
