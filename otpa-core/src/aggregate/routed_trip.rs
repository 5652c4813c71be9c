use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta};

use super::AggregateError;
use crate::{
    model::{
        itinerary::Itinerary,
        trip::{Trip, TripCatalog, TripTimeZone},
    },
    util::{geo_utils, time_utils},
};

/// a trip paired with its routed itinerary and the requested start, carrying
/// the offset in force on the trip's date.
#[derive(Debug, Clone)]
pub struct RoutedTrip<'a> {
    pub trip: &'a Trip,
    pub requested_start: DateTime<FixedOffset>,
    pub itinerary: &'a Itinerary,
}

impl<'a> RoutedTrip<'a> {
    pub fn id(&self) -> &str {
        self.trip.id()
    }

    pub fn total_trip_duration(&self) -> TimeDelta {
        self.itinerary.total_trip_duration(&self.requested_start)
    }

    pub fn initial_wait(&self) -> TimeDelta {
        self.itinerary.initial_wait(&self.requested_start)
    }

    /// straight-line speed from origin to destination over the total trip
    /// duration, in km/h
    pub fn direct_speed_kmh(&self) -> Option<f64> {
        geo_utils::speed_kmh(
            self.trip.direct_distance_meters(),
            time_utils::total_seconds(&self.total_trip_duration()),
        )
    }
}

/// pairs each itinerary with its trip. itineraries are keyed by trip id and
/// every id must be present in the catalog. requested starts are local times
/// in `time_zone`.
pub fn routed_trips<'a, I>(
    catalog: &'a TripCatalog,
    itineraries: I,
    base_date: Option<NaiveDate>,
    time_zone: TripTimeZone,
) -> Result<Vec<RoutedTrip<'a>>, AggregateError>
where
    I: IntoIterator<Item = (&'a str, &'a Itinerary)>,
{
    itineraries
        .into_iter()
        .map(|(trip_id, itinerary)| {
            let trip = catalog
                .get(trip_id)
                .ok_or_else(|| AggregateError::UnknownTripId(trip_id.to_string()))?;
            let naive = trip.requested_start(base_date)?;
            let requested_start = time_zone
                .localize(&naive)
                .ok_or_else(|| AggregateError::UnresolvableStart(trip_id.to_string()))?;
            Ok(RoutedTrip {
                trip,
                requested_start,
                itinerary,
            })
        })
        .collect()
}
