//! means of per-trip quantities over a set of routed trips. each returns
//! `None` for an empty set.
use chrono::TimeDelta;

use super::RoutedTrip;
use crate::util::time_utils;

fn mean<I: IntoIterator<Item = f64>>(values: I) -> Option<f64> {
    let (sum, n) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        None
    } else {
        Some(sum / n as f64)
    }
}

pub fn mean_total_time(trips: &[RoutedTrip]) -> Option<TimeDelta> {
    mean(trips.iter().map(|t| time_utils::total_seconds(&t.total_trip_duration())))
        .map(time_utils::from_seconds)
}

pub fn mean_initial_wait(trips: &[RoutedTrip]) -> Option<TimeDelta> {
    mean(trips.iter().map(|t| time_utils::total_seconds(&t.initial_wait())))
        .map(time_utils::from_seconds)
}

pub fn mean_transfer_wait(trips: &[RoutedTrip]) -> Option<TimeDelta> {
    mean(
        trips
            .iter()
            .map(|t| time_utils::total_seconds(&t.itinerary.transfer_wait())),
    )
    .map(time_utils::from_seconds)
}

/// mean of per-trip direct speeds. trips without a positive duration have no
/// speed and are left out of the mean.
pub fn mean_direct_speed_kmh(trips: &[RoutedTrip]) -> Option<f64> {
    mean(trips.iter().filter_map(|t| t.direct_speed_kmh()))
}

pub fn mean_distance_travelled_km(trips: &[RoutedTrip]) -> Option<f64> {
    mean(trips.iter().map(|t| t.itinerary.distance_travelled() / 1000.0))
}

pub fn mean_walk_distance_km(trips: &[RoutedTrip]) -> Option<f64> {
    mean(trips.iter().map(|t| t.itinerary.walk_distance() / 1000.0))
}

/// OTP reports -1 transfers for pure walking trips; these count as 0.
pub fn mean_transfers(trips: &[RoutedTrip]) -> Option<f64> {
    mean(trips.iter().map(|t| t.itinerary.transfers().max(0) as f64))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::aggregate::test_fixtures::{itinerary, leg, routed, trip};
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_transfers_remaps_pure_walks() {
        let trips: Vec<_> = ["a", "b", "c", "d"].iter().map(|id| trip(id, "X", "Y")).collect();
        let itins = [
            itinerary(&[leg("WALK", 0, 20, 1500.0)], -1, 1500.0, 0),
            itinerary(&[leg("WALK", 0, 20, 1500.0)], -1, 1500.0, 0),
            itinerary(&[leg("BUS", 5, 20, 5000.0)], 2, 0.0, 0),
            itinerary(&[leg("BUS", 5, 20, 5000.0)], 0, 0.0, 0),
        ];
        let routed: Vec<_> = trips.iter().zip(itins.iter()).map(|(t, i)| routed(t, i)).collect();
        assert_relative_eq!(mean_transfers(&routed).unwrap(), 0.5);
    }

    #[test]
    fn test_time_means() {
        let t1 = trip("a", "X", "Y");
        let t2 = trip("b", "X", "Y");
        let i1 = itinerary(&[leg("BUS", 10, 30, 5000.0)], 0, 0.0, 0);
        let i2 = itinerary(&[leg("BUS", 0, 40, 5000.0)], 0, 0.0, 120);
        let routed = vec![routed(&t1, &i1), routed(&t2, &i2)];
        assert_eq!(mean_total_time(&routed), Some(TimeDelta::minutes(35)));
        assert_eq!(mean_initial_wait(&routed), Some(TimeDelta::minutes(5)));
        assert_eq!(mean_transfer_wait(&routed), Some(TimeDelta::minutes(1)));
        assert_relative_eq!(mean_distance_travelled_km(&routed).unwrap(), 5.0);
        assert!(mean_total_time(&[]).is_none());
    }
}
