use chrono::TimeDelta;

use super::{means_ops, RoutedTrip};
use crate::util::time_utils::{self, round_to};

/// summary means over a set of routed trips
#[derive(Debug, Clone, PartialEq)]
pub struct TripMeans {
    pub n_trips: usize,
    pub total_time: TimeDelta,
    pub initial_wait: TimeDelta,
    pub direct_speed_kmh: f64,
    pub distance_travelled_km: f64,
    pub walk_distance_km: f64,
    pub transfers: f64,
}

impl TripMeans {
    pub const OUTPUT_HEADERS: [&'static str; 7] = [
        "n trips",
        "total time (min)",
        "init wait (min)",
        "direct speed (kph)",
        "dist travelled (km)",
        "walk dist (km)",
        "transfers",
    ];

    pub const ROUND_DISTANCE_KM: u32 = 3;
    pub const ROUND_SPEED_KPH: u32 = 2;
    pub const ROUND_TRANSFERS: u32 = 1;
    pub const ROUND_TIME_MIN: u32 = 2;

    /// values in `OUTPUT_HEADERS` order, rounded for output
    pub fn formatted_row(&self) -> Vec<String> {
        vec![
            self.n_trips.to_string(),
            round_to(time_utils::total_minutes(&self.total_time), Self::ROUND_TIME_MIN).to_string(),
            round_to(time_utils::total_minutes(&self.initial_wait), Self::ROUND_TIME_MIN).to_string(),
            round_to(self.direct_speed_kmh, Self::ROUND_SPEED_KPH).to_string(),
            round_to(self.distance_travelled_km, Self::ROUND_DISTANCE_KM).to_string(),
            round_to(self.walk_distance_km, Self::ROUND_DISTANCE_KM).to_string(),
            round_to(self.transfers, Self::ROUND_TRANSFERS).to_string(),
        ]
    }
}

/// means over `trips`, or `None` when there are no trips
pub fn calc_means(trips: &[RoutedTrip]) -> Option<TripMeans> {
    if trips.is_empty() {
        return None;
    }
    Some(TripMeans {
        n_trips: trips.len(),
        total_time: means_ops::mean_total_time(trips)?,
        initial_wait: means_ops::mean_initial_wait(trips)?,
        direct_speed_kmh: means_ops::mean_direct_speed_kmh(trips).unwrap_or(0.0),
        distance_travelled_km: means_ops::mean_distance_travelled_km(trips)?,
        walk_distance_km: means_ops::mean_walk_distance_km(trips)?,
        transfers: means_ops::mean_transfers(trips)?,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::aggregate::test_fixtures::{itinerary, leg, routed, trip};

    #[test]
    fn test_formatted_row() {
        let t = trip("a", "X", "Y");
        let i = itinerary(
            &[leg("WALK", 0, 5, 333.3333), leg("TRAM", 10, 30, 6000.0)],
            0,
            333.3333,
            0,
        );
        let means = calc_means(&[routed(&t, &i)]).expect("non-empty set");
        let row = means.formatted_row();
        assert_eq!(row.len(), TripMeans::OUTPUT_HEADERS.len());
        assert_eq!(row[0], "1");
        assert_eq!(row[1], "30");
        assert_eq!(row[2], "0");
        assert_eq!(row[4], "6.333");
        assert_eq!(row[5], "0.333");
        assert_eq!(row[6], "0");
    }

    #[test]
    fn test_empty_set_has_no_means() {
        assert!(calc_means(&[]).is_none());
    }
}
