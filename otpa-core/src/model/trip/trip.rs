use chrono::{NaiveDate, NaiveDateTime};
use geo::Point;
use serde::{Deserialize, Serialize};

use super::TripStart;
use crate::{model::ModelError, util::geo_utils};

/// a requested trip between two locations. coordinates are (lon, lat) in EPSG:4326.
/// a trip is immutable once constructed; changing the start produces a derived copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    id: String,
    origin: Point<f64>,
    destination: Point<f64>,
    start: TripStart,
    origin_zone: String,
    destination_zone: String,
}

impl Trip {
    pub fn new(
        id: &str,
        origin: Point<f64>,
        destination: Point<f64>,
        start: TripStart,
        origin_zone: &str,
        destination_zone: &str,
    ) -> Trip {
        Trip {
            id: id.to_string(),
            origin,
            destination,
            start,
            origin_zone: origin_zone.to_string(),
            destination_zone: destination_zone.to_string(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn origin(&self) -> &Point<f64> {
        &self.origin
    }

    pub fn destination(&self) -> &Point<f64> {
        &self.destination
    }

    pub fn start(&self) -> &TripStart {
        &self.start
    }

    pub fn origin_zone(&self) -> &str {
        &self.origin_zone
    }

    pub fn destination_zone(&self) -> &str {
        &self.destination_zone
    }

    /// copy of this trip with a time-only start combined with `date`.
    pub fn with_start_date(&self, date: NaiveDate) -> Trip {
        Trip {
            start: TripStart::DateTime(self.start.with_date(date)),
            ..self.clone()
        }
    }

    /// the full requested start of this trip, using `base_date` for time-only starts.
    pub fn requested_start(&self, base_date: Option<NaiveDate>) -> Result<NaiveDateTime, ModelError> {
        match (self.start, base_date) {
            (TripStart::DateTime(dt), _) => Ok(dt),
            (TripStart::Time(_), Some(date)) => Ok(self.start.with_date(date)),
            (TripStart::Time(_), None) => Err(ModelError::UnresolvedTripStart(self.id.clone())),
        }
    }

    /// great-circle distance between origin and destination, in meters
    pub fn direct_distance_meters(&self) -> f64 {
        geo_utils::haversine_distance_meters(&self.origin, &self.destination)
    }
}

#[cfg(test)]
mod test {
    use super::Trip;
    use crate::model::trip::TripStart;
    use chrono::{NaiveDate, NaiveTime};
    use geo::Point;

    fn time_only_trip() -> Trip {
        Trip::new(
            "t1",
            Point::new(144.9631, -37.8136),
            Point::new(145.1316, -37.9143),
            TripStart::Time(NaiveTime::from_hms_opt(8, 0, 0).unwrap()),
            "Melbourne",
            "Monash",
        )
    }

    #[test]
    fn test_with_start_date_is_a_derived_copy() {
        let trip = time_only_trip();
        let date = NaiveDate::from_ymd_opt(2013, 5, 6).unwrap();
        let dated = trip.with_start_date(date);
        assert_eq!(trip.start(), &TripStart::Time(NaiveTime::from_hms_opt(8, 0, 0).unwrap()));
        assert_eq!(dated.start().datetime().map(|dt| dt.date()), Some(date));
        assert_eq!(dated.origin(), trip.origin());
        assert_eq!(dated.id(), trip.id());
    }

    #[test]
    fn test_requested_start_requires_base_date() {
        let trip = time_only_trip();
        assert!(trip.requested_start(None).is_err());
        let date = NaiveDate::from_ymd_opt(2013, 5, 6).unwrap();
        let resolved = trip.requested_start(Some(date)).expect("should resolve");
        assert_eq!(resolved, date.and_hms_opt(8, 0, 0).unwrap());
    }

    #[test]
    fn test_direct_distance() {
        let trip = time_only_trip();
        let d = trip.direct_distance_meters();
        // roughly 18.5 km between the Melbourne CBD and Clayton
        assert!(d > 17_000.0 && d < 20_000.0, "unexpected distance {d}");
    }
}
