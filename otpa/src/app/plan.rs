use std::str::FromStr;

use geo::Point;
use otpa_core::model::{trip::TripStart, ModelError};

use crate::{
    client::{HttpFetcher, RetryPolicy, RetryingFetcher, ThreadSleeper},
    config::RouteRunConfiguration,
    route::route_single_trip_on_graphs,
    OtpaError,
};

/// routes a single trip on every configured graph, printing its statistics
pub fn run_plan(config: &String, origin: &str, destination: &str, departure: &str) -> Result<(), OtpaError> {
    let conf = RouteRunConfiguration::try_from(config)?;
    let origin = parse_lon_lat(origin)?;
    let destination = parse_lon_lat(destination)?;
    let departure = match TripStart::from_str(departure)? {
        TripStart::DateTime(datetime) => datetime,
        TripStart::Time(time) => conf
            .base_date
            .map(|date| date.and_time(time))
            .ok_or_else(|| ModelError::UnresolvedTripStart(String::from("plan")))?,
    };
    let requested_start = conf.time_zone.localize(&departure).ok_or_else(|| {
        OtpaError::ConfigurationError(format!(
            "departure {departure} does not exist in time zone {}",
            conf.time_zone
        ))
    })?;

    let fetcher = HttpFetcher::new()?;
    let sleeper = ThreadSleeper;
    let retrying = RetryingFetcher::new(&fetcher, &sleeper, RetryPolicy::from(&conf.batch));
    let reports = route_single_trip_on_graphs(
        &conf.endpoint(),
        &conf.routing_params,
        &conf.graphs,
        origin,
        destination,
        requested_start,
        &retrying,
    )?;
    let n_routed = reports.iter().filter(|(_, r)| r.is_some()).count();
    log::info!("trip routed on {n_routed} of {} graphs", reports.len());
    Ok(())
}

/// parses `LON,LAT`
fn parse_lon_lat(s: &str) -> Result<Point<f64>, OtpaError> {
    let invalid = |msg: String| OtpaError::ModelError {
        source: ModelError::InvalidCoordinate(msg),
    };
    let (lon, lat) = s
        .split_once(',')
        .ok_or_else(|| invalid(format!("'{s}' is not LON,LAT")))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .map_err(|e| invalid(format!("longitude '{lon}': {e}")))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|e| invalid(format!("latitude '{lat}': {e}")))?;
    if !(-180.0..=180.0).contains(&lon) || !(-90.0..=90.0).contains(&lat) {
        return Err(invalid(format!("'{s}' is out of range")));
    }
    Ok(Point::new(lon, lat))
}
