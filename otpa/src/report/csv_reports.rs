use std::path::Path;

use csv::QuoteStyle;
use otpa_core::{
    aggregate::{calc_means, group_by_route, group_by_zone_pair, RouteStats, RoutedTrip, TripMeans},
    util::time_utils::{self, round_to},
};

use crate::OtpaError;

pub const ROUTE_HEADERS: [&str; 12] = [
    "Mode",
    "Agency",
    "R ID",
    "R S name",
    "R L name",
    "n trips",
    "n legs",
    "tot dist (km)",
    "tot wait (min)",
    "mean dist/leg (km)",
    "mean speed (km/h)",
    "mean wait (min)",
];

pub const OD_HEADERS: [&str; 2] = ["Origin zone", "Dest zone"];

fn open_writer(path: &Path) -> Result<csv::Writer<std::fs::File>, OtpaError> {
    csv::WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_path(path)
        .map_err(|e| OtpaError::OutputError {
            path: path.to_string_lossy().to_string(),
            message: e.to_string(),
        })
}

/// one row per transit route used by the trips, in mode, agency and route order.
/// returns the number of rows written.
pub fn write_route_csv(path: &Path, trips: &[RoutedTrip]) -> Result<usize, OtpaError> {
    let mut writer = open_writer(path)?;
    writer.write_record(ROUTE_HEADERS)?;
    let routes = group_by_route(trips);
    for (route, usages) in routes.iter() {
        let stats = RouteStats::calculate(usages)?;
        writer.write_record([
            route.mode.to_string(),
            route.agency.clone(),
            route.route_id.clone(),
            route.short_name.clone(),
            route.long_name.clone(),
            stats.n_trips.to_string(),
            stats.n_legs.to_string(),
            round_to(stats.total_distance_km, TripMeans::ROUND_DISTANCE_KM).to_string(),
            round_to(time_utils::total_minutes(&stats.total_wait), TripMeans::ROUND_TIME_MIN).to_string(),
            round_to(stats.mean_distance_per_leg_km, TripMeans::ROUND_DISTANCE_KM).to_string(),
            stats
                .mean_speed_kmh
                .map(|s| round_to(s, TripMeans::ROUND_SPEED_KPH).to_string())
                .unwrap_or_default(),
            round_to(time_utils::total_minutes(&stats.mean_wait), TripMeans::ROUND_TIME_MIN).to_string(),
        ])?;
    }
    writer.flush()?;
    log::info!("wrote {} routes to {}", routes.len(), path.to_string_lossy());
    Ok(routes.len())
}

/// trip means for each (origin zone, destination zone) pair. returns the
/// number of rows written.
pub fn write_od_csv(path: &Path, trips: &[RoutedTrip]) -> Result<usize, OtpaError> {
    let mut writer = open_writer(path)?;
    let headers = OD_HEADERS.iter().chain(TripMeans::OUTPUT_HEADERS.iter());
    writer.write_record(headers)?;
    let groups = group_by_zone_pair(trips);
    let mut n_rows = 0;
    for ((origin_zone, destination_zone), group) in groups.iter() {
        if let Some(means) = calc_means(group) {
            let mut row = vec![origin_zone.clone(), destination_zone.clone()];
            row.extend(means.formatted_row());
            writer.write_record(&row)?;
            n_rows += 1;
        }
    }
    writer.flush()?;
    log::info!("wrote {n_rows} zone pairs to {}", path.to_string_lossy());
    Ok(n_rows)
}
