use std::fmt::Display;

use chrono::{DateTime, FixedOffset, TimeDelta};
use geo::Point;
use otpa_core::{
    model::{
        itinerary::{Itinerary, PlanResponse, PlanResult},
        GraphSpec, RoutingParameters,
    },
    request::{build_plan_url, OtpEndpoint, OtpQuery},
    util::{geo_utils, time_utils},
};

use crate::{
    client::{FailureCounter, FetchOutcome, Fetcher, RetryingFetcher, Sleeper},
    OtpaError,
};

/// statistics for one routed trip, for printing
#[derive(Debug, Clone, PartialEq)]
pub struct SingleTripReport {
    pub departs: DateTime<FixedOffset>,
    pub arrives: DateTime<FixedOffset>,
    pub total_time: TimeDelta,
    pub initial_wait: TimeDelta,
    pub transfer_wait: TimeDelta,
    pub total_wait: TimeDelta,
    pub walk_time: TimeDelta,
    pub walk_distance: f64,
    pub transit_time: TimeDelta,
    pub transfers: i32,
    /// meters
    pub direct_distance: f64,
    /// meters
    pub distance_travelled: f64,
    pub speed_along_route_kmh: Option<f64>,
    pub direct_speed_kmh: Option<f64>,
}

impl SingleTripReport {
    pub fn new(
        origin: &Point<f64>,
        destination: &Point<f64>,
        requested_start: &DateTime<FixedOffset>,
        itinerary: &Itinerary,
    ) -> SingleTripReport {
        let offset = requested_start.offset();
        let total_time = itinerary.total_trip_duration(requested_start);
        let direct_distance = geo_utils::haversine_distance_meters(origin, destination);
        SingleTripReport {
            departs: itinerary.start_time().with_timezone(offset),
            arrives: itinerary.end_time().with_timezone(offset),
            total_time,
            initial_wait: itinerary.initial_wait(requested_start),
            transfer_wait: itinerary.transfer_wait(),
            total_wait: itinerary.total_wait(requested_start),
            walk_time: itinerary.walk_duration(),
            walk_distance: itinerary.walk_distance(),
            transit_time: itinerary.transit_duration(),
            transfers: itinerary.transfers(),
            direct_distance,
            distance_travelled: itinerary.distance_travelled(),
            speed_along_route_kmh: itinerary.speed_along_route_kmh(requested_start),
            direct_speed_kmh: geo_utils::speed_kmh(direct_distance, time_utils::total_seconds(&total_time)),
        }
    }

    /// direct distance over distance travelled, 1.0 for a perfectly direct route
    pub fn directness_ratio(&self) -> Option<f64> {
        if self.distance_travelled > 0.0 {
            Some(self.direct_distance / self.distance_travelled)
        } else {
            None
        }
    }
}

fn format_optional(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.2}")).unwrap_or_else(|| String::from("n/a"))
}

impl Display for SingleTripReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fd = time_utils::format_duration;
        let pct = |part: &TimeDelta| time_utils::percent_of(part, &self.total_time);
        writeln!(f, "Trip departs at {}", self.departs)?;
        writeln!(f, "Trip arrives at {}", self.arrives)?;
        writeln!(f, "{} total time (inc initial wait)", fd(&self.total_time))?;
        writeln!(
            f,
            "  {} ({:.2}%) waiting ({} initial, {} transfers)",
            fd(&self.total_wait),
            pct(&self.total_wait),
            fd(&self.initial_wait),
            fd(&self.transfer_wait)
        )?;
        writeln!(
            f,
            "  {} ({:.2}%) walking (for {:.2}m)",
            fd(&self.walk_time),
            pct(&self.walk_time),
            self.walk_distance
        )?;
        writeln!(
            f,
            "  {} ({:.2}%) on transit vehicles ({} transfers)",
            fd(&self.transit_time),
            pct(&self.transit_time),
            self.transfers.max(0)
        )?;
        writeln!(f, "Total trip distance (as crow flies): {:.2}m.", self.direct_distance)?;
        writeln!(f, "Total trip distance (travelled): {:.2}m.", self.distance_travelled)?;
        writeln!(f, "(Trip directness ratio: {})", format_optional(self.directness_ratio()))?;
        writeln!(
            f,
            "Trip speed (along route, inc. init wait): {}km/h.",
            format_optional(self.speed_along_route_kmh)
        )?;
        write!(
            f,
            "Trip speed (as crow flies, inc. init wait): {}km/h.",
            format_optional(self.direct_speed_kmh)
        )
    }
}

/// routes one origin and destination on each graph and prints the trip's
/// statistics. returns the report for each graph the trip could be routed on.
pub fn route_single_trip_on_graphs<F: Fetcher, S: Sleeper>(
    endpoint: &OtpEndpoint,
    routing_params: &RoutingParameters,
    graphs: &[GraphSpec],
    origin: Point<f64>,
    destination: Point<f64>,
    requested_start: DateTime<FixedOffset>,
    fetcher: &RetryingFetcher<F, S>,
) -> Result<Vec<(String, Option<SingleTripReport>)>, OtpaError> {
    let departure = requested_start.naive_local();
    let query = OtpQuery {
        routing_params,
        date: departure.date(),
        time: departure.time(),
        origin,
        destination,
    };
    println!(
        "\nrouting a trip from {:?} to {:?}, leaving at {departure}:",
        origin.x_y(),
        destination.x_y()
    );

    let mut reports = vec![];
    for graph in graphs {
        // a single request never aborts the other graphs
        let mut failures = FailureCounter::new(usize::MAX);
        let url = build_plan_url(endpoint, &query, Some(&graph.router_id));
        let itinerary = match fetcher.fetch(&url, &mut failures) {
            FetchOutcome::Body(body) => match PlanResponse::from_slice(&body).map(PlanResponse::into_first_itinerary) {
                Ok(PlanResult::Itinerary(itinerary)) => Some(itinerary),
                Ok(PlanResult::PlanningFailed(reason)) | Ok(PlanResult::Malformed(reason)) => {
                    log::warn!("graph '{}': {reason}", graph.name);
                    None
                }
                Err(e) => {
                    log::warn!("graph '{}': unreadable response: {e}", graph.name);
                    None
                }
            },
            FetchOutcome::Failed { attempts } => {
                log::warn!("graph '{}': no response after {attempts} attempts", graph.name);
                None
            }
        };
        let report = itinerary.map(|it| SingleTripReport::new(&origin, &destination, &requested_start, &it));
        match &report {
            Some(report) => println!("\nrouting on the {} network/timetable:\n{report}", graph.name),
            None => println!("\nrouting on the {} network/timetable: failed to route.", graph.name),
        }
        reports.push((graph.name.clone(), report));
    }
    Ok(reports)
}
