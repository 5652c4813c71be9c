use chrono::{NaiveDate, NaiveTime, Weekday};
use otpa_core::{
    aggregate::DepartureTimeCategory,
    model::{trip::TripTimeZone, GraphSpec, RoutingParameters},
    request::OtpEndpoint,
};
use serde::{Deserialize, Serialize};

use super::{read_configuration_file, BatchConfiguration};
use crate::OtpaError;

/// defines a batch of trips to route on one or more graphs, and the reports
/// produced from the results
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct RouteRunConfiguration {
    pub server_url: String,
    #[serde(default)]
    pub api_path: Option<String>,
    /// OTP web planner app, used to log links for trips that failed to plan
    #[serde(default)]
    pub web_app_url: Option<String>,
    #[serde(default)]
    pub routing_params: RoutingParameters,
    pub graphs: Vec<GraphSpec>,
    /// trip CSV with columns id,origin_lon,origin_lat,dest_lon,dest_lat,start,origin_zone,dest_zone
    pub trips_file: String,
    pub output_directory: String,
    /// date combined with trips that only carry a time of day
    #[serde(default)]
    pub base_date: Option<NaiveDate>,
    /// zone of the trips' local start times: "local" (the default), an IANA
    /// name like "Australia/Melbourne", or a fixed offset like "+10:00"
    #[serde(default, alias = "utc_offset")]
    pub time_zone: TripTimeZone,
    #[serde(default = "default_save_incrementally")]
    pub save_incrementally: bool,
    #[serde(default)]
    pub resume_existing: bool,
    #[serde(default)]
    pub batch: BatchConfiguration,
    /// departure windows for the by-departure-time summary, printed in this order
    #[serde(default)]
    pub departure_time_categories: Vec<NamedDepartureTimeCategory>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct NamedDepartureTimeCategory {
    pub name: String,
    pub days: Vec<Weekday>,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl NamedDepartureTimeCategory {
    pub fn category(&self) -> DepartureTimeCategory {
        DepartureTimeCategory {
            days: self.days.clone(),
            start: self.start,
            end: self.end,
        }
    }
}

fn default_save_incrementally() -> bool {
    true
}

impl RouteRunConfiguration {
    pub fn endpoint(&self) -> OtpEndpoint {
        let mut endpoint = OtpEndpoint::new(&self.server_url);
        if let Some(api_path) = &self.api_path {
            endpoint.api_path = api_path.clone();
        }
        endpoint
    }

    pub fn graph(&self, name: &str) -> Result<&GraphSpec, OtpaError> {
        self.graphs.iter().find(|g| g.name == name).ok_or_else(|| {
            OtpaError::ConfigurationError(format!("graph '{name}' is not configured"))
        })
    }
}

impl TryFrom<&String> for RouteRunConfiguration {
    type Error = OtpaError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        read_configuration_file(f)
    }
}
