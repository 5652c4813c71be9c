use chrono::{NaiveDate, NaiveTime};
use geo::Point;

use crate::model::RoutingParameters;

/// the shared portion of every OTP request: routing parameters, the departure
/// date and time, and the (lon, lat) places to route between.
#[derive(Debug, Clone)]
pub struct OtpQuery<'a> {
    pub routing_params: &'a RoutingParameters,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub origin: Point<f64>,
    pub destination: Point<f64>,
}

impl<'a> OtpQuery<'a> {
    pub const DATE_FORMAT: &'static str = "%Y-%m-%d";
    pub const TIME_FORMAT: &'static str = "%H:%M:%S";

    /// a query from a location to itself, as used for isochrones
    pub fn at_location(
        routing_params: &'a RoutingParameters,
        date: NaiveDate,
        time: NaiveTime,
        location: Point<f64>,
    ) -> OtpQuery<'a> {
        OtpQuery {
            routing_params,
            date,
            time,
            origin: location,
            destination: location,
        }
    }

    /// percent-encoded routing parameters followed by the origin and destination places
    pub(crate) fn place_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .routing_params
            .iter()
            .map(|(name, value)| {
                let encoded = urlencoding::encode(&value.to_string()).into_owned();
                (name.clone(), encoded)
            })
            .collect();
        pairs.push((String::from("fromPlace"), lat_lon(&self.origin)));
        pairs.push((String::from("toPlace"), lat_lon(&self.destination)));
        pairs
    }

    /// the place pairs followed by the departure time
    pub(crate) fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = self.place_pairs();
        let time = self.time.format(Self::TIME_FORMAT).to_string();
        pairs.push((
            String::from("time"),
            format!(
                "{}T{}",
                self.date.format(Self::DATE_FORMAT),
                urlencoding::encode(&time)
            ),
        ));
        pairs
    }
}

/// OTP places are written latitude first
fn lat_lon(point: &Point<f64>) -> String {
    format!("{},{}", point.y(), point.x())
}
