use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Leg;

/// the fields of an OTP itinerary this toolkit reads. times are epoch
/// milliseconds on the wire, durations are seconds, distances are meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryRecord {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub walk_time: i64,
    #[serde(default)]
    pub transit_time: i64,
    #[serde(default)]
    pub waiting_time: i64,
    #[serde(default)]
    pub walk_distance: f64,
    /// -1 denotes a pure walking trip
    #[serde(default)]
    pub transfers: i32,
    pub legs: Vec<Leg>,
}
