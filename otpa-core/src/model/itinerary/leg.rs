use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use super::TravelMode;
use crate::util::geo_utils;

/// one leg of an OTP itinerary. distances are meters, durations are milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    pub mode: TravelMode,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub end_time: DateTime<Utc>,
    pub distance: f64,
    pub duration: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agency_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_short_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_long_name: Option<String>,
}

impl Leg {
    pub fn duration(&self) -> TimeDelta {
        TimeDelta::milliseconds(self.duration)
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration as f64 / 1000.0
    }

    /// in-vehicle speed in km/h. zero-duration legs have no speed.
    pub fn speed_kmh(&self) -> Option<f64> {
        geo_utils::speed_kmh(self.distance, self.duration_seconds())
    }
}
