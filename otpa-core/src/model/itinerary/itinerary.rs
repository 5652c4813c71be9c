use std::{
    collections::{BTreeMap, BTreeSet},
    sync::OnceLock,
};

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use serde_json::Value;

use super::{ItineraryRecord, Leg, TravelMode};
use crate::{
    model::ModelError,
    util::{geo_utils, time_utils},
};

/// a single OTP itinerary. the raw server JSON is kept alongside the decoded
/// record so that a saved itinerary carries every field the server sent.
///
/// all derived quantities are computed on each call except the travelled
/// distance, which is assigned at most once.
#[derive(Debug, Clone)]
pub struct Itinerary {
    raw: Value,
    record: ItineraryRecord,
    distance_travelled: OnceLock<f64>,
}

impl TryFrom<Value> for Itinerary {
    type Error = ModelError;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        let record: ItineraryRecord = serde_json::from_value(raw.clone())?;
        Ok(Itinerary {
            raw,
            record,
            distance_travelled: OnceLock::new(),
        })
    }
}

impl Itinerary {
    pub fn from_json_str(json: &str) -> Result<Itinerary, ModelError> {
        let raw: Value = serde_json::from_str(json)?;
        Itinerary::try_from(raw)
    }

    pub fn raw_json(&self) -> &Value {
        &self.raw
    }

    pub fn record(&self) -> &ItineraryRecord {
        &self.record
    }

    pub fn legs(&self) -> &[Leg] {
        &self.record.legs
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.record.start_time
    }

    pub fn end_time(&self) -> DateTime<Utc> {
        self.record.end_time
    }

    /// time from the requested start until arrival, including the initial wait.
    pub fn total_trip_duration(&self, requested_start: &DateTime<FixedOffset>) -> TimeDelta {
        self.record.end_time.signed_duration_since(requested_start)
    }

    /// time between the requested start and the itinerary's departure. may be
    /// negative if the server chose an earlier departure.
    pub fn initial_wait(&self, requested_start: &DateTime<FixedOffset>) -> TimeDelta {
        self.record.start_time.signed_duration_since(requested_start)
    }

    /// gap between the end of the previous leg and the start of leg `leg_index`.
    /// for the first leg this is the initial wait.
    pub fn wait_before_leg(
        &self,
        leg_index: usize,
        requested_start: &DateTime<FixedOffset>,
    ) -> Result<TimeDelta, ModelError> {
        let legs = self.legs();
        if leg_index >= legs.len() {
            return Err(ModelError::LegIndexOutOfRange {
                leg_index,
                n_legs: legs.len(),
            });
        }
        if leg_index == 0 {
            return Ok(self.initial_wait(requested_start));
        }
        let previous = &legs[leg_index - 1];
        Ok(legs[leg_index]
            .start_time
            .signed_duration_since(previous.end_time))
    }

    /// wait before leg `leg_index` where walking legs immediately preceding it
    /// count as part of the transfer: their own waits are added in, walking
    /// backward until a non-walk leg is reached.
    pub fn transfer_wait_before_leg(
        &self,
        leg_index: usize,
        requested_start: &DateTime<FixedOffset>,
    ) -> Result<TimeDelta, ModelError> {
        let mut wait = self.wait_before_leg(leg_index, requested_start)?;
        if leg_index == 0 {
            return Ok(wait);
        }
        let legs = self.legs();
        for previous in (0..leg_index).rev() {
            if !legs[previous].mode.is_walk() {
                break;
            }
            wait += self.wait_before_leg(previous, requested_start)?;
        }
        Ok(wait)
    }

    /// transfer waiting time as reported by the server, which excludes the initial wait.
    pub fn transfer_wait(&self) -> TimeDelta {
        TimeDelta::seconds(self.record.waiting_time)
    }

    pub fn total_wait(&self, requested_start: &DateTime<FixedOffset>) -> TimeDelta {
        self.initial_wait(requested_start) + self.transfer_wait()
    }

    pub fn transit_duration(&self) -> TimeDelta {
        TimeDelta::seconds(self.record.transit_time)
    }

    pub fn walk_duration(&self) -> TimeDelta {
        TimeDelta::seconds(self.record.walk_time)
    }

    /// walking distance in meters, as reported by the server
    pub fn walk_distance(&self) -> f64 {
        self.record.walk_distance
    }

    /// raw transfer count; -1 denotes a pure walking trip
    pub fn transfers(&self) -> i32 {
        self.record.transfers
    }

    /// sum of leg distances in meters
    pub fn distance_travelled(&self) -> f64 {
        *self
            .distance_travelled
            .get_or_init(|| self.record.legs.iter().map(|l| l.distance).sum())
    }

    /// speed along the route in km/h, including the initial wait. `None` when
    /// the trip has no positive duration.
    pub fn speed_along_route_kmh(&self, requested_start: &DateTime<FixedOffset>) -> Option<f64> {
        let seconds = time_utils::total_seconds(&self.total_trip_duration(requested_start));
        geo_utils::speed_kmh(self.distance_travelled(), seconds)
    }

    /// distance of the longest walking leg in meters, 0 if there are none
    pub fn longest_walk_leg(&self) -> f64 {
        self.legs()
            .iter()
            .filter(|l| l.mode.is_walk())
            .map(|l| l.distance)
            .fold(0.0, f64::max)
    }

    pub fn modes_used(&self) -> BTreeSet<TravelMode> {
        self.legs().iter().map(|l| l.mode.clone()).collect()
    }

    pub fn mode_sequence(&self) -> Vec<TravelMode> {
        self.legs().iter().map(|l| l.mode.clone()).collect()
    }

    /// the mode of the first leg that is not a walk, or `None` for a pure walking trip
    pub fn first_non_walk_mode(&self) -> Option<TravelMode> {
        self.legs().iter().map(|l| &l.mode).find(|m| !m.is_walk()).cloned()
    }

    pub fn distance_by_mode(&self) -> BTreeMap<TravelMode, f64> {
        let mut result = BTreeMap::new();
        for leg in self.legs() {
            *result.entry(leg.mode.clone()).or_insert(0.0) += leg.distance;
        }
        result
    }

    pub fn duration_by_mode(&self) -> BTreeMap<TravelMode, TimeDelta> {
        let mut result = BTreeMap::new();
        for leg in self.legs() {
            *result.entry(leg.mode.clone()).or_insert_with(TimeDelta::zero) += leg.duration();
        }
        result
    }

    /// agencies operating the non-walk legs of this trip
    pub fn agencies_used(&self) -> BTreeSet<String> {
        self.legs()
            .iter()
            .filter(|l| !l.mode.is_walk())
            .filter_map(|l| l.agency_name.clone())
            .collect()
    }
}
