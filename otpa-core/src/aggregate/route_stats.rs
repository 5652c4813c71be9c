use chrono::{DateTime, FixedOffset, TimeDelta};

use super::RouteUsage;
use crate::{model::ModelError, util::time_utils};

/// usage statistics for one transit route
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStats {
    pub n_trips: usize,
    pub n_legs: usize,
    pub total_distance_km: f64,
    /// transfer waits before each leg on the route, summed
    pub total_wait: TimeDelta,
    pub mean_distance_per_leg_km: f64,
    /// mean over legs with a positive duration
    pub mean_speed_kmh: Option<f64>,
    pub mean_wait: TimeDelta,
}

impl RouteStats {
    pub fn calculate(usages: &[RouteUsage]) -> Result<RouteStats, ModelError> {
        let mut n_legs = 0usize;
        let mut total_distance_m = 0.0;
        let mut total_wait = TimeDelta::zero();
        let mut speed_sum = 0.0;
        let mut n_speeds = 0usize;
        for usage in usages {
            let itinerary = usage.trip.itinerary;
            let requested: &DateTime<FixedOffset> = &usage.trip.requested_start;
            for leg_index in usage.leg_indices.iter() {
                let leg = itinerary.legs().get(*leg_index).ok_or(ModelError::LegIndexOutOfRange {
                    leg_index: *leg_index,
                    n_legs: itinerary.legs().len(),
                })?;
                n_legs += 1;
                total_distance_m += leg.distance;
                total_wait += itinerary.transfer_wait_before_leg(*leg_index, requested)?;
                if let Some(speed) = leg.speed_kmh() {
                    speed_sum += speed;
                    n_speeds += 1;
                }
            }
        }
        let (mean_distance_per_leg_km, mean_wait) = if n_legs == 0 {
            (0.0, TimeDelta::zero())
        } else {
            (
                total_distance_m / n_legs as f64 / 1000.0,
                time_utils::from_seconds(time_utils::total_seconds(&total_wait) / n_legs as f64),
            )
        };
        Ok(RouteStats {
            n_trips: usages.len(),
            n_legs,
            total_distance_km: total_distance_m / 1000.0,
            total_wait,
            mean_distance_per_leg_km,
            mean_speed_kmh: (n_speeds > 0).then(|| speed_sum / n_speeds as f64),
            mean_wait,
        })
    }
}
