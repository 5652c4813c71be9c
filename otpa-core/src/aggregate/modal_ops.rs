//! per-mode breakdowns over a set of itineraries. every mode in
//! `TravelMode::ALL` appears in the results, along with any other mode the
//! itineraries report. modes with no use report zero sums and `None` means.
use std::collections::BTreeMap;

use chrono::TimeDelta;

use super::RoutedTrip;
use crate::{
    model::itinerary::{Itinerary, TravelMode},
    util::time_utils,
};

fn zeroed<T: Clone>(value: T) -> BTreeMap<TravelMode, T> {
    TravelMode::ALL.into_iter().map(|m| (m, value.clone())).collect()
}

/// number of trips using each mode at least once
pub fn trips_using_mode<'a, I>(itineraries: I) -> BTreeMap<TravelMode, usize>
where
    I: IntoIterator<Item = &'a Itinerary>,
{
    let mut counts = zeroed(0);
    for itinerary in itineraries {
        for mode in itinerary.modes_used() {
            *counts.entry(mode).or_insert(0) += 1;
        }
    }
    counts
}

pub fn legs_by_mode<'a, I>(itineraries: I) -> BTreeMap<TravelMode, usize>
where
    I: IntoIterator<Item = &'a Itinerary>,
{
    let mut counts = zeroed(0);
    for leg in itineraries.into_iter().flat_map(|i| i.legs()) {
        *counts.entry(leg.mode.clone()).or_insert(0) += 1;
    }
    counts
}

/// total leg distance in meters for each mode
pub fn modal_distance_sums<'a, I>(itineraries: I) -> BTreeMap<TravelMode, f64>
where
    I: IntoIterator<Item = &'a Itinerary>,
{
    let mut sums = zeroed(0.0);
    for itinerary in itineraries {
        for (mode, distance) in itinerary.distance_by_mode() {
            *sums.entry(mode).or_insert(0.0) += distance;
        }
    }
    sums
}

pub fn modal_time_sums<'a, I>(itineraries: I) -> BTreeMap<TravelMode, TimeDelta>
where
    I: IntoIterator<Item = &'a Itinerary>,
{
    let mut sums = zeroed(TimeDelta::zero());
    for itinerary in itineraries {
        for (mode, duration) in itinerary.duration_by_mode() {
            *sums.entry(mode).or_insert_with(TimeDelta::zero) += duration;
        }
    }
    sums
}

/// distance per mode averaged over every trip in the set, whether or not it used the mode
pub fn mean_modal_distances_all_trips(
    sums: &BTreeMap<TravelMode, f64>,
    n_trips: usize,
) -> BTreeMap<TravelMode, Option<f64>> {
    sums.iter()
        .map(|(mode, sum)| (mode.clone(), divide(*sum, n_trips)))
        .collect()
}

/// distance per mode averaged over the legs travelled on that mode
pub fn mean_modal_distances_per_leg(
    sums: &BTreeMap<TravelMode, f64>,
    legs: &BTreeMap<TravelMode, usize>,
) -> BTreeMap<TravelMode, Option<f64>> {
    sums.iter()
        .map(|(mode, sum)| (mode.clone(), divide(*sum, legs.get(mode).copied().unwrap_or(0))))
        .collect()
}

pub fn mean_modal_times_all_trips(
    sums: &BTreeMap<TravelMode, TimeDelta>,
    n_trips: usize,
) -> BTreeMap<TravelMode, Option<TimeDelta>> {
    sums.iter()
        .map(|(mode, sum)| (mode.clone(), divide_time(sum, n_trips)))
        .collect()
}

/// time per mode averaged over the legs travelled on that mode
pub fn mean_modal_times_per_leg(
    sums: &BTreeMap<TravelMode, TimeDelta>,
    legs: &BTreeMap<TravelMode, usize>,
) -> BTreeMap<TravelMode, Option<TimeDelta>> {
    sums.iter()
        .map(|(mode, sum)| (mode.clone(), divide_time(sum, legs.get(mode).copied().unwrap_or(0))))
        .collect()
}

/// in-vehicle speed per mode in km/h, averaged over legs. legs of zero
/// duration have no speed and are left out of both numerator and denominator.
pub fn mean_modal_speeds<'a, I>(itineraries: I) -> BTreeMap<TravelMode, Option<f64>>
where
    I: IntoIterator<Item = &'a Itinerary>,
{
    let mut sums: BTreeMap<TravelMode, (f64, usize)> = zeroed((0.0, 0));
    for leg in itineraries.into_iter().flat_map(|i| i.legs()) {
        if let Some(speed) = leg.speed_kmh() {
            let entry = sums.entry(leg.mode.clone()).or_insert((0.0, 0));
            entry.0 += speed;
            entry.1 += 1;
        }
    }
    sums.into_iter()
        .map(|(mode, (sum, n))| (mode, divide(sum, n)))
        .collect()
}

/// mean initial wait and trip count for each non-walk mode, keyed by the first
/// non-walk mode of each trip. pure walking trips are not counted.
pub fn mean_initial_wait_by_first_mode(
    trips: &[RoutedTrip],
) -> BTreeMap<TravelMode, (Option<TimeDelta>, usize)> {
    let mut sums: BTreeMap<TravelMode, (TimeDelta, usize)> = TravelMode::non_walk()
        .map(|m| (m, (TimeDelta::zero(), 0)))
        .collect();
    for trip in trips {
        if let Some(mode) = trip.itinerary.first_non_walk_mode() {
            let entry = sums.entry(mode).or_insert((TimeDelta::zero(), 0));
            entry.0 += trip.initial_wait();
            entry.1 += 1;
        }
    }
    sums.into_iter()
        .map(|(mode, (sum, n))| (mode, (divide_time(&sum, n), n)))
        .collect()
}

fn divide(sum: f64, n: usize) -> Option<f64> {
    if n == 0 {
        None
    } else {
        Some(sum / n as f64)
    }
}

fn divide_time(sum: &TimeDelta, n: usize) -> Option<TimeDelta> {
    divide(time_utils::total_seconds(sum), n).map(time_utils::from_seconds)
}
