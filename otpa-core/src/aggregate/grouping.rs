use std::collections::BTreeMap;

use super::RoutedTrip;
use crate::model::itinerary::TravelMode;

/// groups trips by their first non-walk mode. pure walking trips fall in the
/// `None` group, so every trip lands in exactly one group.
pub fn group_by_first_non_walk_mode<'a>(
    trips: &[RoutedTrip<'a>],
) -> BTreeMap<Option<TravelMode>, Vec<RoutedTrip<'a>>> {
    let mut groups: BTreeMap<Option<TravelMode>, Vec<RoutedTrip<'a>>> = BTreeMap::new();
    for trip in trips {
        groups
            .entry(trip.itinerary.first_non_walk_mode())
            .or_default()
            .push(trip.clone());
    }
    groups
}

/// groups trips by the sorted set of agencies they used. walking trips have
/// an empty agency set.
pub fn group_by_agencies<'a>(trips: &[RoutedTrip<'a>]) -> BTreeMap<Vec<String>, Vec<RoutedTrip<'a>>> {
    let mut groups: BTreeMap<Vec<String>, Vec<RoutedTrip<'a>>> = BTreeMap::new();
    for trip in trips {
        let agencies: Vec<String> = trip.itinerary.agencies_used().into_iter().collect();
        groups.entry(agencies).or_default().push(trip.clone());
    }
    groups
}

/// groups trips by (origin zone, destination zone)
pub fn group_by_zone_pair<'a>(
    trips: &[RoutedTrip<'a>],
) -> BTreeMap<(String, String), Vec<RoutedTrip<'a>>> {
    let mut groups: BTreeMap<(String, String), Vec<RoutedTrip<'a>>> = BTreeMap::new();
    for trip in trips {
        let key = (
            trip.trip.origin_zone().to_string(),
            trip.trip.destination_zone().to_string(),
        );
        groups.entry(key).or_default().push(trip.clone());
    }
    groups
}

/// a transit route as identified on itinerary legs
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RouteKey {
    pub mode: TravelMode,
    pub agency: String,
    pub route_id: String,
    pub short_name: String,
    pub long_name: String,
}

/// the legs of one trip that travelled on a route
#[derive(Debug, Clone)]
pub struct RouteUsage<'a> {
    pub trip: RoutedTrip<'a>,
    pub leg_indices: Vec<usize>,
}

/// groups non-walk legs by the route they travelled on. a trip appears once
/// per route it used, with the indices of its legs on that route.
pub fn group_by_route<'a>(trips: &[RoutedTrip<'a>]) -> BTreeMap<RouteKey, Vec<RouteUsage<'a>>> {
    let mut groups: BTreeMap<RouteKey, Vec<RouteUsage<'a>>> = BTreeMap::new();
    for trip in trips {
        for (leg_index, leg) in trip.itinerary.legs().iter().enumerate() {
            if leg.mode.is_walk() {
                continue;
            }
            let key = RouteKey {
                mode: leg.mode.clone(),
                agency: leg.agency_name.clone().unwrap_or_default(),
                route_id: leg.route_id.clone().unwrap_or_default(),
                short_name: leg.route_short_name.clone().unwrap_or_default(),
                long_name: leg.route_long_name.clone().unwrap_or_default(),
            };
            let usages = groups.entry(key).or_default();
            match usages.last_mut() {
                Some(usage) if usage.trip.id() == trip.id() => usage.leg_indices.push(leg_index),
                _ => usages.push(RouteUsage {
                    trip: trip.clone(),
                    leg_indices: vec![leg_index],
                }),
            }
        }
    }
    groups
}
