//! statistics over sets of routed trips: means, modal breakdowns and groupings.
mod aggregate_error;
mod departure_time_category;
mod grouping;
pub mod means_ops;
pub mod modal_ops;
mod route_stats;
mod routed_trip;
mod subset_ops;
mod trip_means;

#[cfg(test)]
mod test_fixtures;

pub use aggregate_error::AggregateError;
pub use departure_time_category::DepartureTimeCategory;
pub use grouping::{
    group_by_agencies, group_by_first_non_walk_mode, group_by_route, group_by_zone_pair, RouteKey,
    RouteUsage,
};
pub use route_stats::RouteStats;
pub use routed_trip::{routed_trips, RoutedTrip};
pub use subset_ops::{exclude_trip_ids, select_trip_ids};
pub use trip_means::{calc_means, TripMeans};
