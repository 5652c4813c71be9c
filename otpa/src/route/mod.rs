//! routes a catalog of trips against one or more OTP graphs, saving each
//! itinerary as it arrives so an interrupted batch can be resumed.
mod batch_runner;
mod single_trip;
mod trip_outcome;
mod trip_result_set;
pub mod trip_source;
mod trip_state;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use batch_runner::{route_trips, route_trips_on_graphs, TripBatch};
pub use single_trip::{route_single_trip_on_graphs, SingleTripReport};
pub use trip_outcome::TripOutcome;
pub use trip_result_set::TripResultSet;
pub use trip_state::{BatchStatus, TripState};
