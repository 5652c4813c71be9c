mod trip;
mod trip_catalog;
mod trip_row;
mod trip_start;
mod trip_time_zone;

pub use trip::Trip;
pub use trip_catalog::TripCatalog;
pub use trip_row::TripRow;
pub use trip_start::TripStart;
pub use trip_time_zone::TripTimeZone;
