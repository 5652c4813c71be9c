//! downloads isochrone rasters and vectors for a set of locations, departure
//! times and graphs.
mod download;
mod isochrone_run;
mod isochrone_set_specification;
mod location_source;
mod nearby_times;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use download::{download_isochrones, DownloadSummary};
pub use isochrone_run::{expand_graphs, IsochroneRun};
pub use isochrone_set_specification::{IsochroneSetSpecification, NamedLocation};
pub use location_source::LocationSource;
pub use nearby_times::{nearby_departures, nearby_minute_offsets};
