mod batch_configuration;
mod config_loading;
mod isochrone_run_configuration;
mod route_run_configuration;

pub use batch_configuration::BatchConfiguration;
pub use config_loading::read_configuration_file;
pub use isochrone_run_configuration::IsochroneRunConfiguration;
pub use route_run_configuration::{NamedDepartureTimeCategory, RouteRunConfiguration};
