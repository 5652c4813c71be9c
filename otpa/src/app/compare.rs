use std::path::Path;

use crate::{
    config::RouteRunConfiguration,
    report::{write_comparison_shapefile, GraphItineraries},
    route::trip_source::{load_saved_itineraries, read_trip_catalog},
    OtpaError,
};

/// writes a shapefile comparing the saved itineraries of two graphs
pub fn run_compare(config: &String, first: &str, second: &str, output: &str) -> Result<(), OtpaError> {
    let conf = RouteRunConfiguration::try_from(config)?;
    let catalog = read_trip_catalog(&conf.trips_file)?;
    let first_graph = conf.graph(first)?;
    let second_graph = conf.graph(second)?;
    let base = Path::new(&conf.output_directory);
    let first_itineraries = load_saved_itineraries(&base.join(first_graph.output_subdirectory()))?;
    let second_itineraries = load_saved_itineraries(&base.join(second_graph.output_subdirectory()))?;

    let n_written = write_comparison_shapefile(
        Path::new(output),
        &catalog,
        GraphItineraries {
            name: &first_graph.name,
            itineraries: &first_itineraries,
        },
        GraphItineraries {
            name: &second_graph.name,
            itineraries: &second_itineraries,
        },
        conf.base_date,
        conf.time_zone,
    )?;
    if n_written == 0 {
        log::warn!("no trips were routed on both '{first}' and '{second}'");
    }
    Ok(())
}
