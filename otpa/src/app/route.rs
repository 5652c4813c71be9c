use std::time::Duration;

use otpa_core::aggregate::routed_trips;

use crate::{
    client::{HttpFetcher, RetryPolicy, RetryingFetcher, ThreadSleeper},
    config::RouteRunConfiguration,
    report::overall_summary,
    route::{route_trips_on_graphs, trip_source::read_trip_catalog, TripBatch},
    OtpaError,
};

/// routes the configured trip set on every configured graph
pub fn run_route(
    config: &String,
    resume: bool,
    no_save: bool,
    retry_delay: Option<Duration>,
    timeout: Option<Duration>,
) -> Result<(), OtpaError> {
    let conf = RouteRunConfiguration::try_from(config)?;
    if conf.graphs.is_empty() {
        return Err(OtpaError::ConfigurationError(String::from(
            "at least one graph must be configured",
        )));
    }
    let batch_conf = conf.batch.with_overrides(retry_delay, timeout);
    let catalog = read_trip_catalog(&conf.trips_file)?.resolve_starts(conf.base_date)?;

    let fetcher = HttpFetcher::new()?;
    let sleeper = ThreadSleeper;
    let retrying = RetryingFetcher::new(&fetcher, &sleeper, RetryPolicy::from(&batch_conf));
    let batch = TripBatch::new(
        &conf,
        resume || conf.resume_existing,
        conf.save_incrementally && !no_save,
    );

    let results = route_trips_on_graphs(&batch, &catalog, &conf.graphs, &retrying)?;
    for result in results.iter() {
        let counts = result
            .state_counts()
            .iter()
            .map(|(state, n)| format!("{n} {state}"))
            .collect::<Vec<_>>()
            .join(", ");
        log::info!(
            "graph '{}' finished {:?}: {counts}",
            result.graph().name,
            result.status()
        );
        let trips = routed_trips(&catalog, result.itineraries(), None, conf.time_zone)?;
        println!("{}", overall_summary(&result.graph().name, &trips));
    }
    Ok(())
}
