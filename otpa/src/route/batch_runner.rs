use std::path::{Path, PathBuf};

use otpa_core::{
    model::{
        itinerary::{Itinerary, PlanResponse, PlanResult},
        trip::{Trip, TripCatalog},
        GraphSpec, RoutingParameters,
    },
    request::{build_plan_url, build_web_planner_url, OtpEndpoint, OtpQuery},
};

use super::{BatchStatus, TripOutcome, TripResultSet, TripState};
use crate::{
    cache::{cache_ops, write_atomically, ResumePolicy},
    client::{FailureCounter, FetchOutcome, Fetcher, RetryingFetcher, Sleeper},
    config::RouteRunConfiguration,
    util::fs::create_dirs,
    OtpaError,
};

/// settings shared by every graph's batch in a routing run
#[derive(Debug, Clone)]
pub struct TripBatch<'a> {
    pub endpoint: OtpEndpoint,
    pub routing_params: &'a RoutingParameters,
    /// when set, planning failures are logged with a link to the web planner
    pub web_app_url: Option<&'a str>,
    /// each graph writes to its own subdirectory of this directory
    pub output_directory: PathBuf,
    pub save_incrementally: bool,
    pub resume: ResumePolicy,
    pub failure_ceiling: usize,
    pub progress_percent: f64,
}

impl<'a> TripBatch<'a> {
    pub fn new(conf: &'a RouteRunConfiguration, resume: bool, save_incrementally: bool) -> TripBatch<'a> {
        TripBatch {
            endpoint: conf.endpoint(),
            routing_params: &conf.routing_params,
            web_app_url: conf.web_app_url.as_deref(),
            output_directory: PathBuf::from(&conf.output_directory),
            save_incrementally,
            resume: ResumePolicy::new(resume, false),
            failure_ceiling: conf.batch.failure_ceiling,
            progress_percent: conf.batch.progress_percent,
        }
    }

    pub fn graph_directory(&self, graph: &GraphSpec) -> PathBuf {
        self.output_directory.join(graph.output_subdirectory())
    }
}

/// routes every trip on each graph as an independent batch, each with its own
/// failure counter. an aborted graph does not stop the remaining graphs.
pub fn route_trips_on_graphs<F: Fetcher, S: Sleeper>(
    batch: &TripBatch,
    catalog: &TripCatalog,
    graphs: &[GraphSpec],
    fetcher: &RetryingFetcher<F, S>,
) -> Result<Vec<TripResultSet>, OtpaError> {
    graphs
        .iter()
        .map(|graph| route_trips(batch, catalog, graph, fetcher))
        .collect()
}

/// routes the trips of a catalog on one graph, in ascending trip id order.
/// every trip in the catalog must carry a full start datetime.
pub fn route_trips<F: Fetcher, S: Sleeper>(
    batch: &TripBatch,
    catalog: &TripCatalog,
    graph: &GraphSpec,
    fetcher: &RetryingFetcher<F, S>,
) -> Result<TripResultSet, OtpaError> {
    let directory = batch.graph_directory(graph);
    if batch.save_incrementally {
        create_dirs(&directory)?;
    }
    let mut results = TripResultSet::new(graph, catalog.ids());
    let mut failures = FailureCounter::new(batch.failure_ceiling);
    let trips: Vec<&Trip> = catalog.iter().collect();
    let n_trips = trips.len();
    let step = progress_step(n_trips, batch.progress_percent);
    log::info!(
        "routing {n_trips} trips on graph '{}' (router '{}')",
        graph.name,
        graph.router_id
    );

    for (idx, trip) in trips.iter().enumerate() {
        let current = cache_ops::itinerary_filename(&directory, trip.id());
        let next = trips
            .get(idx + 1)
            .map(|t| cache_ops::itinerary_filename(&directory, t.id()));
        if batch.resume.should_skip(&current, next.as_deref()) {
            log::debug!("trip {} already routed, skipping", trip.id());
            results.record_resumed(trip.id(), read_saved_itinerary(&current));
        } else {
            results.set_state(trip.id(), TripState::Routing);
            let outcome = route_trip(batch, graph, trip, fetcher, &mut failures)?;
            if let (TripOutcome::Routed(itinerary), true) = (&outcome, batch.save_incrementally) {
                let json = serde_json::to_vec_pretty(itinerary.raw_json())?;
                write_atomically(&current, &json)?;
            }
            results.record(trip.id(), outcome);
            if failures.ceiling_reached() {
                log::error!(
                    "{} trips failed on graph '{}', reaching the failure ceiling of {}. \
                     abandoning the batch with {} trips not attempted.",
                    failures.count(),
                    graph.name,
                    failures.ceiling(),
                    n_trips - idx - 1
                );
                results.finish(BatchStatus::Aborted);
                return Ok(results);
            }
        }
        if (idx + 1) % step == 0 {
            log::info!(
                "graph '{}': {}/{n_trips} trips processed ({:.0}%)",
                graph.name,
                idx + 1,
                (idx + 1) as f64 / n_trips as f64 * 100.0
            );
        }
    }

    results.finish(BatchStatus::Completed);
    log::info!(
        "graph '{}': {} of {n_trips} trips have itineraries",
        graph.name,
        results.n_routed()
    );
    Ok(results)
}

/// number of trips between progress messages
fn progress_step(n_trips: usize, progress_percent: f64) -> usize {
    let step = (n_trips as f64 * progress_percent / 100.0).ceil();
    if step.is_finite() && step >= 1.0 {
        step as usize
    } else {
        1
    }
}

fn route_trip<F: Fetcher, S: Sleeper>(
    batch: &TripBatch,
    graph: &GraphSpec,
    trip: &Trip,
    fetcher: &RetryingFetcher<F, S>,
    failures: &mut FailureCounter,
) -> Result<TripOutcome, OtpaError> {
    let start = trip.requested_start(None)?;
    let query = OtpQuery {
        routing_params: batch.routing_params,
        date: start.date(),
        time: start.time(),
        origin: *trip.origin(),
        destination: *trip.destination(),
    };
    let url = build_plan_url(&batch.endpoint, &query, Some(&graph.router_id));
    let outcome = match fetcher.fetch(&url, failures) {
        FetchOutcome::Failed { attempts } => {
            log::warn!("trip {}: no response after {attempts} attempts", trip.id());
            TripOutcome::FailedAfterRetries { attempts }
        }
        FetchOutcome::Body(body) => match PlanResponse::from_slice(&body) {
            Err(e) => {
                log::warn!("trip {}: unreadable response: {e}", trip.id());
                TripOutcome::Malformed {
                    reason: e.to_string(),
                }
            }
            Ok(response) => match response.into_first_itinerary() {
                PlanResult::Itinerary(itinerary) => TripOutcome::Routed(itinerary),
                PlanResult::PlanningFailed(message) => {
                    match batch.web_app_url {
                        Some(web_app_url) => log::warn!(
                            "trip {}: {message} see {}",
                            trip.id(),
                            build_web_planner_url(web_app_url, &query)
                        ),
                        None => log::warn!("trip {}: {message}", trip.id()),
                    }
                    TripOutcome::PlanningFailed { message }
                }
                PlanResult::Malformed(reason) => {
                    log::warn!("trip {}: unexpected response: {reason}", trip.id());
                    TripOutcome::Malformed { reason }
                }
            },
        },
    };
    Ok(outcome)
}

/// reads an itinerary saved by an earlier run. unreadable files are logged
/// and ignored.
fn read_saved_itinerary(path: &Path) -> Option<Itinerary> {
    if !path.exists() {
        return None;
    }
    let loaded = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|json| Itinerary::from_json_str(&json).map_err(|e| e.to_string()));
    match loaded {
        Ok(itinerary) => Some(itinerary),
        Err(e) => {
            log::warn!("ignoring saved itinerary {}: {e}", path.to_string_lossy());
            None
        }
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use otpa_core::model::ParameterValue;

    use super::*;
    use crate::client::{
        test_doubles::{RecordingSleeper, ScriptedFetcher},
        RetryPolicy,
    };
    use crate::route::test_fixtures::{catalog, itinerary_json, plan_body, planning_failure_body};

    fn policy() -> RetryPolicy {
        RetryPolicy {
            max_retries: 0,
            retry_delay: Duration::from_secs(10),
            timeout: Duration::from_secs(30),
        }
    }

    fn batch<'a>(dir: &Path, params: &'a RoutingParameters, resume: bool, ceiling: usize) -> TripBatch<'a> {
        TripBatch {
            endpoint: OtpEndpoint::new("http://localhost:8080"),
            routing_params: params,
            web_app_url: Some("http://localhost:8080/opentripplanner-webapp"),
            output_directory: dir.to_path_buf(),
            save_incrementally: true,
            resume: ResumePolicy::new(resume, false),
            failure_ceiling: ceiling,
            progress_percent: 1.0,
        }
    }

    fn params() -> RoutingParameters {
        RoutingParameters::new().with("mode", ParameterValue::from("TRANSIT,WALK"))
    }

    fn save(path: &Path) {
        std::fs::write(path, serde_json::to_vec(&itinerary_json(2, 40)).unwrap()).unwrap();
    }

    #[test]
    fn test_abort_at_failure_ceiling_leaves_rest_pending() {
        let dir = tempfile::tempdir().unwrap();
        let params = params();
        let graph = GraphSpec::new("base", "melb");
        let fetcher = ScriptedFetcher::new(
            vec![Ok(plan_body(2, 40)), Err(ScriptedFetcher::failure())],
            Ok(plan_body(2, 40)),
        );
        let sleeper = RecordingSleeper::default();
        let retrying = RetryingFetcher::new(&fetcher, &sleeper, policy());

        let results = route_trips(
            &batch(dir.path(), &params, false, 1),
            &catalog(&["1", "2", "3"]),
            &graph,
            &retrying,
        )
        .unwrap();

        assert_eq!(results.status(), BatchStatus::Aborted);
        assert_eq!(results.state("1"), Some(TripState::Routed));
        assert_eq!(results.state("2"), Some(TripState::FailedAfterRetries));
        assert_eq!(results.state("3"), Some(TripState::Pending));
        assert!(results.outcome("3").is_none());
        assert_eq!(fetcher.calls(), 2);
        assert!(dir.path().join("base").join("1.json").exists());
        assert!(!dir.path().join("base").join("2.json").exists());
        assert!(fetcher.urls()[0].ends_with("&routerId=melb"));
    }

    #[test]
    fn test_resume_skips_saved_trips() {
        let dir = tempfile::tempdir().unwrap();
        let graph_dir = dir.path().join("base");
        std::fs::create_dir_all(&graph_dir).unwrap();
        for id in ["1", "2"] {
            save(&graph_dir.join(format!("{id}.json")));
        }
        let params = params();
        let fetcher = ScriptedFetcher::always(&plan_body(2, 40));
        let sleeper = RecordingSleeper::default();
        let retrying = RetryingFetcher::new(&fetcher, &sleeper, policy());

        let results = route_trips(
            &batch(dir.path(), &params, true, 10),
            &catalog(&["1", "2"]),
            &GraphSpec::new("base", "melb"),
            &retrying,
        )
        .unwrap();

        assert_eq!(fetcher.calls(), 0);
        assert_eq!(results.state("1"), Some(TripState::Resumed));
        assert_eq!(results.n_routed(), 2);
        assert_eq!(results.status(), BatchStatus::Completed);
    }

    #[test]
    fn test_resume_tolerates_missing_file_before_saved_one() {
        let dir = tempfile::tempdir().unwrap();
        let graph_dir = dir.path().join("base");
        std::fs::create_dir_all(&graph_dir).unwrap();
        save(&graph_dir.join("2.json"));
        let params = params();
        let fetcher = ScriptedFetcher::always(&plan_body(2, 40));
        let sleeper = RecordingSleeper::default();
        let retrying = RetryingFetcher::new(&fetcher, &sleeper, policy());

        let results = route_trips(
            &batch(dir.path(), &params, true, 10),
            &catalog(&["1", "2", "3"]),
            &GraphSpec::new("base", "melb"),
            &retrying,
        )
        .unwrap();

        // only trip 3 is routed: trip 1 is covered by trip 2's file
        assert_eq!(fetcher.calls(), 1);
        assert_eq!(results.state("1"), Some(TripState::Resumed));
        assert!(results.outcome("1").is_none());
        assert_eq!(results.state("3"), Some(TripState::Routed));
        assert!(graph_dir.join("3.json").exists());
    }

    #[test]
    fn test_planning_failure_is_not_a_fetch_failure() {
        let dir = tempfile::tempdir().unwrap();
        let params = params();
        let fetcher = ScriptedFetcher::new(
            vec![Ok(planning_failure_body()), Ok(b"<html>".to_vec())],
            Ok(plan_body(2, 40)),
        );
        let sleeper = RecordingSleeper::default();
        let retrying = RetryingFetcher::new(&fetcher, &sleeper, policy());

        let results = route_trips(
            &batch(dir.path(), &params, false, 1),
            &catalog(&["1", "2", "3"]),
            &GraphSpec::new("base", "melb"),
            &retrying,
        )
        .unwrap();

        assert_eq!(results.status(), BatchStatus::Completed);
        assert_eq!(results.state("1"), Some(TripState::NoItinerary));
        assert!(matches!(
            results.outcome("1"),
            Some(TripOutcome::PlanningFailed { message }) if message == "Trip is not possible."
        ));
        assert!(matches!(results.outcome("2"), Some(TripOutcome::Malformed { .. })));
        assert_eq!(results.n_routed(), 1);
    }

    #[test]
    fn test_graphs_run_independently() {
        let dir = tempfile::tempdir().unwrap();
        let params = params();
        let mut conf_batch = batch(dir.path(), &params, false, 1);
        conf_batch.save_incrementally = false;
        let fetcher = ScriptedFetcher::new(vec![Err(ScriptedFetcher::failure())], Ok(plan_body(2, 40)));
        let sleeper = RecordingSleeper::default();
        let retrying = RetryingFetcher::new(&fetcher, &sleeper, policy());
        let graphs = vec![GraphSpec::new("base", "melb"), GraphSpec::new("upgrade", "melb-up")];

        let results = route_trips_on_graphs(&conf_batch, &catalog(&["1", "2"]), &graphs, &retrying).unwrap();

        assert_eq!(results[0].status(), BatchStatus::Aborted);
        assert_eq!(results[1].status(), BatchStatus::Completed);
        assert_eq!(results[1].n_routed(), 2);
        assert!(!dir.path().join("upgrade").exists());
    }

    #[test]
    fn test_progress_step() {
        assert_eq!(progress_step(1000, 1.0), 10);
        assert_eq!(progress_step(3, 1.0), 1);
        assert_eq!(progress_step(0, 1.0), 1);
        assert_eq!(progress_step(50, 10.0), 5);
    }
}
