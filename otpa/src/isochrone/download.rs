use std::path::Path;

use kdam::tqdm;
use otpa_core::request::{build_raster_isochrone_url, build_vector_isochrone_url, BoundingBox, OtpQuery};

use super::IsochroneRun;
use crate::{
    cache::{cache_ops, write_atomically, ResumePolicy},
    client::{FailureCounter, FetchOutcome, Fetcher, RetryingFetcher, Sleeper},
    util::fs::create_dirs,
    OtpaError,
};

/// counts of what happened to each isochrone request in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DownloadSummary {
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
    /// the failure ceiling was reached and the remaining requests were not made
    pub aborted: bool,
}

/// downloads every raster, and every vector if vector types are configured,
/// for a run. files already present are skipped unless `force` is set.
pub fn download_isochrones<F: Fetcher, S: Sleeper>(
    run: &IsochroneRun,
    fetcher: &RetryingFetcher<F, S>,
    failure_ceiling: usize,
    force: bool,
) -> Result<DownloadSummary, OtpaError> {
    let spec = &run.spec;
    let resume = ResumePolicy::new(true, force);
    let suffix = run.suffix.as_deref();
    let router_id = run.router_id.as_deref();
    let mut failures = FailureCounter::new(failure_ceiling);
    let mut summary = DownloadSummary::default();
    create_dirs(&run.output_directory)?;

    let isochrone_minutes = spec.isochrone_minutes();
    if !spec.vector_types.is_empty() && isochrone_minutes.is_empty() {
        log::warn!("vector types given without an isochrone increment, no vectors will be downloaded");
    }

    let locations = tqdm!(
        spec.locations.iter(),
        total = spec.locations.len(),
        desc = "isochrone locations"
    );
    for location in locations {
        let point = location.point();
        let bbox = BoundingBox::around(&point, spec.raster_bounding_buffer)?;
        for time in spec.times.iter() {
            for departure in run.raster_departures(time) {
                let (dep_date, dep_time) = (departure.date(), departure.time());
                let filename = cache_ops::raster_filename(&location.name, &dep_date, &dep_time, suffix);
                let path = run.output_directory.join(filename);
                if resume.should_skip(&path, None) {
                    summary.skipped += 1;
                    continue;
                }
                let query = OtpQuery::at_location(&spec.routing_params, dep_date, dep_time, point);
                let url = build_raster_isochrone_url(
                    &run.endpoint,
                    &query,
                    bbox,
                    spec.raster_resolution,
                    router_id,
                );
                store(fetcher.fetch(&url, &mut failures), &path, &mut summary)?;
                if failures.ceiling_reached() {
                    return Ok(abort(summary, &failures));
                }
            }

            for minutes in isochrone_minutes.iter() {
                for vector_type in spec.vector_types.iter() {
                    let filename = cache_ops::vector_filename(
                        &location.name,
                        &spec.date,
                        time,
                        *minutes,
                        vector_type,
                        suffix,
                    );
                    let path = run.output_directory.join(filename);
                    if resume.should_skip(&path, None) {
                        summary.skipped += 1;
                        continue;
                    }
                    let query = OtpQuery::at_location(&spec.routing_params, spec.date, *time, point);
                    let url = build_vector_isochrone_url(
                        &run.endpoint,
                        &query,
                        *minutes,
                        vector_type,
                        router_id,
                    );
                    store(fetcher.fetch(&url, &mut failures), &path, &mut summary)?;
                    if failures.ceiling_reached() {
                        return Ok(abort(summary, &failures));
                    }
                }
            }
        }
    }
    log::info!(
        "isochrones in {}: {} downloaded, {} already present, {} failed",
        run.output_directory.to_string_lossy(),
        summary.downloaded,
        summary.skipped,
        summary.failed
    );
    Ok(summary)
}

fn store(outcome: FetchOutcome, path: &Path, summary: &mut DownloadSummary) -> Result<(), OtpaError> {
    match outcome {
        FetchOutcome::Body(bytes) => {
            write_atomically(path, &bytes)?;
            summary.downloaded += 1;
        }
        FetchOutcome::Failed { attempts } => {
            log::warn!(
                "giving up on {} after {attempts} attempts",
                path.to_string_lossy()
            );
            summary.failed += 1;
        }
    }
    Ok(())
}

fn abort(summary: DownloadSummary, failures: &FailureCounter) -> DownloadSummary {
    log::error!(
        "{} requests failed, reaching the failure ceiling of {}. abandoning run.",
        failures.count(),
        failures.ceiling()
    );
    DownloadSummary {
        aborted: true,
        ..summary
    }
}

#[cfg(test)]
mod test {
    use std::path::Path;
    use std::time::Duration;

    use otpa_core::request::OtpEndpoint;

    use super::*;
    use crate::client::{
        test_doubles::{RecordingSleeper, ScriptedFetcher},
        RetryPolicy,
    };
    use crate::isochrone::{expand_graphs, test_fixtures::isochrone_set, IsochroneSetSpecification};

    fn policy(max_retries: usize) -> RetryPolicy {
        RetryPolicy {
            max_retries,
            retry_delay: Duration::from_secs(1),
            timeout: Duration::from_secs(5),
        }
    }

    fn run_in(dir: &Path, spec: &IsochroneSetSpecification) -> IsochroneRun {
        let endpoint = OtpEndpoint::new("http://localhost:8080");
        expand_graphs(dir, &endpoint, &[], spec).remove(0)
    }

    #[test]
    fn test_existing_files_are_not_fetched_again() {
        let dir = tempfile::tempdir().unwrap();
        let run = run_in(dir.path(), &isochrone_set());
        let fetcher = ScriptedFetcher::always(b"tiff");
        let sleeper = RecordingSleeper::default();
        let retrying = RetryingFetcher::new(&fetcher, &sleeper, policy(2));

        let first = download_isochrones(&run, &retrying, 10, false).unwrap();
        assert_eq!(first.downloaded, 2);
        assert_eq!(fetcher.calls(), 2);
        assert!(dir.path().join("Box_Hill-2013_05_06-08_30_00.tiff").exists());
        assert!(fetcher.urls()[0].contains("/wms?"));

        let second = download_isochrones(&run, &retrying, 10, false).unwrap();
        assert_eq!(second.downloaded, 0);
        assert_eq!(second.skipped, 2);
        assert_eq!(fetcher.calls(), 2);

        let forced = download_isochrones(&run, &retrying, 10, true).unwrap();
        assert_eq!(forced.downloaded, 2);
        assert_eq!(fetcher.calls(), 4);
    }

    #[test]
    fn test_nearby_times_and_vectors() {
        let dir = tempfile::tempdir().unwrap();
        let mut spec = isochrone_set();
        spec.save_nearby_times = true;
        spec.nearby_minutes = 10.0;
        spec.num_each_side = 1;
        spec.iso_increment = 10;
        spec.iso_max = 20;
        spec.vector_types = vec![String::from("POLYGON")];
        let run = run_in(dir.path(), &spec);
        let fetcher = ScriptedFetcher::always(b"data");
        let sleeper = RecordingSleeper::default();
        let retrying = RetryingFetcher::new(&fetcher, &sleeper, policy(0));

        let summary = download_isochrones(&run, &retrying, 10, false).unwrap();
        // per location: 3 rasters and 2 vectors
        assert_eq!(summary.downloaded, 10);
        assert!(dir.path().join("Box_Hill-2013_05_06-08_20_00.tiff").exists());
        assert!(dir.path().join("Box_Hill-2013_05_06-08_40_00.tiff").exists());
        assert!(dir
            .path()
            .join("Box_Hill-2013_05_06-08_30_00-20min-polygon.geojson")
            .exists());
        let vector_urls: Vec<String> = fetcher.urls().into_iter().filter(|u| u.contains("/iso?")).collect();
        assert_eq!(vector_urls.len(), 4);
        assert!(vector_urls[0].contains("walkTime=10&output=POLYGON"));
    }

    #[test]
    fn test_failure_ceiling_abandons_run() {
        let dir = tempfile::tempdir().unwrap();
        let run = run_in(dir.path(), &isochrone_set());
        let fetcher = ScriptedFetcher::always_failing();
        let sleeper = RecordingSleeper::default();
        let retrying = RetryingFetcher::new(&fetcher, &sleeper, policy(1));

        let summary = download_isochrones(&run, &retrying, 1, false).unwrap();
        assert!(summary.aborted);
        assert_eq!(summary.failed, 1);
        assert_eq!(fetcher.calls(), 2);
        assert!(!dir.path().join("Box_Hill-2013_05_06-08_30_00.tiff").exists());
    }
}
