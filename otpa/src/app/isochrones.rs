use std::path::Path;

use chrono::{Local, SubsecRound};

use crate::{
    cache::{load_run_metadata, save_run_metadata},
    client::{HttpFetcher, RetryPolicy, RetryingFetcher, ThreadSleeper},
    config::{BatchConfiguration, IsochroneRunConfiguration},
    isochrone::{download_isochrones, expand_graphs, IsochroneRun},
    OtpaError,
};

/// downloads the configured isochrone set on each graph, saving run metadata
/// beside each run's output so it can be resumed
pub fn run_isochrones(config: &String, force: bool) -> Result<(), OtpaError> {
    let conf = IsochroneRunConfiguration::try_from(config)?;
    let spec = conf.isochrone_set()?;
    let runs = expand_graphs(
        Path::new(&conf.output_directory),
        &conf.endpoint(),
        &conf.graphs,
        &spec,
    );
    let run_time = Local::now().naive_local().trunc_subsecs(0);
    for run in runs.iter() {
        save_run_metadata(&run.output_directory, &run.metadata(run_time))?;
    }
    download_runs(&runs, &conf.batch, force)
}

/// continues the runs described by saved metadata files, using default batch settings
pub fn run_isochrones_resume(
    metadata_files: &[String],
    api_path: Option<&str>,
    force: bool,
) -> Result<(), OtpaError> {
    let runs = metadata_files
        .iter()
        .map(|file| {
            let (metadata, directory) = load_run_metadata(Path::new(file))?;
            Ok(IsochroneRun::from_metadata(metadata, &directory, api_path))
        })
        .collect::<Result<Vec<_>, OtpaError>>()?;
    download_runs(&runs, &BatchConfiguration::default(), force)
}

fn download_runs(runs: &[IsochroneRun], batch: &BatchConfiguration, force: bool) -> Result<(), OtpaError> {
    let fetcher = HttpFetcher::new()?;
    let sleeper = ThreadSleeper;
    let retrying = RetryingFetcher::new(&fetcher, &sleeper, RetryPolicy::from(batch));
    for run in runs {
        log::info!(
            "downloading {} rasters to {}",
            run.n_rasters(),
            run.output_directory.to_string_lossy()
        );
        let summary = download_isochrones(run, &retrying, batch.failure_ceiling, force)?;
        if summary.aborted {
            log::error!(
                "isochrone run in {} abandoned, resume it from its metadata file",
                run.output_directory.to_string_lossy()
            );
        }
    }
    Ok(())
}
