use std::path::{Path, PathBuf};

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::{isochrone::IsochroneSetSpecification, util::fs::create_dirs, OtpaError};

/// record of an isochrone run, saved beside its output so the run can be
/// resumed later
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetadata {
    pub run_time: NaiveDateTime,
    pub server_url: String,
    pub otp_router_id: Option<String>,
    pub save_suffix: Option<String>,
    pub iso_set_specification: IsochroneSetSpecification,
}

/// `isos-metadata-YYYY-MM-DD_HHh_MMm_SSs.json`
pub fn metadata_filename(run_time: &NaiveDateTime) -> String {
    format!("isos-metadata-{}.json", run_time.format("%Y-%m-%d_%Hh_%Mm_%Ss"))
}

/// writes the metadata into `directory`. names are timestamped to the second;
/// if a file for this second already exists the run time advances to the next
/// free second so no earlier metadata is overwritten.
pub fn save_run_metadata(directory: &Path, metadata: &RunMetadata) -> Result<PathBuf, OtpaError> {
    create_dirs(directory)?;
    let mut run_time = metadata.run_time;
    let mut path = directory.join(metadata_filename(&run_time));
    while path.exists() {
        run_time += TimeDelta::seconds(1);
        path = directory.join(metadata_filename(&run_time));
    }
    let saved = RunMetadata {
        run_time,
        ..metadata.clone()
    };
    let json = serde_json::to_string_pretty(&saved)?;
    super::write_atomically(&path, json.as_bytes())?;
    log::info!("saved isochrone run metadata to {}", path.to_string_lossy());
    Ok(path)
}

/// reads run metadata, returning it with the directory the run's output lives in
pub fn load_run_metadata(path: &Path) -> Result<(RunMetadata, PathBuf), OtpaError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        OtpaError::ConfigurationError(format!(
            "failure reading run metadata {}: {e}",
            path.to_string_lossy()
        ))
    })?;
    let metadata: RunMetadata = serde_json::from_str(&contents)?;
    let directory = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    Ok((metadata, directory))
}
