//! reading trip sets and the itineraries saved for them.
use std::{collections::BTreeMap, path::Path};

use kdam::tqdm;
use otpa_core::model::{
    itinerary::Itinerary,
    trip::{Trip, TripCatalog, TripRow},
};

use crate::OtpaError;

/// reads a trip CSV with columns `id,origin_lon,origin_lat,dest_lon,dest_lat,start`
/// and optional `origin_zone,dest_zone`
pub fn read_trip_catalog(file: &str) -> Result<TripCatalog, OtpaError> {
    let reader = csv::Reader::from_path(file).map_err(|e| {
        OtpaError::ConfigurationError(format!("failed reading trips file '{file}': {e}"))
    })?;
    let mut trips = vec![];
    for row in tqdm!(reader.into_deserialize::<TripRow>(), desc = "read trips") {
        let trip = Trip::try_from(row?)?;
        trips.push(trip);
    }
    let catalog = TripCatalog::new(trips)?;
    log::info!("read {} trips from {file}", catalog.len());
    Ok(catalog)
}

/// loads the `{trip_id}.json` itineraries in `directory`, keyed by trip id.
/// other files are ignored; itinerary files that fail to decode are an error.
pub fn load_saved_itineraries(directory: &Path) -> Result<BTreeMap<String, Itinerary>, OtpaError> {
    let entries = std::fs::read_dir(directory).map_err(|e| {
        OtpaError::ConfigurationError(format!(
            "failed reading itinerary directory {}: {e}",
            directory.to_string_lossy()
        ))
    })?;
    let mut paths = vec![];
    for entry in entries {
        let path = entry?.path();
        let is_json = path.extension().map(|ext| ext == "json").unwrap_or(false);
        let is_partial = path
            .file_name()
            .map(|n| n.to_string_lossy().starts_with('.'))
            .unwrap_or(true);
        if path.is_file() && is_json && !is_partial {
            paths.push(path);
        }
    }

    let mut itineraries = BTreeMap::new();
    for path in tqdm!(paths.iter(), total = paths.len(), desc = "read itineraries") {
        let trip_id = match path.file_stem() {
            Some(stem) => stem.to_string_lossy().to_string(),
            None => continue,
        };
        let json = std::fs::read_to_string(path)?;
        let itinerary = Itinerary::from_json_str(&json).map_err(|e| OtpaError::OutputError {
            path: path.to_string_lossy().to_string(),
            message: e.to_string(),
        })?;
        itineraries.insert(trip_id, itinerary);
    }
    log::info!(
        "loaded {} itineraries from {}",
        itineraries.len(),
        directory.to_string_lossy()
    );
    Ok(itineraries)
}
