use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveTime};

use super::DerivedStage;

/// location names are used in file names with spaces and path separators replaced
pub fn clean_location_name(location: &str) -> String {
    location.replace([' ', '/', '\\'], "_")
}

/// `{location}-{YYYY_MM_DD}-{HH_MM_SS}[-{suffix}]`
pub fn file_stem(location: &str, date: &NaiveDate, time: &NaiveTime, suffix: Option<&str>) -> String {
    let mut stem = format!(
        "{}-{}-{}",
        clean_location_name(location),
        date.format("%Y_%m_%d"),
        time.format("%H_%M_%S")
    );
    if let Some(suffix) = suffix.filter(|s| !s.is_empty()) {
        stem.push('-');
        stem.push_str(suffix);
    }
    stem
}

pub fn raster_filename(location: &str, date: &NaiveDate, time: &NaiveTime, suffix: Option<&str>) -> String {
    format!("{}.tiff", file_stem(location, date, time, suffix))
}

/// `{location}-{date}-{time}-{minutes}min-{type}[-{suffix}].geojson`
pub fn vector_filename(
    location: &str,
    date: &NaiveDate,
    time: &NaiveTime,
    minutes: u32,
    vector_type: &str,
    suffix: Option<&str>,
) -> String {
    let mut name = format!(
        "{}-{}-{}-{minutes}min-{}",
        clean_location_name(location),
        date.format("%Y_%m_%d"),
        time.format("%H_%M_%S"),
        vector_type.to_lowercase()
    );
    if let Some(suffix) = suffix.filter(|s| !s.is_empty()) {
        name.push('-');
        name.push_str(suffix);
    }
    format!("{name}.geojson")
}

/// name of a file derived from the rasters of a location and time, averaged
/// over `num_each_side` nearby times either side
pub fn derived_filename(
    location: &str,
    date: &NaiveDate,
    time: &NaiveTime,
    suffix: Option<&str>,
    num_each_side: u32,
    stage: &DerivedStage,
) -> String {
    let stem = file_stem(location, date, time, suffix);
    format!("{stem}{}", stage.name_ending(num_each_side))
}

/// `{directory}/{trip_id}.json`
pub fn itinerary_filename(directory: &Path, trip_id: &str) -> PathBuf {
    directory.join(format!("{trip_id}.json"))
}
