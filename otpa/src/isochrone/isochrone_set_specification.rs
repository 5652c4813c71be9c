use chrono::{NaiveDate, NaiveTime};
use geo::Point;
use otpa_core::model::RoutingParameters;
use serde::{Deserialize, Serialize};

/// a named location to compute isochrones from, in EPSG:4326
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedLocation {
    pub name: String,
    pub lon: f64,
    pub lat: f64,
}

impl NamedLocation {
    pub fn point(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

/// what to download for every location. stored verbatim in run metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsochroneSetSpecification {
    #[serde(default)]
    pub locations: Vec<NamedLocation>,
    pub date: NaiveDate,
    pub times: Vec<NaiveTime>,
    /// also download rasters at times spread around each time, for averaging
    #[serde(default)]
    pub save_nearby_times: bool,
    /// spread either side of each time, in minutes
    #[serde(default)]
    pub nearby_minutes: f64,
    /// number of nearby times each side
    #[serde(default)]
    pub num_each_side: u32,
    #[serde(default)]
    pub routing_params: RoutingParameters,
    /// half-width and half-height of the raster bounding box, in degrees
    pub raster_bounding_buffer: (f64, f64),
    pub raster_resolution: f64,
    /// vector isochrones are fetched every `iso_increment` minutes up to `iso_max`
    #[serde(default)]
    pub iso_increment: u32,
    #[serde(default)]
    pub iso_max: u32,
    /// vector output types, e.g. "POLYGON"; none disables vector downloads
    #[serde(default)]
    pub vector_types: Vec<String>,
}

impl IsochroneSetSpecification {
    /// walk-time radii for vector isochrones
    pub fn isochrone_minutes(&self) -> Vec<u32> {
        if self.iso_increment == 0 {
            return vec![];
        }
        (self.iso_increment..=self.iso_max)
            .step_by(self.iso_increment as usize)
            .collect()
    }
}
