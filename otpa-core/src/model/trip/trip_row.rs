use std::str::FromStr;

use geo::Point;
use serde::{Deserialize, Serialize};

use super::{Trip, TripStart};
use crate::model::ModelError;

/// a row of a trip set CSV file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRow {
    pub id: String,
    pub origin_lon: f64,
    pub origin_lat: f64,
    pub dest_lon: f64,
    pub dest_lat: f64,
    /// either a full datetime or a time of day
    pub start: String,
    #[serde(default)]
    pub origin_zone: String,
    #[serde(default)]
    pub dest_zone: String,
}

impl TryFrom<TripRow> for Trip {
    type Error = ModelError;

    fn try_from(row: TripRow) -> Result<Self, Self::Error> {
        let origin = lon_lat_point(row.origin_lon, row.origin_lat)
            .map_err(|e| ModelError::InvalidCoordinate(format!("trip {} origin: {e}", row.id)))?;
        let destination = lon_lat_point(row.dest_lon, row.dest_lat).map_err(|e| {
            ModelError::InvalidCoordinate(format!("trip {} destination: {e}", row.id))
        })?;
        let start = TripStart::from_str(&row.start)?;
        Ok(Trip::new(
            &row.id,
            origin,
            destination,
            start,
            &row.origin_zone,
            &row.dest_zone,
        ))
    }
}

fn lon_lat_point(lon: f64, lat: f64) -> Result<Point<f64>, String> {
    if !(-180.0..=180.0).contains(&lon) {
        Err(format!("longitude {lon} not in range [-180,180]"))
    } else if !(-90.0..=90.0).contains(&lat) {
        Err(format!("latitude {lat} not in range [-90,90]"))
    } else {
        Ok(Point::new(lon, lat))
    }
}
