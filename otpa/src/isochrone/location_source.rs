use std::path::Path;

use kdam::tqdm;
use serde::{Deserialize, Serialize};

use super::NamedLocation;
use crate::OtpaError;

/// file of named locations to compute isochrones from
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum LocationSource {
    /// CSV with `name`, `lon` and `lat` columns
    Csv { file: String },
    /// point shapefile, names read from `name_field`. a `.prj` beside the
    /// shapefile gives its coordinate system; without one, EPSG:4326 is assumed.
    Shapefile {
        file: String,
        #[serde(default = "default_name_field")]
        name_field: String,
    },
}

fn default_name_field() -> String {
    String::from("Name")
}

impl LocationSource {
    pub fn build(&self) -> Result<Vec<NamedLocation>, OtpaError> {
        let locations = match self {
            LocationSource::Csv { file } => read_location_csv(file)?,
            LocationSource::Shapefile { file, name_field } => read_location_shapefile(file, name_field)?,
        };
        if locations.is_empty() {
            return Err(OtpaError::LocationInputError(String::from(
                "location source contains no locations",
            )));
        }
        Ok(locations)
    }
}

fn read_location_csv(file: &str) -> Result<Vec<NamedLocation>, OtpaError> {
    let reader = csv::Reader::from_path(file)
        .map_err(|e| OtpaError::LocationInputError(format!("failed reading '{file}': {e}")))?;
    let iter = tqdm!(reader.into_deserialize::<NamedLocation>(), desc = "read locations");
    let mut locations = vec![];
    for (idx, row) in iter.enumerate() {
        let location = row.map_err(|e| {
            OtpaError::LocationInputError(format!("failed reading row {idx} of '{file}': {e}"))
        })?;
        locations.push(location);
    }
    Ok(locations)
}

fn read_location_shapefile(file: &str, name_field: &str) -> Result<Vec<NamedLocation>, OtpaError> {
    let rows = shapefile::read(file)
        .map_err(|e| OtpaError::LocationInputError(format!("failed reading '{file}': {e}")))?;

    let mut locations = vec![];
    for (idx, (shape, record)) in rows.into_iter().enumerate() {
        let (x, y) = match shape {
            shapefile::Shape::Point(p) => (p.x, p.y),
            shapefile::Shape::PointM(p) => (p.x, p.y),
            shapefile::Shape::PointZ(p) => (p.x, p.y),
            _ => {
                return Err(OtpaError::LocationInputError(format!(
                    "unexpected shape type {} found at row {idx}, must be a point",
                    shape.shapetype()
                )))
            }
        };
        let field = record.get(name_field).ok_or_else(|| {
            OtpaError::LocationInputError(format!("field {name_field} missing from shapefile record"))
        })?;
        let name = match field {
            shapefile::dbase::FieldValue::Character(Some(s)) => s.trim().to_string(),
            _ => {
                return Err(OtpaError::LocationInputError(format!(
                    "field '{name_field}' at row {idx} has unexpected field type '{}'",
                    field.field_type()
                )))
            }
        };
        locations.push(NamedLocation { name, lon: x, lat: y });
    }

    let prj = Path::new(file).with_extension("prj");
    if !prj.exists() {
        log::warn!(
            "no projection file found for '{file}', assuming coordinates are EPSG:4326"
        );
        return Ok(locations);
    }
    let wkt = std::fs::read_to_string(&prj)?;
    if is_wgs84(&wkt) {
        Ok(locations)
    } else {
        reproject(locations, &wkt)
    }
}

/// true for a geographic WGS84 coordinate system
fn is_wgs84(wkt: &str) -> bool {
    let wkt = wkt.trim_start();
    wkt.starts_with("GEOGCS") && (wkt.contains("WGS_1984") || wkt.contains("WGS 84"))
}

#[cfg(feature = "reproject")]
fn reproject(locations: Vec<NamedLocation>, wkt: &str) -> Result<Vec<NamedLocation>, OtpaError> {
    let transform = proj::Proj::new_known_crs(wkt, "EPSG:4326", None).map_err(|e| {
        OtpaError::LocationInputError(format!("unable to reproject locations: {e}"))
    })?;
    locations
        .into_iter()
        .map(|location| {
            let (lon, lat) = transform.convert((location.lon, location.lat)).map_err(|e| {
                OtpaError::LocationInputError(format!("unable to reproject '{}': {e}", location.name))
            })?;
            Ok(NamedLocation { lon, lat, ..location })
        })
        .collect()
}

#[cfg(not(feature = "reproject"))]
fn reproject(_locations: Vec<NamedLocation>, _wkt: &str) -> Result<Vec<NamedLocation>, OtpaError> {
    Err(OtpaError::LocationInputError(String::from(
        "locations are not in EPSG:4326 and this build lacks the `reproject` feature",
    )))
}
