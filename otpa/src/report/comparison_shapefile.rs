use std::{collections::BTreeMap, path::Path};

use chrono::NaiveDate;
use otpa_core::{
    aggregate::AggregateError,
    model::{
        itinerary::Itinerary,
        trip::{TripCatalog, TripTimeZone},
    },
    util::time_utils,
};
use shapefile::dbase::{FieldName, FieldValue, Record, TableWriterBuilder};

use crate::OtpaError;

/// EPSG:4326 in ESRI well-known text, written as the `.prj` of shapefile output
pub const WGS84_PRJ: &str = r#"GEOGCS["GCS_WGS_1984",DATUM["D_WGS_1984",SPHEROID["WGS_1984",6378137.0,298.257223563]],PRIMEM["Greenwich",0.0],UNIT["Degree",0.0174532925199433]]"#;

const SHAPEFILE_EXTENSIONS: [&str; 5] = ["shp", "shx", "dbf", "prj", "cpg"];

/// the itineraries routed on one graph, by trip id
#[derive(Debug, Clone, Copy)]
pub struct GraphItineraries<'a> {
    pub name: &'a str,
    pub itineraries: &'a BTreeMap<String, Itinerary>,
}

impl GraphItineraries<'_> {
    /// `t` and the graph name, cut to 8 characters
    fn field_name(&self) -> String {
        let mut name = format!("t{}", self.name);
        while name.len() > 8 {
            name.pop();
        }
        name
    }
}

fn field_name(name: &str) -> Result<FieldName, OtpaError> {
    FieldName::try_from(name)
        .map_err(|e| OtpaError::ConfigurationError(format!("invalid shapefile field name '{name}': {e:?}")))
}

/// writes a line from origin to destination for each trip routed on both
/// graphs, with the total trip time in seconds on each graph and their
/// difference (first minus second). any existing shapefile at `path` is
/// replaced. returns the number of trips written.
pub fn write_comparison_shapefile(
    path: &Path,
    catalog: &TripCatalog,
    first: GraphItineraries,
    second: GraphItineraries,
    base_date: Option<NaiveDate>,
    time_zone: TripTimeZone,
) -> Result<usize, OtpaError> {
    let first_field = first.field_name();
    let second_field = second.field_name();
    if first_field == second_field {
        return Err(OtpaError::ConfigurationError(format!(
            "graphs '{}' and '{}' share the field name '{first_field}'",
            first.name, second.name
        )));
    }

    for extension in SHAPEFILE_EXTENSIONS {
        let component = path.with_extension(extension);
        if component.exists() {
            std::fs::remove_file(&component)?;
        }
    }

    let table = TableWriterBuilder::new()
        .add_character_field(field_name("TripID")?, 20)
        .add_character_field(field_name("DepTime")?, 8)
        .add_character_field(field_name("OriginZ")?, 254)
        .add_character_field(field_name("DestZ")?, 254)
        .add_numeric_field(field_name(&first_field)?, 12, 1)
        .add_numeric_field(field_name(&second_field)?, 12, 1)
        .add_numeric_field(field_name("Diff")?, 12, 1);
    let mut writer = shapefile::Writer::from_path(path, table)?;

    let mut n_written = 0;
    for trip in catalog.iter() {
        let (Some(first_itinerary), Some(second_itinerary)) = (
            first.itineraries.get(trip.id()),
            second.itineraries.get(trip.id()),
        ) else {
            continue;
        };
        let requested_start = time_zone
            .localize(&trip.requested_start(base_date)?)
            .ok_or_else(|| AggregateError::UnresolvableStart(trip.id().to_string()))?;
        let first_secs = time_utils::total_seconds(&first_itinerary.total_trip_duration(&requested_start));
        let second_secs = time_utils::total_seconds(&second_itinerary.total_trip_duration(&requested_start));

        let line = shapefile::Polyline::new(vec![
            shapefile::Point::new(trip.origin().x(), trip.origin().y()),
            shapefile::Point::new(trip.destination().x(), trip.destination().y()),
        ]);
        let mut record = Record::default();
        record.insert(String::from("TripID"), FieldValue::Character(Some(trip.id().to_string())));
        record.insert(
            String::from("DepTime"),
            FieldValue::Character(Some(requested_start.format("%H:%M:%S").to_string())),
        );
        record.insert(
            String::from("OriginZ"),
            FieldValue::Character(Some(trip.origin_zone().to_string())),
        );
        record.insert(
            String::from("DestZ"),
            FieldValue::Character(Some(trip.destination_zone().to_string())),
        );
        record.insert(first_field.clone(), FieldValue::Numeric(Some(first_secs)));
        record.insert(second_field.clone(), FieldValue::Numeric(Some(second_secs)));
        record.insert(String::from("Diff"), FieldValue::Numeric(Some(first_secs - second_secs)));
        writer.write_shape_and_record(&line, &record)?;
        n_written += 1;
    }
    drop(writer);

    std::fs::write(path.with_extension("prj"), WGS84_PRJ)?;
    log::info!(
        "wrote {n_written} trips comparing '{}' and '{}' to {}",
        first.name,
        second.name,
        path.to_string_lossy()
    );
    Ok(n_written)
}
