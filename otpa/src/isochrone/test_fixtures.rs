use chrono::{NaiveDate, NaiveTime};
use otpa_core::model::{ParameterValue, RoutingParameters};

use super::{IsochroneSetSpecification, NamedLocation};

/// two locations, one time, no nearby times and no vectors
pub fn isochrone_set() -> IsochroneSetSpecification {
    IsochroneSetSpecification {
        locations: vec![
            NamedLocation {
                name: String::from("Box Hill"),
                lon: 145.1219,
                lat: -37.8191,
            },
            NamedLocation {
                name: String::from("Monash Clayton"),
                lon: 145.13163,
                lat: -37.91432,
            },
        ],
        date: NaiveDate::from_ymd_opt(2013, 5, 6).unwrap(),
        times: vec![NaiveTime::from_hms_opt(8, 30, 0).unwrap()],
        save_nearby_times: false,
        nearby_minutes: 0.0,
        num_each_side: 0,
        routing_params: RoutingParameters::new().with("mode", ParameterValue::from("TRANSIT,WALK")),
        raster_bounding_buffer: (0.5, 0.5),
        raster_resolution: 0.01,
        iso_increment: 0,
        iso_max: 0,
        vector_types: vec![],
    }
}
