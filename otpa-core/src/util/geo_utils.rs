use geo::{line_string, Haversine, Length, Point};

/// great-circle distance in meters between two (lon, lat) points
pub fn haversine_distance_meters(a: &Point<f64>, b: &Point<f64>) -> f64 {
    Haversine.length(&line_string![a.0, b.0])
}

/// speed in km/h over a distance in meters and a duration in seconds.
/// `None` when the duration is not positive.
pub fn speed_kmh(distance_meters: f64, duration_seconds: f64) -> Option<f64> {
    if duration_seconds > 0.0 {
        Some((distance_meters / 1000.0) / (duration_seconds / 3600.0))
    } else {
        None
    }
}
