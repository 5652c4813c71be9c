#[derive(thiserror::Error, Debug)]
pub enum ModelError {
    #[error("failure decoding OTP itinerary JSON: {0}")]
    ItineraryDecodeError(#[from] serde_json::Error),
    #[error("leg index {leg_index} is out of range for an itinerary with {n_legs} legs")]
    LegIndexOutOfRange { leg_index: usize, n_legs: usize },
    #[error("trip '{0}' has a time-only start and no base date was provided to resolve it")]
    UnresolvedTripStart(String),
    #[error("invalid trip start '{0}', expected 'YYYY-MM-DDTHH:MM:SS' or 'HH:MM:SS'")]
    InvalidTripStart(String),
    #[error("trip id '{0}' appears more than once in the trip set")]
    DuplicateTripId(String),
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),
    #[error("unknown time zone '{0}', expected 'local', an IANA zone name or a UTC offset like '+10:00'")]
    InvalidTimeZone(String),
    #[error("invalid bounding box: {0}")]
    InvalidBoundingBox(String),
}
