use crate::model::ModelError;

#[derive(thiserror::Error, Debug)]
pub enum AggregateError {
    #[error("trip id '{0}' was requested but is not present in the trip results")]
    UnknownTripId(String),
    #[error("trip '{0}' has a start time that cannot be placed in the configured time zone")]
    UnresolvableStart(String),
    #[error(transparent)]
    ModelError(#[from] ModelError),
}
