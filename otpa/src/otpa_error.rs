use otpa_core::{aggregate::AggregateError, model::ModelError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OtpaError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("invalid location input: {0}")]
    LocationInputError(String),
    #[error("failure writing output to {path}: {message}")]
    OutputError { path: String, message: String },
    #[error("failure building HTTP client: {0}")]
    HttpClientError(String),
    #[error("{source}")]
    ModelError {
        #[from]
        source: ModelError,
    },
    #[error("{source}")]
    AggregateError {
        #[from]
        source: AggregateError,
    },
    #[error("failure reading or writing file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure reading or writing CSV: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("failure decoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("failure reading or writing shapefile: {source}")]
    ShapefileError {
        #[from]
        source: shapefile::Error,
    },
}
