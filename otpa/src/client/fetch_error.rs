#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request to {0} timed out")]
    Timeout(String),
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("request to {url} returned HTTP status {status}")]
    HttpStatus { url: String, status: u16 },
    #[error("failure reading response body from {url}: {message}")]
    Body { url: String, message: String },
}
