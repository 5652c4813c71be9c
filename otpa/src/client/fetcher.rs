use std::time::Duration;

use super::FetchError;

/// issues a single GET request, returning the response body
pub trait Fetcher {
    fn fetch(&self, url: &str, timeout: Duration) -> Result<Vec<u8>, FetchError>;
}
