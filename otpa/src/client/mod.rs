//! HTTP access to the OTP server. transport failures never escape this module
//! as errors: the retry wrapper turns them into a failed outcome and counts it.
mod failure_counter;
mod fetch_error;
mod fetcher;
mod http_fetcher;
mod retrying_fetcher;
mod sleeper;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use failure_counter::FailureCounter;
pub use fetch_error::FetchError;
pub use fetcher::Fetcher;
pub use http_fetcher::HttpFetcher;
pub use retrying_fetcher::{FetchOutcome, RetryPolicy, RetryingFetcher};
pub use sleeper::{Sleeper, ThreadSleeper};
