use std::time::Duration;

use super::{FailureCounter, Fetcher, Sleeper};
use crate::config::BatchConfiguration;

/// retry settings for a single request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// attempts made after the first one fails
    pub max_retries: usize,
    pub retry_delay: Duration,
    pub timeout: Duration,
}

impl From<&BatchConfiguration> for RetryPolicy {
    fn from(conf: &BatchConfiguration) -> Self {
        RetryPolicy {
            max_retries: conf.max_retries,
            retry_delay: conf.retry_delay(),
            timeout: conf.request_timeout(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Body(Vec<u8>),
    Failed { attempts: usize },
}

/// wraps a [`Fetcher`], making up to `1 + max_retries` attempts with a fixed
/// delay between attempts.
pub struct RetryingFetcher<'a, F: Fetcher, S: Sleeper> {
    fetcher: &'a F,
    sleeper: &'a S,
    policy: RetryPolicy,
}

impl<'a, F: Fetcher, S: Sleeper> RetryingFetcher<'a, F, S> {
    pub fn new(fetcher: &'a F, sleeper: &'a S, policy: RetryPolicy) -> RetryingFetcher<'a, F, S> {
        RetryingFetcher {
            fetcher,
            sleeper,
            policy,
        }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// fetches `url`. a request that fails on every attempt increments
    /// `failures` exactly once.
    pub fn fetch(&self, url: &str, failures: &mut FailureCounter) -> FetchOutcome {
        let attempts = self.policy.max_retries + 1;
        for attempt in 1..=attempts {
            match self.fetcher.fetch(url, self.policy.timeout) {
                Ok(body) => return FetchOutcome::Body(body),
                Err(e) => {
                    log::debug!("attempt {attempt}/{attempts} failed: {e}");
                    if attempt < attempts {
                        self.sleeper.sleep(self.policy.retry_delay);
                    }
                }
            }
        }
        failures.increment();
        FetchOutcome::Failed { attempts }
    }
}
