use std::time::Duration;

use serde::{Deserialize, Serialize};

/// retry, timeout and abort behavior for a batch of requests
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct BatchConfiguration {
    /// attempts made after a failed first attempt
    pub max_retries: usize,
    pub retry_delay_seconds: u64,
    pub request_timeout_seconds: u64,
    /// requests failing after all retries before the batch is abandoned
    pub failure_ceiling: usize,
    /// progress is logged each time this percentage of the batch completes
    pub progress_percent: f64,
}

impl Default for BatchConfiguration {
    fn default() -> Self {
        Self {
            max_retries: 2,
            retry_delay_seconds: 10,
            request_timeout_seconds: 30,
            failure_ceiling: 10,
            progress_percent: 1.0,
        }
    }
}

impl BatchConfiguration {
    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_seconds)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// copy with the CLI's duration overrides applied
    pub fn with_overrides(
        &self,
        retry_delay: Option<Duration>,
        request_timeout: Option<Duration>,
    ) -> BatchConfiguration {
        BatchConfiguration {
            retry_delay_seconds: retry_delay
                .map(|d| d.as_secs())
                .unwrap_or(self.retry_delay_seconds),
            request_timeout_seconds: request_timeout
                .map(|d| d.as_secs())
                .unwrap_or(self.request_timeout_seconds),
            ..self.clone()
        }
    }
}
