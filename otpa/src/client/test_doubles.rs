use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    time::Duration,
};

use super::{FetchError, Fetcher, Sleeper};

/// a [`Fetcher`] that answers from a script. once the script runs out, the
/// fallback answer is repeated. every requested url is recorded.
pub struct ScriptedFetcher {
    script: RefCell<VecDeque<Result<Vec<u8>, FetchError>>>,
    fallback: Result<Vec<u8>, FetchError>,
    urls: RefCell<Vec<String>>,
    calls: Cell<usize>,
}

impl ScriptedFetcher {
    pub fn new(
        script: Vec<Result<Vec<u8>, FetchError>>,
        fallback: Result<Vec<u8>, FetchError>,
    ) -> ScriptedFetcher {
        ScriptedFetcher {
            script: RefCell::new(script.into()),
            fallback,
            urls: RefCell::new(vec![]),
            calls: Cell::new(0),
        }
    }

    pub fn failure() -> FetchError {
        FetchError::Timeout(String::from("scripted"))
    }

    pub fn failing_then(n_failures: usize, body: &[u8]) -> ScriptedFetcher {
        let script = (0..n_failures).map(|_| Err(Self::failure())).collect();
        ScriptedFetcher::new(script, Ok(body.to_vec()))
    }

    pub fn always_failing() -> ScriptedFetcher {
        ScriptedFetcher::new(vec![], Err(Self::failure()))
    }

    pub fn always(body: &[u8]) -> ScriptedFetcher {
        ScriptedFetcher::new(vec![], Ok(body.to_vec()))
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.borrow().clone()
    }
}

impl Fetcher for ScriptedFetcher {
    fn fetch(&self, url: &str, _timeout: Duration) -> Result<Vec<u8>, FetchError> {
        self.calls.set(self.calls.get() + 1);
        self.urls.borrow_mut().push(url.to_string());
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

/// records requested sleeps without waiting
#[derive(Default)]
pub struct RecordingSleeper {
    sleeps: RefCell<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.borrow().clone()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.sleeps.borrow_mut().push(duration);
    }
}
