use std::time::Duration;

/// waits between retry attempts
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

/// blocks the current thread
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration)
    }
}
