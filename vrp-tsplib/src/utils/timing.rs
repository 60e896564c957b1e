use std::time::{Duration, Instant};

/// Implements a simple performance timer.
#[derive(Clone)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Starts a new timer.
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    /// Returns elapsed time.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Runs the action and passes its duration to the callback.
    pub fn measure_duration_with_callback<R, F, C>(action: F, callback: C) -> R
    where
        F: FnOnce() -> R,
        C: FnOnce(Duration),
    {
        let timer = Timer::start();
        let result = action();
        callback(timer.elapsed());

        result
    }
}
