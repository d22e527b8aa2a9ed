use std::time::Instant;

/// A seekable time source that starts and stops independently of consumers.
///
/// `start` and `stop` are idempotent: calling either in the state it already
/// produces is a no-op. `seek` is honored in both states.
pub trait AdjustableClock {
    /// Current time in milliseconds.
    fn current_time(&self) -> f64;

    /// Playback rate multiplier (1.0 = real time).
    fn rate(&self) -> f64;

    fn is_running(&self) -> bool;

    fn start(&mut self);

    fn stop(&mut self);

    /// Jumps to `time` (ms), preserving the running state.
    fn seek(&mut self, time: f64);
}

/// Wall-clock [`AdjustableClock`] with a rate multiplier.
///
/// While stopped, `current_time` holds the accumulated value exactly; while
/// running it advances from the last re-base point at `rate`.
#[derive(Debug, Clone)]
pub struct StopwatchClock {
    /// Accumulated milliseconds as of `reference`.
    base: f64,
    /// Wall time of the last re-base (start, seek, or rate change).
    reference: Instant,
    rate: f64,
    running: bool,
}

impl StopwatchClock {
    pub fn new() -> Self {
        Self {
            base: 0.0,
            reference: Instant::now(),
            rate: 1.0,
            running: false,
        }
    }

    /// Changes the rate without disturbing the current time.
    pub fn set_rate(&mut self, rate: f64) {
        // Re-base first so elapsed-so-far is banked at the old rate.
        self.base = self.current_time();
        self.reference = Instant::now();
        self.rate = rate;
    }
}

impl Default for StopwatchClock {
    fn default() -> Self {
        Self::new()
    }
}

impl AdjustableClock for StopwatchClock {
    fn current_time(&self) -> f64 {
        if self.running {
            self.base + self.reference.elapsed().as_secs_f64() * 1000.0 * self.rate
        } else {
            self.base
        }
    }

    fn rate(&self) -> f64 {
        self.rate
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn start(&mut self) {
        if !self.running {
            self.reference = Instant::now();
            self.running = true;
        }
    }

    fn stop(&mut self) {
        if self.running {
            self.base = self.current_time();
            self.running = false;
        }
    }

    fn seek(&mut self, time: f64) {
        self.base = time;
        self.reference = Instant::now();
    }
}
