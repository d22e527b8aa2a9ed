use super::AdjustableClock;

/// Frame-quantized view over an adjustable source.
///
/// Consumers read a snapshot that only moves when [`process_frame`] runs, so
/// everything evaluated within one frame sees a single consistent timestamp
/// regardless of how the source advances underneath.
///
/// [`process_frame`]: FramedClock::process_frame
#[derive(Debug, Clone)]
pub struct FramedClock {
    current: f64,
    last: f64,
    rate: f64,
    running: bool,
}

impl FramedClock {
    pub fn new() -> Self {
        Self {
            current: 0.0,
            last: 0.0,
            rate: 1.0,
            running: false,
        }
    }

    /// Takes one snapshot of `source`. The previous snapshot becomes the
    /// baseline for [`elapsed_frame_time`].
    ///
    /// [`elapsed_frame_time`]: FramedClock::elapsed_frame_time
    pub fn process_frame(&mut self, source: &dyn AdjustableClock) {
        self.last = self.current;
        self.current = source.current_time();
        self.rate = source.rate();
        self.running = source.is_running();
    }

    #[inline]
    pub fn current_time(&self) -> f64 {
        self.current
    }

    /// Milliseconds between the last two snapshots. Negative after a
    /// backwards seek was observed.
    #[inline]
    pub fn elapsed_frame_time(&self) -> f64 {
        self.current - self.last
    }

    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for FramedClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Manually driven source for deterministic snapshots.
    struct ManualClock {
        time: f64,
        running: bool,
    }

    impl AdjustableClock for ManualClock {
        fn current_time(&self) -> f64 {
            self.time
        }
        fn rate(&self) -> f64 {
            1.0
        }
        fn is_running(&self) -> bool {
            self.running
        }
        fn start(&mut self) {
            self.running = true;
        }
        fn stop(&mut self) {
            self.running = false;
        }
        fn seek(&mut self, time: f64) {
            self.time = time;
        }
    }

    #[test]
    fn snapshot_only_moves_in_process_frame() {
        let mut source = ManualClock { time: 0.0, running: true };
        let mut framed = FramedClock::new();

        source.time = 16.0;
        assert_eq!(framed.current_time(), 0.0);

        framed.process_frame(&source);
        assert_eq!(framed.current_time(), 16.0);

        // The source keeps moving; the snapshot does not.
        source.time = 48.0;
        assert_eq!(framed.current_time(), 16.0);
    }

    #[test]
    fn elapsed_frame_time_spans_consecutive_snapshots() {
        let mut source = ManualClock { time: 10.0, running: true };
        let mut framed = FramedClock::new();

        framed.process_frame(&source);
        source.time = 26.5;
        framed.process_frame(&source);

        assert_eq!(framed.elapsed_frame_time(), 16.5);
    }

    #[test]
    fn backwards_seek_yields_negative_elapsed() {
        let mut source = ManualClock { time: 100.0, running: true };
        let mut framed = FramedClock::new();

        framed.process_frame(&source);
        source.seek(40.0);
        framed.process_frame(&source);

        assert_eq!(framed.elapsed_frame_time(), -60.0);
    }

    #[test]
    fn snapshot_carries_running_state() {
        let mut source = ManualClock { time: 0.0, running: false };
        let mut framed = FramedClock::new();

        framed.process_frame(&source);
        assert!(!framed.is_running());

        source.start();
        framed.process_frame(&source);
        assert!(framed.is_running());
    }
}
