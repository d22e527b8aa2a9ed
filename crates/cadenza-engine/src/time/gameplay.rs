use std::fmt;

use crate::binding::{Bindable, ValueChange};

use super::{AdjustableClock, FramedClock};

/// Error from an unsupported clock operation.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ClockError {
    /// The gameplay clock derives its rate from the source; it cannot be set
    /// on the derived clock.
    RateNotSupported,
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockError::RateNotSupported => {
                write!(f, "gameplay clock rate is read-only; adjust the source clock")
            }
        }
    }
}

impl std::error::Error for ClockError {}

/// The derived, read-only clock handed to descendant gameplay components.
///
/// All reads come from the coordinator's frame-quantized snapshot, so a
/// whole frame of gameplay logic observes one timestamp.
#[derive(Debug, Clone, Default)]
pub struct GameplayClock {
    framed: FramedClock,
}

impl GameplayClock {
    /// Current gameplay time in milliseconds.
    #[inline]
    pub fn current_time(&self) -> f64 {
        self.framed.current_time()
    }

    /// Milliseconds the clock advanced in the last processed frame.
    #[inline]
    pub fn elapsed_frame_time(&self) -> f64 {
        self.framed.elapsed_frame_time()
    }

    #[inline]
    pub fn rate(&self) -> f64 {
        self.framed.rate()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.framed.is_running()
    }

    /// Always fails: rate follows the underlying source. No state changes.
    pub fn set_rate(&self, _rate: f64) -> Result<(), ClockError> {
        Err(ClockError::RateNotSupported)
    }
}

/// Coordinates an adjustable source and a derived [`GameplayClock`] through
/// a single paused flag.
///
/// The paused flag is the primary state: its transitions are the only place
/// the source is started or stopped on behalf of pause/resume, so repeated
/// identical assignments cannot double-start or double-stop the source.
pub struct GameplayClockCoordinator<S: AdjustableClock> {
    source: S,
    clock: GameplayClock,
    paused: Bindable<bool>,
}

impl<S: AdjustableClock> GameplayClockCoordinator<S> {
    /// A fresh session starts paused, awaiting the first `start()`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            clock: GameplayClock::default(),
            paused: Bindable::new(true),
        }
    }

    /// The read-only clock for descendant components.
    #[inline]
    pub fn clock(&self) -> &GameplayClock {
        &self.clock
    }

    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        *self.paused.get()
    }

    /// Observes pause transitions (fires on actual change only).
    pub fn on_paused_change(&mut self, f: impl FnMut(&ValueChange<bool>) + 'static) {
        self.paused.on_change(f);
    }

    /// Starts gameplay.
    ///
    /// A source that has not fully wound down from a previous stop may sit
    /// slightly behind the gameplay time; seeking before the fresh start
    /// absorbs that lag. Already-running sources are left untouched, but the
    /// paused flag is cleared either way.
    pub fn start(&mut self) {
        if !self.source.is_running() {
            self.source.seek(self.clock.current_time());
            self.source.start();
        }
        self.set_paused(false);
    }

    /// Pauses gameplay. The flag transition stops the source.
    pub fn stop(&mut self) {
        self.set_paused(true);
    }

    /// Seeks the source, paused or not.
    pub fn seek(&mut self, time: f64) {
        self.source.seek(time);
        // A following start() must observe the sought time, so the snapshot
        // is refreshed here; frame-to-frame advancement still happens only
        // in update().
        self.clock.framed.process_frame(&self.source);
    }

    /// Rewinds to zero. Paused sessions stay stopped at 0; unpaused sessions
    /// come back running from 0.
    pub fn restart(&mut self) {
        self.seek(0.0);
        self.source.stop();
        if !self.is_paused() {
            self.start();
        }
    }

    /// Per-frame tick: advances the derived clock by one snapshot unless
    /// paused. This is the only place gameplay time moves forward.
    pub fn update(&mut self) {
        if !self.is_paused() {
            self.clock.framed.process_frame(&self.source);
        }
    }

    fn set_paused(&mut self, paused: bool) {
        if self.paused.set(paused) {
            // Sole coupling between the flag and the source.
            if paused {
                self.source.stop();
            } else {
                self.source.start();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Default)]
    struct TestClockState {
        time: f64,
        running: bool,
        starts: u32,
        stops: u32,
        seeks: Vec<f64>,
    }

    /// Shared-handle source so tests can advance time while the coordinator
    /// owns the clock. Counts effective transitions, not raw calls.
    #[derive(Clone, Default)]
    struct TestClock(Rc<RefCell<TestClockState>>);

    impl TestClock {
        fn advance(&self, ms: f64) {
            self.0.borrow_mut().time += ms;
        }
        fn state(&self) -> std::cell::Ref<'_, TestClockState> {
            self.0.borrow()
        }
    }

    impl AdjustableClock for TestClock {
        fn current_time(&self) -> f64 {
            self.0.borrow().time
        }
        fn rate(&self) -> f64 {
            1.0
        }
        fn is_running(&self) -> bool {
            self.0.borrow().running
        }
        fn start(&mut self) {
            let mut s = self.0.borrow_mut();
            if !s.running {
                s.running = true;
                s.starts += 1;
            }
        }
        fn stop(&mut self) {
            let mut s = self.0.borrow_mut();
            if s.running {
                s.running = false;
                s.stops += 1;
            }
        }
        fn seek(&mut self, time: f64) {
            let mut s = self.0.borrow_mut();
            s.time = time;
            s.seeks.push(time);
        }
    }

    fn coordinator() -> (GameplayClockCoordinator<TestClock>, TestClock) {
        let handle = TestClock::default();
        (GameplayClockCoordinator::new(handle.clone()), handle)
    }

    // ── start / stop ──────────────────────────────────────────────────────

    #[test]
    fn starts_paused_and_stopped() {
        let (coordinator, handle) = coordinator();
        assert!(coordinator.is_paused());
        assert!(!handle.state().running);
        assert_eq!(coordinator.clock().current_time(), 0.0);
    }

    #[test]
    fn start_seeks_to_gameplay_time_before_starting() {
        let (mut coordinator, handle) = coordinator();
        coordinator.seek(1_500.0);
        coordinator.start();

        assert!(!coordinator.is_paused());
        assert!(handle.state().running);
        // One seek from the explicit seek(), one absorbing start-up lag.
        assert_eq!(handle.state().seeks, vec![1_500.0, 1_500.0]);
    }

    #[test]
    fn start_when_already_running_still_clears_paused() {
        let (mut coordinator, handle) = coordinator();
        coordinator.start();
        let seeks_after_first = handle.state().seeks.len();

        coordinator.start();
        assert!(!coordinator.is_paused());
        assert_eq!(handle.state().starts, 1);
        assert_eq!(handle.state().seeks.len(), seeks_after_first);
    }

    // ── paused-flag coupling ──────────────────────────────────────────────

    #[test]
    fn pause_transitions_drive_the_source_once() {
        let (mut coordinator, handle) = coordinator();
        coordinator.start();
        assert_eq!(handle.state().starts, 1);

        coordinator.stop();
        coordinator.stop();
        assert_eq!(handle.state().stops, 1);

        coordinator.start();
        coordinator.start();
        assert_eq!(handle.state().starts, 2);
    }

    #[test]
    fn pause_transitions_are_observable() {
        let (mut coordinator, _handle) = coordinator();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        coordinator.on_paused_change(move |c| sink.borrow_mut().push(c.new));

        coordinator.start();
        coordinator.stop();
        coordinator.stop();

        assert_eq!(*seen.borrow(), vec![false, true]);
    }

    // ── seek ──────────────────────────────────────────────────────────────

    #[test]
    fn seek_delegates_regardless_of_pause_state() {
        let (mut coordinator, handle) = coordinator();
        assert!(coordinator.is_paused());

        coordinator.seek(3_000.0);
        assert_eq!(handle.state().time, 3_000.0);
        assert_eq!(coordinator.clock().current_time(), 3_000.0);
    }

    // ── restart ───────────────────────────────────────────────────────────

    #[test]
    fn restart_while_paused_leaves_clock_stopped_at_zero() {
        let (mut coordinator, handle) = coordinator();
        coordinator.seek(4_000.0);
        coordinator.restart();

        assert!(coordinator.is_paused());
        assert!(!handle.state().running);
        assert_eq!(coordinator.clock().current_time(), 0.0);
        assert!(!coordinator.clock().is_running());
    }

    #[test]
    fn restart_while_unpaused_runs_from_zero() {
        let (mut coordinator, handle) = coordinator();
        coordinator.start();
        handle.advance(2_000.0);
        coordinator.update();
        assert_eq!(coordinator.clock().current_time(), 2_000.0);

        coordinator.restart();
        assert!(!coordinator.is_paused());
        assert!(handle.state().running);
        assert_eq!(handle.state().time, 0.0);
        assert_eq!(coordinator.clock().current_time(), 0.0);
    }

    // ── update ────────────────────────────────────────────────────────────

    #[test]
    fn update_advances_only_while_unpaused() {
        let (mut coordinator, handle) = coordinator();
        coordinator.start();
        handle.advance(100.0);
        coordinator.update();
        assert_eq!(coordinator.clock().current_time(), 100.0);
        assert_eq!(coordinator.clock().elapsed_frame_time(), 100.0);

        coordinator.stop();
        handle.advance(200.0);
        coordinator.update();
        assert_eq!(coordinator.clock().current_time(), 100.0);
    }

    // ── rate ──────────────────────────────────────────────────────────────

    #[test]
    fn gameplay_clock_rate_is_read_only() {
        let (coordinator, _handle) = coordinator();
        let err = coordinator.clock().set_rate(1.5).unwrap_err();
        assert_eq!(err, ClockError::RateNotSupported);
        assert_eq!(coordinator.clock().rate(), 1.0);
    }
}
