//! Leading + trailing rate limiter.

use std::time::{Duration, Instant};

/// Rate limiter that runs at most once per `interval`.
///
/// The first trigger of a quiet period runs immediately (leading edge).
/// Triggers inside the interval collapse into a single trailing run that
/// becomes due when the interval elapses, so the last trigger of a burst is
/// never lost.
///
/// ```ignore
/// let mut throttle = Throttle::new(Duration::from_millis(200));
/// if throttle.trigger_at(now) { run(); }
/// // later, from the event loop:
/// if throttle.poll(now) { run(); }
/// ```
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    last_run: Option<Instant>,
    pending: bool,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_run: None,
            pending: false,
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Trigger now. Returns `true` when the caller should run immediately.
    #[inline]
    pub fn trigger(&mut self) -> bool {
        self.trigger_at(Instant::now())
    }

    /// Trigger at `now`. Returns `true` when the caller should run
    /// immediately; otherwise a trailing run is pending.
    pub fn trigger_at(&mut self, now: Instant) -> bool {
        if self.is_open(now) {
            self.record(now);
            true
        } else {
            self.pending = true;
            false
        }
    }

    /// Returns `true` when a pending trailing run is due at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.pending && self.is_open(now) {
            self.record(now);
            true
        } else {
            false
        }
    }

    /// When the pending trailing run becomes due.
    pub fn deadline(&self) -> Option<Instant> {
        if !self.pending {
            return None;
        }
        self.last_run.map(|last| last + self.interval)
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Drop any pending trailing run.
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    fn is_open(&self, now: Instant) -> bool {
        self.last_run
            .is_none_or(|last| now.saturating_duration_since(last) >= self.interval)
    }

    /// Record a run made outside the throttle at `now`. Any pending
    /// trailing run is dropped and the next window starts at `now`.
    pub fn record(&mut self, now: Instant) {
        self.last_run = Some(now);
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_leading_edge_runs() {
        let t0 = Instant::now();
        let mut throttle = Throttle::new(ms(200));
        assert!(throttle.trigger_at(t0));
        assert!(!throttle.is_pending());
        assert_eq!(throttle.deadline(), None);
    }

    #[test]
    fn test_burst_collapses_to_one_trailing_run() {
        let t0 = Instant::now();
        let mut throttle = Throttle::new(ms(200));
        assert!(throttle.trigger_at(t0));

        let mut immediate = 0;
        for step in 1..10 {
            if throttle.trigger_at(t0 + ms(step * 10)) {
                immediate += 1;
            }
        }
        assert_eq!(immediate, 0);
        assert_eq!(throttle.deadline(), Some(t0 + ms(200)));

        assert!(!throttle.poll(t0 + ms(199)));
        assert!(throttle.poll(t0 + ms(200)));
        assert!(!throttle.poll(t0 + ms(500)));
    }

    #[test]
    fn test_trailing_run_restarts_window() {
        let t0 = Instant::now();
        let mut throttle = Throttle::new(ms(200));
        throttle.trigger_at(t0);
        throttle.trigger_at(t0 + ms(50));
        assert!(throttle.poll(t0 + ms(200)));

        // inside the window opened by the trailing run
        assert!(!throttle.trigger_at(t0 + ms(300)));
        assert_eq!(throttle.deadline(), Some(t0 + ms(400)));
    }

    #[test]
    fn test_spaced_triggers_all_run() {
        let t0 = Instant::now();
        let mut throttle = Throttle::new(ms(200));
        assert!(throttle.trigger_at(t0));
        assert!(throttle.trigger_at(t0 + ms(200)));
        assert!(throttle.trigger_at(t0 + ms(450)));
    }

    #[test]
    fn test_cancel_drops_trailing_run() {
        let t0 = Instant::now();
        let mut throttle = Throttle::new(ms(200));
        throttle.trigger_at(t0);
        throttle.trigger_at(t0 + ms(10));
        throttle.cancel();
        assert!(!throttle.poll(t0 + ms(300)));
    }

    #[test]
    fn test_record_restarts_window() {
        let t0 = Instant::now();
        let mut throttle = Throttle::new(ms(200));
        throttle.trigger_at(t0);
        throttle.trigger_at(t0 + ms(50));

        throttle.record(t0 + ms(100));
        assert!(!throttle.is_pending());
        assert!(!throttle.trigger_at(t0 + ms(250)));
        assert_eq!(throttle.deadline(), Some(t0 + ms(300)));
    }

    #[test]
    fn test_at_most_one_run_per_interval() {
        let t0 = Instant::now();
        let mut throttle = Throttle::new(ms(200));
        let mut runs = Vec::new();

        // a scroll event every 16ms for one second, polling each frame
        for frame in 0..=62 {
            let now = t0 + ms(frame * 16);
            if throttle.trigger_at(now) || throttle.poll(now) {
                runs.push(now);
            }
        }

        assert!(runs.windows(2).all(|w| w[1] - w[0] >= ms(200)));
        assert!(runs.len() >= 4);
    }
}
