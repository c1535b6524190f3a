//! Single-slot debounce timer.
//!
//! The host owns the clock: every call takes the current [`Instant`], so the timer never sleeps
//! or spawns anything and tests drive it with synthetic instants.

use std::time::{Duration, Instant};
use tracing::trace;

/// A timer holding at most one pending deadline.
///
/// Arming while a deadline is pending replaces it, so a burst of edits coalesces into one pass
/// that runs `delay` after the last edit.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Create an idle timer.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule the deadline `delay` after `now`, replacing any pending one.
    pub fn arm(&mut self, now: Instant) -> Instant {
        let deadline = now + self.delay;
        let replaced = self.deadline.replace(deadline).is_some();
        trace!(
            target: "session.timer",
            delay_ms = u64::try_from(self.delay.as_millis()).unwrap_or(u64::MAX),
            replaced,
            "debounce_armed"
        );
        deadline
    }

    /// Pending deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns `true` if a deadline is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` if a deadline is pending and `now` has reached it.
    pub fn due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Consume the deadline if it is due. Returns `true` exactly once per armed deadline.
    pub fn fire(&mut self, now: Instant) -> bool {
        if !self.due(now) {
            return false;
        }
        self.deadline = None;
        trace!(target: "session.timer", "debounce_fired");
        true
    }

    /// Drop the pending deadline. Returns `true` if one was pending.
    pub fn cancel(&mut self) -> bool {
        let cancelled = self.deadline.take().is_some();
        if cancelled {
            trace!(target: "session.timer", "debounce_cancelled");
        }
        cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing::Level;
    use tracing::subscriber::with_default;

    const DELAY: Duration = Duration::from_millis(100);

    #[test]
    fn fires_once_after_delay() {
        let start = Instant::now();
        let mut timer = Debouncer::new(DELAY);
        assert!(!timer.fire(start));

        timer.arm(start);
        assert!(!timer.fire(start + Duration::from_millis(99)));
        assert!(timer.fire(start + DELAY));
        assert!(!timer.fire(start + Duration::from_millis(500)));
        assert!(!timer.is_pending());
    }

    #[test]
    fn rearming_replaces_pending_deadline() {
        let start = Instant::now();
        let mut timer = Debouncer::new(DELAY);
        timer.arm(start);
        let later = timer.arm(start + Duration::from_millis(80));

        assert_eq!(timer.deadline(), Some(later));
        assert!(!timer.due(start + DELAY));
        assert!(timer.due(start + Duration::from_millis(180)));
    }

    #[test]
    fn cancel_drops_deadline() {
        let start = Instant::now();
        let mut timer = Debouncer::new(DELAY);
        assert!(!timer.cancel());
        timer.arm(start);
        assert!(timer.cancel());
        assert!(!timer.fire(start + DELAY));
    }

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn arming_logs_delay_in_millis() {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_ansi(false)
            .without_time()
            .with_writer(move || writer.clone())
            .finish();

        let start = Instant::now();
        let mut timer = Debouncer::new(Duration::from_millis(250));
        with_default(subscriber, || {
            timer.arm(start);
            timer.arm(start + DELAY);
        });

        let log_output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert!(log_output.contains("session.timer"));
        assert!(log_output.contains("delay_ms=250 replaced=false"));
        assert!(log_output.contains("delay_ms=250 replaced=true"));
    }
}
