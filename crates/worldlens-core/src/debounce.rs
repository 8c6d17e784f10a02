// crates/worldlens-core/src/debounce.rs

use std::time::{Duration, Instant};

/// Default interval for search input.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(400);

/// Trailing debouncer: a staged value is emitted only once it has stayed
/// unchanged for the configured interval. Every update restarts the clock;
/// there is no leading edge and no maximum wait. Poll-driven rather than
/// timer-driven, so it works under any caller-owned loop.
#[derive(Debug)]
pub struct Debouncer<T> {
    interval: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
        }
    }

    /// Stage `value`, restarting the stability clock.
    pub fn update(&mut self, value: T) {
        self.update_at(value, Instant::now());
    }

    /// Emit the staged value if it has been stable for the interval.
    /// At most one emission per staged value.
    pub fn poll(&mut self) -> Option<T> {
        self.poll_at(Instant::now())
    }

    fn update_at(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    fn poll_at(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, since)) if now.duration_since(*since) >= self.interval => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }
}
