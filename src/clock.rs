use std::time::{Duration, Instant};

/// Source of monotonic time for sessions
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Production clock backed by `Instant::now`
#[derive(Clone, Copy, Debug, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A one-shot deadline measured from the moment it is armed.
///
/// A deadline never fires on its own; it bounds how long the owner is
/// willing to wait. Once the owner stops consulting it (on completion, or by
/// dropping it) it has no further effect.
#[derive(Clone, Copy, Debug)]
pub struct Deadline {
    started_at: Instant,
    duration: Duration,
}

impl Deadline {
    pub fn arm<C: Clock + ?Sized>(clock: &C, duration: Duration) -> Self {
        Self {
            started_at: clock.now(),
            duration,
        }
    }

    /// Time since arming, capped at the deadline
    pub fn elapsed<C: Clock + ?Sized>(&self, clock: &C) -> Duration {
        clock
            .now()
            .saturating_duration_since(self.started_at)
            .min(self.duration)
    }

    pub fn remaining<C: Clock + ?Sized>(&self, clock: &C) -> Duration {
        self.duration
            .saturating_sub(clock.now().saturating_duration_since(self.started_at))
    }

    pub fn is_expired<C: Clock + ?Sized>(&self, clock: &C) -> bool {
        self.remaining(clock).is_zero()
    }
}
