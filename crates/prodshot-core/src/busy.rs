use std::time::{Duration, Instant};

use crate::consts::{BUSY_MESSAGES, BUSY_MESSAGE_INTERVAL};

/// Rotating status text shown while a request is pending.
///
/// The ticker holds no timer of its own: callers ask for the message at the
/// current instant and schedule their next refresh with [`next_change_in`].
/// Dropping the ticker is the teardown.
///
/// [`next_change_in`]: BusyTicker::next_change_in
#[derive(Clone, Debug)]
pub struct BusyTicker {
    started: Instant,
    interval: Duration,
    messages: &'static [&'static str],
}

impl BusyTicker {
    pub fn started_at(started: Instant) -> Self {
        Self {
            started,
            interval: BUSY_MESSAGE_INTERVAL,
            messages: &BUSY_MESSAGES,
        }
    }

    pub fn start() -> Self {
        Self::started_at(Instant::now())
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval.max(Duration::from_millis(1));
        self
    }

    fn step(&self, now: Instant) -> u128 {
        now.saturating_duration_since(self.started).as_nanos() / self.interval.as_nanos()
    }

    pub fn message_at(&self, now: Instant) -> &'static str {
        let index = (self.step(now) % self.messages.len() as u128) as usize;
        self.messages[index]
    }

    pub fn message(&self) -> &'static str {
        self.message_at(Instant::now())
    }

    /// Time left until the message changes.
    pub fn next_change_in(&self, now: Instant) -> Duration {
        let interval = self.interval.as_nanos();
        let into_step = now.saturating_duration_since(self.started).as_nanos() % interval;
        Duration::from_nanos(u64::try_from(interval - into_step).unwrap_or(u64::MAX))
    }
}
