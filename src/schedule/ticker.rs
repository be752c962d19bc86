//! A single periodic timer that can be started, retimed and stopped
//!
//! The game must never be driven by two timers at once. `Ticker` owns at most
//! one [`tokio::time::Interval`]; starting or rescheduling drops the previous
//! one before the new one exists, so there is no window where both fire.

use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

#[derive(Debug, Default)]
pub struct Ticker {
    interval: Option<Interval>,
}

impl Ticker {
    pub fn new() -> Self {
        Self { interval: None }
    }

    /// Begin firing every `period`, first firing one period from now.
    ///
    /// Replaces any timer that is already running.
    pub fn start(&mut self, period: Duration) {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
    }

    /// Swap the active timer for one with a new period. No-op when stopped.
    pub fn reschedule(&mut self, period: Duration) {
        if self.interval.is_some() {
            self.start(period);
        }
    }

    pub fn stop(&mut self) {
        self.interval = None;
    }

    pub fn is_active(&self) -> bool {
        self.interval.is_some()
    }

    /// Period of the active timer
    pub fn period(&self) -> Option<Duration> {
        self.interval.as_ref().map(Interval::period)
    }

    /// Wait for the next firing.
    ///
    /// Never resolves while stopped, which keeps it safe to poll from a
    /// `tokio::select!` arm unconditionally.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}
