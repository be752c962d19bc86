use std::time::Duration;

/// Interval between two game steps, in milliseconds
///
/// Smaller is faster. Every piece of food shortens it by a step that shrinks
/// as the interval approaches [`TickInterval::FLOOR`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TickInterval(u64);

impl TickInterval {
    /// Interval at the start of every run
    pub const INITIAL: TickInterval = TickInterval(200);
    /// Below this the interval no longer changes
    pub const FLOOR: TickInterval = TickInterval(25);

    pub fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub fn as_millis(&self) -> u64 {
        self.0
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// The interval after eating one piece of food
    pub fn accelerated(&self) -> Self {
        let step = match self.0 {
            ms if ms > 150 => 5,
            ms if ms > 100 => 3,
            ms if ms > 50 => 2,
            ms if ms > 25 => 1,
            _ => 0,
        };

        Self(self.0 - step)
    }
}

impl Default for TickInterval {
    fn default() -> Self {
        Self::INITIAL
    }
}
