//! Virtual clock following tokio's timer.

use tokio::time::Instant;

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// Clock anchored at construction that advances with tokio's timer.
///
/// Under a `start_paused` runtime, `tokio::time::advance` moves this
/// clock in lockstep with armed timers, so time-based store checks and
/// timer firings observe the same "now".
pub struct VirtualClock {
    origin: Timestamp,
    started: Instant,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self {
            origin: Timestamp::now(),
            started: Instant::now(),
        }
    }
}

impl Default for VirtualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for VirtualClock {
    fn now(&self) -> Timestamp {
        self.origin.plus_duration(self.started.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn tracks_paused_timer_advances() {
        let clock = VirtualClock::new();
        let before = clock.now();

        tokio::time::advance(Duration::from_secs(300)).await;

        assert_eq!(before.minutes_until(&clock.now()), 5);
    }
}
