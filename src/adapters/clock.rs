//! System clock adapter.

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// Clock reading the operating system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}
