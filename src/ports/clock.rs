//! Clock port - the engine's single source of wall time.

use crate::domain::foundation::Timestamp;

/// Supplies the current time to handlers and the scheduler.
///
/// Production wires the system clock; tests substitute a virtual clock
/// driven in lockstep with tokio's paused timer, so deadline arithmetic
/// and store state always agree on "now".
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn clock_is_object_safe() {
        fn _accepts_dyn(_clock: &dyn Clock) {}
    }
}
