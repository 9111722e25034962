//! Deadline scheduler - one cancellable timer pair per active session.
//!
//! The original coordination bot polled each session once a minute to see
//! whether time was up. This re-expresses that as a proper per-session
//! timer task: arming spawns a task that sleeps to the warning instant,
//! invokes the handler, sleeps to the deadline, invokes the handler again,
//! and clears its map entry. Re-arming aborts the previous task before a
//! new one is scheduled, so a stale expiry can never fire after an
//! extension.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::domain::foundation::{EventId, Timestamp};
use crate::ports::{Clock, DeadlineHandler};

/// Maps each active event id to at most one pending wake-up sequence.
pub struct DeadlineScheduler {
    timers: Arc<Mutex<HashMap<EventId, JoinHandle<()>>>>,
    handler: Arc<dyn DeadlineHandler>,
    clock: Arc<dyn Clock>,
    warning_lead_minutes: i64,
}

impl DeadlineScheduler {
    /// Creates a scheduler delivering callbacks to `handler`, with the
    /// warning firing `warning_lead_minutes` before each deadline.
    pub fn new(
        handler: Arc<dyn DeadlineHandler>,
        clock: Arc<dyn Clock>,
        warning_lead_minutes: i64,
    ) -> Self {
        Self {
            timers: Arc::new(Mutex::new(HashMap::new())),
            handler,
            clock,
            warning_lead_minutes,
        }
    }

    /// Arms (or re-arms) the timer pair for one event.
    ///
    /// Any previously armed timer for this event is invalidated first.
    /// If `end_time` is already inside the warning window the warning
    /// fires immediately; if it is in the past, both callbacks fire
    /// immediately, in order.
    pub async fn arm(&self, event_id: EventId, end_time: Timestamp) {
        let now = self.clock.now();
        let warn_at = end_time.minus_minutes(self.warning_lead_minutes);
        let warn_delay = now.duration_until(&warn_at);
        let expire_delay = now.duration_until(&end_time);

        // Absolute instants fixed here, so neither task spawn latency nor
        // handler latency shifts the firing times.
        let armed_at = tokio::time::Instant::now();
        let warn_deadline = armed_at + warn_delay;
        let expire_deadline = armed_at + expire_delay;

        debug!(
            event_id = %event_id,
            warn_in_secs = warn_delay.as_secs(),
            expire_in_secs = expire_delay.as_secs(),
            "arming session deadline"
        );

        let mut timers = self.timers.lock().await;
        if let Some(stale) = timers.remove(&event_id) {
            stale.abort();
        }

        let handler = Arc::clone(&self.handler);
        let registry = Arc::clone(&self.timers);
        let task = tokio::spawn(async move {
            tokio::time::sleep_until(warn_deadline).await;
            handler.on_warning(event_id).await;

            tokio::time::sleep_until(expire_deadline).await;
            handler.on_expire(event_id).await;

            registry.lock().await.remove(&event_id);
        });
        timers.insert(event_id, task);
    }

    /// Cancels any pending timer for one event.
    ///
    /// Returns `true` if a timer was armed.
    pub async fn cancel(&self, event_id: EventId) -> bool {
        match self.timers.lock().await.remove(&event_id) {
            Some(task) => {
                task.abort();
                debug!(event_id = %event_id, "cancelled session deadline");
                true
            }
            None => false,
        }
    }

    /// Checks whether a timer is currently armed for one event.
    pub async fn is_armed(&self, event_id: EventId) -> bool {
        self.timers.lock().await.contains_key(&event_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::SystemClock;
    use async_trait::async_trait;
    use std::sync::Mutex as StdMutex;
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingHandler {
        warnings: StdMutex<Vec<EventId>>,
        expiries: StdMutex<Vec<EventId>>,
    }

    impl RecordingHandler {
        fn warnings(&self) -> Vec<EventId> {
            self.warnings.lock().unwrap().clone()
        }

        fn expiries(&self) -> Vec<EventId> {
            self.expiries.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DeadlineHandler for RecordingHandler {
        async fn on_warning(&self, event_id: EventId) {
            self.warnings.lock().unwrap().push(event_id);
        }

        async fn on_expire(&self, event_id: EventId) {
            self.expiries.lock().unwrap().push(event_id);
        }
    }

    /// Lets woken timer tasks run to their next await point.
    async fn settle() {
        for _ in 0..20 {
            tokio::task::yield_now().await;
        }
    }

    async fn advance(minutes: u64) {
        tokio::time::advance(Duration::from_secs(minutes * 60)).await;
        settle().await;
    }

    #[tokio::test(start_paused = true)]
    async fn warning_fires_before_expiry() {
        let handler = Arc::new(RecordingHandler::default());
        let scheduler = DeadlineScheduler::new(handler.clone(), Arc::new(SystemClock), 5);
        let event = EventId::new(1);

        scheduler.arm(event, Timestamp::now().plus_minutes(60)).await;

        advance(54).await;
        assert!(handler.warnings().is_empty());
        assert!(handler.expiries().is_empty());

        advance(2).await;
        assert_eq!(handler.warnings(), vec![event]);
        assert!(handler.expiries().is_empty());

        advance(5).await;
        assert_eq!(handler.warnings(), vec![event]);
        assert_eq!(handler.expiries(), vec![event]);
        assert!(!scheduler.is_armed(event).await);
    }

    #[tokio::test(start_paused = true)]
    async fn firing_times_anchor_to_arm_time_not_first_poll() {
        let handler = Arc::new(RecordingHandler::default());
        let scheduler = DeadlineScheduler::new(handler.clone(), Arc::new(SystemClock), 5);
        let event = EventId::new(1);

        scheduler.arm(event, Timestamp::now().plus_minutes(10)).await;

        // The timer task has not been polled yet when the clock jumps
        // straight past both deadlines; its wake-ups were fixed at arm
        // time, so both must still fire, in order.
        advance(11).await;
        assert_eq!(handler.warnings(), vec![event]);
        assert_eq!(handler.expiries(), vec![event]);
        assert!(!scheduler.is_armed(event).await);
    }

    #[tokio::test(start_paused = true)]
    async fn rearm_invalidates_stale_expiry() {
        let handler = Arc::new(RecordingHandler::default());
        let scheduler = DeadlineScheduler::new(handler.clone(), Arc::new(SystemClock), 5);
        let event = EventId::new(1);

        scheduler.arm(event, Timestamp::now().plus_minutes(10)).await;
        // Extension pushes the deadline well past the original one.
        scheduler.arm(event, Timestamp::now().plus_minutes(40)).await;

        // The original deadline passes with nothing firing.
        advance(12).await;
        assert!(handler.warnings().is_empty());
        assert!(handler.expiries().is_empty());

        // The extended pair fires at its own times.
        advance(25).await;
        assert_eq!(handler.warnings(), vec![event]);
        advance(5).await;
        assert_eq!(handler.expiries(), vec![event]);
    }

    #[tokio::test(start_paused = true)]
    async fn warning_fires_immediately_inside_window() {
        let handler = Arc::new(RecordingHandler::default());
        let scheduler = DeadlineScheduler::new(handler.clone(), Arc::new(SystemClock), 5);
        let event = EventId::new(1);

        // Deadline three minutes out: already within the warning window.
        scheduler.arm(event, Timestamp::now().plus_minutes(3)).await;
        settle().await;
        assert_eq!(handler.warnings(), vec![event]);
        assert!(handler.expiries().is_empty());

        advance(4).await;
        assert_eq!(handler.expiries(), vec![event]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_prevents_firing() {
        let handler = Arc::new(RecordingHandler::default());
        let scheduler = DeadlineScheduler::new(handler.clone(), Arc::new(SystemClock), 5);
        let event = EventId::new(1);

        scheduler.arm(event, Timestamp::now().plus_minutes(10)).await;
        assert!(scheduler.cancel(event).await);
        assert!(!scheduler.is_armed(event).await);

        advance(15).await;
        assert!(handler.warnings().is_empty());
        assert!(handler.expiries().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn sessions_fire_independently() {
        let handler = Arc::new(RecordingHandler::default());
        let scheduler = DeadlineScheduler::new(handler.clone(), Arc::new(SystemClock), 5);
        let first = EventId::new(1);
        let second = EventId::new(2);

        scheduler.arm(first, Timestamp::now().plus_minutes(10)).await;
        scheduler.arm(second, Timestamp::now().plus_minutes(60)).await;

        advance(11).await;
        assert_eq!(handler.expiries(), vec![first]);
        assert!(scheduler.is_armed(second).await);

        advance(50).await;
        assert_eq!(handler.expiries(), vec![first, second]);
    }
}
