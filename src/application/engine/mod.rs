//! Session lifecycle engine internals.
//!
//! - `EventLockRegistry` - serializes all mutations per event id
//! - `DeadlineScheduler` - one cancellable timer pair per active session
//! - `NotificationDispatcher` - lock-free fan-out of lifecycle messages
//! - `SessionReconciler` - warning and expiry callbacks

mod dispatcher;
mod locks;
mod reconciler;
mod scheduler;

pub use dispatcher::NotificationDispatcher;
pub use locks::EventLockRegistry;
pub use reconciler::SessionReconciler;
pub use scheduler::DeadlineScheduler;
