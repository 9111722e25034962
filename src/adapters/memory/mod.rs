//! In-memory adapters.
//!
//! Back the ports with plain hashmaps behind `std::sync::RwLock`. Used by
//! unit tests and by local development without a database. Lock poisoning
//! only happens after a panic in another test thread, so the adapters
//! treat it as unrecoverable.

mod event_directory;
mod interest_store;
mod notifier;
mod session_store;
mod virtual_clock;

pub use event_directory::InMemoryEventDirectory;
pub use interest_store::InMemoryInterestStore;
pub use notifier::RecordingNotifier;
pub use session_store::InMemorySessionStore;
pub use virtual_clock::VirtualClock;
