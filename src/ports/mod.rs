//! Ports - interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the engine and the outside world. Adapters implement these ports.
//!
//! - `Clock` - current wall time, substitutable in tests
//! - `EventDirectory` - lookup of static event metadata by id
//! - `SessionStore` - durable session and participant rows
//! - `InterestStore` - durable interest registrations
//! - `Notifier` - best-effort message delivery to channels and users
//! - `DeadlineHandler` - scheduler callbacks into the lifecycle engine

mod clock;
mod deadline_handler;
mod event_directory;
mod interest_store;
mod notifier;
mod session_store;

pub use clock::Clock;
pub use deadline_handler::DeadlineHandler;
pub use event_directory::EventDirectory;
pub use interest_store::InterestStore;
pub use notifier::Notifier;
pub use session_store::SessionStore;
