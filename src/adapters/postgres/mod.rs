//! PostgreSQL adapters backed by sqlx.

mod event_directory;
mod interest_store;
mod session_store;

pub use event_directory::PostgresEventDirectory;
pub use interest_store::PostgresInterestStore;
pub use session_store::PostgresSessionStore;
