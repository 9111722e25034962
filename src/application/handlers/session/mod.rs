//! Session lifecycle handlers.
//!
//! Each handler maps 1:1 to one engine operation: start, join, leave,
//! extend, status. The chat front end (or the HTTP binding) constructs
//! commands and surfaces the returned errors to the user.

mod extend_session;
mod join_session;
mod leave_session;
mod session_status;
mod start_session;

pub use extend_session::{ExtendSessionCommand, ExtendSessionHandler, ExtendSessionResult};
pub use join_session::{JoinSessionCommand, JoinSessionHandler, JoinSessionResult};
pub use leave_session::{LeaveSessionCommand, LeaveSessionHandler, LeaveSessionResult};
pub use session_status::{SessionStatusHandler, SessionStatusQuery, SessionStatusView};
pub use start_session::{StartSessionCommand, StartSessionHandler, StartSessionResult};
