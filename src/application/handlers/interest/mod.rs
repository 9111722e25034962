//! Interest registration handlers.
//!
//! Interest tracking lives outside the session engine; it follows the
//! same store pattern with its own, simpler collaborator.

mod list_interested;
mod register_interest;
mod toggle_connection;
mod withdraw_interest;

pub use list_interested::{InterestRoster, ListInterestedHandler, ListInterestedQuery};
pub use register_interest::{RegisterInterestCommand, RegisterInterestHandler};
pub use toggle_connection::{ToggleConnectionCommand, ToggleConnectionHandler};
pub use withdraw_interest::{WithdrawInterestCommand, WithdrawInterestHandler};
