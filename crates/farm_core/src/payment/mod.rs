//! Payment method choice, gateway redirect outcome, and completion polling.

pub mod outcome;
pub mod poll;

pub use outcome::{PaymentMethod, RedirectOutcome, SUCCESS_AUTO_CLOSE};
pub use poll::{PaymentPoll, PollObservation, PollSettings, PollState, PollTransition};
