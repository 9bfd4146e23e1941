//! Roles, capabilities, and the one authorization check every view goes through.

pub mod guard;
pub mod role;

pub use guard::{AccessDecision, authorize, home_route};
pub use role::{Capability, Role};
