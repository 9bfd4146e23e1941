//! Route guard.
//!
//! Order of checks:
//! 1. no session            -> `RedirectToLogin`
//! 2. role not allowed      -> `RedirectTo(home_route(role))`
//! 3. otherwise             -> `Granted`
//!
//! A customer is always sent to the customer dashboard, never to the generic
//! one, so a customer hitting a staff page cannot bounce between redirects.

use super::role::{Capability, Role};
use crate::session::Session;

pub const LOGIN_ROUTE: &str = "/login";
pub const CUSTOMER_HOME_ROUTE: &str = "/dashboard/customer";
pub const DEFAULT_HOME_ROUTE: &str = "/dashboard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    RedirectToLogin,
    RedirectTo(&'static str),
}

impl AccessDecision {
    pub fn is_granted(&self) -> bool {
        matches!(self, AccessDecision::Granted)
    }

    /// Route to navigate to, if the decision is a redirect.
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            AccessDecision::Granted => None,
            AccessDecision::RedirectToLogin => Some(LOGIN_ROUTE),
            AccessDecision::RedirectTo(route) => Some(*route),
        }
    }
}

/// Landing page for a role. Unknown roles land on the generic dashboard.
pub fn home_route(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Customer) => CUSTOMER_HOME_ROUTE,
        _ => DEFAULT_HOME_ROUTE,
    }
}

pub fn authorize(session: &Session, capability: Capability) -> AccessDecision {
    let Session::Authenticated(profile) = session else {
        return AccessDecision::RedirectToLogin;
    };

    match profile.role {
        Some(role) if capability.allows(role) => AccessDecision::Granted,
        role => {
            tracing::debug!(
                "AccessDenied capability={:?} role={:?} user={}",
                capability,
                role,
                profile.id
            );
            AccessDecision::RedirectTo(home_route(role))
        }
    }
}
