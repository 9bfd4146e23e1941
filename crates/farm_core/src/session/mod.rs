//! Explicit session object.
//!
//! Identity comes from two places: the external identity platform, and a
//! locally persisted staff login used when staff sign in without a platform
//! account. The external session always wins; the local one is consulted only
//! when no external session exists.

pub mod resolve;
pub mod tracker;

pub use resolve::{ProfileDirectory, provisional_profile, resolve_session};
pub use tracker::{SessionEvent, SessionTracker};

use crate::access::Role;

/// Session issued by the external identity platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentitySession {
    pub user_id: String,
    pub email: Option<String>,
}

/// Application profile for a signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    /// Identity-platform user id; absent for local staff logins.
    pub auth_id: Option<String>,
    pub fullname: String,
    pub email: Option<String>,
    /// `None` when the stored role is not one this application knows.
    pub role: Option<Role>,
    pub contact: String,
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Authenticated(Profile),
    Unauthenticated,
}

impl Session {
    pub fn profile(&self) -> Option<&Profile> {
        match self {
            Session::Authenticated(profile) => Some(profile),
            Session::Unauthenticated => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn role(&self) -> Option<Role> {
        self.profile().and_then(|p| p.role)
    }
}
