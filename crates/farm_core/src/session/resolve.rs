//! Session precedence.
//!
//! 1. External session + directory profile  -> that profile
//! 2. External session, no profile found    -> provisional customer profile
//! 3. No external session + local fallback  -> the local profile
//! 4. Neither                               -> `Unauthenticated`

use super::{IdentitySession, Profile, Session};
use crate::access::Role;

/// Profile lookup by identity-platform user id.
///
/// Implementations check customers, then admins, then staff, and return the
/// first hit.
pub trait ProfileDirectory {
    fn find_customer(&self, auth_id: &str) -> Option<Profile>;
    fn find_admin(&self, auth_id: &str) -> Option<Profile>;
    fn find_staff(&self, auth_id: &str) -> Option<Profile>;

    fn find_profile(&self, auth_id: &str) -> Option<Profile> {
        self.find_customer(auth_id)
            .or_else(|| self.find_admin(auth_id))
            .or_else(|| self.find_staff(auth_id))
    }
}

/// Stand-in profile for a platform user with no profile row yet.
pub fn provisional_profile(identity: &IdentitySession) -> Profile {
    let fullname = identity
        .email
        .as_deref()
        .and_then(|email| email.split('@').next())
        .filter(|local| !local.is_empty())
        .unwrap_or("User")
        .to_string();

    Profile {
        id: format!("temp-{}", identity.user_id),
        auth_id: Some(identity.user_id.clone()),
        fullname,
        email: identity.email.clone(),
        role: Some(Role::Customer),
        contact: String::new(),
        username: None,
    }
}

pub fn resolve_session(
    external: Option<&IdentitySession>,
    directory: &dyn ProfileDirectory,
    local_fallback: Option<&Profile>,
) -> Session {
    if let Some(identity) = external {
        let profile = directory.find_profile(&identity.user_id).unwrap_or_else(|| {
            tracing::debug!("ProfileMissing auth_id={} using provisional", identity.user_id);
            provisional_profile(identity)
        });
        return Session::Authenticated(profile);
    }

    match local_fallback {
        Some(profile) => Session::Authenticated(profile.clone()),
        None => Session::Unauthenticated,
    }
}
