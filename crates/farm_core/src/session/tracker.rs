//! Folds identity-platform events into the current session.

use super::resolve::{ProfileDirectory, resolve_session};
use super::{IdentitySession, Profile, Session};

/// Auth events delivered by the identity platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Initial session lookup at startup; `None` when nobody is signed in.
    Restored(Option<IdentitySession>),
    SignedIn(IdentitySession),
    TokenRefreshed(IdentitySession),
    SignedOut,
}

/// Current external session, local fallback, and the session resolved from them.
#[derive(Debug, Clone)]
pub struct SessionTracker {
    external: Option<IdentitySession>,
    local_fallback: Option<Profile>,
    current: Session,
}

impl Default for SessionTracker {
    fn default() -> Self {
        Self::new(None)
    }
}

impl SessionTracker {
    pub fn new(local_fallback: Option<Profile>) -> Self {
        let current = match &local_fallback {
            Some(profile) => Session::Authenticated(profile.clone()),
            None => Session::Unauthenticated,
        };
        Self {
            external: None,
            local_fallback,
            current,
        }
    }

    pub fn current(&self) -> &Session {
        &self.current
    }

    pub fn external(&self) -> Option<&IdentitySession> {
        self.external.as_ref()
    }

    /// Apply an event and return the newly resolved session.
    ///
    /// The directory is consulted only when the external user changes, so a
    /// token refresh for the same user keeps the resolved profile.
    pub fn apply(&mut self, event: SessionEvent, directory: &dyn ProfileDirectory) -> &Session {
        let next = match event {
            SessionEvent::Restored(identity) => identity,
            SessionEvent::SignedIn(identity) | SessionEvent::TokenRefreshed(identity) => {
                Some(identity)
            }
            SessionEvent::SignedOut => None,
        };

        let same_user = match (&self.external, &next) {
            (Some(old), Some(new)) => old.user_id == new.user_id,
            _ => false,
        };
        self.external = next;
        if !same_user {
            self.refresh(directory);
        }
        &self.current
    }

    /// Replace the local staff login (sign-in or sign-out of the manual path).
    pub fn set_local_fallback(
        &mut self,
        profile: Option<Profile>,
        directory: &dyn ProfileDirectory,
    ) -> &Session {
        self.local_fallback = profile;
        self.refresh(directory);
        &self.current
    }

    fn refresh(&mut self, directory: &dyn ProfileDirectory) {
        self.current = resolve_session(
            self.external.as_ref(),
            directory,
            self.local_fallback.as_ref(),
        );
    }
}
