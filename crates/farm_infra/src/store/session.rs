//! Local staff session persisted as a JSON file.
//!
//! Staff who sign in without an identity-platform account get their profile
//! stored here. A corrupt file is deleted and treated as signed out.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use farm_core::access::Role;
use farm_core::session::Profile;
use serde::{Deserialize, Serialize};

use super::{StoreError, io_error};

/// On-disk form of a [`Profile`].
///
/// `role` holds the role's wire name. A profile whose role was not recognized
/// on load carries `None` and is written back as `""`; the original text is
/// not kept, and the reloaded profile is still denied every capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredProfile {
    pub id: String,
    #[serde(default)]
    pub auth_id: Option<String>,
    pub fullname: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub username: Option<String>,
}

impl From<&Profile> for StoredProfile {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.clone(),
            auth_id: profile.auth_id.clone(),
            fullname: profile.fullname.clone(),
            email: profile.email.clone(),
            role: profile.role.map(Role::as_str).unwrap_or_default().to_string(),
            contact: profile.contact.clone(),
            username: profile.username.clone(),
        }
    }
}

impl From<StoredProfile> for Profile {
    fn from(stored: StoredProfile) -> Self {
        Self {
            role: Role::parse(&stored.role),
            id: stored.id,
            auth_id: stored.auth_id,
            fullname: stored.fullname,
            email: stored.email,
            contact: stored.contact,
            username: stored.username,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LocalSessionStore {
    path: PathBuf,
}

impl LocalSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored profile, or `None` when absent or corrupt.
    pub fn load(&self) -> Result<Option<Profile>, StoreError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error(&self.path, e)),
        };

        match serde_json::from_str::<StoredProfile>(&text) {
            Ok(stored) => Ok(Some(stored.into())),
            Err(e) => {
                tracing::warn!(
                    "LocalSessionDiscarded path={} error={}",
                    self.path.display(),
                    e
                );
                self.clear()?;
                Ok(None)
            }
        }
    }

    pub fn save(&self, profile: &Profile) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }
        let json = serde_json::to_string(&StoredProfile::from(profile)).map_err(|e| {
            StoreError::Parse {
                source: self.path.display().to_string(),
                reason: format!("failed to encode profile: {e}"),
            }
        })?;
        std::fs::write(&self.path, json).map_err(|e| io_error(&self.path, e))
    }

    /// Remove the stored session. Removing a missing file is not an error.
    pub fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(&self.path, e)),
        }
    }
}
