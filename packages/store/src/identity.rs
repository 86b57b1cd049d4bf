//! # Identity reference: the one piece of state that survives a reload
//!
//! The client remembers which user is "signed in" by a single scalar id, stored
//! under a well-known key (default `currentUserId`). Everything else is fetched
//! from the backend.
//!
//! [`IdentityStore`] is the persistence seam. Implementations:
//!
//! | Type | Platform | Backing |
//! |------|----------|---------|
//! | [`crate::MemoryIdentityStore`] | native, tests | `Arc<Mutex<Option<Identity>>>` |
//! | `LocalStorageIdentityStore` | wasm32 + `web` | browser `localStorage` |
//!
//! Writes are always a full replace of the scalar, so there is no
//! read-modify-write to race on.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The remembered user id, sent verbatim as the identity header.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Build an identity from a raw stored value. Blank values mean "no identity".
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "null" {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<i64> for Identity {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Persistent slot holding at most one [`Identity`].
pub trait IdentityStore {
    /// Read the remembered identity, if any.
    fn load(&self) -> Option<Identity>;

    /// Replace the remembered identity. `None` clears it.
    fn save(&self, identity: Option<&Identity>);
}
