//! # `localStorage` identity store: browser-side persistence
//!
//! [`LocalStorageIdentityStore`] is the [`IdentityStore`] used on the **web
//! platform**. The identity is a single string entry under a configurable key
//! (default `"currentUserId"`).
//!
//! ## Error handling
//!
//! `localStorage` can be missing (privacy modes, sandboxed iframes) or throw on
//! write (quota). Every failure is logged and degrades to "no identity": the user
//! simply picks their account again.

use tracing::warn;
use web_sys::Storage;

use crate::identity::{Identity, IdentityStore};

pub const DEFAULT_STORAGE_KEY: &str = "currentUserId";

/// `localStorage`-backed IdentityStore.
#[derive(Clone, Debug)]
pub struct LocalStorageIdentityStore {
    key: String,
}

impl Default for LocalStorageIdentityStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_KEY)
    }
}

impl LocalStorageIdentityStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                warn!("localStorage unavailable: {e:?}");
                None
            }
        }
    }
}

impl IdentityStore for LocalStorageIdentityStore {
    fn load(&self) -> Option<Identity> {
        let storage = Self::storage()?;
        match storage.get_item(&self.key) {
            Ok(value) => value.as_deref().and_then(Identity::parse),
            Err(e) => {
                warn!(key = %self.key, "Failed to read identity: {e:?}");
                None
            }
        }
    }

    fn save(&self, identity: Option<&Identity>) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let result = match identity {
            Some(identity) => storage.set_item(&self.key, identity.as_str()),
            None => storage.remove_item(&self.key),
        };
        if let Err(e) = result {
            warn!(key = %self.key, "Failed to write identity: {e:?}");
        }
    }
}
