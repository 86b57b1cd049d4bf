use std::sync::{Arc, Mutex};

use crate::identity::{Identity, IdentityStore};

/// In-memory IdentityStore for testing and native fallback.
///
/// Clones share the same slot, mirroring how every handle to `localStorage`
/// sees the same value.
#[derive(Clone, Debug, Default)]
pub struct MemoryIdentityStore {
    slot: Arc<Mutex<Option<Identity>>>,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already remembers `identity`.
    pub fn with_identity(identity: Identity) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(identity))),
        }
    }
}

impl IdentityStore for MemoryIdentityStore {
    fn load(&self) -> Option<Identity> {
        match self.slot.lock() {
            Ok(slot) => slot.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn save(&self, identity: Option<&Identity>) {
        let mut slot = match self.slot.lock() {
            Ok(slot) => slot,
            Err(poisoned) => poisoned.into_inner(),
        };
        *slot = identity.cloned();
    }
}
