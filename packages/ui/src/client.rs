//! Shared client constructor for all platforms.
//!
//! Returns a [`api::KudosClient`] backed by the appropriate [`store::IdentityStore`]:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorageIdentityStore`]
//! - **Everything else**: in-memory via [`store::MemoryIdentityStore`], forgotten on exit

use dioxus::prelude::*;
use store::KudosConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformIdentityStore = store::LocalStorageIdentityStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformIdentityStore = store::MemoryIdentityStore;

/// The client type every view talks to.
pub type Client = api::KudosClient<PlatformIdentityStore>;

/// Create a client for `config` with the platform's identity storage.
pub fn make_client(config: &KudosConfig) -> Client {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        let identity = store::LocalStorageIdentityStore::new(config.storage.identity_key.clone());
        api::KudosClient::new(&config.api, identity)
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        api::KudosClient::new(&config.api, store::MemoryIdentityStore::new())
    }
}

/// Consume the [`Client`] provided by [`crate::SessionProvider`].
pub fn use_client() -> Client {
    use_context::<Client>()
}
