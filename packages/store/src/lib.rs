pub mod config;
pub mod identity;

mod memory;
pub use memory::MemoryIdentityStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageIdentityStore;

pub use config::{ConfigError, KudosConfig};
pub use identity::{Identity, IdentityStore};
