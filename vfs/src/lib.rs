//! Resource loading for the RedLilium GUI layer.
//!
//! A [`ResourceProvider`] maps a resource name plus a resource group hint to
//! raw bytes. Loads and unloads come in pairs; [`ScopedRawData`] ties the
//! unload to a scope so it happens on every exit path.
//!
//! # Resource Groups
//!
//! A resource group is a named directory alias held in [`ResourceGroups`].
//! An empty group hint selects the provider's default group; a group with no
//! registered directory resolves names relative to the provider root.
//!
//! ```ignore
//! let mut provider = FileSystemProvider::new("./datafiles");
//! provider.groups_mut().set_directory("imagesets", "imagesets");
//! provider.groups_mut().set_default_group("imagesets");
//!
//! // Reads ./datafiles/imagesets/TaharezLook.png
//! let data = ScopedRawData::load(&provider, "TaharezLook.png", "")?;
//! ```
//!
//! # Providers
//!
//! - [`MemoryProvider`] - In-memory storage for tests and embedded assets
//! - [`FileSystemProvider`] - Native filesystem access (native only)

mod error;
#[cfg(all(feature = "filesystem", not(target_arch = "wasm32")))]
mod filesystem;
mod groups;
mod memory;
pub mod path;
mod provider;

pub use error::ResourceError;
#[cfg(all(feature = "filesystem", not(target_arch = "wasm32")))]
pub use filesystem::FileSystemProvider;
pub use groups::ResourceGroups;
pub use memory::MemoryProvider;
pub use provider::{RawData, ResourceProvider, ScopedRawData};
