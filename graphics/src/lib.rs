//! # RedLilium Graphics
//!
//! Texture resources for the RedLilium GUI layer, built on an abstract
//! texture backend.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`TextureBackend`] - GL-shaped trait over native texture storage
//! - [`TextureResource`] - a named texture with a grab/restore lifecycle
//! - [`Renderer`] - owner of a backend, a codec, a resource provider and the texture registry
//! - [`ImageCodec`] - decoding of encoded image bytes into pixels
//! - Backends: Dummy (CPU-emulated, for testing) and OpenGL (`gl-backend` feature)
//!
//! ## Example
//!
//! ```ignore
//! use redlilium_graphics::{DummyBackend, ImageRsCodec, Renderer};
//! use redlilium_vfs::FileSystemProvider;
//!
//! let mut renderer = Renderer::new(
//!     DummyBackend::new(),
//!     FileSystemProvider::new("./datafiles"),
//!     ImageRsCodec::new(),
//! );
//! renderer.create_texture_from_file("TaharezLook", "TaharezLook.png", "imagesets")?;
//!
//! // Device reset: keep texture content in memory, recreate afterwards.
//! renderer.grab_textures()?;
//! renderer.restore_textures()?;
//! ```

pub mod backend;
pub mod codec;
pub mod error;
pub mod renderer;
pub mod resources;
pub mod types;

// Re-export main types for convenience
pub use backend::{BackendCapabilities, NativeTexture, ScopedBinding, TextureBackend, TextureFeatures};
#[cfg(feature = "dummy")]
pub use backend::dummy::DummyBackend;
#[cfg(feature = "gl-backend")]
pub use backend::gl::GlBackend;
pub use codec::{CodecError, DecodedImage, ImageCodec, ImageRsCodec};
pub use error::GraphicsError;
pub use renderer::{Renderer, RendererConfig};
pub use resources::{TextureBackup, TextureResource, TextureState};
pub use types::{Extent2d, TexelRect};

pub use redlilium_core::texture::PixelFormat;

/// Graphics library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the graphics subsystem.
///
/// This should be called before using any graphics functionality.
pub fn init() {
    log::info!("RedLilium Graphics v{} initialized", VERSION);
}
