//! Texture backend abstraction layer.
//!
//! This module provides a trait-based abstraction over native texture
//! storage, allowing texture resources to work with different graphics APIs.
//!
//! # Available Backends
//!
//! - `dummy` (default): CPU-emulated backend for testing and development
//! - `gl-backend`: OpenGL 2D textures through `glow`
//!
//! # Architecture
//!
//! The trait mirrors the OpenGL texture model: operations apply to the
//! currently bound 2D texture. The binding is backend state, and callers
//! change it only through [`ScopedBinding`], which puts the previous binding
//! back when it goes out of scope.

#[cfg(feature = "dummy")]
pub mod dummy;

#[cfg(feature = "gl-backend")]
pub mod gl;

use std::num::NonZeroU32;
use std::ops::{Deref, DerefMut};

use bitflags::bitflags;
use redlilium_core::texture::PixelFormat;

use crate::error::GraphicsError;
use crate::types::{Extent2d, TexelRect};

/// Opaque handle to a native texture object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NativeTexture(NonZeroU32);

impl NativeTexture {
    /// Wrap a raw native name. Zero is the "no texture" name and yields `None`.
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    pub fn from_raw(raw: NonZeroU32) -> Self {
        Self(raw)
    }

    /// Raw native name.
    pub fn get(&self) -> u32 {
        self.0.get()
    }

    pub fn raw(&self) -> NonZeroU32 {
        self.0
    }
}

bitflags! {
    /// Optional texture features a backend may provide.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TextureFeatures: u32 {
        /// S3TC (DXT1/3/5) compressed formats.
        const S3TC = 1 << 0;
        /// Reading back block-compressed texture data.
        const COMPRESSED_READBACK = 1 << 1;
    }
}

impl Default for TextureFeatures {
    fn default() -> Self {
        Self::empty()
    }
}

/// Capabilities reported by a texture backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BackendCapabilities {
    /// Optional features.
    pub features: TextureFeatures,
    /// Maximum texture dimension.
    pub max_texture_size: u32,
}

impl Default for BackendCapabilities {
    fn default() -> Self {
        Self {
            features: TextureFeatures::empty(),
            max_texture_size: 16384,
        }
    }
}

impl BackendCapabilities {
    /// Set the feature flags.
    pub fn with_features(mut self, features: TextureFeatures) -> Self {
        self.features = features;
        self
    }

    /// Set the maximum texture dimension.
    pub fn with_max_texture_size(mut self, size: u32) -> Self {
        self.max_texture_size = size;
        self
    }

    /// Whether S3TC compressed formats can be used.
    pub fn supports_s3tc(&self) -> bool {
        self.features.contains(TextureFeatures::S3TC)
    }

    /// Whether a pixel format can be used for texture storage.
    ///
    /// The four uncompressed formats are always available, the DXT family
    /// only with S3TC support, and anything else never.
    pub fn is_format_supported(&self, format: PixelFormat) -> bool {
        match format {
            PixelFormat::Rgba | PixelFormat::Rgb | PixelFormat::Rgba4444 | PixelFormat::Rgb565 => {
                true
            }
            PixelFormat::RgbDxt1
            | PixelFormat::RgbaDxt1
            | PixelFormat::RgbaDxt3
            | PixelFormat::RgbaDxt5 => self.supports_s3tc(),
            PixelFormat::Pvrtc2 | PixelFormat::Pvrtc4 => false,
        }
    }
}

/// Native texture storage.
///
/// Storage, upload and readback calls act on the texture currently bound
/// with [`bind_texture`](Self::bind_texture). Implementations must leave the
/// binding unchanged in [`generate_texture`](Self::generate_texture).
pub trait TextureBackend {
    /// Backend name for diagnostics.
    fn name(&self) -> &'static str;

    /// Capabilities of the underlying device.
    fn capabilities(&self) -> &BackendCapabilities;

    /// Create a new texture object with no storage.
    fn generate_texture(&mut self) -> Result<NativeTexture, GraphicsError>;

    /// Delete a texture object. Deleting the bound texture unbinds it.
    fn delete_texture(&mut self, texture: NativeTexture);

    /// Currently bound texture, if any.
    fn bound_texture(&self) -> Option<NativeTexture>;

    /// Bind a texture, or unbind with `None`.
    fn bind_texture(&mut self, texture: Option<NativeTexture>);

    /// (Re)allocate storage for the bound texture, discarding its content.
    fn allocate_storage(&mut self, extent: Extent2d, format: PixelFormat)
        -> Result<(), GraphicsError>;

    /// Copy `data` into `region` of the bound texture.
    ///
    /// Raw formats take tightly packed rows; compressed formats take whole
    /// blocks. `data` holds exactly `format.data_size(region)` bytes.
    fn upload_region(
        &mut self,
        region: TexelRect,
        format: PixelFormat,
        data: &[u8],
    ) -> Result<(), GraphicsError>;

    /// Read the full content of the bound texture in its own format.
    fn read_texture(&mut self, format: PixelFormat, out: &mut [u8]) -> Result<(), GraphicsError>;
}

/// Temporarily binds a texture and restores the previous binding on drop.
///
/// Derefs to the backend so the bound texture can be worked on directly.
///
/// ```ignore
/// let mut gl = ScopedBinding::new(backend, handle);
/// gl.upload_region(region, format, data)?;
/// // previous binding is back once `gl` is dropped
/// ```
pub struct ScopedBinding<'a, B: TextureBackend + ?Sized> {
    backend: &'a mut B,
    previous: Option<NativeTexture>,
}

impl<'a, B: TextureBackend + ?Sized> ScopedBinding<'a, B> {
    pub fn new(backend: &'a mut B, texture: NativeTexture) -> Self {
        let previous = backend.bound_texture();
        backend.bind_texture(Some(texture));
        Self { backend, previous }
    }

    /// Binding that will be restored.
    pub fn previous(&self) -> Option<NativeTexture> {
        self.previous
    }
}

impl<B: TextureBackend + ?Sized> Deref for ScopedBinding<'_, B> {
    type Target = B;

    fn deref(&self) -> &B {
        self.backend
    }
}

impl<B: TextureBackend + ?Sized> DerefMut for ScopedBinding<'_, B> {
    fn deref_mut(&mut self) -> &mut B {
        self.backend
    }
}

impl<B: TextureBackend + ?Sized> Drop for ScopedBinding<'_, B> {
    fn drop(&mut self) {
        self.backend.bind_texture(self.previous);
    }
}
