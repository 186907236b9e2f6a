//! Texture owner and registry.
//!
//! The [`Renderer`] ties together a texture backend, a resource provider
//! and an image codec, and keeps every texture it creates under a unique
//! name.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use redlilium_core::math::{Rectf, Sizef};
use redlilium_core::texture::PixelFormat;
use redlilium_vfs::ResourceProvider;

use crate::backend::TextureBackend;
use crate::codec::ImageCodec;
use crate::error::GraphicsError;
use crate::resources::TextureResource;

/// Renderer configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RendererConfig {
    /// Group used for file loads that pass an empty group.
    ///
    /// `None` falls through to the provider's default group.
    pub default_resource_group: Option<String>,
}

impl RendererConfig {
    /// Set the group used for file loads that pass an empty group.
    pub fn with_default_resource_group(mut self, group: impl Into<String>) -> Self {
        self.default_resource_group = Some(group.into());
        self
    }
}

/// Owner of a texture backend and all textures created on it.
///
/// # Example
///
/// ```ignore
/// let mut renderer = Renderer::new(DummyBackend::new(), provider, ImageRsCodec::new());
/// renderer.create_texture_with_size("RenderTarget", Sizef::new(256.0, 256.0))?;
/// assert!(renderer.is_texture_defined("RenderTarget"));
/// ```
pub struct Renderer<B: TextureBackend> {
    backend: B,
    provider: Box<dyn ResourceProvider>,
    codec: Box<dyn ImageCodec>,
    textures: HashMap<String, TextureResource>,
    config: RendererConfig,
}

impl<B: TextureBackend> Renderer<B> {
    /// Create a renderer with the default configuration.
    pub fn new(
        backend: B,
        provider: impl ResourceProvider + 'static,
        codec: impl ImageCodec + 'static,
    ) -> Self {
        Self::with_config(backend, provider, codec, RendererConfig::default())
    }

    /// Create a renderer with a custom configuration.
    pub fn with_config(
        backend: B,
        provider: impl ResourceProvider + 'static,
        codec: impl ImageCodec + 'static,
        config: RendererConfig,
    ) -> Self {
        log::info!(
            "Renderer: using {} backend, {} codec",
            backend.name(),
            codec.identifier()
        );
        Self {
            backend,
            provider: Box::new(provider),
            codec: Box::new(codec),
            textures: HashMap::new(),
            config,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn provider(&self) -> &dyn ResourceProvider {
        self.provider.as_ref()
    }

    pub fn codec(&self) -> &dyn ImageCodec {
        self.codec.as_ref()
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Whether the backend can hold S3TC compressed textures.
    pub fn is_s3tc_supported(&self) -> bool {
        self.backend.capabilities().supports_s3tc()
    }

    // ------------------------------------------------------------------
    // Creation
    // ------------------------------------------------------------------

    /// Create an empty texture.
    pub fn create_texture(&mut self, name: &str) -> Result<&mut TextureResource, GraphicsError> {
        self.ensure_unused(name)?;
        let mut texture = TextureResource::new(name);
        texture.initialise_blank(&mut self.backend)?;
        Ok(self.register(texture))
    }

    /// Create a texture from an image file.
    ///
    /// An empty `resource_group` selects the configured default group.
    pub fn create_texture_from_file(
        &mut self,
        name: &str,
        filename: &str,
        resource_group: &str,
    ) -> Result<&mut TextureResource, GraphicsError> {
        self.ensure_unused(name)?;
        let group = match (&self.config.default_resource_group, resource_group) {
            (Some(default), "") => default.as_str(),
            _ => resource_group,
        };
        let mut texture = TextureResource::new(name);
        if let Err(err) = texture.initialise_from_file(
            &mut self.backend,
            self.provider.as_ref(),
            self.codec.as_ref(),
            filename,
            group,
        ) {
            texture.destroy(&mut self.backend);
            return Err(err);
        }
        Ok(self.register(texture))
    }

    /// Create a texture with blank RGBA storage.
    pub fn create_texture_with_size(
        &mut self,
        name: &str,
        size: Sizef,
    ) -> Result<&mut TextureResource, GraphicsError> {
        self.ensure_unused(name)?;
        let mut texture = TextureResource::new(name);
        if let Err(err) = texture.initialise_with_size(&mut self.backend, size) {
            texture.destroy(&mut self.backend);
            return Err(err);
        }
        Ok(self.register(texture))
    }

    /// Create a texture holding `buffer`.
    pub fn create_texture_from_memory(
        &mut self,
        name: &str,
        buffer: &[u8],
        size: Sizef,
        format: PixelFormat,
    ) -> Result<&mut TextureResource, GraphicsError> {
        self.ensure_unused(name)?;
        let mut texture = TextureResource::new(name);
        if let Err(err) = texture.initialise_from_memory(&mut self.backend, buffer, size, format) {
            texture.destroy(&mut self.backend);
            return Err(err);
        }
        Ok(self.register(texture))
    }

    // ------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------

    pub fn texture(&self, name: &str) -> Result<&TextureResource, GraphicsError> {
        self.textures
            .get(name)
            .ok_or_else(|| GraphicsError::NotFound(name.to_string()))
    }

    pub fn texture_mut(&mut self, name: &str) -> Result<&mut TextureResource, GraphicsError> {
        self.textures
            .get_mut(name)
            .ok_or_else(|| GraphicsError::NotFound(name.to_string()))
    }

    pub fn is_texture_defined(&self, name: &str) -> bool {
        self.textures.contains_key(name)
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Names of all registered textures, in no particular order.
    pub fn texture_names(&self) -> impl Iterator<Item = &str> {
        self.textures.keys().map(String::as_str)
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Copy `data` into `dest_area` of a registered texture.
    pub fn upload_region(
        &mut self,
        name: &str,
        dest_area: &Rectf,
        data: &[u8],
    ) -> Result<(), GraphicsError> {
        let texture = self
            .textures
            .get_mut(name)
            .ok_or_else(|| GraphicsError::NotFound(name.to_string()))?;
        texture.upload_region(&mut self.backend, dest_area, data)
    }

    /// Copy the full content of a registered texture into `out`.
    pub fn blit_to_memory(&mut self, name: &str, out: &mut [u8]) -> Result<(), GraphicsError> {
        let texture = self
            .textures
            .get(name)
            .ok_or_else(|| GraphicsError::NotFound(name.to_string()))?;
        texture.blit_to_memory(&mut self.backend, out)
    }

    /// Destroy and unregister a texture.
    pub fn destroy_texture(&mut self, name: &str) -> Result<(), GraphicsError> {
        let mut texture = self
            .textures
            .remove(name)
            .ok_or_else(|| GraphicsError::NotFound(name.to_string()))?;
        texture.destroy(&mut self.backend);
        log::debug!("Renderer: destroyed texture '{name}'");
        Ok(())
    }

    /// Destroy and unregister every texture.
    pub fn destroy_all_textures(&mut self) {
        for (_, mut texture) in self.textures.drain() {
            texture.destroy(&mut self.backend);
        }
    }

    /// Move every texture's content to host memory.
    ///
    /// All textures are attempted; the first failure is returned.
    pub fn grab_textures(&mut self) -> Result<(), GraphicsError> {
        let backend = &mut self.backend;
        first_error(self.textures.values_mut().map(|t| t.grab(backend)))
    }

    /// Recreate every grabbed texture from its host copy.
    ///
    /// All textures are attempted; the first failure is returned.
    pub fn restore_textures(&mut self) -> Result<(), GraphicsError> {
        let backend = &mut self.backend;
        first_error(self.textures.values_mut().map(|t| t.restore(backend)))
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn ensure_unused(&self, name: &str) -> Result<(), GraphicsError> {
        if self.textures.contains_key(name) {
            Err(GraphicsError::AlreadyExists(name.to_string()))
        } else {
            Ok(())
        }
    }

    fn register(&mut self, texture: TextureResource) -> &mut TextureResource {
        log::debug!("Renderer: registered texture '{}'", texture.name());
        match self.textures.entry(texture.name().to_string()) {
            Entry::Vacant(entry) => entry.insert(texture),
            Entry::Occupied(entry) => {
                let existing = entry.into_mut();
                existing.destroy(&mut self.backend);
                *existing = texture;
                existing
            }
        }
    }
}

fn first_error(results: impl Iterator<Item = Result<(), GraphicsError>>) -> Result<(), GraphicsError> {
    let mut first = None;
    for result in results {
        if let Err(err) = result {
            log::warn!("Renderer: {err}");
            first.get_or_insert(err);
        }
    }
    first.map_or(Ok(()), Err)
}

impl<B: TextureBackend> Drop for Renderer<B> {
    fn drop(&mut self) {
        self.destroy_all_textures();
    }
}

impl<B: TextureBackend + std::fmt::Debug> std::fmt::Debug for Renderer<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("backend", &self.backend)
            .field("codec", &self.codec.identifier())
            .field("textures", &self.textures.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
