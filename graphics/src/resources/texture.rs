//! Texture resource with a grab/restore lifecycle.

use redlilium_core::math::{Rectf, Sizef, Vector2f};
use redlilium_core::texture::PixelFormat;
use redlilium_vfs::{ResourceProvider, ScopedRawData};
use static_assertions::assert_impl_all;

use crate::backend::{NativeTexture, ScopedBinding, TextureBackend};
use crate::codec::ImageCodec;
use crate::error::GraphicsError;
use crate::types::{Extent2d, TexelRect};

/// Host copy of a texture's content, kept while the native texture is gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureBackup {
    /// Format the content is laid out in.
    pub format: PixelFormat,
    /// Extent of the stored content.
    pub extent: Extent2d,
    /// Full texture content, `format.data_size(extent)` bytes.
    pub data: Vec<u8>,
}

/// Storage currently held by a [`TextureResource`].
///
/// A texture holds either a native handle or a host backup, never both.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TextureState {
    /// No storage has been created yet, or it was destroyed.
    #[default]
    Uninitialised,
    /// Content lives in a native texture.
    Live(NativeTexture),
    /// Native texture was released and content is kept on the host.
    Grabbed(TextureBackup),
}

/// A named 2D texture.
///
/// # Example
///
/// ```ignore
/// let mut texture = TextureResource::new("Logo");
/// texture.initialise_from_memory(&mut backend, &pixels, Sizef::new(64.0, 64.0), PixelFormat::Rgba)?;
///
/// // Device about to be lost: keep content on the host.
/// texture.grab(&mut backend)?;
/// // ... device recreated ...
/// texture.restore(&mut backend)?;
/// ```
#[derive(Debug)]
pub struct TextureResource {
    name: String,
    size: Sizef,
    original_data_size: Sizef,
    texel_scaling: Vector2f,
    format: PixelFormat,
    state: TextureState,
}

assert_impl_all!(TextureResource: Send, Sync);

fn size_of(extent: Extent2d) -> Sizef {
    Sizef::new(extent.width as f32, extent.height as f32)
}

fn reciprocal(value: f32) -> f32 {
    if value != 0.0 {
        1.0 / value
    } else {
        0.0
    }
}

impl TextureResource {
    /// Create an uninitialised texture.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: Sizef::zero(),
            original_data_size: Sizef::zero(),
            texel_scaling: Vector2f::zero(),
            format: PixelFormat::Rgba,
            state: TextureState::Uninitialised,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current size in texels.
    pub fn size(&self) -> Sizef {
        self.size
    }

    /// Size of the data most recently loaded into the texture.
    pub fn original_data_size(&self) -> Sizef {
        self.original_data_size
    }

    /// Reciprocal of the size per axis; zero for an empty axis.
    pub fn texel_scaling(&self) -> Vector2f {
        self.texel_scaling
    }

    pub fn pixel_format(&self) -> PixelFormat {
        self.format
    }

    pub fn is_compressed(&self) -> bool {
        self.format.is_compressed()
    }

    /// Native handle, if the texture is live.
    pub fn native_handle(&self) -> Option<NativeTexture> {
        match self.state {
            TextureState::Live(handle) => Some(handle),
            _ => None,
        }
    }

    pub fn is_grabbed(&self) -> bool {
        matches!(self.state, TextureState::Grabbed(_))
    }

    pub fn state(&self) -> &TextureState {
        &self.state
    }

    /// Whether `format` can be loaded on `backend`.
    pub fn is_format_supported<B: TextureBackend + ?Sized>(
        &self,
        backend: &B,
        format: PixelFormat,
    ) -> bool {
        backend.capabilities().is_format_supported(format)
    }

    // ------------------------------------------------------------------
    // Initialisation
    // ------------------------------------------------------------------

    /// Create an empty native texture, discarding any previous state.
    pub fn initialise_blank<B: TextureBackend + ?Sized>(
        &mut self,
        backend: &mut B,
    ) -> Result<(), GraphicsError> {
        self.destroy(backend);
        let handle = backend.generate_texture()?;
        self.format = PixelFormat::Rgba;
        self.state = TextureState::Live(handle);
        log::debug!("Texture '{}': created handle {}", self.name, handle.get());
        Ok(())
    }

    /// Create a native texture with blank RGBA storage of `size`.
    pub fn initialise_with_size<B: TextureBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        size: Sizef,
    ) -> Result<(), GraphicsError> {
        self.initialise_blank(backend)?;
        self.resize(backend, size)
    }

    /// Create a native texture holding `buffer`.
    ///
    /// Fails with [`GraphicsError::UnsupportedFormat`] without touching the
    /// current state when `format` is not available on `backend`.
    pub fn initialise_from_memory<B: TextureBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        buffer: &[u8],
        size: Sizef,
        format: PixelFormat,
    ) -> Result<(), GraphicsError> {
        self.check_source(backend, buffer, size, format)?;
        self.initialise_blank(backend)?;
        self.load_from_memory(backend, buffer, size, format)
    }

    /// Create a native texture from an image file.
    ///
    /// The file is read through `provider` and decoded with `codec` before
    /// any state changes, so a failed load leaves the texture as it was.
    pub fn initialise_from_file<B: TextureBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        provider: &dyn ResourceProvider,
        codec: &dyn ImageCodec,
        filename: &str,
        resource_group: &str,
    ) -> Result<(), GraphicsError> {
        let image = {
            let raw = ScopedRawData::load(provider, filename, resource_group)?;
            codec
                .decode(&raw, filename)
                .map_err(|err| GraphicsError::Load {
                    codec: codec.identifier().to_string(),
                    filename: filename.to_string(),
                    reason: err.to_string(),
                })?
        };
        self.initialise_from_memory(backend, &image.pixels, image.size, image.format)
    }

    /// Take over a texture created elsewhere.
    ///
    /// Adopting a different handle releases the current one first. The
    /// texture is assumed to hold RGBA data of `size`.
    pub fn adopt<B: TextureBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        handle: NativeTexture,
        size: Sizef,
    ) {
        if self.native_handle() != Some(handle) {
            self.destroy(backend);
            self.state = TextureState::Live(handle);
        }
        self.format = PixelFormat::Rgba;
        self.set_size(size);
        self.original_data_size = size;
        log::debug!("Texture '{}': adopted handle {}", self.name, handle.get());
    }

    // ------------------------------------------------------------------
    // Content
    // ------------------------------------------------------------------

    /// Replace the texture content with `buffer`.
    ///
    /// Reuses the native texture if one exists and creates one otherwise.
    pub fn load_from_memory<B: TextureBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        buffer: &[u8],
        size: Sizef,
        format: PixelFormat,
    ) -> Result<(), GraphicsError> {
        let extent = self.check_source(backend, buffer, size, format)?;
        let handle = match self.state {
            TextureState::Live(handle) => handle,
            TextureState::Uninitialised => {
                self.initialise_blank(backend)?;
                self.live_handle()?
            }
            TextureState::Grabbed(_) => return Err(GraphicsError::NotLive(self.name.clone())),
        };

        {
            let mut gl = ScopedBinding::new(backend, handle);
            gl.allocate_storage(extent, format)?;
            if !extent.is_empty() {
                let bytes = format.data_size(extent.width, extent.height);
                gl.upload_region(extent.full_rect(), format, &buffer[..bytes])?;
            }
        }

        self.format = format;
        self.set_size(size_of(extent));
        self.original_data_size = size;
        log::debug!(
            "Texture '{}': loaded {}x{} {}",
            self.name,
            extent.width,
            extent.height,
            format
        );
        Ok(())
    }

    /// Reallocate blank RGBA storage of `size`, discarding the content.
    pub fn resize<B: TextureBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        size: Sizef,
    ) -> Result<(), GraphicsError> {
        let handle = self.live_handle()?;
        let extent = Extent2d::from_size(size);
        ScopedBinding::new(backend, handle).allocate_storage(extent, PixelFormat::Rgba)?;

        self.format = PixelFormat::Rgba;
        self.set_size(size_of(extent));
        self.original_data_size = self.size;
        log::debug!(
            "Texture '{}': resized to {}x{}",
            self.name,
            extent.width,
            extent.height
        );
        Ok(())
    }

    /// Copy `data` into `dest_area` of the texture.
    ///
    /// `data` is laid out in the texture's pixel format. Compressed textures
    /// take whole blocks, so the area must start on a block boundary and
    /// either span whole blocks or run to the texture edge.
    pub fn upload_region<B: TextureBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        dest_area: &Rectf,
        data: &[u8],
    ) -> Result<(), GraphicsError> {
        let handle = self.live_handle()?;
        let extent = Extent2d::from_size(self.size);
        let region = TexelRect::from_area(dest_area)
            .filter(|region| region.fits_within(extent))
            .ok_or(GraphicsError::Bounds {
                area: *dest_area,
                size: self.size,
            })?;
        if region.is_empty() {
            return Ok(());
        }
        if self.is_compressed() {
            self.check_block_alignment(region, extent)?;
        }

        let needed = self.format.data_size(region.width, region.height);
        let source = data.get(..needed).ok_or_else(|| {
            GraphicsError::InvalidParameter(format!(
                "{} bytes supplied for a {}x{} {} region, {needed} needed",
                data.len(),
                region.width,
                region.height,
                self.format
            ))
        })?;

        ScopedBinding::new(backend, handle).upload_region(region, self.format, source)
    }

    /// Copy the full texture content into `out`, in the texture's format.
    pub fn blit_to_memory<B: TextureBackend + ?Sized>(
        &self,
        backend: &mut B,
        out: &mut [u8],
    ) -> Result<(), GraphicsError> {
        let extent = Extent2d::from_size(self.size);
        let needed = self.format.data_size(extent.width, extent.height);
        let out_len = out.len();
        let target = out.get_mut(..needed).ok_or_else(|| {
            GraphicsError::InvalidParameter(format!(
                "buffer of {out_len} bytes is too small, {needed} needed"
            ))
        })?;

        match &self.state {
            TextureState::Live(_) if extent.is_empty() => Ok(()),
            TextureState::Live(handle) => {
                ScopedBinding::new(backend, *handle).read_texture(self.format, target)
            }
            TextureState::Grabbed(backup) => {
                target.copy_from_slice(&backup.data);
                Ok(())
            }
            TextureState::Uninitialised => Err(GraphicsError::NotLive(self.name.clone())),
        }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Move the content to host memory and release the native texture.
    ///
    /// Does nothing if the texture is already grabbed or has no storage.
    pub fn grab<B: TextureBackend + ?Sized>(&mut self, backend: &mut B) -> Result<(), GraphicsError> {
        let handle = match self.state {
            TextureState::Live(handle) => handle,
            TextureState::Grabbed(_) => return Ok(()),
            TextureState::Uninitialised => {
                log::debug!("Texture '{}': grab of uninitialised texture ignored", self.name);
                return Ok(());
            }
        };

        let extent = Extent2d::from_size(self.size);
        let mut data = vec![0u8; self.format.data_size(extent.width, extent.height)];
        if !extent.is_empty() {
            ScopedBinding::new(&mut *backend, handle).read_texture(self.format, &mut data)?;
        }
        backend.delete_texture(handle);

        self.state = TextureState::Grabbed(TextureBackup {
            format: self.format,
            extent,
            data,
        });
        log::debug!("Texture '{}': grabbed {} bytes", self.name, self.backup_len());
        Ok(())
    }

    /// Recreate the native texture from the host backup.
    ///
    /// Does nothing unless the texture is grabbed. On failure the backup is
    /// kept so the restore can be retried.
    pub fn restore<B: TextureBackend + ?Sized>(
        &mut self,
        backend: &mut B,
    ) -> Result<(), GraphicsError> {
        let TextureState::Grabbed(backup) = &self.state else {
            return Ok(());
        };

        let handle = backend.generate_texture()?;
        let result = {
            let mut gl = ScopedBinding::new(&mut *backend, handle);
            gl.allocate_storage(backup.extent, backup.format).and_then(|()| {
                if backup.extent.is_empty() {
                    Ok(())
                } else {
                    gl.upload_region(backup.extent.full_rect(), backup.format, &backup.data)
                }
            })
        };
        if let Err(err) = result {
            backend.delete_texture(handle);
            log::warn!("Texture '{}': restore failed: {err}", self.name);
            return Err(err);
        }

        self.state = TextureState::Live(handle);
        log::debug!("Texture '{}': restored as handle {}", self.name, handle.get());
        Ok(())
    }

    /// Release whatever storage the texture holds.
    pub fn destroy<B: TextureBackend + ?Sized>(&mut self, backend: &mut B) {
        match std::mem::take(&mut self.state) {
            TextureState::Live(handle) => {
                log::debug!("Texture '{}': deleting handle {}", self.name, handle.get());
                backend.delete_texture(handle);
            }
            TextureState::Grabbed(_) => {
                log::debug!("Texture '{}': dropping grabbed content", self.name);
            }
            TextureState::Uninitialised => return,
        }
        self.size = Sizef::zero();
        self.original_data_size = Sizef::zero();
        self.texel_scaling = Vector2f::zero();
        self.format = PixelFormat::Rgba;
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn set_size(&mut self, size: Sizef) {
        self.size = size;
        self.texel_scaling = Vector2f::new(reciprocal(size.width), reciprocal(size.height));
    }

    fn live_handle(&self) -> Result<NativeTexture, GraphicsError> {
        self.native_handle()
            .ok_or_else(|| GraphicsError::NotLive(self.name.clone()))
    }

    fn backup_len(&self) -> usize {
        match &self.state {
            TextureState::Grabbed(backup) => backup.data.len(),
            _ => 0,
        }
    }

    /// Validate a source buffer and return the extent it covers.
    fn check_source<B: TextureBackend + ?Sized>(
        &self,
        backend: &B,
        buffer: &[u8],
        size: Sizef,
        format: PixelFormat,
    ) -> Result<Extent2d, GraphicsError> {
        if !self.is_format_supported(backend, format) {
            return Err(GraphicsError::UnsupportedFormat(format));
        }
        let extent = Extent2d::from_size(size);
        let needed = format.data_size(extent.width, extent.height);
        if buffer.len() < needed {
            return Err(GraphicsError::InvalidParameter(format!(
                "{} bytes supplied for a {}x{} {format} image, {needed} needed",
                buffer.len(),
                extent.width,
                extent.height
            )));
        }
        Ok(extent)
    }

    fn check_block_alignment(&self, region: TexelRect, extent: Extent2d) -> Result<(), GraphicsError> {
        let desc = self.format.description();
        let aligned = |start: u32, len: u32, block: u32, limit: u32| {
            start % block == 0 && (len % block == 0 || start + len == limit)
        };
        if aligned(region.x, region.width, desc.block_width, extent.width)
            && aligned(region.y, region.height, desc.block_height, extent.height)
        {
            Ok(())
        } else {
            Err(GraphicsError::InvalidParameter(format!(
                "region {}x{} at ({}, {}) is not aligned to {}x{} {} blocks",
                region.width,
                region.height,
                region.x,
                region.y,
                desc.block_width,
                desc.block_height,
                self.format
            )))
        }
    }
}

impl Drop for TextureResource {
    fn drop(&mut self) {
        if let TextureState::Live(handle) = self.state {
            log::warn!(
                "Texture '{}' dropped while holding native handle {}; it was not destroyed",
                self.name,
                handle.get()
            );
        }
    }
}
