//! Dummy texture backend for testing and development.
//!
//! This backend doesn't talk to a GPU. Texture storage lives in host
//! memory, so uploads and readbacks behave like the real thing and can be
//! inspected from tests without requiring GPU hardware.

use std::collections::HashMap;

use redlilium_core::texture::PixelFormat;

use crate::error::GraphicsError;
use crate::types::{Extent2d, TexelRect};

use super::{BackendCapabilities, NativeTexture, TextureBackend, TextureFeatures};

/// Host-memory storage of one dummy texture.
#[derive(Debug, Clone)]
struct DummyTexture {
    extent: Extent2d,
    format: PixelFormat,
    data: Vec<u8>,
}

/// Dummy texture backend.
#[derive(Debug)]
pub struct DummyBackend {
    capabilities: BackendCapabilities,
    /// `None` until storage is allocated.
    textures: HashMap<NativeTexture, Option<DummyTexture>>,
    bound: Option<NativeTexture>,
    next_id: u32,
    uploads: usize,
    compressed_uploads: usize,
}

impl Default for DummyBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DummyBackend {
    /// Create a new dummy backend without S3TC support.
    pub fn new() -> Self {
        Self::with_capabilities(
            BackendCapabilities::default().with_features(TextureFeatures::COMPRESSED_READBACK),
        )
    }

    /// Create a dummy backend that also accepts the DXT formats.
    pub fn with_s3tc() -> Self {
        Self::with_capabilities(BackendCapabilities::default().with_features(
            TextureFeatures::S3TC | TextureFeatures::COMPRESSED_READBACK,
        ))
    }

    /// Create a dummy backend reporting the given capabilities.
    pub fn with_capabilities(capabilities: BackendCapabilities) -> Self {
        Self {
            capabilities,
            textures: HashMap::new(),
            bound: None,
            next_id: 1,
            uploads: 0,
            compressed_uploads: 0,
        }
    }

    /// Stored content of a texture, if it has storage.
    pub fn texture_data(&self, texture: NativeTexture) -> Option<&[u8]> {
        self.storage(texture).map(|t| t.data.as_slice())
    }

    /// Allocated extent of a texture.
    pub fn texture_extent(&self, texture: NativeTexture) -> Option<Extent2d> {
        self.storage(texture).map(|t| t.extent)
    }

    /// Allocated format of a texture.
    pub fn texture_format(&self, texture: NativeTexture) -> Option<PixelFormat> {
        self.storage(texture).map(|t| t.format)
    }

    /// Number of texture objects that have not been deleted.
    pub fn live_texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Whether `texture` names an existing texture object.
    pub fn is_texture(&self, texture: NativeTexture) -> bool {
        self.textures.contains_key(&texture)
    }

    /// Number of uncompressed region uploads performed so far.
    pub fn upload_count(&self) -> usize {
        self.uploads
    }

    /// Number of compressed region uploads performed so far.
    pub fn compressed_upload_count(&self) -> usize {
        self.compressed_uploads
    }

    fn storage(&self, texture: NativeTexture) -> Option<&DummyTexture> {
        self.textures.get(&texture).and_then(Option::as_ref)
    }

    fn bound_storage(&mut self) -> Result<&mut DummyTexture, GraphicsError> {
        let bound = self
            .bound
            .ok_or_else(|| GraphicsError::InvalidParameter("no texture is bound".into()))?;
        self.textures
            .get_mut(&bound)
            .and_then(Option::as_mut)
            .ok_or_else(|| {
                GraphicsError::InvalidParameter(format!(
                    "texture {} has no storage",
                    bound.get()
                ))
            })
    }
}

impl TextureBackend for DummyBackend {
    fn name(&self) -> &'static str {
        "Dummy"
    }

    fn capabilities(&self) -> &BackendCapabilities {
        &self.capabilities
    }

    fn generate_texture(&mut self) -> Result<NativeTexture, GraphicsError> {
        let texture = NativeTexture::new(self.next_id).ok_or_else(|| {
            GraphicsError::ResourceCreationFailed("texture names exhausted".into())
        })?;
        self.next_id = self.next_id.wrapping_add(1);
        self.textures.insert(texture, None);
        log::trace!("DummyBackend: generated texture {}", texture.get());
        Ok(texture)
    }

    fn delete_texture(&mut self, texture: NativeTexture) {
        log::trace!("DummyBackend: deleting texture {}", texture.get());
        self.textures.remove(&texture);
        if self.bound == Some(texture) {
            self.bound = None;
        }
    }

    fn bound_texture(&self) -> Option<NativeTexture> {
        self.bound
    }

    fn bind_texture(&mut self, texture: Option<NativeTexture>) {
        // Binding an unknown name is ignored, matching GL's error-and-skip.
        match texture {
            Some(t) if !self.textures.contains_key(&t) => {
                log::warn!("DummyBackend: bind of unknown texture {}", t.get());
            }
            _ => self.bound = texture,
        }
    }

    fn allocate_storage(
        &mut self,
        extent: Extent2d,
        format: PixelFormat,
    ) -> Result<(), GraphicsError> {
        if !self.capabilities.is_format_supported(format) {
            return Err(GraphicsError::UnsupportedFormat(format));
        }
        let max = self.capabilities.max_texture_size;
        if extent.width > max || extent.height > max {
            return Err(GraphicsError::InvalidParameter(format!(
                "extent {}x{} exceeds maximum texture size {max}",
                extent.width, extent.height
            )));
        }
        let bound = self
            .bound
            .ok_or_else(|| GraphicsError::InvalidParameter("no texture is bound".into()))?;

        log::trace!(
            "DummyBackend: allocating {}x{} {format} for texture {}",
            extent.width,
            extent.height,
            bound.get()
        );
        let data = vec![0u8; format.data_size(extent.width, extent.height)];
        if let Some(slot) = self.textures.get_mut(&bound) {
            *slot = Some(DummyTexture {
                extent,
                format,
                data,
            });
        }
        Ok(())
    }

    fn upload_region(
        &mut self,
        region: TexelRect,
        format: PixelFormat,
        data: &[u8],
    ) -> Result<(), GraphicsError> {
        let expected = format.data_size(region.width, region.height);
        if data.len() != expected {
            return Err(GraphicsError::InvalidParameter(format!(
                "upload of {} bytes, expected {expected}",
                data.len()
            )));
        }

        let storage = self.bound_storage()?;
        if storage.format != format {
            return Err(GraphicsError::InvalidParameter(format!(
                "upload format {format} does not match storage format {}",
                storage.format
            )));
        }
        if !region.fits_within(storage.extent) {
            return Err(GraphicsError::InvalidParameter(format!(
                "region {:?} outside texture of {}x{}",
                region, storage.extent.width, storage.extent.height
            )));
        }

        let desc = format.description();
        let texture_row = desc.row_bytes(storage.extent.width);
        let region_row = desc.row_bytes(region.width);
        let first_block_row = (region.y / desc.block_height) as usize;
        let first_block_col = (region.x / desc.block_width) as usize;

        for (row, src) in data.chunks_exact(region_row.max(1)).enumerate() {
            let start = (first_block_row + row) * texture_row
                + first_block_col * desc.bytes_per_block as usize;
            let end = start + region_row;
            let dst = storage.data.get_mut(start..end).ok_or_else(|| {
                GraphicsError::InvalidParameter("region exceeds texture storage".into())
            })?;
            dst.copy_from_slice(src);
        }

        if desc.compressed {
            self.compressed_uploads += 1;
        } else {
            self.uploads += 1;
        }
        Ok(())
    }

    fn read_texture(&mut self, format: PixelFormat, out: &mut [u8]) -> Result<(), GraphicsError> {
        let readback = self
            .capabilities
            .features
            .contains(TextureFeatures::COMPRESSED_READBACK);
        let storage = self.bound_storage()?;
        if storage.format != format {
            return Err(GraphicsError::InvalidParameter(format!(
                "readback format {format} does not match storage format {}",
                storage.format
            )));
        }
        if format.is_compressed() && !readback {
            return Err(GraphicsError::FeatureNotSupported(format!(
                "reading back {format} textures"
            )));
        }
        if out.len() != storage.data.len() {
            return Err(GraphicsError::InvalidParameter(format!(
                "readback buffer of {} bytes, expected {}",
                out.len(),
                storage.data.len()
            )));
        }
        out.copy_from_slice(&storage.data);
        Ok(())
    }
}
