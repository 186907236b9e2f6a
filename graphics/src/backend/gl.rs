//! OpenGL texture backend.
//!
//! Drives 2D textures on an existing GL context through `glow`. The
//! context must be current on the calling thread for every call.

use glow::HasContext;
use redlilium_core::texture::PixelFormat;

use crate::error::GraphicsError;
use crate::types::{Extent2d, TexelRect};

use super::{BackendCapabilities, NativeTexture, TextureBackend, TextureFeatures};

const S3TC_EXTENSION: &str = "GL_EXT_texture_compression_s3tc";

/// GL enums describing one pixel format.
#[derive(Debug, Clone, Copy)]
enum GlFormat {
    /// Client format and component type.
    Raw { format: u32, ty: u32 },
    /// Compressed internal format.
    Compressed { internal: u32 },
}

fn gl_format(format: PixelFormat) -> Option<GlFormat> {
    let raw = |format, ty| Some(GlFormat::Raw { format, ty });
    let compressed = |internal| Some(GlFormat::Compressed { internal });
    match format {
        PixelFormat::Rgb => raw(glow::RGB, glow::UNSIGNED_BYTE),
        PixelFormat::Rgba => raw(glow::RGBA, glow::UNSIGNED_BYTE),
        PixelFormat::Rgba4444 => raw(glow::RGBA, glow::UNSIGNED_SHORT_4_4_4_4),
        PixelFormat::Rgb565 => raw(glow::RGB, glow::UNSIGNED_SHORT_5_6_5),
        PixelFormat::RgbDxt1 => compressed(glow::COMPRESSED_RGB_S3TC_DXT1_EXT),
        PixelFormat::RgbaDxt1 => compressed(glow::COMPRESSED_RGBA_S3TC_DXT1_EXT),
        PixelFormat::RgbaDxt3 => compressed(glow::COMPRESSED_RGBA_S3TC_DXT3_EXT),
        PixelFormat::RgbaDxt5 => compressed(glow::COMPRESSED_RGBA_S3TC_DXT5_EXT),
        PixelFormat::Pvrtc2 | PixelFormat::Pvrtc4 => None,
    }
}

fn dimension(value: u32) -> Result<i32, GraphicsError> {
    i32::try_from(value)
        .map_err(|_| GraphicsError::InvalidParameter(format!("dimension {value} out of range")))
}

/// OpenGL texture backend.
pub struct GlBackend {
    gl: glow::Context,
    capabilities: BackendCapabilities,
}

impl std::fmt::Debug for GlBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlBackend")
            .field("capabilities", &self.capabilities)
            .finish_non_exhaustive()
    }
}

impl GlBackend {
    /// Wrap a GL context.
    ///
    /// # Safety
    ///
    /// `gl` must be a valid context that stays current on this thread for
    /// the lifetime of the backend.
    pub unsafe fn new(gl: glow::Context) -> Self {
        let mut features = TextureFeatures::empty();
        if gl.supported_extensions().contains(S3TC_EXTENSION) {
            features |= TextureFeatures::S3TC;
        }
        let max_texture_size = gl.get_parameter_i32(glow::MAX_TEXTURE_SIZE).max(0) as u32;
        let capabilities = BackendCapabilities {
            features,
            max_texture_size,
        };
        log::info!(
            "GlBackend: max texture size {}, S3TC {}",
            max_texture_size,
            if capabilities.supports_s3tc() { "available" } else { "unavailable" }
        );
        Self { gl, capabilities }
    }

    /// Underlying GL context.
    pub fn context(&self) -> &glow::Context {
        &self.gl
    }

    fn check_error(&self, operation: &str) -> Result<(), GraphicsError> {
        // SAFETY: context is current per `new`'s contract.
        let error = unsafe { self.gl.get_error() };
        if error == glow::NO_ERROR {
            Ok(())
        } else {
            Err(GraphicsError::Backend(format!(
                "{operation} failed with GL error 0x{error:04X}"
            )))
        }
    }

    /// Run `f` with the given pixel store alignment, restoring the old value.
    fn with_alignment<R>(&self, parameter: u32, f: impl FnOnce(&glow::Context) -> R) -> R {
        // SAFETY: context is current per `new`'s contract.
        unsafe {
            let old = self.gl.get_parameter_i32(parameter);
            self.gl.pixel_store_i32(parameter, 1);
            let result = f(&self.gl);
            self.gl.pixel_store_i32(parameter, old);
            result
        }
    }

    fn lookup(format: PixelFormat) -> Result<GlFormat, GraphicsError> {
        gl_format(format).ok_or(GraphicsError::UnsupportedFormat(format))
    }
}

impl TextureBackend for GlBackend {
    fn name(&self) -> &'static str {
        "OpenGL"
    }

    fn capabilities(&self) -> &BackendCapabilities {
        &self.capabilities
    }

    fn generate_texture(&mut self) -> Result<NativeTexture, GraphicsError> {
        let previous = self.bound_texture();
        // SAFETY: context is current per `new`'s contract.
        let texture = unsafe {
            let texture = self
                .gl
                .create_texture()
                .map_err(GraphicsError::ResourceCreationFailed)?;
            self.gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            let params = [
                (glow::TEXTURE_MAG_FILTER, glow::LINEAR),
                (glow::TEXTURE_MIN_FILTER, glow::LINEAR),
                (glow::TEXTURE_WRAP_S, glow::CLAMP_TO_EDGE),
                (glow::TEXTURE_WRAP_T, glow::CLAMP_TO_EDGE),
            ];
            for (parameter, value) in params {
                self.gl
                    .tex_parameter_i32(glow::TEXTURE_2D, parameter, value as i32);
            }
            texture
        };
        self.bind_texture(previous);
        self.check_error("texture creation")?;

        let texture = NativeTexture::from_raw(texture.0);
        log::trace!("GlBackend: generated texture {}", texture.get());
        Ok(texture)
    }

    fn delete_texture(&mut self, texture: NativeTexture) {
        log::trace!("GlBackend: deleting texture {}", texture.get());
        // SAFETY: context is current per `new`'s contract.
        unsafe { self.gl.delete_texture(glow::NativeTexture(texture.raw())) };
    }

    fn bound_texture(&self) -> Option<NativeTexture> {
        // SAFETY: context is current per `new`'s contract.
        let raw = unsafe { self.gl.get_parameter_i32(glow::TEXTURE_BINDING_2D) };
        NativeTexture::new(raw as u32)
    }

    fn bind_texture(&mut self, texture: Option<NativeTexture>) {
        let texture = texture.map(|t| glow::NativeTexture(t.raw()));
        // SAFETY: context is current per `new`'s contract.
        unsafe { self.gl.bind_texture(glow::TEXTURE_2D, texture) };
    }

    fn allocate_storage(
        &mut self,
        extent: Extent2d,
        format: PixelFormat,
    ) -> Result<(), GraphicsError> {
        if !self.capabilities.is_format_supported(format) {
            return Err(GraphicsError::UnsupportedFormat(format));
        }
        let width = dimension(extent.width)?;
        let height = dimension(extent.height)?;

        match Self::lookup(format)? {
            GlFormat::Raw { format, ty } => {
                // SAFETY: context is current per `new`'s contract.
                unsafe {
                    self.gl.tex_image_2d(
                        glow::TEXTURE_2D,
                        0,
                        format as i32,
                        width,
                        height,
                        0,
                        format,
                        ty,
                        None,
                    );
                }
            }
            GlFormat::Compressed { internal } => {
                let zeroed = vec![0u8; format.data_size(extent.width, extent.height)];
                let size = dimension(zeroed.len() as u32)?;
                // SAFETY: context is current per `new`'s contract.
                unsafe {
                    self.gl.compressed_tex_image_2d(
                        glow::TEXTURE_2D,
                        0,
                        internal as i32,
                        width,
                        height,
                        0,
                        size,
                        &zeroed,
                    );
                }
            }
        }
        self.check_error("texture storage allocation")
    }

    fn upload_region(
        &mut self,
        region: TexelRect,
        format: PixelFormat,
        data: &[u8],
    ) -> Result<(), GraphicsError> {
        if data.len() != format.data_size(region.width, region.height) {
            return Err(GraphicsError::InvalidParameter(format!(
                "upload of {} bytes does not match region {:?}",
                data.len(),
                region
            )));
        }
        let (x, y) = (dimension(region.x)?, dimension(region.y)?);
        let (width, height) = (dimension(region.width)?, dimension(region.height)?);

        match Self::lookup(format)? {
            GlFormat::Raw { format, ty } => {
                self.with_alignment(glow::UNPACK_ALIGNMENT, |gl| {
                    // SAFETY: context is current per `new`'s contract.
                    unsafe {
                        gl.tex_sub_image_2d(
                            glow::TEXTURE_2D,
                            0,
                            x,
                            y,
                            width,
                            height,
                            format,
                            ty,
                            glow::PixelUnpackData::Slice(data),
                        );
                    }
                });
            }
            GlFormat::Compressed { internal } => {
                // SAFETY: context is current per `new`'s contract.
                unsafe {
                    self.gl.compressed_tex_sub_image_2d(
                        glow::TEXTURE_2D,
                        0,
                        x,
                        y,
                        width,
                        height,
                        internal,
                        glow::CompressedPixelUnpackData::Slice(data),
                    );
                }
            }
        }
        self.check_error("texture upload")
    }

    fn read_texture(&mut self, format: PixelFormat, out: &mut [u8]) -> Result<(), GraphicsError> {
        match Self::lookup(format)? {
            GlFormat::Raw { format, ty } => {
                self.with_alignment(glow::PACK_ALIGNMENT, |gl| {
                    // SAFETY: context is current per `new`'s contract.
                    unsafe {
                        gl.get_tex_image(
                            glow::TEXTURE_2D,
                            0,
                            format,
                            ty,
                            glow::PixelPackData::Slice(out),
                        );
                    }
                });
                self.check_error("texture readback")
            }
            GlFormat::Compressed { .. } => Err(GraphicsError::FeatureNotSupported(format!(
                "reading back {format} textures"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_supported_format_maps() {
        for format in PixelFormat::ALL {
            let mapped = gl_format(format);
            assert_eq!(
                mapped.is_some(),
                !matches!(format, PixelFormat::Pvrtc2 | PixelFormat::Pvrtc4),
                "{format}"
            );
        }
    }

    #[test]
    fn packed_formats_use_packed_types() {
        assert!(matches!(
            gl_format(PixelFormat::Rgba4444),
            Some(GlFormat::Raw { format: glow::RGBA, ty: glow::UNSIGNED_SHORT_4_4_4_4 })
        ));
        assert!(matches!(
            gl_format(PixelFormat::Rgb565),
            Some(GlFormat::Raw { format: glow::RGB, ty: glow::UNSIGNED_SHORT_5_6_5 })
        ));
    }
}
