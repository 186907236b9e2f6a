//! Codec backed by the `image` crate.

use redlilium_core::math::Sizef;
use redlilium_core::texture::PixelFormat;

use super::{CodecError, DecodedImage, ImageCodec};

/// Decodes PNG, TGA and BMP data into RGBA pixels.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageRsCodec;

impl ImageRsCodec {
    pub fn new() -> Self {
        Self
    }
}

impl ImageCodec for ImageRsCodec {
    fn identifier(&self) -> &str {
        "ImageRsCodec"
    }

    fn decode(&self, data: &[u8], filename: &str) -> Result<DecodedImage, CodecError> {
        let img = image::load_from_memory(data).map_err(|e| CodecError::new(e.to_string()))?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        log::debug!("ImageRsCodec: decoded '{filename}' ({width}x{height})");
        Ok(DecodedImage::new(
            Sizef::new(width as f32, height as f32),
            PixelFormat::Rgba,
            rgba.into_raw(),
        ))
    }
}
