//! Image decoding.
//!
//! An [`ImageCodec`] turns encoded file bytes into pixels a texture can be
//! loaded from. The renderer owns one codec and uses it for every
//! file-backed texture.

mod image_rs;

pub use image_rs::ImageRsCodec;

use std::fmt;

use redlilium_core::math::Sizef;
use redlilium_core::texture::PixelFormat;

/// Pixels produced by a codec.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    /// Image size in pixels.
    pub size: Sizef,
    /// Format of `pixels`.
    pub format: PixelFormat,
    /// Tightly packed pixel rows, top row first.
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    pub fn new(size: Sizef, format: PixelFormat, pixels: Vec<u8>) -> Self {
        Self {
            size,
            format,
            pixels,
        }
    }
}

/// Failure reported by a codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecError {
    reason: String,
}

impl CodecError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Human readable cause.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

impl std::error::Error for CodecError {}

/// Decoder of encoded image data.
pub trait ImageCodec: Send + Sync {
    /// Name used in load error messages.
    fn identifier(&self) -> &str;

    /// Decode `data`, which was read from `filename`.
    fn decode(&self, data: &[u8], filename: &str) -> Result<DecodedImage, CodecError>;
}
