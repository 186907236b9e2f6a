//! Pixel format table.

use std::fmt;

/// Pixel formats a texture can be created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PixelFormat {
    /// 8-bit RGB.
    Rgb,
    /// 8-bit RGBA.
    #[default]
    Rgba,
    /// 4-bit RGBA packed into 16 bits.
    Rgba4444,
    /// 5-6-5 RGB packed into 16 bits.
    Rgb565,
    /// PVRTC 2 bits per pixel.
    Pvrtc2,
    /// PVRTC 4 bits per pixel.
    Pvrtc4,
    /// S3TC DXT1 without alpha.
    RgbDxt1,
    /// S3TC DXT1 with 1-bit alpha.
    RgbaDxt1,
    /// S3TC DXT3.
    RgbaDxt3,
    /// S3TC DXT5.
    RgbaDxt5,
}

/// Storage layout of a pixel format.
///
/// Uncompressed formats are described as 1x1 blocks, so the same
/// arithmetic sizes both kinds of data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatDescription {
    /// Texels per block horizontally.
    pub block_width: u32,
    /// Texels per block vertically.
    pub block_height: u32,
    /// Bytes per block.
    pub bytes_per_block: u32,
    /// Whether the data is block compressed.
    pub compressed: bool,
}

impl FormatDescription {
    const fn raw(bytes_per_texel: u32) -> Self {
        Self {
            block_width: 1,
            block_height: 1,
            bytes_per_block: bytes_per_texel,
            compressed: false,
        }
    }

    const fn blocks(block_width: u32, block_height: u32, bytes_per_block: u32) -> Self {
        Self {
            block_width,
            block_height,
            bytes_per_block,
            compressed: true,
        }
    }

    /// Number of blocks covering `width` texels, rounded up.
    pub fn blocks_wide(&self, width: u32) -> u32 {
        width.div_ceil(self.block_width)
    }

    /// Number of blocks covering `height` texels, rounded up.
    pub fn blocks_high(&self, height: u32) -> u32 {
        height.div_ceil(self.block_height)
    }

    /// Bytes in one row of blocks spanning `width` texels.
    pub fn row_bytes(&self, width: u32) -> usize {
        self.blocks_wide(width) as usize * self.bytes_per_block as usize
    }

    /// Bytes needed for a `width` x `height` region.
    pub fn data_size(&self, width: u32, height: u32) -> usize {
        self.row_bytes(width) * self.blocks_high(height) as usize
    }
}

impl PixelFormat {
    /// All known formats.
    pub const ALL: [PixelFormat; 10] = [
        Self::Rgb,
        Self::Rgba,
        Self::Rgba4444,
        Self::Rgb565,
        Self::Pvrtc2,
        Self::Pvrtc4,
        Self::RgbDxt1,
        Self::RgbaDxt1,
        Self::RgbaDxt3,
        Self::RgbaDxt5,
    ];

    /// Storage layout for this format.
    pub const fn description(&self) -> FormatDescription {
        match self {
            Self::Rgb => FormatDescription::raw(3),
            Self::Rgba => FormatDescription::raw(4),
            Self::Rgba4444 | Self::Rgb565 => FormatDescription::raw(2),
            Self::Pvrtc2 => FormatDescription::blocks(8, 4, 8),
            Self::Pvrtc4 => FormatDescription::blocks(4, 4, 8),
            Self::RgbDxt1 | Self::RgbaDxt1 => FormatDescription::blocks(4, 4, 8),
            Self::RgbaDxt3 | Self::RgbaDxt5 => FormatDescription::blocks(4, 4, 16),
        }
    }

    /// Returns true if this is a block-compressed format.
    pub const fn is_compressed(&self) -> bool {
        self.description().compressed
    }

    /// Returns true for the S3TC (DXT) family.
    pub const fn is_s3tc(&self) -> bool {
        matches!(
            self,
            Self::RgbDxt1 | Self::RgbaDxt1 | Self::RgbaDxt3 | Self::RgbaDxt5
        )
    }

    /// Bytes needed to hold `width` x `height` texels in this format.
    pub fn data_size(&self, width: u32, height: u32) -> usize {
        self.description().data_size(width, height)
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rgb => "RGB",
            Self::Rgba => "RGBA",
            Self::Rgba4444 => "RGBA_4444",
            Self::Rgb565 => "RGB_565",
            Self::Pvrtc2 => "PVRTC2",
            Self::Pvrtc4 => "PVRTC4",
            Self::RgbDxt1 => "RGB_DXT1",
            Self::RgbaDxt1 => "RGBA_DXT1",
            Self::RgbaDxt3 => "RGBA_DXT3",
            Self::RgbaDxt5 => "RGBA_DXT5",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_sizes() {
        assert_eq!(PixelFormat::Rgba.data_size(4, 4), 64);
        assert_eq!(PixelFormat::Rgb.data_size(3, 2), 18);
        assert_eq!(PixelFormat::Rgb565.data_size(5, 5), 50);
        assert_eq!(PixelFormat::Rgba4444.data_size(0, 10), 0);
    }

    #[test]
    fn dxt5_rounds_up_to_whole_blocks() {
        assert_eq!(PixelFormat::RgbaDxt5.data_size(8, 8), 64);
        assert_eq!(PixelFormat::RgbaDxt5.data_size(5, 5), 64);
        assert_eq!(PixelFormat::RgbaDxt3.data_size(1, 1), 16);
    }

    #[test]
    fn dxt1_uses_half_size_blocks() {
        assert_eq!(PixelFormat::RgbDxt1.data_size(8, 8), 32);
        assert_eq!(PixelFormat::RgbaDxt1.data_size(6, 3), 16);
    }

    #[test]
    fn pvrtc2_blocks_are_wide() {
        assert_eq!(PixelFormat::Pvrtc2.data_size(8, 4), 8);
        assert_eq!(PixelFormat::Pvrtc2.data_size(9, 4), 16);
    }

    #[test]
    fn compression_flags() {
        let compressed: Vec<_> = PixelFormat::ALL
            .iter()
            .filter(|f| f.is_compressed())
            .collect();
        assert_eq!(compressed.len(), 6);
        assert!(PixelFormat::RgbaDxt5.is_s3tc());
        assert!(!PixelFormat::Pvrtc4.is_s3tc());
        assert!(!PixelFormat::Rgba.is_compressed());
    }

    #[test]
    fn default_is_rgba() {
        assert_eq!(PixelFormat::default(), PixelFormat::Rgba);
        assert_eq!(PixelFormat::default().to_string(), "RGBA");
    }
}
