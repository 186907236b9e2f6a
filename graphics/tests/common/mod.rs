//! Common utilities for texture integration tests.
//!
//! This module provides shared test infrastructure that can be reused
//! across backend configurations.

use std::io::Cursor;

use redlilium_graphics::{
    CodecError, DecodedImage, DummyBackend, ImageCodec, ImageRsCodec, PixelFormat, Renderer,
    RendererConfig,
};
use redlilium_vfs::MemoryProvider;

// ============================================================================
// Backend Enumeration
// ============================================================================

/// Backend configurations for testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Dummy backend without S3TC.
    Dummy,
    /// Dummy backend reporting S3TC support.
    DummyS3tc,
}

impl Backend {
    /// Get the backend name for display.
    #[allow(dead_code)]
    pub fn name(&self) -> &'static str {
        match self {
            Backend::Dummy => "dummy",
            Backend::DummyS3tc => "dummy-s3tc",
        }
    }

    /// Whether this configuration accepts the DXT formats.
    #[allow(dead_code)]
    pub fn supports_s3tc(&self) -> bool {
        matches!(self, Backend::DummyS3tc)
    }

    /// Create the backend instance.
    pub fn create(self) -> DummyBackend {
        match self {
            Backend::Dummy => DummyBackend::new(),
            Backend::DummyS3tc => DummyBackend::with_s3tc(),
        }
    }
}

// ============================================================================
// Test Context
// ============================================================================

/// Group name registered on the test provider.
pub const IMAGESETS: &str = "imagesets";

/// Test context providing a renderer over an in-memory provider.
pub struct TestContext {
    /// The backend being tested.
    #[allow(dead_code)]
    pub backend: Backend,
    /// Shared handle to the renderer's provider.
    pub files: MemoryProvider,
    pub renderer: Renderer<DummyBackend>,
}

impl TestContext {
    /// Create a context decoding with the `image` crate codec.
    pub fn new(backend: Backend) -> Self {
        Self::with_codec(backend, ImageRsCodec::new(), RendererConfig::default())
    }

    /// Create a context with a custom codec and configuration.
    pub fn with_codec(
        backend: Backend,
        codec: impl ImageCodec + 'static,
        config: RendererConfig,
    ) -> Self {
        init_logging();
        let mut files = MemoryProvider::new();
        files
            .groups_mut()
            .set_directory(IMAGESETS, "datafiles/imagesets");
        let renderer = Renderer::with_config(backend.create(), files.clone(), codec, config);
        Self {
            backend,
            files,
            renderer,
        }
    }

    /// Store an encoded PNG under the imagesets group.
    #[allow(dead_code)]
    pub fn add_png(&self, filename: &str, width: u32, height: u32) {
        self.files.insert(
            format!("datafiles/imagesets/{filename}"),
            encode_png(width, height),
        );
    }
}

/// Install a test logger once per process.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ============================================================================
// Data Generation
// ============================================================================

/// Deterministic pixel pattern for the given format and size.
pub fn generate_test_pattern(format: PixelFormat, width: u32, height: u32) -> Vec<u8> {
    (0..format.data_size(width, height))
        .map(|i| (i * 7 % 253) as u8)
        .collect()
}

/// RGBA pixels the PNG produced by [`encode_png`] decodes to.
#[allow(dead_code)]
pub fn png_pixels(width: u32, height: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&[x as u8, y as u8, 0x80, 0xFF]);
        }
    }
    pixels
}

/// Encode a small RGBA PNG in memory.
pub fn encode_png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_raw(width, height, png_pixels(width, height))
        .expect("pattern matches image size");
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("Failed to encode PNG");
    bytes
}

// ============================================================================
// Codecs
// ============================================================================

/// Codec that rejects every input.
#[allow(dead_code)]
pub struct FailingCodec;

impl ImageCodec for FailingCodec {
    fn identifier(&self) -> &str {
        "FailingCodec"
    }

    fn decode(&self, _data: &[u8], _filename: &str) -> Result<DecodedImage, CodecError> {
        Err(CodecError::new("unsupported image"))
    }
}
