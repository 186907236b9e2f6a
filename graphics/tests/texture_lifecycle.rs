//! Texture lifecycle integration tests.
//!
//! These tests drive textures through the renderer and verify sizes,
//! content and error behavior across backend configurations. Tests are
//! parameterized using `rstest` to run against every configuration.
//!
//! # Test Categories
//!
//! - **Scaling Tests**: texel scaling tracks the texture size
//! - **Grab/Restore Tests**: content survives a trip to host memory
//! - **Format Tests**: format support and compressed upload sizes
//! - **Loading Tests**: file and memory loading, including failures
//! - **Upload Tests**: region uploads and binding hygiene

mod common;

use rstest::rstest;

use common::{
    generate_test_pattern, png_pixels, Backend, FailingCodec, TestContext, IMAGESETS,
};
use redlilium_core::math::{Rectf, Sizef, Vector2};
use redlilium_graphics::{
    GraphicsError, ImageRsCodec, PixelFormat, RendererConfig, TextureBackend, TextureResource,
    TextureState,
};
use redlilium_vfs::{ResourceError, ResourceProvider};

// ============================================================================
// Scaling Tests
// ============================================================================

#[rstest]
#[case::dummy(Backend::Dummy)]
#[case::dummy_s3tc(Backend::DummyS3tc)]
fn test_texel_scaling_is_reciprocal_size(
    #[case] backend: Backend,
    #[values((1, 1), (16, 8), (3, 250), (1024, 2))] dims: (u32, u32),
) {
    let mut ctx = TestContext::new(backend);
    let (w, h) = dims;
    let size = Sizef::new(w as f32, h as f32);
    let data = generate_test_pattern(PixelFormat::Rgba, w, h);

    let texture = ctx
        .renderer
        .create_texture_from_memory("pattern", &data, size, PixelFormat::Rgba)
        .unwrap();
    assert_eq!(texture.texel_scaling(), Vector2::new(1.0 / w as f32, 1.0 / h as f32));

    let texture = ctx
        .renderer
        .create_texture_with_size("sized", Sizef::new(h as f32, w as f32))
        .unwrap();
    assert_eq!(texture.texel_scaling(), Vector2::new(1.0 / h as f32, 1.0 / w as f32));
}

#[rstest]
#[case::dummy(Backend::Dummy)]
#[case::dummy_s3tc(Backend::DummyS3tc)]
fn test_zero_size_gives_zero_scaling(#[case] backend: Backend) {
    let mut ctx = TestContext::new(backend);

    let texture = ctx
        .renderer
        .create_texture_with_size("flat", Sizef::new(0.0, 32.0))
        .unwrap();
    assert_eq!(texture.texel_scaling(), Vector2::new(0.0, 1.0 / 32.0));

    let texture = ctx.renderer.create_texture("blank").unwrap();
    assert_eq!(texture.texel_scaling(), Vector2::new(0.0, 0.0));
    assert!(texture.texel_scaling().x.is_finite());
}

// ============================================================================
// Grab/Restore Tests
// ============================================================================

#[rstest]
#[case::rgba(Backend::Dummy, PixelFormat::Rgba)]
#[case::rgb(Backend::Dummy, PixelFormat::Rgb)]
#[case::rgba4444(Backend::Dummy, PixelFormat::Rgba4444)]
#[case::rgb565(Backend::Dummy, PixelFormat::Rgb565)]
#[case::dxt1(Backend::DummyS3tc, PixelFormat::RgbaDxt1)]
#[case::dxt5(Backend::DummyS3tc, PixelFormat::RgbaDxt5)]
fn test_grab_restore_preserves_texture(#[case] backend: Backend, #[case] format: PixelFormat) {
    let mut ctx = TestContext::new(backend);
    let data = generate_test_pattern(format, 12, 8);
    let size = Sizef::new(12.0, 8.0);
    ctx.renderer
        .create_texture_from_memory("pattern", &data, size, format)
        .unwrap();

    ctx.renderer.grab_textures().unwrap();
    {
        let texture = ctx.renderer.texture("pattern").unwrap();
        assert!(texture.is_grabbed());
        assert_eq!(texture.native_handle(), None);
        match texture.state() {
            TextureState::Grabbed(backup) => {
                assert_eq!(backup.format, format);
                assert_eq!(backup.data, data);
            }
            other => panic!("expected grabbed state, got {other:?}"),
        }
    }
    assert_eq!(ctx.renderer.backend().live_texture_count(), 0);

    ctx.renderer.restore_textures().unwrap();
    let texture = ctx.renderer.texture("pattern").unwrap();
    assert!(!texture.is_grabbed());
    assert_eq!(texture.size(), size);
    assert_eq!(texture.original_data_size(), size);
    assert_eq!(texture.pixel_format(), format);

    let handle = texture.native_handle().unwrap();
    assert_eq!(ctx.renderer.backend().texture_data(handle), Some(data.as_slice()));
}

#[rstest]
#[case::dummy(Backend::Dummy)]
#[case::dummy_s3tc(Backend::DummyS3tc)]
fn test_grab_is_idempotent(#[case] backend: Backend) {
    let mut ctx = TestContext::new(backend);
    let data = generate_test_pattern(PixelFormat::Rgba, 4, 4);
    ctx.renderer
        .create_texture_from_memory("twice", &data, Sizef::new(4.0, 4.0), PixelFormat::Rgba)
        .unwrap();

    ctx.renderer.grab_textures().unwrap();
    let first = ctx.renderer.texture("twice").unwrap().state().clone();
    ctx.renderer.grab_textures().unwrap();
    assert_eq!(ctx.renderer.texture("twice").unwrap().state(), &first);
}

#[rstest]
#[case::dummy(Backend::Dummy)]
#[case::dummy_s3tc(Backend::DummyS3tc)]
fn test_restore_without_grab_is_noop(#[case] backend: Backend) {
    let mut ctx = TestContext::new(backend);
    let handle = ctx
        .renderer
        .create_texture_with_size("live", Sizef::new(8.0, 8.0))
        .unwrap()
        .native_handle();

    ctx.renderer.restore_textures().unwrap();
    let texture = ctx.renderer.texture("live").unwrap();
    assert_eq!(texture.native_handle(), handle);
    assert_eq!(ctx.renderer.backend().live_texture_count(), 1);
}

// ============================================================================
// Format Tests
// ============================================================================

#[rstest]
#[case::dummy(Backend::Dummy)]
#[case::dummy_s3tc(Backend::DummyS3tc)]
fn test_format_support(#[case] backend: Backend) {
    let ctx = TestContext::new(backend);
    let renderer = &ctx.renderer;
    let probe = TextureResource::new("probe");
    let supported = |format| probe.is_format_supported(renderer.backend(), format);

    assert!(supported(PixelFormat::Rgba));
    assert!(supported(PixelFormat::Rgb));
    assert!(supported(PixelFormat::Rgba4444));
    assert!(supported(PixelFormat::Rgb565));
    assert_eq!(supported(PixelFormat::RgbDxt1), backend.supports_s3tc());
    assert_eq!(supported(PixelFormat::RgbaDxt3), backend.supports_s3tc());
    assert_eq!(renderer.is_s3tc_supported(), backend.supports_s3tc());
    assert!(!supported(PixelFormat::Pvrtc2));
    assert!(!supported(PixelFormat::Pvrtc4));
}

#[rstest]
#[case::dummy(Backend::Dummy)]
fn test_unsupported_format_leaves_texture_untouched(#[case] backend: Backend) {
    common::init_logging();
    let mut backend = backend.create();
    let data = generate_test_pattern(PixelFormat::Rgba, 4, 4);
    let mut texture = TextureResource::new("keep");
    texture
        .initialise_from_memory(&mut backend, &data, Sizef::new(4.0, 4.0), PixelFormat::Rgba)
        .unwrap();
    let handle = texture.native_handle().unwrap();

    let dxt = generate_test_pattern(PixelFormat::RgbDxt1, 8, 8);
    let err = texture
        .initialise_from_memory(&mut backend, &dxt, Sizef::new(8.0, 8.0), PixelFormat::RgbDxt1)
        .unwrap_err();
    assert!(matches!(err, GraphicsError::UnsupportedFormat(PixelFormat::RgbDxt1)));

    let err = texture
        .load_from_memory(&mut backend, &dxt, Sizef::new(8.0, 8.0), PixelFormat::RgbDxt1)
        .unwrap_err();
    assert!(matches!(err, GraphicsError::UnsupportedFormat(_)));

    assert_eq!(texture.native_handle(), Some(handle));
    assert_eq!(texture.size(), Sizef::new(4.0, 4.0));
    assert_eq!(texture.original_data_size(), Sizef::new(4.0, 4.0));
    assert_eq!(texture.pixel_format(), PixelFormat::Rgba);
    assert_eq!(backend.texture_data(handle), Some(data.as_slice()));
    texture.destroy(&mut backend);
}

#[rstest]
#[case::dxt1(PixelFormat::RgbDxt1, 32)]
#[case::dxt1_alpha(PixelFormat::RgbaDxt1, 32)]
#[case::dxt3(PixelFormat::RgbaDxt3, 64)]
#[case::dxt5(PixelFormat::RgbaDxt5, 64)]
fn test_compressed_sizes_follow_format_table(#[case] format: PixelFormat, #[case] bytes: usize) {
    let mut ctx = TestContext::new(Backend::DummyS3tc);
    assert_eq!(format.data_size(8, 8), bytes);

    let data = generate_test_pattern(format, 8, 8);
    ctx.renderer
        .create_texture_from_memory("dxt", &data, Sizef::new(8.0, 8.0), format)
        .unwrap();
    let texture = ctx.renderer.texture("dxt").unwrap();
    assert!(texture.is_compressed());

    let handle = texture.native_handle().unwrap();
    assert_eq!(
        ctx.renderer.backend().texture_data(handle).map(<[u8]>::len),
        Some(bytes)
    );
    assert_eq!(ctx.renderer.backend().compressed_upload_count(), 1);
}

// ============================================================================
// Loading Tests
// ============================================================================

#[rstest]
#[case::dummy(Backend::Dummy)]
#[case::dummy_s3tc(Backend::DummyS3tc)]
fn test_load_from_file(#[case] backend: Backend) {
    let mut ctx = TestContext::new(backend);
    ctx.add_png("logo.png", 6, 3);

    let texture = ctx
        .renderer
        .create_texture_from_file("logo", "logo.png", IMAGESETS)
        .unwrap();
    assert_eq!(texture.size(), Sizef::new(6.0, 3.0));
    assert_eq!(texture.original_data_size(), Sizef::new(6.0, 3.0));
    assert_eq!(texture.pixel_format(), PixelFormat::Rgba);

    let mut out = vec![0u8; 6 * 3 * 4];
    ctx.renderer.blit_to_memory("logo", &mut out).unwrap();
    assert_eq!(out, png_pixels(6, 3));
    assert_eq!(ctx.files.outstanding_loads(), 0);
}

#[rstest]
#[case::dummy(Backend::Dummy)]
fn test_empty_group_uses_configured_default(#[case] backend: Backend) {
    let config = RendererConfig::default().with_default_resource_group(IMAGESETS);
    let mut ctx = TestContext::with_codec(backend, ImageRsCodec::new(), config);
    ctx.add_png("logo.png", 2, 2);

    ctx.renderer
        .create_texture_from_file("logo", "logo.png", "")
        .unwrap();
    assert!(ctx.renderer.is_texture_defined("logo"));
    assert_eq!(ctx.renderer.provider().default_resource_group(), "");
}

#[rstest]
#[case::dummy(Backend::Dummy)]
#[case::dummy_s3tc(Backend::DummyS3tc)]
fn test_codec_failure_names_codec_and_file(#[case] backend: Backend) {
    let mut ctx = TestContext::with_codec(backend, FailingCodec, RendererConfig::default());
    ctx.add_png("broken.png", 2, 2);

    let err = ctx
        .renderer
        .create_texture_from_file("broken", "broken.png", IMAGESETS)
        .unwrap_err();
    match &err {
        GraphicsError::Load {
            codec, filename, ..
        } => {
            assert_eq!(codec, "FailingCodec");
            assert_eq!(filename, "broken.png");
        }
        other => panic!("expected load error, got {other:?}"),
    }
    assert!(err
        .to_string()
        .starts_with("FailingCodec failed to load image 'broken.png'"));
    assert!(!ctx.renderer.is_texture_defined("broken"));
    assert_eq!(ctx.files.outstanding_loads(), 0);
    assert_eq!(ctx.renderer.backend().live_texture_count(), 0);
}

#[rstest]
#[case::dummy(Backend::Dummy)]
fn test_missing_file_is_resource_error(#[case] backend: Backend) {
    let mut ctx = TestContext::new(backend);

    let err = ctx
        .renderer
        .create_texture_from_file("ghost", "ghost.png", IMAGESETS)
        .unwrap_err();
    assert!(matches!(
        err,
        GraphicsError::Resource(ResourceError::NotFound(ref path))
            if path == "datafiles/imagesets/ghost.png"
    ));
    assert_eq!(ctx.files.outstanding_loads(), 0);
}

#[rstest]
#[case::dummy(Backend::Dummy)]
fn test_failed_reload_keeps_previous_content(#[case] backend: Backend) {
    let ctx = TestContext::new(backend);
    ctx.add_png("logo.png", 4, 4);
    ctx.files
        .insert("datafiles/imagesets/junk.png", b"not an image".to_vec());

    let codec = ImageRsCodec::new();
    let mut backend = backend.create();
    let mut texture = TextureResource::new("logo");
    texture
        .initialise_from_file(&mut backend, &ctx.files, &codec, "logo.png", IMAGESETS)
        .unwrap();
    let handle = texture.native_handle();

    let err = texture
        .initialise_from_file(&mut backend, &ctx.files, &codec, "junk.png", IMAGESETS)
        .unwrap_err();
    assert!(matches!(err, GraphicsError::Load { ref codec, .. } if codec == "ImageRsCodec"));
    assert_eq!(texture.native_handle(), handle);
    assert_eq!(texture.size(), Sizef::new(4.0, 4.0));
    assert_eq!(ctx.files.outstanding_loads(), 0);
    texture.destroy(&mut backend);
}

// ============================================================================
// Upload Tests
// ============================================================================

#[rstest]
#[case::dummy(Backend::Dummy)]
#[case::dummy_s3tc(Backend::DummyS3tc)]
fn test_out_of_bounds_upload_fails(#[case] backend: Backend) {
    let mut ctx = TestContext::new(backend);
    ctx.renderer
        .create_texture_with_size("target", Sizef::new(16.0, 16.0))
        .unwrap();

    let area = Rectf::new(Vector2::new(8.0, 8.0), Vector2::new(20.0, 12.0));
    let data = generate_test_pattern(PixelFormat::Rgba, 12, 4);
    let err = ctx.renderer.upload_region("target", &area, &data).unwrap_err();
    assert!(matches!(err, GraphicsError::Bounds { size, .. } if size == Sizef::new(16.0, 16.0)));

    let negative = Rectf::new(Vector2::new(-1.0, 0.0), Vector2::new(3.0, 4.0));
    let err = ctx
        .renderer
        .upload_region("target", &negative, &data)
        .unwrap_err();
    assert!(matches!(err, GraphicsError::Bounds { .. }));

    let huge = Rectf::new(Vector2::new(4.0e9, 0.0), Vector2::new(8.0e9, 4.0));
    let err = ctx.renderer.upload_region("target", &huge, &data).unwrap_err();
    assert!(matches!(err, GraphicsError::Bounds { .. }));

    let nan = Rectf::new(Vector2::new(f32::NAN, 0.0), Vector2::new(4.0, 4.0));
    let err = ctx.renderer.upload_region("target", &nan, &data).unwrap_err();
    assert!(matches!(err, GraphicsError::Bounds { .. }));
    assert_eq!(ctx.renderer.backend().upload_count(), 0);
}

#[rstest]
#[case::dummy(Backend::Dummy)]
#[case::dummy_s3tc(Backend::DummyS3tc)]
fn test_region_upload_updates_content(#[case] backend: Backend) {
    let mut ctx = TestContext::new(backend);
    ctx.renderer
        .create_texture_with_size("target", Sizef::new(4.0, 4.0))
        .unwrap();

    let area = Rectf::new(Vector2::new(2.0, 0.0), Vector2::new(4.0, 1.0));
    ctx.renderer
        .upload_region("target", &area, &[0xFF; 8])
        .unwrap();

    let mut out = vec![0u8; 64];
    ctx.renderer.blit_to_memory("target", &mut out).unwrap();
    assert_eq!(&out[..8], &[0u8; 8]);
    assert_eq!(&out[8..16], &[0xFF; 8]);
    assert!(out[16..].iter().all(|&b| b == 0));
}

#[rstest]
#[case::dummy(Backend::Dummy)]
#[case::dummy_s3tc(Backend::DummyS3tc)]
fn test_operations_restore_previous_binding(#[case] backend: Backend) {
    let mut ctx = TestContext::new(backend);
    let other = ctx
        .renderer
        .create_texture_with_size("other", Sizef::new(2.0, 2.0))
        .unwrap()
        .native_handle();
    ctx.renderer.backend_mut().bind_texture(other);

    let data = generate_test_pattern(PixelFormat::Rgba, 4, 4);
    ctx.renderer
        .create_texture_from_memory("main", &data, Sizef::new(4.0, 4.0), PixelFormat::Rgba)
        .unwrap();
    assert_eq!(ctx.renderer.backend().bound_texture(), other);

    let area = Rectf::new(Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0));
    ctx.renderer.upload_region("main", &area, &[1, 2, 3, 4]).unwrap();
    assert_eq!(ctx.renderer.backend().bound_texture(), other);

    let mut out = vec![0u8; 64];
    ctx.renderer.blit_to_memory("main", &mut out).unwrap();
    assert_eq!(ctx.renderer.backend().bound_texture(), other);
}

#[rstest]
#[case::dummy(Backend::Dummy)]
fn test_upload_to_grabbed_texture_fails(#[case] backend: Backend) {
    let mut ctx = TestContext::new(backend);
    ctx.renderer
        .create_texture_with_size("target", Sizef::new(4.0, 4.0))
        .unwrap();
    ctx.renderer.grab_textures().unwrap();

    let area = Rectf::new(Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0));
    let err = ctx
        .renderer
        .upload_region("target", &area, &[0; 4])
        .unwrap_err();
    assert!(matches!(err, GraphicsError::NotLive(ref name) if name == "target"));
}

#[rstest]
#[case::dummy(Backend::Dummy)]
fn test_renderer_drop_releases_textures(#[case] backend: Backend) {
    let mut ctx = TestContext::new(backend);
    ctx.renderer.create_texture("a").unwrap();
    ctx.renderer
        .create_texture_with_size("b", Sizef::new(2.0, 2.0))
        .unwrap();
    assert_eq!(ctx.renderer.texture_count(), 2);

    ctx.renderer.destroy_all_textures();
    assert_eq!(ctx.renderer.texture_count(), 0);
    assert_eq!(ctx.renderer.backend().live_texture_count(), 0);
}
