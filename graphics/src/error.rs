//! Graphics error types.

use std::fmt;

use redlilium_core::math::{Rectf, Sizef};
use redlilium_core::texture::PixelFormat;
use redlilium_vfs::ResourceError;

/// Errors that can occur in the graphics system.
#[derive(Debug)]
pub enum GraphicsError {
    /// The pixel format is not supported by the current backend.
    UnsupportedFormat(PixelFormat),
    /// An image codec failed to decode a file.
    Load {
        /// Identifier of the codec that failed.
        codec: String,
        /// Name of the file being loaded.
        filename: String,
        /// Codec-provided failure description.
        reason: String,
    },
    /// The resource provider could not supply the file data.
    Resource(ResourceError),
    /// An upload area lies outside the texture.
    Bounds {
        /// Requested destination area.
        area: Rectf,
        /// Current texture size.
        size: Sizef,
    },
    /// The texture has no native handle (uninitialised or grabbed).
    NotLive(String),
    /// An invalid parameter was provided.
    InvalidParameter(String),
    /// A requested feature is not supported.
    FeatureNotSupported(String),
    /// Failed to create a native resource.
    ResourceCreationFailed(String),
    /// A texture with the same name is already registered.
    AlreadyExists(String),
    /// No texture with the given name is registered.
    NotFound(String),
    /// The native graphics API reported an error.
    Backend(String),
}

impl fmt::Display for GraphicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFormat(format) => {
                write!(f, "data was supplied in an unsupported pixel format: {format}")
            }
            Self::Load {
                codec,
                filename,
                reason,
            } => write!(f, "{codec} failed to load image '{filename}': {reason}"),
            Self::Resource(err) => write!(f, "resource error: {err}"),
            Self::Bounds { area, size } => write!(
                f,
                "area ({}, {})-({}, {}) is outside texture of size {}x{}",
                area.left(),
                area.top(),
                area.right(),
                area.bottom(),
                size.width,
                size.height
            ),
            Self::NotLive(name) => write!(f, "texture '{name}' has no native handle"),
            Self::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
            Self::FeatureNotSupported(msg) => write!(f, "feature not supported: {msg}"),
            Self::ResourceCreationFailed(msg) => write!(f, "resource creation failed: {msg}"),
            Self::AlreadyExists(name) => write!(f, "a texture named '{name}' already exists"),
            Self::NotFound(name) => write!(f, "no texture named '{name}' is available"),
            Self::Backend(msg) => write!(f, "backend error: {msg}"),
        }
    }
}

impl std::error::Error for GraphicsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Resource(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ResourceError> for GraphicsError {
    fn from(err: ResourceError) -> Self {
        Self::Resource(err)
    }
}
