//! Texture resources.
//!
//! This module contains the texture types managed by the [`Renderer`]:
//! - [`TextureResource`] - named texture with a grab/restore lifecycle
//! - [`TextureState`] - which of native handle or host backup a texture holds
//! - [`TextureBackup`] - host copy of texture content while grabbed
//!
//! Resources don't hold on to the backend. Every operation that touches
//! native storage takes it as a parameter.
//!
//! [`Renderer`]: crate::Renderer

mod texture;

pub use texture::{TextureBackup, TextureResource, TextureState};
