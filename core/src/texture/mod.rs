//! Pixel formats shared between CPU-side decoding and GPU-side storage.
//!
//! Every [`PixelFormat`] maps to a [`FormatDescription`] that states how
//! texels are grouped into blocks, which is all that is needed to size
//! buffers for raw and block-compressed data alike.

mod format;

pub use format::{FormatDescription, PixelFormat};
