//! Integer texel geometry shared by textures and backends.
//!
//! Textures are sized in floats ([`Sizef`](redlilium_core::math::Sizef));
//! backends address texels with the integer types defined here.

mod common;

pub use common::{Extent2d, TexelRect};
