//! # RedLilium Widgets
//!
//! Widget state exposed as named, string-valued properties.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`Property`] / [`PropertySet`] - named accessors converting widget fields to and from strings
//! - [`PropertySheet`] - a serializable snapshot of property values (RON with `serialize-ron`)
//! - [`helper`] - the string forms of booleans, floats and image references
//! - [`RenderableImage`] - an image reference with placement formatting
//! - [`Button`] - a push button with custom imagery
//!
//! ## Example
//!
//! ```ignore
//! use redlilium_widgets::Button;
//!
//! let properties = Button::properties();
//! let mut button = Button::new();
//! properties.set_property(&mut button, "NormalImage", "set:TaharezLook image:ButtonNormal")?;
//! properties.set_property(&mut button, "TextXOffset", "4.5")?;
//! assert_eq!(properties.get_property(&button, "UseStandardImagery")?, "True");
//! ```

pub mod button;
pub mod image;
pub mod property;

pub use button::Button;
pub use image::{HorzFormatting, ImageRef, RenderableImage, VertFormatting};
pub use property::{helper, Property, PropertyError, PropertySet, PropertySheet};

/// Widgets library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the widgets subsystem.
pub fn init() {
    log::info!("RedLilium Widgets v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
