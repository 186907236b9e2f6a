//! Image references and placement formatting.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reference to a named image inside a named imageset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRef {
    pub imageset: String,
    pub image: String,
}

impl ImageRef {
    pub fn new(imageset: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            imageset: imageset.into(),
            image: image.into(),
        }
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "set:{} image:{}", self.imageset, self.image)
    }
}

/// Horizontal placement of an image within its area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HorzFormatting {
    #[default]
    LeftAligned,
    RightAligned,
    Centred,
    Stretched,
    Tiled,
}

/// Vertical placement of an image within its area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VertFormatting {
    #[default]
    TopAligned,
    BottomAligned,
    Centred,
    Stretched,
    Tiled,
}

/// An image plus how it is laid out when drawn.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderableImage {
    image: Option<ImageRef>,
    horz: HorzFormatting,
    vert: VertFormatting,
}

impl RenderableImage {
    pub fn new(image: Option<ImageRef>) -> Self {
        Self {
            image,
            ..Self::default()
        }
    }

    /// Image stretched to fill its area on both axes.
    pub fn stretched(image: Option<ImageRef>) -> Self {
        Self::new(image)
            .with_horz_formatting(HorzFormatting::Stretched)
            .with_vert_formatting(VertFormatting::Stretched)
    }

    pub fn with_horz_formatting(mut self, formatting: HorzFormatting) -> Self {
        self.horz = formatting;
        self
    }

    pub fn with_vert_formatting(mut self, formatting: VertFormatting) -> Self {
        self.vert = formatting;
        self
    }

    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    pub fn set_image(&mut self, image: Option<ImageRef>) {
        self.image = image;
    }

    pub fn horz_formatting(&self) -> HorzFormatting {
        self.horz
    }

    pub fn set_horz_formatting(&mut self, formatting: HorzFormatting) {
        self.horz = formatting;
    }

    pub fn vert_formatting(&self) -> VertFormatting {
        self.vert
    }

    pub fn set_vert_formatting(&mut self, formatting: VertFormatting) {
        self.vert = formatting;
    }
}
