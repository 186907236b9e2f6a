//! Push button with optional custom imagery.

use crate::image::RenderableImage;
use crate::property::{helper, Property, PropertyError, PropertySet};

/// A push button.
///
/// By default the button is drawn with the skin's standard imagery. Custom
/// normal, pushed and hover images are used once standard imagery is
/// disabled.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    normal: Option<RenderableImage>,
    pushed: Option<RenderableImage>,
    hover: Option<RenderableImage>,
    standard_imagery: bool,
    text_x_offset: f32,
}

impl Default for Button {
    fn default() -> Self {
        Self::new()
    }
}

impl Button {
    pub fn new() -> Self {
        Self {
            normal: None,
            pushed: None,
            hover: None,
            standard_imagery: true,
            text_x_offset: 0.0,
        }
    }

    /// The property set shared by all buttons.
    pub fn properties() -> PropertySet<Button> {
        let mut set = PropertySet::new();
        let registered = [
            set.add(NormalImage),
            set.add(PushedImage),
            set.add(HoverImage),
            set.add(UseStandardImagery),
            set.add(TextXOffset),
        ];
        for result in registered {
            if let Err(err) = &result {
                log::error!("Button: {err}");
            }
            debug_assert!(result.is_ok(), "button property registered twice");
        }
        set
    }

    pub fn normal_image(&self) -> Option<&RenderableImage> {
        self.normal.as_ref()
    }

    pub fn set_normal_image(&mut self, image: Option<RenderableImage>) {
        self.normal = image;
    }

    pub fn pushed_image(&self) -> Option<&RenderableImage> {
        self.pushed.as_ref()
    }

    pub fn set_pushed_image(&mut self, image: Option<RenderableImage>) {
        self.pushed = image;
    }

    pub fn hover_image(&self) -> Option<&RenderableImage> {
        self.hover.as_ref()
    }

    pub fn set_hover_image(&mut self, image: Option<RenderableImage>) {
        self.hover = image;
    }

    pub fn is_standard_imagery_enabled(&self) -> bool {
        self.standard_imagery
    }

    pub fn set_standard_imagery_enabled(&mut self, enabled: bool) {
        self.standard_imagery = enabled;
    }

    /// Horizontal offset applied to the caption, in pixels.
    pub fn text_x_offset(&self) -> f32 {
        self.text_x_offset
    }

    pub fn set_text_x_offset(&mut self, offset: f32) {
        self.text_x_offset = offset;
    }
}

// ============================================================================
// Properties
// ============================================================================

macro_rules! image_property {
    ($name:ident, $label:literal, $getter:ident, $setter:ident) => {
        #[doc = concat!("The `", stringify!($name), "` property of a [`Button`].")]
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl Property<Button> for $name {
            fn name(&self) -> &str {
                stringify!($name)
            }

            fn help(&self) -> &str {
                concat!(
                    "Property to get/set the ",
                    $label,
                    " image for the button. Value should be \"set:[imageset name] image:[image name]\"."
                )
            }

            fn default_value(&self) -> &str {
                ""
            }

            fn get(&self, widget: &Button) -> String {
                helper::image_to_string(widget.$getter().and_then(RenderableImage::image))
            }

            fn set(&self, widget: &mut Button, value: &str) -> Result<(), PropertyError> {
                let image = helper::string_to_image(value).map_err(|reason| {
                    PropertyError::InvalidValue {
                        property: self.name().to_string(),
                        value: value.to_string(),
                        reason,
                    }
                })?;
                widget.$setter(image.map(|image| RenderableImage::stretched(Some(image))));
                Ok(())
            }
        }
    };
}

image_property!(NormalImage, "normal", normal_image, set_normal_image);
image_property!(PushedImage, "pushed", pushed_image, set_pushed_image);
image_property!(HoverImage, "hover", hover_image, set_hover_image);

/// Whether the button draws the skin's standard imagery.
#[derive(Debug, Clone, Copy, Default)]
pub struct UseStandardImagery;

impl Property<Button> for UseStandardImagery {
    fn name(&self) -> &str {
        "UseStandardImagery"
    }

    fn help(&self) -> &str {
        "Property to get/set whether the button uses the standard imagery. Value is either \"True\" or \"False\"."
    }

    fn default_value(&self) -> &str {
        "True"
    }

    fn get(&self, widget: &Button) -> String {
        helper::bool_to_string(widget.is_standard_imagery_enabled()).to_string()
    }

    fn set(&self, widget: &mut Button, value: &str) -> Result<(), PropertyError> {
        widget.set_standard_imagery_enabled(helper::string_to_bool(value));
        Ok(())
    }
}

/// Horizontal caption offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextXOffset;

impl Property<Button> for TextXOffset {
    fn name(&self) -> &str {
        "TextXOffset"
    }

    fn help(&self) -> &str {
        "Property to get/set the horizontal offset of the button text. Value is a float."
    }

    fn default_value(&self) -> &str {
        "0"
    }

    fn get(&self, widget: &Button) -> String {
        helper::float_to_string(widget.text_x_offset())
    }

    fn set(&self, widget: &mut Button, value: &str) -> Result<(), PropertyError> {
        widget.set_text_x_offset(helper::string_to_float(value));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{HorzFormatting, ImageRef, VertFormatting};

    #[test]
    fn property_names_in_order() {
        let names: Vec<_> = Button::properties().names().map(str::to_string).collect();
        assert_eq!(
            names,
            [
                "NormalImage",
                "PushedImage",
                "HoverImage",
                "UseStandardImagery",
                "TextXOffset"
            ]
        );
    }

    #[test]
    fn second_registration_is_rejected() {
        let mut set = Button::properties();
        assert_eq!(set.len(), 5);

        let err = set.add(NormalImage).unwrap_err();
        assert_eq!(err, PropertyError::DuplicateProperty("NormalImage".into()));
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn image_property_builds_stretched_image() {
        let mut button = Button::new();
        PushedImage
            .set(&mut button, "set:TaharezLook image:ButtonPushed")
            .unwrap();

        let image = button.pushed_image().unwrap();
        assert_eq!(image.image(), Some(&ImageRef::new("TaharezLook", "ButtonPushed")));
        assert_eq!(image.horz_formatting(), HorzFormatting::Stretched);
        assert_eq!(image.vert_formatting(), VertFormatting::Stretched);
        assert!(button.normal_image().is_none());
    }

    #[test]
    fn empty_value_clears_image() {
        let mut button = Button::new();
        HoverImage.set(&mut button, "set:A image:B").unwrap();
        HoverImage.set(&mut button, "").unwrap();
        assert!(button.hover_image().is_none());
        assert!(HoverImage.is_default(&button));
    }

    #[test]
    fn malformed_image_is_rejected() {
        let mut button = Button::new();
        let err = NormalImage.set(&mut button, "ButtonNormal").unwrap_err();
        assert!(matches!(err, PropertyError::InvalidValue { ref property, .. } if property == "NormalImage"));
        assert!(button.normal_image().is_none());
    }

    #[test]
    fn defaults_match_fresh_button() {
        let button = Button::new();
        let set = Button::properties();
        for name in set.names() {
            assert!(set.is_property_default(&button, name).unwrap(), "{name}");
        }
    }
}
