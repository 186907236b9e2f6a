//! String forms of common property values.

use crate::image::ImageRef;

/// `"True"` or `"False"`.
pub fn bool_to_string(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// `"true"` in any case and `"1"` are true; everything else is false.
pub fn string_to_bool(value: &str) -> bool {
    let value = value.trim();
    value.eq_ignore_ascii_case("true") || value == "1"
}

pub fn float_to_string(value: f32) -> String {
    value.to_string()
}

/// Parse the leading number of `value`, ignoring trailing text.
///
/// Input with no leading number yields `0.0`.
pub fn string_to_float(value: &str) -> f32 {
    let value = value.trim_start();
    (1..=value.len())
        .rev()
        .filter(|&end| value.is_char_boundary(end))
        .find_map(|end| value[..end].parse::<f32>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// `"set:<imageset> image:<image>"`, or the empty string for no image.
pub fn image_to_string(image: Option<&ImageRef>) -> String {
    image.map(ToString::to_string).unwrap_or_default()
}

/// Parse `"set:<imageset> image:<image>"`.
///
/// Blank input means no image. Anything else that doesn't match the
/// pattern is rejected with a description of what is wrong.
pub fn string_to_image(value: &str) -> Result<Option<ImageRef>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    let rest = value
        .strip_prefix("set:")
        .ok_or_else(|| "expected 'set:<imageset> image:<image>'".to_string())?;
    let (imageset, rest) = rest
        .split_once(char::is_whitespace)
        .ok_or_else(|| "missing 'image:' part".to_string())?;
    let image = rest
        .trim_start()
        .strip_prefix("image:")
        .ok_or_else(|| "missing 'image:' part".to_string())?;

    if imageset.is_empty() || image.is_empty() || image.contains(char::is_whitespace) {
        return Err("imageset and image names must be single non-empty words".to_string());
    }
    Ok(Some(ImageRef::new(imageset, image)))
}
