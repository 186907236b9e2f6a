use crate::ResourceError;

/// Normalize a resource name.
///
/// - Replaces backslashes with forward slashes
/// - Collapses redundant separators (`a///b` → `a/b`)
/// - Drops `.` segments
/// - Rejects `..` segments (escaping the provider root is not allowed)
/// - Strips leading and trailing slashes
///
/// Returns `Err(ResourceError::InvalidPath)` if the name is empty or contains `..`.
pub fn normalize(path: &str) -> Result<String, ResourceError> {
    let segments = segments(path)?;
    if segments.is_empty() {
        return Err(ResourceError::InvalidPath("empty name".into()));
    }
    Ok(segments.join("/"))
}

/// Join a group directory and a resource name into one normalized path.
///
/// The directory may be empty, in which case only the name is used.
pub fn join(directory: &str, name: &str) -> Result<String, ResourceError> {
    let mut all = segments(directory)?;
    all.extend(segments(name)?);
    if all.is_empty() {
        return Err(ResourceError::InvalidPath("empty name".into()));
    }
    Ok(all.join("/"))
}

fn segments(path: &str) -> Result<Vec<String>, ResourceError> {
    let replaced = path.replace('\\', "/");
    let mut segments = Vec::new();

    for segment in replaced.split('/') {
        if segment.is_empty() || segment == "." {
            continue;
        }
        if segment == ".." {
            return Err(ResourceError::InvalidPath(
                "path traversal (..) not allowed".into(),
            ));
        }
        segments.push(segment.to_owned());
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_name() {
        assert_eq!(
            normalize("imagesets/TaharezLook.png").unwrap(),
            "imagesets/TaharezLook.png"
        );
    }

    #[test]
    fn leading_and_trailing_slashes() {
        assert_eq!(normalize("/imagesets/").unwrap(), "imagesets");
    }

    #[test]
    fn redundant_slashes_and_dots() {
        assert_eq!(
            normalize("imagesets//./button.png").unwrap(),
            "imagesets/button.png"
        );
    }

    #[test]
    fn backslashes() {
        assert_eq!(
            normalize("imagesets\\button.png").unwrap(),
            "imagesets/button.png"
        );
    }

    #[test]
    fn reject_dotdot() {
        assert!(normalize("imagesets/../secret.txt").is_err());
    }

    #[test]
    fn reject_empty() {
        assert!(normalize("").is_err());
        assert!(normalize("///").is_err());
        assert!(normalize("././.").is_err());
    }

    #[test]
    fn join_with_directory() {
        assert_eq!(join("looknfeel/", "/Button.xml").unwrap(), "looknfeel/Button.xml");
        assert_eq!(join("", "Button.xml").unwrap(), "Button.xml");
    }

    #[test]
    fn join_rejects_traversal_in_either_part() {
        assert!(join("../outside", "a.png").is_err());
        assert!(join("images", "../a.png").is_err());
    }
}
