use std::fmt;

/// Errors that can occur while loading resources.
#[derive(Debug)]
pub enum ResourceError {
    /// The requested resource was not found by the provider.
    NotFound(String),
    /// An IO error occurred while reading a resource.
    Io(std::io::Error),
    /// The resource name is invalid (empty, contains `..`, or other normalization failure).
    InvalidPath(String),
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::NotFound(path) => write!(f, "resource not found: {path}"),
            ResourceError::Io(err) => write!(f, "IO error: {err}"),
            ResourceError::InvalidPath(reason) => write!(f, "invalid resource name: {reason}"),
        }
    }
}

impl std::error::Error for ResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResourceError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            ResourceError::NotFound(err.to_string())
        } else {
            ResourceError::Io(err)
        }
    }
}
