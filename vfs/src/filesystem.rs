use std::path::PathBuf;

use crate::error::ResourceError;
use crate::groups::ResourceGroups;
use crate::provider::{RawData, ResourceProvider};

/// File system resource provider.
///
/// The root path is joined with the group directory and the resource name
/// to form the actual filesystem path. Reads are blocking (`std::fs`).
///
/// Escaping the root is prevented by name normalization, which rejects
/// `..` segments before they reach the filesystem.
///
/// # Example
///
/// ```ignore
/// let provider = FileSystemProvider::new("./datafiles")
///     .with_group_directory("imagesets", "imagesets");
///
/// // Reads ./datafiles/imagesets/TaharezLook.png
/// let data = provider.load_raw_data("TaharezLook.png", "imagesets")?;
/// ```
pub struct FileSystemProvider {
    root: PathBuf,
    groups: ResourceGroups,
}

impl FileSystemProvider {
    /// Create a provider rooted at the given directory.
    ///
    /// The directory does not need to exist yet; it is checked
    /// at read time.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            groups: ResourceGroups::new(),
        }
    }

    /// Register a group directory (builder form).
    pub fn with_group_directory(
        mut self,
        group: impl Into<String>,
        directory: impl Into<String>,
    ) -> Self {
        self.groups.set_directory(group, directory);
        self
    }

    pub fn groups_mut(&mut self) -> &mut ResourceGroups {
        &mut self.groups
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

impl ResourceProvider for FileSystemProvider {
    fn load_raw_data(
        &self,
        filename: &str,
        resource_group: &str,
    ) -> Result<RawData, ResourceError> {
        let relative = self.groups.resolve(filename, resource_group)?;
        let full_path = self.root.join(&relative);
        log::trace!("FileSystemProvider: reading {}", full_path.display());
        let bytes = std::fs::read(&full_path)?;
        Ok(RawData::new(relative, bytes))
    }

    fn groups(&self) -> &ResourceGroups {
        &self.groups
    }
}
