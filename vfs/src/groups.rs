use std::collections::HashMap;

use crate::error::ResourceError;
use crate::path;

/// Mapping from resource group names to directories.
///
/// An empty group hint resolves through the default group. Groups with no
/// registered directory resolve names relative to the provider root.
#[derive(Debug, Clone, Default)]
pub struct ResourceGroups {
    directories: HashMap<String, String>,
    default_group: String,
}

impl ResourceGroups {
    /// Create an empty mapping whose default group is `""`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory for a resource group, replacing any previous one.
    pub fn set_directory(&mut self, group: impl Into<String>, directory: impl Into<String>) {
        let group = group.into();
        let directory = directory.into();
        log::debug!("ResourceGroups: '{group}' -> '{directory}'");
        self.directories.insert(group, directory);
    }

    /// Directory registered for a group, if any.
    pub fn directory(&self, group: &str) -> Option<&str> {
        self.directories.get(group).map(String::as_str)
    }

    /// Forget the directory registered for a group.
    pub fn clear_directory(&mut self, group: &str) {
        self.directories.remove(group);
    }

    /// Group used when a lookup passes an empty group hint.
    pub fn default_group(&self) -> &str {
        &self.default_group
    }

    pub fn set_default_group(&mut self, group: impl Into<String>) {
        self.default_group = group.into();
    }

    /// Resolve a resource name within a group to a normalized path.
    pub fn resolve(&self, name: &str, group: &str) -> Result<String, ResourceError> {
        let group = if group.is_empty() {
            self.default_group.as_str()
        } else {
            group
        };

        match self.directory(group) {
            Some(dir) => path::join(dir, name),
            None => path::normalize(name),
        }
    }
}
