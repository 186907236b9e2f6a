//! Serializable snapshots of property values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[cfg(feature = "serialize-ron")]
use super::PropertyError;

/// Property name to string value map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySheet {
    #[serde(default)]
    properties: BTreeMap<String, String>,
}

impl PropertySheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.properties.remove(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Entries sorted by property name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Encode as pretty-printed RON.
    #[cfg(feature = "serialize-ron")]
    pub fn to_ron(&self) -> Result<String, PropertyError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| PropertyError::Sheet(e.to_string()))
    }

    /// Decode from RON.
    #[cfg(feature = "serialize-ron")]
    pub fn from_ron(text: &str) -> Result<Self, PropertyError> {
        ron::from_str(text).map_err(|e| PropertyError::Sheet(e.to_string()))
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for PropertySheet {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut sheet = Self::new();
        for (name, value) in iter {
            sheet.insert(name, value);
        }
        sheet
    }
}
