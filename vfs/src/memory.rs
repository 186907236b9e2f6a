use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::ResourceError;
use crate::groups::ResourceGroups;
use crate::path;
use crate::provider::{RawData, ResourceProvider};

/// In-memory resource provider for tests and embedded assets.
///
/// Clones share the same storage, so files can be inserted after the
/// provider has been handed to a renderer. The provider also counts loads
/// that have not yet been unloaded.
///
/// # Example
///
/// ```ignore
/// let mem = MemoryProvider::new();
/// mem.insert("imagesets/button.png", png_bytes);
/// let data = ScopedRawData::load(&mem, "imagesets/button.png", "")?;
/// ```
#[derive(Clone)]
pub struct MemoryProvider {
    files: Arc<RwLock<HashMap<String, Vec<u8>>>>,
    outstanding: Arc<AtomicUsize>,
    groups: ResourceGroups,
}

impl MemoryProvider {
    /// Create an empty in-memory provider.
    pub fn new() -> Self {
        Self {
            files: Arc::new(RwLock::new(HashMap::new())),
            outstanding: Arc::new(AtomicUsize::new(0)),
            groups: ResourceGroups::new(),
        }
    }

    /// Insert a resource at the given path.
    ///
    /// Overwrites any existing resource at the same path. Names that fail
    /// normalization are stored verbatim and will never resolve.
    pub fn insert(&self, path: impl Into<String>, data: Vec<u8>) {
        let path = path.into();
        let key = path::normalize(&path).unwrap_or(path);
        self.files.write().insert(key, data);
    }

    /// Remove a resource, returning its data if it existed.
    pub fn remove(&self, path: &str) -> Option<Vec<u8>> {
        let key = path::normalize(path).ok()?;
        self.files.write().remove(&key)
    }

    /// Number of loads not yet matched by an unload.
    pub fn outstanding_loads(&self) -> usize {
        self.outstanding.load(Ordering::Acquire)
    }

    pub fn groups_mut(&mut self) -> &mut ResourceGroups {
        &mut self.groups
    }
}

impl Default for MemoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceProvider for MemoryProvider {
    fn load_raw_data(
        &self,
        filename: &str,
        resource_group: &str,
    ) -> Result<RawData, ResourceError> {
        let key = self.groups.resolve(filename, resource_group)?;
        let bytes = self
            .files
            .read()
            .get(&key)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(key.clone()))?;
        self.outstanding.fetch_add(1, Ordering::AcqRel);
        Ok(RawData::new(key, bytes))
    }

    fn unload_raw_data(&self, data: &mut RawData) {
        // Saturate so a stray double unload cannot wrap the counter.
        let _ = self
            .outstanding
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1));
        data.release();
    }

    fn groups(&self) -> &ResourceGroups {
        &self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScopedRawData;

    #[test]
    fn load_existing() {
        let mem = MemoryProvider::new();
        mem.insert("a/b.png", b"png".to_vec());
        let data = mem.load_raw_data("a/b.png", "").unwrap();
        assert_eq!(data.bytes(), b"png");
        assert_eq!(data.name(), "a/b.png");
    }

    #[test]
    fn load_missing() {
        let mem = MemoryProvider::new();
        assert!(matches!(
            mem.load_raw_data("nope.png", ""),
            Err(ResourceError::NotFound(_))
        ));
        assert_eq!(mem.outstanding_loads(), 0);
    }

    #[test]
    fn load_through_group() {
        let mut mem = MemoryProvider::new();
        mem.groups_mut().set_directory("imagesets", "datafiles/imagesets");
        mem.insert("datafiles/imagesets/x.tga", vec![1, 2, 3]);
        let data = mem.load_raw_data("x.tga", "imagesets").unwrap();
        assert_eq!(data.len(), 3);
    }

    #[test]
    fn scoped_data_unloads_on_drop() {
        let mem = MemoryProvider::new();
        mem.insert("f.bin", vec![0; 16]);
        {
            let scoped = ScopedRawData::load(&mem, "f.bin", "").unwrap();
            assert_eq!(scoped.len(), 16);
            assert_eq!(mem.outstanding_loads(), 1);
        }
        assert_eq!(mem.outstanding_loads(), 0);
    }

    #[test]
    fn unload_releases_bytes() {
        let mem = MemoryProvider::new();
        mem.insert("f.bin", vec![7; 4]);
        let mut data = mem.load_raw_data("f.bin", "").unwrap();
        mem.unload_raw_data(&mut data);
        assert!(data.is_empty());
        mem.unload_raw_data(&mut data);
        assert_eq!(mem.outstanding_loads(), 0);
    }

    #[test]
    fn insert_normalizes_and_remove() {
        let mem = MemoryProvider::new();
        mem.insert("/dir//file.txt", b"x".to_vec());
        assert!(mem.load_raw_data("dir/file.txt", "").is_ok());
        assert_eq!(mem.remove("dir/file.txt"), Some(b"x".to_vec()));
        assert!(mem.remove("dir/file.txt").is_none());
    }

    #[test]
    fn clones_share_storage() {
        let mem = MemoryProvider::new();
        let other = mem.clone();
        other.insert("shared.bin", vec![9]);
        assert!(mem.load_raw_data("shared.bin", "").is_ok());
    }
}
