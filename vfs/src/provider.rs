use std::ops::Deref;

use crate::error::ResourceError;
use crate::groups::ResourceGroups;

/// Raw bytes of a loaded resource.
///
/// The data belongs to the provider that produced it until it is handed
/// back through [`ResourceProvider::unload_raw_data`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawData {
    name: String,
    bytes: Vec<u8>,
}

impl RawData {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Resolved name the data was loaded from.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Drop the held bytes.
    pub fn release(&mut self) {
        self.bytes = Vec::new();
    }
}

/// Trait for resource loading backends.
///
/// Providers map a resource name plus a group hint to bytes. Every
/// successful [`load_raw_data`](Self::load_raw_data) should be paired with an
/// [`unload_raw_data`](Self::unload_raw_data); [`ScopedRawData`] does the
/// pairing automatically.
pub trait ResourceProvider: Send + Sync {
    /// Load the full contents of a resource.
    ///
    /// An empty `resource_group` selects the default group.
    fn load_raw_data(&self, filename: &str, resource_group: &str)
        -> Result<RawData, ResourceError>;

    /// Return loaded data to the provider.
    fn unload_raw_data(&self, data: &mut RawData) {
        data.release();
    }

    /// Group directory mapping used by this provider.
    fn groups(&self) -> &ResourceGroups;

    /// Group used when a lookup passes an empty group hint.
    fn default_resource_group(&self) -> &str {
        self.groups().default_group()
    }
}

/// Loaded resource data that is unloaded when dropped.
pub struct ScopedRawData<'a> {
    provider: &'a dyn ResourceProvider,
    data: RawData,
}

impl<'a> ScopedRawData<'a> {
    /// Load a resource, pairing it with an unload at end of scope.
    pub fn load(
        provider: &'a dyn ResourceProvider,
        filename: &str,
        resource_group: &str,
    ) -> Result<Self, ResourceError> {
        let data = provider.load_raw_data(filename, resource_group)?;
        log::trace!(
            "ScopedRawData: loaded '{}' ({} bytes)",
            data.name(),
            data.len()
        );
        Ok(Self { provider, data })
    }

    pub fn data(&self) -> &RawData {
        &self.data
    }
}

impl Deref for ScopedRawData<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.data.bytes()
    }
}

impl Drop for ScopedRawData<'_> {
    fn drop(&mut self) {
        log::trace!("ScopedRawData: unloading '{}'", self.data.name());
        self.provider.unload_raw_data(&mut self.data);
    }
}

impl std::fmt::Debug for ScopedRawData<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedRawData")
            .field("name", &self.data.name())
            .field("len", &self.data.len())
            .finish_non_exhaustive()
    }
}
