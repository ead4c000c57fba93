use std::any::TypeId;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, OnceLock, RwLock};

use tracing::debug;

use crate::declared::{Described, TypeRef};
use crate::descriptor::SchemaDescriptor;
use crate::error::SchemaResult;

/// Build-once cache of schema descriptors, keyed by type identity.
///
/// Descriptors are built on first request and then shared as `Arc`s for as
/// long as the cache lives; nothing is ever evicted. Lookups take a read
/// lock. A miss takes the write lock and checks again before building, so
/// concurrent first requests for one type converge on a single instance.
pub struct SchemaCache {
    descriptors: RwLock<HashMap<TypeId, Arc<SchemaDescriptor>>>,
}

static GLOBAL: OnceLock<SchemaCache> = OnceLock::new();

impl SchemaCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self {
            descriptors: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide cache, created on first use.
    pub fn global() -> &'static SchemaCache {
        GLOBAL.get_or_init(SchemaCache::new)
    }

    /// Fetch the descriptor for `T`, building it on first request.
    pub fn get_or_build<T: Described>(&self) -> SchemaResult<Arc<SchemaDescriptor>> {
        self.resolve(&TypeRef::of::<T>())
    }

    /// Fetch the descriptor for a referenced type, building it on first
    /// request together with every nested type it reaches. If any of them
    /// fails to build, the error is returned and the cache is left untouched.
    pub fn resolve(&self, type_ref: &TypeRef) -> SchemaResult<Arc<SchemaDescriptor>> {
        if let Some(found) = self
            .descriptors
            .read()
            .expect("lock poisoned")
            .get(&type_ref.type_id())
        {
            return Ok(Arc::clone(found));
        }

        let mut map = self.descriptors.write().expect("lock poisoned");
        if let Some(found) = map.get(&type_ref.type_id()) {
            debug!(type_name = type_ref.type_name(), "descriptor built by a concurrent request");
            return Ok(Arc::clone(found));
        }

        let root = SchemaDescriptor::build(type_ref.describe())?;

        // Every nested type reachable from the root must build too. Nothing
        // is inserted until the whole closure has been validated.
        let mut visited = HashSet::from([type_ref.type_id()]);
        let mut pending = root.nested_types();
        let mut dependencies = Vec::new();
        while let Some(next) = pending.pop() {
            if map.contains_key(&next.type_id()) || !visited.insert(next.type_id()) {
                continue;
            }
            let descriptor = SchemaDescriptor::build(next.describe())?;
            pending.extend(descriptor.nested_types());
            dependencies.push((next.type_id(), descriptor));
        }

        for (type_id, descriptor) in dependencies {
            debug!(
                type_name = descriptor.type_name(),
                fields = descriptor.fields().len(),
                "nested schema descriptor built"
            );
            map.insert(type_id, Arc::new(descriptor));
        }

        let descriptor = Arc::new(root);
        debug!(
            type_name = descriptor.type_name(),
            fields = descriptor.fields().len(),
            "schema descriptor built"
        );
        map.insert(type_ref.type_id(), Arc::clone(&descriptor));
        Ok(descriptor)
    }

    /// Returns `true` if a descriptor for `T` has been built.
    pub fn contains<T: Described>(&self) -> bool {
        self.descriptors
            .read()
            .expect("lock poisoned")
            .contains_key(&TypeId::of::<T>())
    }

    /// Number of cached descriptors.
    pub fn len(&self) -> usize {
        self.descriptors.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no descriptor has been built yet.
    pub fn is_empty(&self) -> bool {
        self.descriptors.read().expect("lock poisoned").is_empty()
    }
}

impl Default for SchemaCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SchemaCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaCache")
            .field("descriptor_count", &self.len())
            .finish()
    }
}
