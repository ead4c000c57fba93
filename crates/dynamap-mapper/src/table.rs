use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::RwLock;

use dynamap_types::Item;
use tracing::trace;

use crate::bean::Bean;
use crate::error::MapperResult;
use crate::key::Key;
use crate::mapper::ItemMapper;

/// In-memory, HashMap-based table of items of one bean type.
///
/// Intended for tests and embedding. Items are stored in their encoded form
/// behind a `RwLock` and cloned on read/write, so a `put` followed by a `get`
/// exercises the full encode/decode path.
pub struct InMemoryTable<'a, T> {
    name: String,
    mapper: ItemMapper<'a>,
    items: RwLock<HashMap<Key, Item>>,
    _bean: PhantomData<fn() -> T>,
}

impl<'a, T: Bean> InMemoryTable<'a, T> {
    /// Create a new empty table.
    pub fn new(name: impl Into<String>, mapper: ItemMapper<'a>) -> Self {
        Self {
            name: name.into(),
            mapper,
            items: RwLock::new(HashMap::new()),
            _bean: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mapper(&self) -> &ItemMapper<'a> {
        &self.mapper
    }

    /// Encode and store a bean, replacing any item with the same key.
    /// Returns the key it was stored under.
    pub fn put_item(&self, bean: &T) -> MapperResult<Key> {
        let item = self.mapper.to_item(bean)?;
        let key = self.mapper.key_of(bean)?;
        trace!(table = %self.name, key = %key, "put item");
        self.items
            .write()
            .expect("lock poisoned")
            .insert(key.clone(), item);
        Ok(key)
    }

    /// Fetch and decode the item stored under `key`.
    pub fn get_item(&self, key: &Key) -> MapperResult<Option<T>> {
        match self.get_raw(key)? {
            Some(item) => self.mapper.from_item(&item).map(Some),
            None => Ok(None),
        }
    }

    /// Remove the item stored under `key`, returning the decoded bean.
    pub fn delete_item(&self, key: &Key) -> MapperResult<Option<T>> {
        self.mapper.key_item::<T>(key)?;
        let removed = self.items.write().expect("lock poisoned").remove(key);
        trace!(table = %self.name, key = %key, found = removed.is_some(), "delete item");
        removed.map(|item| self.mapper.from_item(&item)).transpose()
    }

    /// Store an already encoded item. Its key attributes are validated
    /// against the schema; everything else is stored as given.
    pub fn put_raw(&self, item: Item) -> MapperResult<Key> {
        let key = self.mapper.key_from_item::<T>(&item)?;
        self.items
            .write()
            .expect("lock poisoned")
            .insert(key.clone(), item);
        Ok(key)
    }

    /// The encoded item stored under `key`.
    pub fn get_raw(&self, key: &Key) -> MapperResult<Option<Item>> {
        self.mapper.key_item::<T>(key)?;
        let map = self.items.read().expect("lock poisoned");
        Ok(map.get(key).cloned())
    }

    /// Number of items currently stored.
    pub fn len(&self) -> usize {
        self.items.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.items.read().expect("lock poisoned").is_empty()
    }

    /// Remove all items from the table.
    pub fn clear(&self) {
        self.items.write().expect("lock poisoned").clear();
    }

    /// All keys in the table, in no particular order.
    pub fn keys(&self) -> Vec<Key> {
        self.items
            .read()
            .expect("lock poisoned")
            .keys()
            .cloned()
            .collect()
    }

    /// Decode every stored item.
    pub fn items(&self) -> MapperResult<Vec<T>> {
        let map = self.items.read().expect("lock poisoned");
        map.values().map(|item| self.mapper.from_item(item)).collect()
    }
}

impl<T> std::fmt::Debug for InMemoryTable<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.items.read().expect("lock poisoned").len();
        f.debug_struct("InMemoryTable")
            .field("name", &self.name)
            .field("item_count", &count)
            .finish()
    }
}
