use std::sync::Arc;

use dynamap_schema::{Described, SchemaCache, SchemaDescriptor};
use dynamap_types::{item_from_sdk, item_to_sdk, Item, SdkItem};
use tracing::{debug, trace};

use crate::adapter::BeanAdapter;
use crate::bean::Bean;
use crate::codec::ValueCodec;
use crate::config::MapperConfig;
use crate::error::{MapperError, MapperResult};
use crate::key::Key;

/// Entry point for mapping beans to and from items.
///
/// Holds a reference to the schema cache and a validated configuration;
/// cheap to copy and safe to share between threads.
#[derive(Clone, Debug)]
pub struct ItemMapper<'a> {
    cache: &'a SchemaCache,
    config: MapperConfig,
}

impl ItemMapper<'static> {
    /// A mapper over the process-wide schema cache with default settings.
    pub fn new() -> Self {
        Self::with_cache(SchemaCache::global())
    }
}

impl Default for ItemMapper<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ItemMapper<'a> {
    /// A mapper over an explicit schema cache with default settings.
    pub fn with_cache(cache: &'a SchemaCache) -> Self {
        Self {
            cache,
            config: MapperConfig::default(),
        }
    }

    /// Replace the configuration after validating it.
    pub fn with_config(mut self, config: MapperConfig) -> MapperResult<Self> {
        self.config = config.validated()?;
        debug!(
            ignore_nulls = self.config.ignore_nulls,
            max_depth = self.config.max_depth,
            "mapper configured"
        );
        Ok(self)
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    pub fn cache(&self) -> &'a SchemaCache {
        self.cache
    }

    /// The descriptor for `T`, built on first use.
    pub fn schema<T: Described>(&self) -> MapperResult<Arc<SchemaDescriptor>> {
        Ok(self.cache.get_or_build::<T>()?)
    }

    /// Encode a bean as an item.
    pub fn to_item<T: Bean>(&self, bean: &T) -> MapperResult<Item> {
        let schema = self.schema::<T>()?;
        self.adapter().to_attributes(bean, &schema)
    }

    /// Construct a new bean from an item.
    pub fn from_item<T: Bean>(&self, item: &Item) -> MapperResult<T> {
        let schema = self.schema::<T>()?;
        self.adapter().from_attributes(item, &schema)
    }

    /// Encode a bean in the DynamoDB client's item representation.
    pub fn to_sdk_item<T: Bean>(&self, bean: &T) -> MapperResult<SdkItem> {
        Ok(item_to_sdk(self.to_item(bean)?))
    }

    /// Construct a new bean from an item returned by the DynamoDB client.
    pub fn from_sdk_item<T: Bean>(&self, item: SdkItem) -> MapperResult<T> {
        self.from_item(&item_from_sdk(item)?)
    }

    /// The primary key of a bean.
    ///
    /// Only the key fields are read and encoded. A null key value is a
    /// [`MapperError::KeyMismatch`].
    pub fn key_of<T: Bean>(&self, bean: &T) -> MapperResult<Key> {
        let schema = self.schema::<T>()?;
        let codec = self.codec();
        let mut item = Item::new();
        for field in schema.key_fields() {
            let value = bean.read_field(field.source_name)?;
            if value.is_null() {
                return Err(MapperError::key_mismatch(
                    schema.type_name(),
                    format!("key field '{}' is null", field.source_name),
                ));
            }
            item.insert(
                field.attribute_name.to_string(),
                codec.encode(&value, &field.type_class)?,
            );
        }
        let key = Key::from_item(&item, &schema)?;
        trace!(type_name = schema.type_name(), key = %key, "key extracted");
        Ok(key)
    }

    /// The key of `T` as an item holding only the key attributes.
    pub fn key_item<T: Described>(&self, key: &Key) -> MapperResult<Item> {
        let schema = self.schema::<T>()?;
        key.to_item(&schema)
    }

    /// The key of an already encoded item of type `T`.
    pub fn key_from_item<T: Described>(&self, item: &Item) -> MapperResult<Key> {
        let schema = self.schema::<T>()?;
        Key::from_item(item, &schema)
    }

    fn codec(&self) -> ValueCodec<'a> {
        ValueCodec::new(self.cache)
            .with_max_depth(self.config.max_depth)
            .with_ignore_nulls(self.config.ignore_nulls)
    }

    fn adapter(&self) -> BeanAdapter<'a> {
        BeanAdapter::new(self.codec())
    }
}
