use dynamap_schema::MAX_DEPTH;
use serde::{Deserialize, Serialize};

use crate::error::{MapperError, MapperResult};

/// Configuration for an [`ItemMapper`](crate::ItemMapper).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Omit null fields from encoded items instead of writing null
    /// attributes.
    pub ignore_nulls: bool,
    /// Maximum nesting depth of lists, maps and nested beans. Top-level
    /// fields sit at depth 1.
    pub max_depth: usize,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            ignore_nulls: false,
            max_depth: MAX_DEPTH,
        }
    }
}

impl MapperConfig {
    /// Default configuration, but null fields are left out of items.
    pub fn skip_nulls() -> Self {
        Self {
            ignore_nulls: true,
            ..Default::default()
        }
    }

    /// Check the configuration, returning it unchanged when valid.
    pub fn validated(self) -> MapperResult<Self> {
        if self.max_depth == 0 {
            return Err(MapperError::Config("max_depth must be at least 1".into()));
        }
        if self.max_depth > MAX_DEPTH {
            return Err(MapperError::Config(format!(
                "max_depth {} exceeds the limit of {MAX_DEPTH}",
                self.max_depth
            )));
        }
        Ok(self)
    }
}
