use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::number::Number;
use crate::wire::WireValue;

/// One full record in the store: attribute name to value.
pub type Item = BTreeMap<String, AttributeValue>;

/// A store-level attribute value.
///
/// Mirrors the structural contract of DynamoDB-style document stores:
/// scalars (string, number, binary, boolean, null), documents (list, map)
/// and homogeneous scalar sets. Serializes to the tagged wire form
/// (`{"S":"abc"}`, `{"N":"5"}`, ...).
///
/// Equality is structural: set variants compare element by element in
/// order, and numbers compare by their text, so `N("5")` and `N("5.0")`
/// differ. Use [`AttributeValue::normalized`] before comparing values that
/// did not come from the same encoder.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "WireValue", try_from = "WireValue")]
pub enum AttributeValue {
    Null,
    S(String),
    N(Number),
    Bool(bool),
    B(Vec<u8>),
    L(Vec<AttributeValue>),
    M(Item),
    Ss(Vec<String>),
    Ns(Vec<Number>),
    Bs(Vec<Vec<u8>>),
}

impl AttributeValue {
    /// Short wire tag of this variant (`"S"`, `"NULL"`, `"SS"`, ...).
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::S(_) => "S",
            Self::N(_) => "N",
            Self::Bool(_) => "BOOL",
            Self::B(_) => "B",
            Self::L(_) => "L",
            Self::M(_) => "M",
            Self::Ss(_) => "SS",
            Self::Ns(_) => "NS",
            Self::Bs(_) => "BS",
        }
    }

    /// Returns `true` for the store's null attribute.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_s(&self) -> Option<&str> {
        match self {
            Self::S(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_n(&self) -> Option<&Number> {
        match self {
            Self::N(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_m(&self) -> Option<&Item> {
        match self {
            Self::M(m) => Some(m),
            _ => None,
        }
    }

    /// A copy with numbers in canonical text and set elements sorted and
    /// deduplicated, recursively. Values equal in the store normalize to
    /// equal values.
    pub fn normalized(&self) -> Self {
        match self {
            Self::N(n) => Self::N(n.normalized()),
            Self::L(list) => Self::L(list.iter().map(Self::normalized).collect()),
            Self::M(map) => Self::M(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.normalized()))
                    .collect(),
            ),
            Self::Ss(set) => Self::Ss(sorted(set.clone())),
            Self::Ns(set) => Self::Ns(sorted(set.iter().map(Number::normalized).collect())),
            Self::Bs(set) => Self::Bs(sorted(set.clone())),
            other => other.clone(),
        }
    }

    /// Returns `true` if this variant can serve as a primary-key attribute.
    pub fn is_key_scalar(&self) -> bool {
        matches!(self, Self::S(_) | Self::N(_) | Self::B(_))
    }
}

fn sorted<T: Ord>(mut items: Vec<T>) -> Vec<T> {
    items.sort();
    items.dedup();
    items
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::S(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::S(value)
    }
}

impl From<Number> for AttributeValue {
    fn from(value: Number) -> Self {
        Self::N(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
