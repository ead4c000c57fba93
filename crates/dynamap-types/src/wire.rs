//! DynamoDB JSON wire form of [`AttributeValue`].
//!
//! Each value is a single-entry object whose key is the type tag:
//! `{"S":"abc"}`, `{"N":"5"}`, `{"BOOL":true}`, `{"NULL":true}`,
//! `{"B":"<base64>"}`, `{"L":[...]}`, `{"M":{...}}`, `{"SS":[...]}`,
//! `{"NS":[...]}`, `{"BS":[...]}`. Numbers travel as strings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attribute::{AttributeValue, Item};
use crate::error::{TypeError, TypeResult};
use crate::number::Number;

/// Serde-facing mirror of [`AttributeValue`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum WireValue {
    #[serde(rename = "NULL")]
    Null(bool),
    #[serde(rename = "S")]
    S(String),
    #[serde(rename = "N")]
    N(Number),
    #[serde(rename = "BOOL")]
    Bool(bool),
    #[serde(rename = "B")]
    B(String),
    #[serde(rename = "L")]
    L(Vec<WireValue>),
    #[serde(rename = "M")]
    M(BTreeMap<String, WireValue>),
    #[serde(rename = "SS")]
    Ss(Vec<String>),
    #[serde(rename = "NS")]
    Ns(Vec<Number>),
    #[serde(rename = "BS")]
    Bs(Vec<String>),
}

impl From<AttributeValue> for WireValue {
    fn from(value: AttributeValue) -> Self {
        match value {
            AttributeValue::Null => Self::Null(true),
            AttributeValue::S(s) => Self::S(s),
            AttributeValue::N(n) => Self::N(n),
            AttributeValue::Bool(b) => Self::Bool(b),
            AttributeValue::B(bytes) => Self::B(base64::encode(bytes)),
            AttributeValue::L(list) => Self::L(list.into_iter().map(Self::from).collect()),
            AttributeValue::M(map) => {
                Self::M(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
            AttributeValue::Ss(set) => Self::Ss(set),
            AttributeValue::Ns(set) => Self::Ns(set),
            AttributeValue::Bs(set) => Self::Bs(set.into_iter().map(base64::encode).collect()),
        }
    }
}

impl TryFrom<WireValue> for AttributeValue {
    type Error = TypeError;

    fn try_from(value: WireValue) -> Result<Self, Self::Error> {
        Ok(match value {
            WireValue::Null(true) => Self::Null,
            WireValue::Null(false) => {
                return Err(TypeError::Serialization("NULL must be true".into()))
            }
            WireValue::S(s) => Self::S(s),
            WireValue::N(n) => Self::N(n),
            WireValue::Bool(b) => Self::Bool(b),
            WireValue::B(text) => Self::B(decode_base64(&text)?),
            WireValue::L(list) => Self::L(
                list.into_iter()
                    .map(Self::try_from)
                    .collect::<TypeResult<_>>()?,
            ),
            WireValue::M(map) => Self::M(
                map.into_iter()
                    .map(|(k, v)| Ok((k, Self::try_from(v)?)))
                    .collect::<TypeResult<_>>()?,
            ),
            WireValue::Ss(set) => Self::Ss(set),
            WireValue::Ns(set) => Self::Ns(set),
            WireValue::Bs(set) => Self::Bs(
                set.iter()
                    .map(|text| decode_base64(text))
                    .collect::<TypeResult<_>>()?,
            ),
        })
    }
}

fn decode_base64(text: &str) -> TypeResult<Vec<u8>> {
    base64::decode(text).map_err(|e| TypeError::InvalidBase64(e.to_string()))
}

/// Serialize an item to its DynamoDB JSON text.
pub fn item_to_string(item: &Item) -> TypeResult<String> {
    serde_json::to_string(item).map_err(|e| TypeError::Serialization(e.to_string()))
}

/// Parse an item from DynamoDB JSON text.
pub fn item_from_str(text: &str) -> TypeResult<Item> {
    serde_json::from_str(text).map_err(|e| TypeError::Serialization(e.to_string()))
}
