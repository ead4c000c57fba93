//! Conversions to and from the DynamoDB client's attribute value.
//!
//! [`AttributeValue`] converts losslessly into
//! [`aws_sdk_dynamodb::types::AttributeValue`]; the reverse direction is
//! fallible because the client type carries an `Unknown` variant, a
//! `NULL: false` form and unvalidated number text.

use std::collections::HashMap;

use aws_sdk_dynamodb::primitives::Blob;
use aws_sdk_dynamodb::types::AttributeValue as SdkValue;

use crate::attribute::{AttributeValue, Item};
use crate::error::{TypeError, TypeResult};
use crate::number::Number;

/// The client's item representation.
pub type SdkItem = HashMap<String, SdkValue>;

impl From<AttributeValue> for SdkValue {
    fn from(value: AttributeValue) -> Self {
        match value {
            AttributeValue::Null => Self::Null(true),
            AttributeValue::S(s) => Self::S(s),
            AttributeValue::N(n) => Self::N(n.into()),
            AttributeValue::Bool(b) => Self::Bool(b),
            AttributeValue::B(bytes) => Self::B(Blob::new(bytes)),
            AttributeValue::L(list) => Self::L(list.into_iter().map(Self::from).collect()),
            AttributeValue::M(map) => Self::M(item_to_sdk(map)),
            AttributeValue::Ss(set) => Self::Ss(set),
            AttributeValue::Ns(set) => Self::Ns(set.into_iter().map(String::from).collect()),
            AttributeValue::Bs(set) => Self::Bs(set.into_iter().map(Blob::new).collect()),
        }
    }
}

impl TryFrom<SdkValue> for AttributeValue {
    type Error = TypeError;

    fn try_from(value: SdkValue) -> Result<Self, Self::Error> {
        Ok(match value {
            SdkValue::Null(true) => Self::Null,
            SdkValue::Null(false) => {
                return Err(TypeError::Serialization("NULL must be true".into()))
            }
            SdkValue::S(s) => Self::S(s),
            SdkValue::N(n) => Self::N(Number::try_from(n)?),
            SdkValue::Bool(b) => Self::Bool(b),
            SdkValue::B(blob) => Self::B(blob.into_inner()),
            SdkValue::L(list) => Self::L(
                list.into_iter()
                    .map(Self::try_from)
                    .collect::<TypeResult<_>>()?,
            ),
            SdkValue::M(map) => Self::M(item_from_sdk(map)?),
            SdkValue::Ss(set) => Self::Ss(set),
            SdkValue::Ns(set) => Self::Ns(
                set.into_iter()
                    .map(Number::try_from)
                    .collect::<TypeResult<_>>()?,
            ),
            SdkValue::Bs(set) => Self::Bs(set.into_iter().map(Blob::into_inner).collect()),
            _ => return Err(TypeError::mismatch("known attribute type", "Unknown")),
        })
    }
}

/// Convert an item into the client's representation.
pub fn item_to_sdk(item: Item) -> SdkItem {
    item.into_iter().map(|(k, v)| (k, SdkValue::from(v))).collect()
}

/// Convert an item returned by the client.
pub fn item_from_sdk(item: SdkItem) -> TypeResult<Item> {
    item.into_iter()
        .map(|(k, v)| Ok((k, AttributeValue::try_from(v)?)))
        .collect()
}
