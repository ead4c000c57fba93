//! Export of items as plain (untagged) JSON documents.

use serde_json::{Map, Value as Json};

use crate::attribute::{AttributeValue, Item};

/// Render an item as a plain JSON object, dropping the wire type tags.
///
/// Numbers become JSON numbers, binary values become base64 strings and sets
/// become arrays. This is a one-way view for logging and interop; the type
/// tags cannot be recovered from it.
pub fn item_to_json(item: &Item) -> Json {
    Json::Object(
        item.iter()
            .map(|(name, value)| (name.clone(), attribute_to_json(value)))
            .collect::<Map<_, _>>(),
    )
}

/// Render a single attribute value as plain JSON.
pub fn attribute_to_json(value: &AttributeValue) -> Json {
    match value {
        AttributeValue::Null => Json::Null,
        AttributeValue::S(s) => Json::String(s.clone()),
        AttributeValue::N(n) => n
            .as_str()
            .parse::<serde_json::Number>()
            .map(Json::Number)
            .unwrap_or_else(|_| Json::String(n.to_string())),
        AttributeValue::Bool(b) => Json::Bool(*b),
        AttributeValue::B(bytes) => Json::String(base64::encode(bytes)),
        AttributeValue::L(list) => Json::Array(list.iter().map(attribute_to_json).collect()),
        AttributeValue::M(map) => item_to_json(map),
        AttributeValue::Ss(set) => Json::Array(set.iter().cloned().map(Json::String).collect()),
        AttributeValue::Ns(set) => Json::Array(
            set.iter()
                .map(|n| attribute_to_json(&AttributeValue::N(n.clone())))
                .collect(),
        ),
        AttributeValue::Bs(set) => Json::Array(
            set.iter()
                .map(|bytes| Json::String(base64::encode(bytes)))
                .collect(),
        ),
    }
}
