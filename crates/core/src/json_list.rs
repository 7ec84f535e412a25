//! Codec for list-valued content fields stored as JSON text.
//!
//! Features, tags, requirements and benefits are kept in a single TEXT
//! column holding a JSON array. [`JsonList`] is the in-memory form: it is
//! decoded from the column text on read, re-encoded on every write, and
//! serialized over the wire as a native JSON array.
//!
//! Decoding never fails. A missing, blank, malformed, or non-array value
//! decodes to the empty list, which is also what an absent or non-array
//! request field deserializes to.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// An ordered list of strings persisted as JSON text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonList(pub Vec<String>);

impl JsonList {
    pub fn new(items: Vec<String>) -> Self {
        Self(items)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Encode for storage. Always yields a JSON array, `[]` when empty.
    pub fn encode(&self) -> String {
        encode(&self.0)
    }
}

/// Serialize a list of strings as JSON array text.
pub fn encode(items: &[String]) -> String {
    // Serializing a slice of strings cannot fail.
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

/// Decode stored column text into a list.
pub fn decode(raw: Option<&str>) -> JsonList {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return JsonList::default();
    };
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => from_value(value),
        Err(_) => JsonList::default(),
    }
}

/// Build a list from an arbitrary JSON value. Only arrays contribute items.
fn from_value(value: Value) -> JsonList {
    match value {
        Value::Array(items) => JsonList(
            items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => s,
                    other => other.to_string(),
                })
                .collect(),
        ),
        _ => JsonList::default(),
    }
}

/// Column text to list, used by `#[sqlx(try_from = "String")]` on model fields.
impl From<String> for JsonList {
    fn from(raw: String) -> Self {
        decode(Some(&raw))
    }
}

impl Serialize for JsonList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for JsonList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(from_value(value))
    }
}
