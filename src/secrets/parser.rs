//! Tag extraction from structured secret payloads.
//!
//! A structured payload is a JSON array of `{"Key": ..., "Value": ...}`
//! objects:
//!
//! ```json
//! [
//!   {"Key": "username", "Value": "alice"},
//!   {"Key": "password", "Value": "hunter2"}
//! ]
//! ```
//!
//! Field names match case-insensitively, so `key` and `KEY` both work. A
//! missing or `null` field is an empty string. A `null` payload is an empty
//! list.

use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

use super::error::Result;
use super::types::SecretString;

/// One tag of a structured secret payload.
#[derive(Debug, Clone, Default)]
pub struct KeyValueEntry {
    pub key: String,
    pub value: SecretString,
}

impl<'de> Deserialize<'de> for KeyValueEntry {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(EntryVisitor)
    }
}

struct EntryVisitor;

impl<'de> Visitor<'de> for EntryVisitor {
    type Value = KeyValueEntry;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object with Key and Value fields")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entry = KeyValueEntry::default();

        while let Some(field) = map.next_key::<String>()? {
            if field.eq_ignore_ascii_case("key") {
                if let Some(key) = map.next_value::<Option<String>>()? {
                    entry.key = key;
                }
            } else if field.eq_ignore_ascii_case("value") {
                if let Some(value) = map.next_value::<Option<SecretString>>()? {
                    entry.value = value;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        Ok(entry)
    }
}

/// Deserialize `payload` and return the value of the first entry whose key
/// equals `tag` exactly.
///
/// A missing tag is not an error: the result is an empty string.
pub fn extract_tag(tag: &str, payload: &str) -> Result<String> {
    let entries: Option<Vec<Option<KeyValueEntry>>> = serde_json::from_str(payload)?;

    Ok(entries
        .into_iter()
        .flatten()
        .map(Option::unwrap_or_default)
        .find(|entry| entry.key == tag)
        .map(|entry| entry.value.into_inner())
        .unwrap_or_default())
}
