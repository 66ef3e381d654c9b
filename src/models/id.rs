//! Record identifiers
//!
//! The backend hands out numeric ids but some seed files store them as
//! strings, so ids are read leniently and always written as numbers.

use serde::{de, Deserialize, Deserializer};

/// Identifier of a backend record
pub type RecordId = i64;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

/// Deserialize an id given either as a JSON number or a numeric string
pub fn flexible_id<'de, D>(deserializer: D) -> Result<RecordId, D::Error>
where
    D: Deserializer<'de>,
{
    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| de::Error::custom(format!("invalid record id: {:?}", text))),
    }
}

/// Parse an id typed by a person (route argument, form field)
pub fn parse_id(text: &str) -> Option<RecordId> {
    text.trim().parse::<i64>().ok()
}
