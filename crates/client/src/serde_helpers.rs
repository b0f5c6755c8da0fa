//! Serde helpers for the QMK API's loose JSON typing.
//!
//! Responsibilities:
//! - Accept either JSON numbers or strings for numeric and textual fields.
//! - Accept the keyboard `keymaps` field as either a list of names or a map.
//! - Parse the service's timestamp strings.
//!
//! Explicitly does NOT handle:
//! - Validating higher-level semantics (key counts matching layouts, etc.).
//!
//! Invariants / assumptions:
//! - `null` decodes to the field's default, matching a missing field.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

use crate::models::Keymap;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum U64OrString {
    U64(u64),
    String(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    U64(u64),
    I64(i64),
    F64(f64),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum KeymapsRepr {
    Names(Vec<String>),
    Map(BTreeMap<String, Keymap>),
}

pub fn u64_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<U64OrString>::deserialize(deserializer)? {
        None => Ok(0),
        Some(U64OrString::U64(v)) => Ok(v),
        Some(U64OrString::String(s)) if s.trim().is_empty() => Ok(0),
        Some(U64OrString::String(s)) => s.trim().parse::<u64>().map_err(D::Error::custom),
    }
}

pub fn string_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => String::new(),
        Some(StringOrNumber::String(s)) => s,
        Some(StringOrNumber::U64(v)) => v.to_string(),
        Some(StringOrNumber::I64(v)) => v.to_string(),
        Some(StringOrNumber::F64(v)) => v.to_string(),
    })
}

/// Decode `keymaps` from either `["default", "via"]` or `{"default": {...}}`.
pub fn keymaps_from_list_or_map<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, Keymap>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<KeymapsRepr>::deserialize(deserializer)? {
        None => BTreeMap::new(),
        Some(KeymapsRepr::Map(map)) => map,
        Some(KeymapsRepr::Names(names)) => names
            .into_iter()
            .map(|name| {
                let keymap = Keymap {
                    name: name.clone(),
                    ..Keymap::default()
                };
                (name, keymap)
            })
            .collect(),
    })
}

/// Parse a service timestamp.
///
/// Accepts RFC 3339 (`2019-12-07T12:26:33Z`), the service's
/// `2019-12-07 12:26:33 UTC` form, and offset-less ISO 8601 read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S UTC")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}
