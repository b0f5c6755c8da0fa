//! Keyboard, layout and keymap models.
//!
//! These mirror the `/keyboards/*` payloads. Keyboard metadata is static
//! (manufacturer, processor, USB identifiers, physical size); layouts
//! describe key geometry; keymaps name the function assignments shipped for
//! the board.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::serde_helpers::{keymaps_from_list_or_map, parse_timestamp, u64_from_string_or_number};

/// Physical placement of one key, in key units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyPosition {
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl KeyPosition {
    /// Key width, defaulting to one unit.
    pub fn width(&self) -> f64 {
        self.w.unwrap_or(1.0)
    }

    /// Key height, defaulting to one unit.
    pub fn height(&self) -> f64 {
        self.h.unwrap_or(1.0)
    }
}

/// Key geometry for one board variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub key_count: u64,
    #[serde(rename = "layout")]
    pub keys: Vec<KeyPosition>,
}

impl Layout {
    /// Bounding box `(width, height)` of all keys, in key units.
    pub fn extent(&self) -> (f64, f64) {
        self.keys.iter().fold((0.0, 0.0), |(w, h), key| {
            (w.max(key.x + key.width()), h.max(key.y + key.height()))
        })
    }
}

/// A keymap shipped for a keyboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keymap {
    #[serde(rename = "keymap_name")]
    pub name: String,
    #[serde(rename = "layout_macro")]
    pub layout: String,
    pub folder_name: String,
    #[serde(rename = "layer", skip_serializing_if = "Vec::is_empty")]
    pub layers: Vec<String>,
}

/// Static metadata about one keyboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keyboard {
    pub keyboard_name: String,
    pub keyboard_folder: String,
    pub description: String,
    pub manufacturer: String,
    pub maintainer: String,
    pub url: String,
    pub readme: bool,
    pub bootloader: String,
    pub processor: String,
    pub processor_type: String,
    pub platform: String,
    pub identifier: String,
    pub vendor_id: String,
    pub product_id: String,
    pub device_ver: String,
    pub width: f64,
    pub height: f64,
    pub layouts: BTreeMap<String, Layout>,
    #[serde(deserialize_with = "keymaps_from_list_or_map")]
    pub keymaps: BTreeMap<String, Keymap>,
}

impl Keyboard {
    /// Look up a layout by its macro name.
    pub fn layout(&self, name: &str) -> Option<&Layout> {
        self.layouts.get(name)
    }

    /// Names of all keymaps shipped for this keyboard, sorted.
    pub fn keymap_names(&self) -> impl Iterator<Item = &str> {
        self.keymaps.keys().map(String::as_str)
    }
}

/// Bulk listing of every keyboard known to the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardsCollection {
    pub last_updated: String,
    pub git_hash: String,
    pub keyboards: BTreeMap<String, Keyboard>,
}

impl KeyboardsCollection {
    /// `last_updated` parsed as a UTC timestamp.
    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.last_updated)
    }
}
