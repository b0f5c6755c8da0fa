//! Build status, build log and error log models.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::serde_helpers::string_from_string_or_number;

/// Whether each keyboard/layout pair currently compiles.
///
/// Keys are the service's `keyboard/layout` identifiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildStatus {
    pub keyboard_layouts: BTreeMap<String, bool>,
}

impl BuildStatus {
    /// Identifiers of the pairs that currently fail to compile.
    pub fn failing(&self) -> impl Iterator<Item = &str> {
        self.keyboard_layouts
            .iter()
            .filter(|(_, works)| !**works)
            .map(|(name, _)| name.as_str())
    }
}

/// Compilation record for one keyboard/layout pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardLog {
    pub works: bool,
    #[serde(deserialize_with = "string_from_string_or_number")]
    pub last_tested: String,
    pub message: String,
}

/// Compilation records for every keyboard/layout pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildLog {
    pub keyboard_layouts: BTreeMap<String, KeyboardLog>,
}

impl BuildLog {
    /// Log entry for one keyboard/layout pair.
    pub fn get(&self, keyboard_layout: &str) -> Option<&KeyboardLog> {
        self.keyboard_layouts.get(keyboard_layout)
    }
}

/// One warning or error from the last build run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorLog {
    pub message: String,
    pub severity: String,
}
