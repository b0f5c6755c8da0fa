//! Input for the KLE-to-QMK layout converter.

use serde::Serialize;

/// Source of a Keyboard Layout Editor layout.
///
/// Serialized as a single-key object: `{"id": "..."}` or `{"raw": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KleInput {
    /// A gist ID or keyboard-layout-editor.com URL.
    Id(String),
    /// Raw KLE JSON. The service does not accept this form yet.
    Raw(String),
}
