//! Service status model returned by the API root and `/update`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::serde_helpers::{parse_timestamp, u64_from_string_or_number};

/// Operational status of the QMK API service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceStatus {
    pub result: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
    pub last_ping: String,
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub queue_length: u64,
    pub status: String,
    pub version: String,
}

impl ServiceStatus {
    /// `last_ping` parsed as a UTC timestamp, if it is in a recognized format.
    pub fn last_ping_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.last_ping)
    }

    /// Whether the service reports itself as running.
    pub fn is_running(&self) -> bool {
        self.status.eq_ignore_ascii_case("running")
    }
}
