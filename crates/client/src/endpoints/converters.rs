//! Layout converter endpoints.

use reqwest::{Client, Method};
use tracing::debug;

use crate::endpoints::request::{get_json, request_json};
use crate::error::{ClientError, Result};
use crate::models::{KleInput, Keyboard};

/// Get the names of the supported format converters (`GET /converters`).
pub async fn list_converters(client: &Client, api_root: &str) -> Result<Vec<String>> {
    get_json(client, api_root, "/converters").await
}

/// Convert a Keyboard Layout Editor layout into QMK's keyboard format
/// (`POST /converters/kle2qmk`).
///
/// # Errors
///
/// Returns [`ClientError::Validation`] for [`KleInput::Raw`] without sending
/// anything; the service only accepts layout IDs.
pub async fn kle_to_qmk(client: &Client, api_root: &str, input: &KleInput) -> Result<Keyboard> {
    if let KleInput::Raw(_) = input {
        debug!("Rejecting raw KLE input before sending");
        return Err(ClientError::Validation(
            "raw KLE input is not supported by the converter yet; pass a layout id".to_string(),
        ));
    }

    Ok(
        request_json(client, api_root, Method::POST, "/converters/kle2qmk", Some(input))
            .await?
            .unwrap_or_default(),
    )
}
