//! Service status endpoints.

use reqwest::Client;

use crate::endpoints::request::get_json;
use crate::error::Result;
use crate::models::ServiceStatus;

/// Get the service's operating status (`GET /`).
pub async fn get_status(client: &Client, api_root: &str) -> Result<ServiceStatus> {
    get_json(client, api_root, "").await
}

/// Ask the service to refresh its keyboard data (`GET /update`).
pub async fn trigger_update(client: &Client, api_root: &str) -> Result<ServiceStatus> {
    get_json(client, api_root, "/update").await
}
