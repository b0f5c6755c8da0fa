//! Build status and log endpoints.

use reqwest::Client;

use crate::endpoints::request::get_json;
use crate::error::Result;
use crate::models::{BuildLog, BuildStatus, ErrorLog};

/// Get whether each keyboard/layout pair compiles (`GET /keyboards/build_status`).
pub async fn get_build_status(client: &Client, api_root: &str) -> Result<BuildStatus> {
    get_json(client, api_root, "/keyboards/build_status").await
}

/// Get the compile log for each keyboard/layout pair (`GET /keyboards/build_log`).
pub async fn get_build_log(client: &Client, api_root: &str) -> Result<BuildLog> {
    get_json(client, api_root, "/keyboards/build_log").await
}

/// Get the warnings and errors from the last build run (`GET /keyboards/error_log`).
pub async fn get_error_log(client: &Client, api_root: &str) -> Result<Vec<ErrorLog>> {
    get_json(client, api_root, "/keyboards/error_log").await
}
