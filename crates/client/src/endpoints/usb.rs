//! USB identifier table endpoint.

use reqwest::Client;

use crate::endpoints::request::get_json;
use crate::error::Result;
use crate::models::UsbTable;

/// Get the vendor/product ID table used across QMK keyboards (`GET /usb`).
pub async fn get_usb_table(client: &Client, api_root: &str) -> Result<UsbTable> {
    get_json(client, api_root, "/usb").await
}
