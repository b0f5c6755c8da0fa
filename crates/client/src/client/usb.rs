//! USB identifier table methods for [`QmkClient`].

use crate::client::QmkClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::UsbTable;

impl QmkClient {
    /// USB vendor/product identifiers of every keyboard.
    pub async fn usb_table(&self) -> Result<UsbTable> {
        endpoints::get_usb_table(&self.http, &self.api_root).await
    }
}
