//! Firmware build report methods for [`QmkClient`].

use crate::client::QmkClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{BuildLog, BuildStatus, ErrorLog};

impl QmkClient {
    /// Pass/fail status of the last build for every `keyboard/layout`.
    pub async fn build_status(&self) -> Result<BuildStatus> {
        endpoints::get_build_status(&self.http, &self.api_root).await
    }

    /// Per-keyboard build log.
    pub async fn build_log(&self) -> Result<BuildLog> {
        endpoints::get_build_log(&self.http, &self.api_root).await
    }

    /// Errors the service hit while refreshing its data.
    pub async fn error_log(&self) -> Result<Vec<ErrorLog>> {
        endpoints::get_error_log(&self.http, &self.api_root).await
    }
}
