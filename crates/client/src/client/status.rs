//! Service status and converter methods for [`QmkClient`].

use crate::client::QmkClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{KleInput, Keyboard, ServiceStatus};

impl QmkClient {
    /// Get the service status (`GET /`).
    pub async fn status(&self) -> Result<ServiceStatus> {
        endpoints::get_status(&self.http, &self.api_root).await
    }

    /// Ask the service to refresh its keyboard data (`GET /update`).
    pub async fn update(&self) -> Result<ServiceStatus> {
        endpoints::trigger_update(&self.http, &self.api_root).await
    }

    /// List the available layout converters.
    pub async fn converters(&self) -> Result<Vec<String>> {
        endpoints::list_converters(&self.http, &self.api_root).await
    }

    /// Convert a Keyboard Layout Editor layout into a QMK keyboard definition.
    ///
    /// Only [`KleInput::Id`] is accepted; raw input fails locally with
    /// [`crate::ClientError::Validation`].
    pub async fn kle_to_qmk(&self, input: &KleInput) -> Result<Keyboard> {
        endpoints::kle_to_qmk(&self.http, &self.api_root, input).await
    }
}
