//! Main QMK API client and API methods.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `status`: Service status, update trigger and layout converters
//! - `keyboards`: Keyboard, keymap and readme methods
//! - `builds`: Build status and log methods
//! - `usb`: USB identifier table
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//!
//! # Invariants
//! - The API root is fixed at build time; no method mutates client state,
//!   so one client can serve concurrent calls

pub mod builder;

mod builds;
mod keyboards;
mod status;
mod usb;

use bytes::Bytes;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::endpoints;
use crate::error::Result;

/// QMK API client.
///
/// Cloning is cheap: the underlying connection pool is shared.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use qmk_client::QmkClient;
///
/// # async fn run() -> qmk_client::Result<()> {
/// let client = QmkClient::new()?;
/// let keyboards = client.keyboards().await?;
/// println!("{} keyboards", keyboards.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct QmkClient {
    pub(crate) http: reqwest::Client,
    pub(crate) api_root: String,
}

impl QmkClient {
    /// Create a new client builder.
    pub fn builder() -> builder::QmkClientBuilder {
        builder::QmkClientBuilder::new()
    }

    /// Create a client for the public service with default settings.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Versioned root every endpoint path is appended to.
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Send a request to any path under the API root and decode the JSON reply.
    ///
    /// Returns `Ok(None)` when the service answers 204 No Content.
    pub async fn request<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        endpoints::request_json(&self.http, &self.api_root, method, path, body).await
    }

    /// Send a request to any path under the API root and return the raw body.
    ///
    /// Returns `Ok(None)` when the service answers 204 No Content.
    pub async fn request_raw(&self, method: Method, path: &str) -> Result<Option<Bytes>> {
        endpoints::request_raw(&self.http, &self.api_root, method, path).await
    }
}
