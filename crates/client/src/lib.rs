//! QMK API client.
//!
//! This crate provides a typed async client for the QMK keyboard firmware
//! API at <https://api.qmk.fm>: keyboard metadata, keymaps, readmes, build
//! reports, the USB identifier table and the KLE layout converter.
//!
//! ```rust,no_run
//! use qmk_client::QmkClient;
//!
//! # async fn run() -> qmk_client::Result<()> {
//! let client = QmkClient::new()?;
//! let plaid = client.keyboard("plaid").await?;
//! println!("{} maintained by {}", plaid.keyboard_name, plaid.maintainer);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod models;
mod serde_helpers;

pub mod endpoints;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::QmkClient;
pub use client::builder::QmkClientBuilder;
pub use endpoints::ResponseShape;
pub use error::{ClientError, DecodeErrorKind, Result};
pub use models::{
    BuildLog, BuildStatus, ErrorLog, KeyPosition, Keyboard, KeyboardLog, KeyboardsCollection,
    Keymap, KleInput, Layout, ProductInfo, ServiceStatus, UsbTable,
};
pub use reqwest::Method;
