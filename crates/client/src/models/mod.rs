//! Data models for QMK API responses.
//!
//! Types are organized by resource in submodules and re-exported here.
//! Every model decodes leniently: missing fields take their default value and
//! unknown fields are ignored, so partial payloads still decode.

pub mod builds;
pub mod converters;
pub mod keyboard;
pub mod status;
pub mod usb;

pub use builds::{BuildLog, BuildStatus, ErrorLog, KeyboardLog};
pub use converters::KleInput;
pub use keyboard::{KeyPosition, Keyboard, KeyboardsCollection, Keymap, Layout};
pub use status::ServiceStatus;
pub use usb::{ProductInfo, UsbTable};
