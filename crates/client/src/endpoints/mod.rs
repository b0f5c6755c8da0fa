//! REST API endpoint implementations.
//!
//! Each function takes the HTTP client and the API root explicitly so it can
//! be exercised against a mock server without building a [`crate::QmkClient`].

mod builds;
mod converters;
mod keyboards;
mod request;
mod status;
mod usb;
pub mod url_encoding;

pub use builds::{get_build_log, get_build_status, get_error_log};
pub use converters::{kle_to_qmk, list_converters};
pub use keyboards::{
    get_all_keyboards, get_keyboard, get_keyboard_readme, get_keymap, get_keymap_readme,
    list_keyboards,
};
pub use request::{
    JSON_MEDIA_TYPE, NO_BODY, ResponseShape, TEXT_MEDIA_TYPE, decode_json, endpoint_url, execute,
    request_json, request_raw,
};
pub use status::{get_status, trigger_update};
pub use usb::get_usb_table;
