//! Keyboard and keymap API methods for [`QmkClient`].
//!
//! # What this module handles:
//! - Listing keyboards and fetching keyboard metadata
//! - Fetching keymaps
//! - Fetching keyboard and keymap readmes as text
//!
//! # What this module does NOT handle:
//! - Path encoding of keyboard and keymap names (in [`crate::endpoints::url_encoding`])

use crate::client::QmkClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Keyboard, KeyboardsCollection, Keymap};

impl QmkClient {
    /// List the names of all supported keyboards.
    pub async fn keyboards(&self) -> Result<Vec<String>> {
        endpoints::list_keyboards(&self.http, &self.api_root).await
    }

    /// Get metadata for every keyboard in one call.
    pub async fn all_keyboards(&self) -> Result<KeyboardsCollection> {
        endpoints::get_all_keyboards(&self.http, &self.api_root).await
    }

    /// Get metadata for one keyboard, e.g. `"preonic/rev3"`.
    pub async fn keyboard(&self, keyboard: &str) -> Result<Keyboard> {
        endpoints::get_keyboard(&self.http, &self.api_root, keyboard).await
    }

    /// Get a keyboard's readme.
    pub async fn keyboard_readme(&self, keyboard: &str) -> Result<String> {
        endpoints::get_keyboard_readme(&self.http, &self.api_root, keyboard).await
    }

    /// Get one keymap of a keyboard.
    pub async fn keymap(&self, keyboard: &str, keymap: &str) -> Result<Keymap> {
        endpoints::get_keymap(&self.http, &self.api_root, keyboard, keymap).await
    }

    /// Get a keymap's readme.
    pub async fn keymap_readme(&self, keyboard: &str, keymap: &str) -> Result<String> {
        endpoints::get_keymap_readme(&self.http, &self.api_root, keyboard, keymap).await
    }
}
