//! URL encoding utilities for constructing API paths.
//!
//! Keyboard names are path-like (`preonic/rev3`, `handwired/dactyl_manuform/5x6`)
//! and keep their `/` separators; keymap names are a single path segment.
//! Everything else that would change how the URL parses is percent-encoded.
//!
//! # Example
//!
//! ```
//! use qmk_client::endpoints::url_encoding::{encode_keyboard_path, encode_path_segment};
//!
//! assert_eq!(encode_keyboard_path("preonic/rev3"), "preonic/rev3");
//! assert_eq!(encode_path_segment("my keymap"), "my%20keymap");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments.
///
/// Based on RFC 3986 section 3.3:
/// - Space, quotes, angle brackets, backtick: problematic in URLs
/// - Backslash, pipe, caret: often rejected by servers and proxies
/// - Percent: must be encoded to prevent double-decoding
/// - Slash: must be encoded so a segment stays a single segment
/// - Question mark and hash: start the query and fragment
/// - Curly braces, square brackets: reserved in URI templates
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for use as a single URL path segment.
///
/// # Examples
///
/// ```
/// use qmk_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("default"), "default");
/// assert_eq!(encode_path_segment("a/b"), "a%2Fb");
/// assert_eq!(encode_path_segment("100%"), "100%25");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

/// Percent-encode a keyboard name, keeping its `/` separators.
///
/// Leading and trailing slashes are dropped, as are empty segments produced
/// by repeated slashes.
pub fn encode_keyboard_path(keyboard: &str) -> String {
    keyboard
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(encode_path_segment)
        .collect::<Vec<_>>()
        .join("/")
}
