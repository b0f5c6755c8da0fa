//! Property-based tests for path encoding.
//!
//! # Invariants
//! - Encoded segments never contain `/`, `?`, `#` or whitespace
//! - Keyboard paths keep one `/` between non-empty segments
//! - Decoding an encoded segment gives back the input

use percent_encoding::percent_decode_str;
use proptest::prelude::*;
use qmk_client::endpoints::endpoint_url;
use qmk_client::endpoints::url_encoding::{encode_keyboard_path, encode_path_segment};

proptest! {
    #[test]
    fn prop_segment_is_single_and_reversible(input in any::<String>()) {
        let encoded = encode_path_segment(&input);

        prop_assert!(!encoded.contains('/'));
        prop_assert!(!encoded.contains('?'));
        prop_assert!(!encoded.contains('#'));
        prop_assert!(!encoded.chars().any(char::is_whitespace));
        prop_assert!(encoded.is_ascii());

        let decoded = percent_decode_str(&encoded).decode_utf8().unwrap();
        prop_assert_eq!(decoded, input.as_str());
    }

    #[test]
    fn prop_keyboard_path_preserves_segments(
        segments in prop::collection::vec("[^/]{1,12}", 1..5),
    ) {
        let name = segments.join("/");
        let encoded = encode_keyboard_path(&name);
        let parts: Vec<&str> = encoded.split('/').collect();

        prop_assert_eq!(parts.len(), segments.len());
        for (part, original) in parts.iter().zip(&segments) {
            prop_assert_eq!(*part, encode_path_segment(original));
        }
    }

    #[test]
    fn prop_endpoint_url_never_mutates_root(
        path in "/?[a-z_]{0,10}(/[a-z_]{1,10}){0,3}",
    ) {
        let root = "https://api.qmk.fm/v1";
        let url = endpoint_url(root, &path);

        prop_assert!(url.starts_with(root));
        prop_assert!(!url[root.len()..].starts_with("//"));
        // Repeating the call gives the same answer; there is no hidden state.
        prop_assert_eq!(endpoint_url(root, &path), url);
    }
}
