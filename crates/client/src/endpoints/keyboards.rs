//! Keyboard and keymap endpoints.

use reqwest::{Client, Method};
use serde_json::Value;

use crate::endpoints::request::{NO_BODY, decode_error, get_json, request_json, request_raw};
use crate::endpoints::url_encoding::{encode_keyboard_path, encode_path_segment};
use crate::error::{ClientError, DecodeErrorKind, Result};
use crate::models::{Keyboard, KeyboardsCollection, Keymap};

/// List the names of all supported keyboards (`GET /keyboards`).
pub async fn list_keyboards(client: &Client, api_root: &str) -> Result<Vec<String>> {
    get_json(client, api_root, "/keyboards").await
}

/// Get metadata for every keyboard (`GET /keyboards/all`).
pub async fn get_all_keyboards(client: &Client, api_root: &str) -> Result<KeyboardsCollection> {
    get_json(client, api_root, "/keyboards/all").await
}

/// Get metadata for one keyboard (`GET /keyboards/{keyboard}`).
///
/// The service answers either with the keyboard object itself or with an
/// envelope `{"keyboards": {"<name>": {...}}, ...}`; both are accepted.
pub async fn get_keyboard(client: &Client, api_root: &str, keyboard: &str) -> Result<Keyboard> {
    let path = format!("/keyboards/{}", encode_keyboard_path(keyboard));
    match request_json::<Value, ()>(client, api_root, Method::GET, &path, NO_BODY).await? {
        Some(value) => keyboard_from_payload(keyboard, value),
        None => Ok(Keyboard::default()),
    }
}

/// Get the readme for a keyboard (`GET /keyboards/{keyboard}/readme`).
///
/// # Errors
///
/// Returns [`ClientError::NotFound`] when the service answers 404 or 500.
pub async fn get_keyboard_readme(client: &Client, api_root: &str, keyboard: &str) -> Result<String> {
    let path = format!("/keyboards/{}/readme", encode_keyboard_path(keyboard));
    fetch_readme(client, api_root, &path, keyboard).await
}

/// Get metadata for one keymap (`GET /keyboards/{keyboard}/keymaps/{keymap}`).
pub async fn get_keymap(
    client: &Client,
    api_root: &str,
    keyboard: &str,
    keymap: &str,
) -> Result<Keymap> {
    let path = format!(
        "/keyboards/{}/keymaps/{}",
        encode_keyboard_path(keyboard),
        encode_path_segment(keymap)
    );
    get_json(client, api_root, &path).await
}

/// Get the readme for a keymap (`GET /keyboards/{keyboard}/keymaps/{keymap}/readme`).
///
/// # Errors
///
/// Returns [`ClientError::NotFound`] when the service answers 404 or 500.
pub async fn get_keymap_readme(
    client: &Client,
    api_root: &str,
    keyboard: &str,
    keymap: &str,
) -> Result<String> {
    let path = format!(
        "/keyboards/{}/keymaps/{}/readme",
        encode_keyboard_path(keyboard),
        encode_path_segment(keymap)
    );
    fetch_readme(client, api_root, &path, &format!("{}:{}", keyboard, keymap)).await
}

async fn fetch_readme(client: &Client, api_root: &str, path: &str, resource: &str) -> Result<String> {
    let body = match request_raw(client, api_root, Method::GET, path).await {
        Ok(body) => body.unwrap_or_default(),
        Err(ClientError::Api {
            status: 404 | 500, ..
        }) => return Err(ClientError::NotFound(format!("readme for {}", resource))),
        Err(e) => return Err(e),
    };

    String::from_utf8(body.to_vec()).map_err(|e| ClientError::Decode {
        kind: DecodeErrorKind::Encoding,
        message: e.to_string(),
        offset: Some(e.utf8_error().valid_up_to()),
        context: None,
    })
}

/// Extract a keyboard from either payload layout.
///
/// Anything other than a JSON object, `null` included, is a shape error.
fn keyboard_from_payload(name: &str, mut value: Value) -> Result<Keyboard> {
    if !value.is_object() {
        return Err(ClientError::Decode {
            kind: DecodeErrorKind::Shape,
            message: format!("expected a keyboard object, got {}", json_type_name(&value)),
            offset: None,
            context: None,
        });
    }

    let entry = match value.get_mut("keyboards").map(Value::take) {
        Some(Value::Object(mut keyboards)) => {
            let key = name.trim_matches('/');
            if let Some(entry) = keyboards.remove(key) {
                entry
            } else if keyboards.len() == 1 {
                keyboards
                    .into_iter()
                    .next()
                    .map(|(_, entry)| entry)
                    .unwrap_or_default()
            } else {
                return Err(ClientError::Decode {
                    kind: DecodeErrorKind::Shape,
                    message: format!("keyboard `{}` missing from response", key),
                    offset: None,
                    context: None,
                });
            }
        }
        _ => value,
    };

    serde_json::from_value(entry).map_err(|e| decode_error(&[], &e))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_keyboard_from_flat_payload() {
        let keyboard =
            keyboard_from_payload("plaid", json!({"readme": true, "maintainer": "hsgw"})).unwrap();
        assert!(keyboard.readme);
        assert_eq!(keyboard.maintainer, "hsgw");
    }

    #[test]
    fn test_keyboard_from_envelope() {
        let payload = json!({
            "last_updated": "2019-11-30 13:05:20 UTC",
            "keyboards": {
                "preonic/rev3": {"processor": "STM32F303", "maintainer": "jackhumbert"}
            }
        });
        let keyboard = keyboard_from_payload("preonic/rev3", payload).unwrap();
        assert_eq!(keyboard.processor, "STM32F303");
    }

    #[test]
    fn test_keyboard_from_envelope_with_alias_name() {
        let payload = json!({"keyboards": {"planck/rev6": {"maintainer": "jackhumbert"}}});
        let keyboard = keyboard_from_payload("planck", payload).unwrap();
        assert_eq!(keyboard.maintainer, "jackhumbert");
    }

    #[test]
    fn test_keyboard_missing_from_envelope() {
        let payload = json!({"keyboards": {"a": {}, "b": {}}});
        let err = keyboard_from_payload("c", payload).unwrap_err();
        assert!(matches!(
            err,
            ClientError::Decode {
                kind: DecodeErrorKind::Shape,
                ..
            }
        ));
    }

    #[test]
    fn test_keyboard_wrong_shape_propagates() {
        let err = keyboard_from_payload("plaid", json!({"readme": "yes"})).unwrap_err();
        assert!(matches!(
            err,
            ClientError::Decode {
                kind: DecodeErrorKind::Shape,
                offset: None,
                ..
            }
        ));
    }

    #[test]
    fn test_keyboard_non_object_payload_rejected() {
        for payload in [json!(null), json!([]), json!("plaid")] {
            let err = keyboard_from_payload("plaid", payload.clone()).unwrap_err();
            assert!(
                matches!(
                    err,
                    ClientError::Decode {
                        kind: DecodeErrorKind::Shape,
                        ..
                    }
                ),
                "{payload} should be rejected, got {err:?}"
            );
        }
    }
}
