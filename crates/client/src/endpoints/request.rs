//! The request/response pipeline shared by every endpoint.
//!
//! This module is responsible for:
//! - Composing the request URL from the immutable API root and a relative path
//! - Content negotiation (`Accept` from [`ResponseShape`], `Content-Type` for JSON bodies)
//! - Classifying the response: 204, other 2xx, or an API error
//! - Decoding JSON bodies with byte-offset diagnostics on failure
//!
//! # What this module does NOT handle:
//! - Retries, caching or rate limiting (every call is a single round trip)
//! - Endpoint-specific reshaping (see the sibling endpoint modules)
//!
//! # Invariants
//! - URL composition is a pure function of `(api_root, path)`; no client state is mutated
//! - A 204 response is never decoded
//! - A non-2xx response always yields [`ClientError::Api`]

use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::error::Category;
use tracing::debug;

use crate::error::{ClientError, DecodeErrorKind, Result};

/// Media type sent for JSON bodies and requested for structured responses.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Media types requested for raw-text responses (readmes are served as markdown).
pub const TEXT_MEDIA_TYPE: &str = "text/plain, text/markdown;q=0.9";

/// Number of input bytes shown on each side of a decode failure.
const DECODE_CONTEXT_RADIUS: usize = 24;

/// Placeholder body for requests that carry no payload.
pub const NO_BODY: Option<&()> = None;

/// The representation a caller expects back from an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// Structured JSON, decoded into a model type.
    Json,
    /// Opaque text returned byte-for-byte.
    Raw,
}

impl ResponseShape {
    /// Value for the `Accept` header.
    pub fn accept(self) -> &'static str {
        match self {
            Self::Json => JSON_MEDIA_TYPE,
            Self::Raw => TEXT_MEDIA_TYPE,
        }
    }
}

/// Error body shape the service uses for failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Join a relative endpoint path onto the API root.
///
/// An empty path (or `/`) addresses the root itself.
///
/// # Examples
///
/// ```
/// use qmk_client::endpoints::endpoint_url;
///
/// assert_eq!(endpoint_url("https://api.qmk.fm/v1", ""), "https://api.qmk.fm/v1");
/// assert_eq!(endpoint_url("https://api.qmk.fm/v1", "/usb"), "https://api.qmk.fm/v1/usb");
/// assert_eq!(endpoint_url("https://api.qmk.fm/v1", "usb"), "https://api.qmk.fm/v1/usb");
/// ```
pub fn endpoint_url(api_root: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        api_root.to_string()
    } else {
        format!("{}/{}", api_root, path)
    }
}

/// Send one request and classify the response.
///
/// Returns `Ok(None)` for 204 No Content and `Ok(Some(body))` for any other
/// 2xx status. The body is never inspected here beyond error extraction.
///
/// # Errors
///
/// - [`ClientError::Serialization`] if `body` cannot be encoded
/// - [`ClientError::Transport`] if no response was received
/// - [`ClientError::Api`] for any status outside 2xx
pub async fn execute<B>(
    client: &Client,
    api_root: &str,
    method: Method,
    path: &str,
    shape: ResponseShape,
    body: Option<&B>,
) -> Result<Option<Bytes>>
where
    B: Serialize + ?Sized,
{
    let url = endpoint_url(api_root, path);

    let mut builder = client
        .request(method.clone(), url.as_str())
        .header(ACCEPT, shape.accept());

    if let Some(body) = body {
        let payload =
            serde_json::to_vec(body).map_err(|e| ClientError::Serialization(e.to_string()))?;
        builder = builder.header(CONTENT_TYPE, JSON_MEDIA_TYPE).body(payload);
    }

    debug!(%method, %url, ?shape, "Sending request");
    let response = builder.send().await?;
    let status = response.status();
    debug!(status = status.as_u16(), %url, "Received response");

    if status == StatusCode::NO_CONTENT {
        debug!(%url, "No content, skipping decode");
        return Ok(None);
    }

    if status.is_success() {
        return Ok(Some(response.bytes().await?));
    }

    let body = response.bytes().await.unwrap_or_default();
    let message = serde_json::from_slice::<ErrorBody>(&body)
        .ok()
        .map(|b| b.message);

    Err(ClientError::Api {
        status: status.as_u16(),
        url,
        message,
    })
}

/// Send a request expecting JSON and decode it into `T`.
///
/// Returns `Ok(None)` for 204 No Content.
pub async fn request_json<T, B>(
    client: &Client,
    api_root: &str,
    method: Method,
    path: &str,
    body: Option<&B>,
) -> Result<Option<T>>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    execute(client, api_root, method, path, ResponseShape::Json, body)
        .await?
        .map(|bytes| decode_json(&bytes))
        .transpose()
}

/// Send a request expecting raw text and return the body unmodified.
///
/// Returns `Ok(None)` for 204 No Content.
pub async fn request_raw(
    client: &Client,
    api_root: &str,
    method: Method,
    path: &str,
) -> Result<Option<Bytes>> {
    execute(client, api_root, method, path, ResponseShape::Raw, NO_BODY).await
}

/// GET a JSON endpoint, treating 204 as the type's default value.
pub(crate) async fn get_json<T>(client: &Client, api_root: &str, path: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    Ok(request_json(client, api_root, Method::GET, path, NO_BODY)
        .await?
        .unwrap_or_default())
}

/// Decode a JSON body into `T`.
///
/// # Errors
///
/// Returns [`ClientError::Decode`] with the failure kind, the byte offset of
/// the offending input and a short window of surrounding text.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| decode_error(body, &e))
}

/// Build a [`ClientError::Decode`] from a `serde_json` failure on `body`.
pub(crate) fn decode_error(body: &[u8], err: &serde_json::Error) -> ClientError {
    let kind = match err.classify() {
        Category::Data => DecodeErrorKind::Shape,
        Category::Eof => DecodeErrorKind::Eof,
        Category::Syntax | Category::Io => DecodeErrorKind::Syntax,
    };
    let offset = byte_offset(body, err.line(), err.column());
    let context = offset.map(|o| context_window(body, o));

    ClientError::Decode {
        kind,
        message: err.to_string(),
        offset,
        context,
    }
}

/// Convert a 1-based `(line, column)` position into a byte offset.
///
/// `line == 0` means the decoder reported no position.
fn byte_offset(body: &[u8], line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let mut line_start = 0;
    for _ in 1..line {
        let newline = body[line_start..].iter().position(|&b| b == b'\n')?;
        line_start += newline + 1;
    }

    Some((line_start + column.saturating_sub(1)).min(body.len()))
}

fn context_window(body: &[u8], offset: usize) -> String {
    let start = offset.saturating_sub(DECODE_CONTEXT_RADIUS);
    let end = (offset + DECODE_CONTEXT_RADIUS).min(body.len());
    String::from_utf8_lossy(&body[start..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Sample {
        text: String,
        favorite_count: u64,
    }

    #[test]
    fn test_endpoint_url_root() {
        assert_eq!(endpoint_url("http://host/v1", ""), "http://host/v1");
        assert_eq!(endpoint_url("http://host/v1", "/"), "http://host/v1");
    }

    #[test]
    fn test_endpoint_url_does_not_accumulate() {
        let root = "http://host/v1".to_string();
        let first = endpoint_url(&root, "/keyboards");
        let second = endpoint_url(&root, "/usb");
        assert_eq!(first, "http://host/v1/keyboards");
        assert_eq!(second, "http://host/v1/usb");
        assert_eq!(root, "http://host/v1");
    }

    #[test]
    fn test_accept_header_per_shape() {
        assert_eq!(ResponseShape::Json.accept(), "application/json");
        assert!(ResponseShape::Raw.accept().starts_with("text/plain"));
    }

    #[test]
    fn test_decode_json_success() {
        let sample: Sample = decode_json(br#"{"text": "text", "favorite_count": 24}"#).unwrap();
        assert_eq!(sample.text, "text");
        assert_eq!(sample.favorite_count, 24);
    }

    #[test]
    fn test_decode_json_syntax_error_has_offset_on_correct_line() {
        let body = b"{\n  \"a\": 1,\n  \"b\": @\n}";
        let err = decode_json::<BTreeMap<String, u64>>(body).unwrap_err();

        match err {
            ClientError::Decode {
                kind,
                offset,
                context,
                ..
            } => {
                assert_eq!(kind, DecodeErrorKind::Syntax);
                let offset = offset.expect("offset");
                // Third line spans bytes 12..=19
                assert!((12..=20).contains(&offset), "offset {offset}");
                assert!(context.unwrap().contains('@'));
            }
            other => panic!("Expected Decode, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_json_shape_error() {
        let err = decode_json::<Sample>(br#"{"text": 5, "favorite_count": 1}"#).unwrap_err();
        assert!(matches!(
            err,
            ClientError::Decode {
                kind: DecodeErrorKind::Shape,
                ..
            }
        ));
    }

    #[test]
    fn test_decode_json_truncated_body() {
        let err = decode_json::<Sample>(br#"{"text": "te"#).unwrap_err();
        match err {
            ClientError::Decode { kind, offset, .. } => {
                assert_eq!(kind, DecodeErrorKind::Eof);
                assert!(offset.unwrap() <= 13);
            }
            other => panic!("Expected Decode, got {:?}", other),
        }
    }

    #[test]
    fn test_byte_offset_without_position() {
        assert_eq!(byte_offset(b"{}", 0, 0), None);
    }

    #[test]
    fn test_byte_offset_clamps_to_body() {
        assert_eq!(byte_offset(b"abc", 1, 99), Some(3));
    }

    #[test]
    fn test_context_window_is_bounded() {
        let body = vec![b'x'; 200];
        let window = context_window(&body, 100);
        assert_eq!(window.len(), DECODE_CONTEXT_RADIUS * 2);
    }
}
