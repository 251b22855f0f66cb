use crate::models::RelayRequest;
use reqwest::{Client, Method};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Cross-origin response headers attached to every relay response
///
/// The same set is stripped from incoming request headers before forwarding,
/// so the upstream never sees conflicting values it might echo back.
pub const CORS_HEADERS: [(&str, &str); 4] = [
    ("Access-Control-Allow-Origin", "*"),
    (
        "Access-Control-Allow-Headers",
        "authorization, x-client-info, apikey, content-type",
    ),
    (
        "Access-Control-Allow-Methods",
        "GET, POST, PUT, DELETE, OPTIONS",
    ),
    ("Access-Control-Max-Age", "86400"),
];

/// Errors that can occur while relaying a request upstream
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("upstream unreachable: {0}")]
    Unreachable(String),

    #[error("upstream timed out after {0}s")]
    Timeout(u64),

    #[error("upstream response could not be decoded: {0}")]
    Decode(String),

    #[error("invalid relay request: {0}")]
    InvalidRequest(String),
}

/// Decoded upstream response
#[derive(Debug, Clone)]
pub struct RelayResponse {
    pub status: u16,
    pub body: Value,
}

/// Stateless HTTP relay
///
/// Forwards a described request to a third-party endpoint on behalf of a
/// browser caller that cross-origin policy would otherwise block. Single
/// attempt per call - retry policy belongs to the caller.
pub struct RelayClient {
    client: Client,
    timeout_secs: u64,
}

impl RelayClient {
    /// Create a new relay client with a bounded upstream timeout
    pub fn new(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            timeout_secs,
        }
    }

    /// Forward the described request upstream and decode the response
    ///
    /// Cross-origin response headers in the incoming header set are dropped
    /// before forwarding. The body, when present, is serialized as JSON.
    pub async fn forward(&self, spec: &RelayRequest) -> Result<RelayResponse, RelayError> {
        let method = Method::from_bytes(spec.method.to_uppercase().as_bytes())
            .map_err(|_| RelayError::InvalidRequest(format!("unsupported method: {}", spec.method)))?;

        tracing::debug!("Relaying {} {}", method, spec.url);

        let mut request = self.client.request(method, &spec.url);

        for (name, value) in &spec.headers {
            if is_cors_response_header(name) {
                tracing::debug!("Dropping conflicting header from relay request: {}", name);
                continue;
            }
            request = request.header(name.as_str(), value.as_str());
        }

        if let Some(body) = &spec.body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| self.classify(e))?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(|e| self.classify(e))?;

        let body = decode_body(&bytes)?;

        tracing::debug!("Relay to {} returned status {}", spec.url, status);

        Ok(RelayResponse { status, body })
    }

    fn classify(&self, err: reqwest::Error) -> RelayError {
        if err.is_timeout() {
            RelayError::Timeout(self.timeout_secs)
        } else {
            RelayError::Unreachable(err.to_string())
        }
    }
}

/// Decode an upstream body with a layered strategy
///
/// Structured decode is attempted first regardless of the declared content
/// type, since upstream APIs routinely misreport it. Non-JSON text falls back
/// to a `{ "text": ... }` wrapper; only bytes that are not even valid UTF-8
/// fail the decode.
fn decode_body(bytes: &[u8]) -> Result<Value, RelayError> {
    if let Ok(json) = serde_json::from_slice::<Value>(bytes) {
        return Ok(json);
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(serde_json::json!({ "text": text })),
        Err(e) => Err(RelayError::Decode(e.to_string())),
    }
}

fn is_cors_response_header(name: &str) -> bool {
    CORS_HEADERS
        .iter()
        .any(|(cors_name, _)| name.eq_ignore_ascii_case(cors_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_json() {
        let body = decode_body(br#"{"a":1}"#).unwrap();
        assert_eq!(body, serde_json::json!({ "a": 1 }));
    }

    #[test]
    fn test_decode_plain_text_wraps() {
        let body = decode_body(b"not json").unwrap();
        assert_eq!(body, serde_json::json!({ "text": "not json" }));
    }

    #[test]
    fn test_decode_invalid_utf8_fails() {
        let err = decode_body(&[0xff, 0xfe, 0xfd]).unwrap_err();
        assert!(matches!(err, RelayError::Decode(_)));
    }

    #[test]
    fn test_cors_response_header_detection() {
        assert!(is_cors_response_header("Access-Control-Allow-Origin"));
        assert!(is_cors_response_header("access-control-max-age"));
        assert!(!is_cors_response_header("Authorization"));
        assert!(!is_cors_response_header("Content-Type"));
    }

    #[test]
    fn test_relay_client_creation() {
        let client = RelayClient::new(45);
        assert_eq!(client.timeout_secs, 45);
    }
}
