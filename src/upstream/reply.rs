//! Upstream reply representation.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

/// Body of an upstream response, tagged by how it parsed.
///
/// Some upstream error responses are plain text, not JSON; forcing a JSON
/// parse on those would throw and mask the true status. Tagging keeps the
/// two shapes distinct all the way through the relay path.
#[derive(Debug, Clone, PartialEq)]
pub enum RelayBody {
    Json(Value),
    Text(String),
}

impl RelayBody {
    /// Tag raw upstream bytes: JSON when they parse as JSON, raw text
    /// otherwise. Invalid UTF-8 in a text body is replaced, not rejected.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match serde_json::from_slice(bytes) {
            Ok(value) => RelayBody::Json(value),
            Err(_) => RelayBody::Text(String::from_utf8_lossy(bytes).into_owned()),
        }
    }
}

/// Status and body of an upstream response, ready to relay to the caller.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: RelayBody,
}

impl IntoResponse for UpstreamReply {
    fn into_response(self) -> Response {
        match self.body {
            RelayBody::Json(value) => (self.status, Json(value)).into_response(),
            RelayBody::Text(text) => (self.status, text).into_response(),
        }
    }
}
