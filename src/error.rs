//! Error types for the network, storage and clipboard helpers.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Failures surfaced by the HTTP helper.
#[derive(Error, Debug)]
pub enum ApiError {
    /// `fetch` itself rejected (offline, CORS, aborted, ...)
    #[error("{0}")]
    Transport(String),

    /// The response body was not valid JSON
    #[error("invalid JSON response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request body could not be serialized
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Non-2xx status. `message` is the server's `error` field or the
    /// generic fallback.
    #[error("{message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<ApiError> for JsValue {
    fn from(err: ApiError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,

    #[error("storage quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unsupported,

    #[error("copy rejected: {0}")]
    Rejected(String),
}

impl From<ClipboardError> for JsValue {
    fn from(err: ClipboardError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Best-effort text for a thrown JS value (`Error.message`, a plain string,
/// or the debug form as a last resort).
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_displays_server_message_only() {
        let err = ApiError::Status {
            status: 400,
            message: "Task not found".to_string(),
        };
        assert_eq!(err.to_string(), "Task not found");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn transport_error_has_no_status() {
        let err = ApiError::Transport("Failed to fetch".into());
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "Failed to fetch");
    }
}
