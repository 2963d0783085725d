//! The `{error, code, msg, data}` wrapper every backend response uses.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ApiError;

/// Code the backend answers with when the access token is missing or expired.
pub const SESSION_EXPIRED_CODE: i64 = 498;

/// The `error` field is a boolean on most endpoints but some proxies put the
/// message text there instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorFlag {
    Flag(bool),
    Text(String),
}

impl ErrorFlag {
    pub fn is_set(&self) -> bool {
        match self {
            ErrorFlag::Flag(b) => *b,
            ErrorFlag::Text(s) => !s.trim().is_empty(),
        }
    }
}

/// Raw response envelope. `data` is endpoint specific.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    pub error: Option<ErrorFlag>,
    pub code: Option<i64>,
    pub msg: Option<String>,
    pub data: Option<T>,
}

/// A successful envelope with its payload decoded.
#[derive(Debug, Clone)]
pub struct Reply<T> {
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn is_error(&self) -> bool {
        self.error.as_ref().map(ErrorFlag::is_set).unwrap_or(false)
    }

    pub fn is_session_expired(&self) -> bool {
        self.is_error() && self.code == Some(SESSION_EXPIRED_CODE)
    }

    /// User-facing message: `msg`, then a textual `error`, then a generic line.
    pub fn message(&self) -> String {
        if let Some(msg) = self.msg.as_deref().map(str::trim).filter(|m| !m.is_empty()) {
            return msg.to_string();
        }
        if let Some(ErrorFlag::Text(text)) = &self.error {
            let text = text.trim();
            if !text.is_empty() {
                return text.to_string();
            }
        }
        match self.code {
            Some(code) => format!("Request failed with code {}", code),
            None => "Request failed".to_string(),
        }
    }

    /// Classifies an error envelope. Callers check `is_error` first.
    pub fn into_error(self) -> ApiError {
        let message = self.message();
        if self.code == Some(SESSION_EXPIRED_CODE) {
            ApiError::SessionExpired(message)
        } else {
            ApiError::Rejected {
                code: self.code,
                message,
            }
        }
    }
}

impl Envelope<Value> {
    /// Checks the error flag, then decodes `data` into the endpoint's shape.
    /// A `null` or missing `data` decodes to `None`.
    pub fn into_reply<T: DeserializeOwned>(self) -> Result<Reply<T>, ApiError> {
        if self.is_error() {
            return Err(self.into_error());
        }
        let message = self.msg.filter(|m| !m.trim().is_empty());
        let data = match self.data {
            None | Some(Value::Null) => None,
            Some(value) => Some(serde_json::from_value(value)?),
        };
        Ok(Reply { message, data })
    }
}
