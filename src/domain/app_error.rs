//! Application error envelope and JSON helpers
//!
//! [`AppError`] is what external callers hand back to clients. Decoding never
//! fails: a body that is not an encoded `AppError` becomes a new error that
//! carries the raw body in `detailed_error`.

use std::collections::HashMap;
use std::io::Read;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::error::DomainError;

/// Status code used when a body cannot be decoded
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

/// Serializable error returned to clients
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Error)]
#[serde(default)]
#[error("{location}: {message}, {detailed_error}")]
pub struct AppError {
    /// Stable message key
    pub id: String,
    /// Message shown to the end user
    pub message: String,
    /// Internal details for developers
    pub detailed_error: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub request_id: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub status_code: u16,
    /// Function or component that raised the error
    #[serde(skip)]
    pub location: String,
    #[serde(skip_serializing_if = "is_false")]
    pub is_oauth: bool,
    #[serde(skip)]
    params: HashMap<String, String>,
}

fn is_zero(value: &u16) -> bool {
    *value == 0
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl AppError {
    /// Create a new error; the message starts out as the id
    pub fn new(
        location: impl Into<String>,
        id: impl Into<String>,
        detailed_error: impl Into<String>,
        status_code: u16,
    ) -> Self {
        let id = id.into();

        Self {
            message: id.clone(),
            id,
            detailed_error: detailed_error.into(),
            status_code,
            location: location.into(),
            ..Self::default()
        }
    }

    /// Attach template parameters for the message
    pub fn with_params(mut self, params: HashMap<String, String>) -> Self {
        self.params = params;
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }

    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }

    /// Encode as JSON
    pub fn to_json(&self) -> Result<String, DomainError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from a reader, falling back to an error that wraps the raw body
    pub fn from_json(mut data: impl Read) -> Self {
        let mut body = String::new();
        if let Err(e) = data.read_to_string(&mut body) {
            body = e.to_string();
        }

        match serde_json::from_str::<AppError>(&body) {
            Ok(err) => err,
            Err(e) => {
                debug!(error = %e, "Failed to decode app error body");
                Self::new(
                    "AppError::from_json",
                    "app_error.decode_json",
                    format!("body: {}", body),
                    STATUS_INTERNAL_SERVER_ERROR,
                )
            }
        }
    }
}

/// Encode a string map as JSON
pub fn map_to_json(map: &HashMap<String, String>) -> Result<String, DomainError> {
    Ok(serde_json::to_string(map)?)
}

/// Decode a string map, returning an empty map when the input is not one
pub fn map_from_json(mut data: impl Read) -> HashMap<String, String> {
    let mut body = String::new();
    if data.read_to_string(&mut body).is_err() {
        return HashMap::new();
    }

    serde_json::from_str(&body).unwrap_or_default()
}
