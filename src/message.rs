// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    /// Parse a raw request body. Anything other than a JSON object with a
    /// non-blank string `message` is rejected as a bad request.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        let value: Value = serde_json::from_slice(body).map_err(|_| AppError::BadRequest)?;

        match value.get("message").and_then(Value::as_str) {
            Some(message) if !message.trim().is_empty() => Ok(Self {
                message: message.trim().to_string(),
            }),
            _ => Err(AppError::BadRequest),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}
