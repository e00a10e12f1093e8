//! How the widget reaches the proxy endpoint.

use serde::Deserialize;

use crate::message::{ChatRequest, ChatResponse};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/chat";
/// Stands in for an error body that could not be decoded.
pub const UNKNOWN_API_ERROR: &str = "Unknown API error";

/// What the endpoint said, once a response actually arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome {
    Reply(String),
    /// Non-2xx answer. `error` is the body's `error` field, if any.
    Rejected { status: u16, error: Option<String> },
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("could not reach chat endpoint: {0}")]
    Connect(String),

    #[error("could not decode chat reply: {0}")]
    Decode(String),
}

#[async_trait::async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, message: &str) -> Result<ApiOutcome, TransportError>;
}

/// Posts `{ "message": ... }` as JSON to the proxy endpoint.
#[derive(Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(Deserialize)]
struct LenientErrorBody {
    #[serde(default)]
    error: Option<serde_json::Value>,
}

#[async_trait::async_trait]
impl ChatTransport for HttpTransport {
    async fn send(&self, message: &str) -> Result<ApiOutcome, TransportError> {
        let body = ChatRequest {
            message: message.to_string(),
        };
        let response = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError::Connect(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::Connect(e.to_string()))?;

        if status.is_success() {
            let reply: ChatResponse =
                serde_json::from_slice(&bytes).map_err(|e| TransportError::Decode(e.to_string()))?;
            return Ok(ApiOutcome::Reply(reply.reply));
        }

        let error = match serde_json::from_slice::<LenientErrorBody>(&bytes) {
            Ok(parsed) => parsed.error.and_then(|v| match v {
                serde_json::Value::String(s) => Some(s),
                serde_json::Value::Null => None,
                other => Some(other.to_string()),
            }),
            Err(_) => Some(UNKNOWN_API_ERROR.to_string()),
        };
        Ok(ApiOutcome::Rejected {
            status: status.as_u16(),
            error,
        })
    }
}
