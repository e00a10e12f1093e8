// src/error.rs
use axum::{
    Json,
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::message::ErrorBody;
use crate::services::provider::ProviderError;

pub const BAD_REQUEST_MESSAGE: &str = "Message is required and must be a non-empty string.";
pub const NOT_CONFIGURED_MESSAGE: &str =
    "AI Service is not configured on the server due to missing API key.";
pub const UPSTREAM_FAILURE_MESSAGE: &str =
    "Failed to get response from AI service. Please try again later.";

/// Everything the chat endpoint can answer with other than a reply.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid chat message")]
    BadRequest,

    #[error("method {0} not allowed")]
    MethodNotAllowed(Method),

    #[error("provider credentials are not configured")]
    NotConfigured,

    /// Provider detail stays in the logs; the client only sees the generic text.
    #[error("provider call failed: {0}")]
    Upstream(#[from] ProviderError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::NotConfigured | Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text placed in the `error` field of the response body.
    pub fn client_message(&self) -> String {
        match self {
            Self::BadRequest => BAD_REQUEST_MESSAGE.to_string(),
            Self::MethodNotAllowed(method) => format!("Method {method} Not Allowed"),
            Self::NotConfigured => NOT_CONFIGURED_MESSAGE.to_string(),
            Self::Upstream(_) => UPSTREAM_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorBody {
            error: self.client_message(),
        });

        match self {
            Self::MethodNotAllowed(_) => (
                status,
                [(header::ALLOW, HeaderValue::from_static("POST"))],
                body,
            )
                .into_response(),
            _ => (status, body).into_response(),
        }
    }
}
