use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::Method,
};
use tracing::{Instrument, info_span};
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::proxy::relay,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    // Credential check comes before input validation.
    let Some(provider) = state.provider() else {
        tracing::error!("chat request rejected: GOOGLE_API_KEY is not set");
        return Err(AppError::NotConfigured);
    };

    let request = ChatRequest::from_body(&body)?;

    let span = info_span!("chat", request_id = %Uuid::new_v4(), chars = request.message.chars().count());
    let reply = relay(&**provider, &request.message)
        .instrument(span)
        .await?;

    Ok(Json(ChatResponse { reply }))
}

pub async fn method_not_allowed(method: Method) -> AppError {
    AppError::MethodNotAllowed(method)
}
