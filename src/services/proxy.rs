use tracing::{error, warn};

use super::provider::{GenerationConfig, GenerativeModel, default_safety_settings};
use crate::error::AppError;

pub const SAFETY_REFUSAL: &str =
    "I cannot provide a response to that request due to safety guidelines.";

/// Forward one trimmed message to the provider and map its answer to a reply.
///
/// A blocked or otherwise incomplete generation is not an error: the caller
/// gets the fixed refusal text. Provider failures are logged here and come
/// back as [`AppError::Upstream`].
pub async fn relay(model: &dyn GenerativeModel, message: &str) -> Result<String, AppError> {
    let response = model
        .generate_content(message, &default_safety_settings(), &GenerationConfig::default())
        .await
        .map_err(|e| {
            error!(error = %e, "generative provider call failed");
            AppError::Upstream(e)
        })?;

    if !response.is_complete() {
        let finish_reason = response
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
            .unwrap_or("none");
        warn!(
            block_reason = response.block_reason().unwrap_or("unknown reason"),
            finish_reason,
            "provider response blocked"
        );
        return Ok(SAFETY_REFUSAL.to_string());
    }

    Ok(response.text())
}
