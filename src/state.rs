// src/state.rs
use std::sync::Arc;

use crate::config::ProviderConfig;
use crate::services::gemini::GeminiClient;
use crate::services::provider::{GenerativeModel, ProviderError};

pub type SharedState = Arc<AppState>;

/// Process-wide state, built once at startup and read-only afterwards.
pub struct AppState {
    /// `None` marks the provider as unavailable (no credential).
    provider: Option<Arc<dyn GenerativeModel>>,
}

impl AppState {
    pub fn new(provider: Option<Arc<dyn GenerativeModel>>) -> Self {
        Self { provider }
    }

    pub fn unconfigured() -> Self {
        Self { provider: None }
    }

    pub fn from_config(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let provider = GeminiClient::from_config(config)?
            .map(|client| Arc::new(client) as Arc<dyn GenerativeModel>);
        Ok(Self { provider })
    }

    pub fn provider(&self) -> Option<&Arc<dyn GenerativeModel>> {
        self.provider.as_ref()
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }
}
