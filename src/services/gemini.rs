//! Gemini `generateContent` REST client.
//!
//! Thin HTTP wrapper; response decoding lives in `parse_response` so it can
//! be tested without a network.

use serde::Serialize;

use super::provider::{
    Content, GenerateResponse, GenerationConfig, GenerativeModel, Part, ProviderError,
    SafetySetting,
};
use crate::config::ProviderConfig;

const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: &str, base_url: &str) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ProviderError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            api_key,
            endpoint: endpoint_url(base_url, model),
        })
    }

    /// `None` when the config carries no credential.
    pub fn from_config(config: &ProviderConfig) -> Result<Option<Self>, ProviderError> {
        match &config.api_key {
            Some(key) => Self::new(key.clone(), &config.model, &config.base_url).map(Some),
            None => Ok(None),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate_content(
        &self,
        prompt: &str,
        safety_settings: &[SafetySetting],
        generation_config: &GenerationConfig,
    ) -> Result<GenerateResponse, ProviderError> {
        let body = ApiRequest {
            contents: vec![Content {
                role: Some("user".into()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            safety_settings,
            generation_config,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::ApiRequest(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::ApiRequest(e.to_string()))?;

        if !status.is_success() {
            return Err(ProviderError::ApiResponse {
                status: status.as_u16(),
                body: text,
            });
        }

        parse_response(&text)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    contents: Vec<Content>,
    safety_settings: &'a [SafetySetting],
    generation_config: &'a GenerationConfig,
}

fn endpoint_url(base_url: &str, model: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let model = model.trim_start_matches('/');
    if model.starts_with("models/") || model.starts_with("tunedModels/") {
        format!("{base}/{model}:generateContent")
    } else {
        format!("{base}/models/{model}:generateContent")
    }
}

fn parse_response(json: &str) -> Result<GenerateResponse, ProviderError> {
    serde_json::from_str(json).map_err(|e| ProviderError::ApiParse(e.to_string()))
}
