//! Provider seam: the generative-content service behind the proxy.
//!
//! Types mirror the Gemini `generateContent` wire format so the HTTP client
//! can (de)serialize them directly, while handlers and tests only see the
//! [`GenerativeModel`] trait.

use serde::{Deserialize, Serialize};

/// Finish reason of a normally completed candidate.
pub const FINISH_REASON_STOP: &str = "STOP";

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API request failed: {0}")]
    ApiRequest(String),

    #[error("API response error: status {status}: {body}")]
    ApiResponse { status: u16, body: String },

    #[error("API response parse failed: {0}")]
    ApiParse(String),

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// SAFETY + GENERATION SETTINGS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmCategory {
    HarmCategoryHarassment,
    HarmCategoryHateSpeech,
    HarmCategorySexuallyExplicit,
    HarmCategoryDangerousContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmBlockThreshold {
    BlockLowAndAbove,
    BlockMediumAndAbove,
    BlockOnlyHigh,
    BlockNone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: HarmBlockThreshold,
}

/// Blocks medium-and-above severity in all four harm categories.
pub fn default_safety_settings() -> Vec<SafetySetting> {
    [
        HarmCategory::HarmCategoryHarassment,
        HarmCategory::HarmCategoryHateSpeech,
        HarmCategory::HarmCategorySexuallyExplicit,
        HarmCategory::HarmCategoryDangerousContent,
    ]
    .into_iter()
    .map(|category| SafetySetting {
        category,
        threshold: HarmBlockThreshold::BlockMediumAndAbove,
    })
    .collect()
}

/// Generation parameters. Every field left unset means provider defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

// =============================================================================
// RESPONSE
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GenerateResponse {
    /// True when the first candidate finished normally.
    pub fn is_complete(&self) -> bool {
        self.candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
            == Some(FINISH_REASON_STOP)
    }

    /// Concatenated text parts of the first candidate.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }

    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback.as_ref()?.block_reason.as_deref()
    }
}

// =============================================================================
// TRAIT
// =============================================================================

/// A single-shot text generator.
#[async_trait::async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Send one user prompt with the given safety and generation settings.
    async fn generate_content(
        &self,
        prompt: &str,
        safety_settings: &[SafetySetting],
        generation_config: &GenerationConfig,
    ) -> Result<GenerateResponse, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(finish: Option<&str>, parts: &[&str]) -> Candidate {
        Candidate {
            content: Some(Content {
                role: Some("model".into()),
                parts: parts
                    .iter()
                    .map(|t| Part { text: Some(t.to_string()) })
                    .collect(),
            }),
            finish_reason: finish.map(str::to_string),
        }
    }

    #[test]
    fn safety_settings_cover_four_categories_at_medium() {
        let settings = default_safety_settings();
        assert_eq!(settings.len(), 4);
        assert!(
            settings
                .iter()
                .all(|s| s.threshold == HarmBlockThreshold::BlockMediumAndAbove)
        );

        let json = serde_json::to_value(&settings[0]).unwrap();
        assert_eq!(json["category"], "HARM_CATEGORY_HARASSMENT");
        assert_eq!(json["threshold"], "BLOCK_MEDIUM_AND_ABOVE");
    }

    #[test]
    fn empty_generation_config_serializes_to_empty_object() {
        let json = serde_json::to_string(&GenerationConfig::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn completion_requires_stop_on_first_candidate() {
        let done = GenerateResponse {
            candidates: vec![candidate(Some("STOP"), &["hi"])],
            prompt_feedback: None,
        };
        assert!(done.is_complete());

        let blocked = GenerateResponse {
            candidates: vec![candidate(Some("SAFETY"), &[])],
            prompt_feedback: None,
        };
        assert!(!blocked.is_complete());

        assert!(!GenerateResponse::default().is_complete());

        let missing = GenerateResponse {
            candidates: vec![candidate(None, &["partial"])],
            prompt_feedback: None,
        };
        assert!(!missing.is_complete());
    }

    #[test]
    fn text_joins_parts_of_first_candidate() {
        let resp = GenerateResponse {
            candidates: vec![
                candidate(Some("STOP"), &["Hello, ", "world"]),
                candidate(Some("STOP"), &["ignored"]),
            ],
            prompt_feedback: None,
        };
        assert_eq!(resp.text(), "Hello, world");
    }
}
