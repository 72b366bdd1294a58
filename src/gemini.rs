//! Gemini API client for generative-model calls.

use crate::config::AppConfig;
use crate::error::UpstreamError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const MAX_OUTPUT_TOKENS: u32 = 8192;

/// Client for the Google Generative Language REST API.
///
/// Holds an optional credential; without one every call short-circuits with
/// [`UpstreamError::NoCredential`] before any network I/O. One call per
/// request, no retry: the pipeline prefers deterministic degradation over
/// retry storms against a metered API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
}

impl GeminiClient {
    pub fn new(client: Client, config: &AppConfig) -> Self {
        Self {
            client,
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
        }
    }

    /// Whether a credential is configured.
    pub fn available(&self) -> bool {
        self.api_key.is_some()
    }

    /// Send a single generation request and return the raw reply text.
    pub async fn generate(&self, prompt: &str) -> Result<String, UpstreamError> {
        let api_key = self.api_key.as_ref().ok_or(UpstreamError::NoCredential)?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                max_output_tokens: Some(MAX_OUTPUT_TOKENS),
            }),
        };

        debug!(
            "Sending request to Gemini: model={}, prompt={} chars",
            self.model,
            prompt.len()
        );

        let url = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_API_BASE, self.model, api_key
        );

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(UpstreamError::Quota);
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Model(format!("{}: {}", status, error_text)));
        }

        let response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| UpstreamError::Model(e.to_string()))?;

        if let Some(usage) = &response.usage_metadata {
            info!(
                "Gemini response: {} tokens (prompt: {}, candidates: {})",
                usage.total_token_count, usage.prompt_token_count, usage.candidates_token_count
            );
        }

        let content = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| {
                c.parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if content.is_empty() {
            return Err(UpstreamError::Model("empty model reply".to_string()));
        }

        Ok(content)
    }
}

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "maxOutputTokens", skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount", default)]
    prompt_token_count: u32,
    #[serde(rename = "candidatesTokenCount", default)]
    candidates_token_count: u32,
    #[serde(rename = "totalTokenCount", default)]
    total_token_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_credential_short_circuits_without_network() {
        let client = GeminiClient::new(Client::new(), &AppConfig::offline());
        assert!(!client.available());
        let err = client.generate("anything").await.unwrap_err();
        assert_eq!(err.reason(), "no-credential");
    }
}
