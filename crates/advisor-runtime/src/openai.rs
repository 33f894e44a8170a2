//! OpenAI Completion Provider
//!
//! Implementation of `CompletionProvider` against the hosted OpenAI
//! responses endpoint, with the output constrained to a named JSON schema.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use advisor_core::{AdvisorError, Result};

use crate::completion::{CompletionProvider, SchemaConstraint};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// OpenAI provider configuration
#[derive(Clone, Debug)]
pub struct OpenAiConfig {
    /// API credential
    pub api_key: String,

    /// API base URL (overridable for proxies and tests)
    pub base_url: String,

    /// Model identifier
    pub model: String,
}

impl OpenAiConfig {
    /// Read configuration from the environment
    ///
    /// Returns `None` when `OPENAI_API_KEY` is unset. That is a supported
    /// degraded mode, not a startup error: the pipeline serves the fixed
    /// fallback analysis instead.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty())?;
        let base_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());

        Some(Self {
            api_key,
            base_url,
            model,
        })
    }
}

/// OpenAI-backed completion provider
pub struct OpenAiProvider {
    client: reqwest::Client,
    config: OpenAiConfig,
}

/// Response envelope of the responses endpoint
///
/// Only the fields the pipeline needs; everything else is ignored.
#[derive(Debug, Deserialize)]
struct ResponsesEnvelope {
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    #[serde(default)]
    text: String,
}

impl OpenAiProvider {
    /// Create from configuration
    pub fn from_config(config: OpenAiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create from environment variables; `None` when no credential is set
    pub fn from_env() -> Option<Self> {
        OpenAiConfig::from_env().map(Self::from_config)
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Concatenate the textual parts of the response output
    fn extract_text(envelope: &ResponsesEnvelope) -> String {
        envelope
            .output
            .iter()
            .flat_map(|item| item.content.iter())
            .map(|part| part.text.as_str())
            .collect()
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(&self, prompt: &str, schema: &SchemaConstraint) -> Result<String> {
        let body = json!({
            "model": self.config.model,
            "input": prompt,
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": schema.name,
                    "schema": schema.schema,
                },
            },
        });

        let response = self
            .client
            .post(format!("{}/responses", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AdvisorError::Completion(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AdvisorError::Completion(format!(
                "service returned {status}: {detail}"
            )));
        }

        let envelope: ResponsesEnvelope = response
            .json()
            .await
            .map_err(|e| AdvisorError::Completion(e.to_string()))?;

        let text = Self::extract_text(&envelope);
        if text.is_empty() {
            return Err(AdvisorError::Completion("service returned no output".into()));
        }

        Ok(text)
    }

    fn name(&self) -> &str {
        "OpenAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_concatenates_parts() {
        let envelope: ResponsesEnvelope = serde_json::from_value(json!({
            "output": [
                {"content": [{"text": "{\"summary\":"}, {"text": " \"ok\"}"}]}
            ]
        }))
        .unwrap();
        assert_eq!(OpenAiProvider::extract_text(&envelope), "{\"summary\": \"ok\"}");
    }

    #[test]
    fn test_envelope_tolerates_unknown_fields() {
        let envelope: ResponsesEnvelope = serde_json::from_value(json!({
            "id": "resp_123",
            "status": "completed",
            "output": [
                {"type": "message", "role": "assistant", "content": [
                    {"type": "output_text", "text": "payload"}
                ]}
            ]
        }))
        .unwrap();
        assert_eq!(OpenAiProvider::extract_text(&envelope), "payload");
    }

    #[test]
    fn test_empty_envelope_extracts_nothing() {
        let envelope: ResponsesEnvelope = serde_json::from_value(json!({})).unwrap();
        assert_eq!(OpenAiProvider::extract_text(&envelope), "");
    }
}
