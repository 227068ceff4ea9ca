//! Google Gemini text-generation provider.
//!
//! Calls the `generateContent` REST endpoint of either the Gemini API or
//! Vertex AI.
//!
//! # Authentication
//!
//! - **Gemini API**: API key sent as the `key` query parameter.
//! - **Vertex AI**: Bearer token (for example from
//!   `gcloud auth print-access-token`) with a project and location.
//!
//! # Note
//!
//! Requests are attempted once; the fallback classifier bounds the call with
//! its own timeout.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::llms::base_llm::TextGenerator;
use crate::utilities::errors::LlmError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default sampling temperature; classification wants near-greedy output.
pub const DEFAULT_TEMPERATURE: f64 = 0.1;

/// Default nucleus sampling parameter.
pub const DEFAULT_TOP_P: f64 = 0.1;

/// Default top-K sampling parameter.
pub const DEFAULT_TOP_K: u32 = 1;

/// Default Vertex AI location.
pub const DEFAULT_LOCATION: &str = "us-central1";

/// Longest error body excerpt kept in an error message.
const MAX_ERROR_BODY: usize = 500;

// ---------------------------------------------------------------------------
// GeminiGenerator
// ---------------------------------------------------------------------------

/// Gemini `generateContent` client.
///
/// # Example
///
/// ```ignore
/// let gemini = GeminiGenerator::new("gemini-2.0-flash", Some(key), Duration::from_secs(10))?;
/// let label = gemini.generate("Reply with one word.").await?;
/// ```
#[derive(Clone)]
pub struct GeminiGenerator {
    model: String,
    api_key: Option<String>,
    /// Google Cloud project ID (Vertex AI only).
    project: Option<String>,
    /// Google Cloud location (Vertex AI only).
    location: String,
    use_vertexai: bool,
    client: reqwest::Client,
}

impl fmt::Debug for GeminiGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiGenerator")
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("use_vertexai", &self.use_vertexai)
            .field("project", &self.project)
            .field("location", &self.location)
            .finish()
    }
}

impl GeminiGenerator {
    /// Create a Gemini API client.
    ///
    /// `timeout` bounds the whole HTTP request.
    pub fn new(
        model: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            model: model.into(),
            api_key,
            project: None,
            location: DEFAULT_LOCATION.to_string(),
            use_vertexai: false,
            client,
        })
    }

    /// Route requests through Vertex AI.
    pub fn with_vertex_ai(mut self, project: impl Into<String>, location: Option<String>) -> Self {
        self.use_vertexai = true;
        self.project = Some(project.into());
        if let Some(location) = location {
            self.location = location;
        }
        self
    }

    pub fn uses_vertex_ai(&self) -> bool {
        self.use_vertexai
    }

    /// Get the API endpoint URL.
    fn api_endpoint(&self) -> String {
        if self.use_vertexai {
            let project = self.project.as_deref().unwrap_or("default");
            format!(
                "https://{loc}-aiplatform.googleapis.com/v1/projects/{project}/locations/{loc}/publishers/google/models/{model}:generateContent",
                loc = self.location,
                project = project,
                model = self.model
            )
        } else {
            format!(
                "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
                self.model
            )
        }
    }

    /// Near-greedy sampling; the reply should be a single label.
    fn generation_config() -> Value {
        serde_json::json!({
            "temperature": DEFAULT_TEMPERATURE,
            "topP": DEFAULT_TOP_P,
            "topK": DEFAULT_TOP_K,
        })
    }

    /// Build the request body for a single user turn.
    fn build_request_body(&self, prompt: &str) -> Value {
        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }],
            }],
            "generationConfig": Self::generation_config(),
        })
    }

    /// Concatenate the text parts of the first candidate.
    fn parse_response(response: &Value) -> Result<String, LlmError> {
        if let Some(error) = response.get("error") {
            let msg = error
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("Unknown Gemini API error");
            return Err(LlmError::Api(msg.to_string()));
        }

        let candidates = response
            .get("candidates")
            .and_then(|c| c.as_array())
            .ok_or_else(|| LlmError::MalformedResponse("No candidates in Gemini response".into()))?;

        let candidate = candidates.first().ok_or_else(|| {
            LlmError::MalformedResponse("Empty candidates array in Gemini response".into())
        })?;

        let parts = candidate
            .get("content")
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.as_array())
            .ok_or_else(|| {
                let reason = candidate
                    .get("finishReason")
                    .and_then(|r| r.as_str())
                    .unwrap_or("unknown");
                LlmError::MalformedResponse(format!(
                    "No content.parts in Gemini response (finishReason: {})",
                    reason
                ))
            })?;

        Ok(parts
            .iter()
            .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
            .collect::<Vec<_>>()
            .join(""))
    }

    /// Log token usage from a Gemini response.
    fn log_token_usage(response: &Value) {
        if let Some(usage) = response.get("usageMetadata") {
            let count = |key: &str| usage.get(key).and_then(|v| v.as_i64()).unwrap_or(0);
            log::debug!(
                "Gemini usage: prompt_tokens={} completion_tokens={} cached_tokens={}",
                count("promptTokenCount"),
                count("candidatesTokenCount"),
                count("cachedContentTokenCount"),
            );
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    fn model(&self) -> &str {
        &self.model
    }

    fn provider(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let api_key = self.api_key.as_ref().ok_or(LlmError::MissingApiKey)?;

        log::debug!(
            "GeminiGenerator.generate: model={}, vertexai={}, prompt_chars={}",
            self.model,
            self.use_vertexai,
            prompt.chars().count(),
        );

        let mut request = self
            .client
            .post(self.api_endpoint())
            .header("content-type", "application/json");

        if self.use_vertexai {
            request = request.header("authorization", format!("Bearer {}", api_key));
        } else {
            request = request.query(&[("key", api_key.as_str())]);
        }

        let response = request.json(&self.build_request_body(prompt)).send().await?;
        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            return Err(LlmError::Status {
                status: status.as_u16(),
                body: truncate(&response_text, MAX_ERROR_BODY),
            });
        }

        let response_json: Value = serde_json::from_str(&response_text).map_err(|e| {
            LlmError::MalformedResponse(format!(
                "Failed to parse Gemini response: {} - Body: {}",
                e,
                truncate(&response_text, MAX_ERROR_BODY)
            ))
        })?;

        Self::log_token_usage(&response_json);
        Self::parse_response(&response_json)
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
