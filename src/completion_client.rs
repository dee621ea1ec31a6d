use crate::errors::ScoreError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing;

/// Sampling temperature for the scoring completion. Low on purpose: the
/// caller expects near-deterministic output for identical inputs.
const TEMPERATURE: f64 = 0.2;
/// Generation length cap for the scoring completion.
const MAX_TOKENS: u32 = 1800;
/// Generation stops at the first closing brace; the scoring pipeline
/// re-appends it before parsing.
const STOP_SEQUENCE: &str = "}";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
    stop: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Client for the chat-completions API.
///
/// Constructed once at process start and shared read-only across requests;
/// the inner `reqwest::Client` pools connections internally.
#[derive(Clone)]
pub struct CompletionClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl CompletionClient {
    /// Creates a new `CompletionClient`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the completion API.
    /// * `api_key` - The API key for bearer authentication.
    /// * `model` - The model identifier to request.
    pub fn new(base_url: String, api_key: String, model: String) -> Result<Self, ScoreError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| {
                ScoreError::Remote(format!("Failed to create completion client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url,
            api_key,
            model,
        })
    }

    /// Sends a single user-role message and returns the generated text.
    ///
    /// The request uses the fixed sampling settings above: temperature 0.2,
    /// 1800 max tokens, and a `}` stop sequence. Only the first choice's
    /// message content is read from the response.
    ///
    /// # Arguments
    ///
    /// * `prompt` - The full prompt text.
    ///
    /// # Returns
    ///
    /// * `Result<String, ScoreError>` - The generated text, truncated at the
    ///   stop sequence.
    pub async fn complete(&self, prompt: &str) -> Result<String, ScoreError> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        tracing::debug!("Requesting completion from {} (model {})", url, self.model);

        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            stop: vec![STOP_SEQUENCE],
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| ScoreError::Remote(format!("Completion request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ScoreError::Remote(format!(
                "Completion API returned {}: {}",
                status, error_text
            )));
        }

        let data: ChatResponse = response.json().await.map_err(|e| {
            ScoreError::Remote(format!("Failed to parse completion response: {}", e))
        })?;

        let content = data
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                ScoreError::Remote("Completion response missing message content".to_string())
            })?;

        Ok(content)
    }
}
