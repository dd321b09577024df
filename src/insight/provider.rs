//! Provider abstraction over the external generation service.

use crate::config::InsightConfig;
use async_trait::async_trait;
use serde_json::{json, Value};
use thiserror::Error;

/// Errors at the external generation service boundary.
///
/// These never escape the insight client; they exist so the boundary can log
/// what went wrong before degrading.
#[derive(Debug, Error)]
pub enum InsightError {
    #[error("API key environment variable {0} is not set")]
    MissingApiKey(String),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// A text-in/text-out generation backend.
#[async_trait]
pub trait InsightProvider: Send + Sync {
    /// Generate a free-text reply.
    async fn generate(&self, prompt: &str) -> Result<String, InsightError>;

    /// Generate a reply constrained to the given JSON schema.
    async fn generate_json(&self, prompt: &str, schema: Value) -> Result<Value, InsightError>;
}

/// Client for a Gemini-style `generateContent` REST endpoint.
pub struct GeminiProvider {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiProvider {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    /// Build a provider from config, reading the API key from the configured
    /// environment variable. A missing key is a wiring problem and is
    /// reported immediately rather than at request time.
    pub fn from_config(config: &InsightConfig) -> Result<Self, InsightError> {
        let api_key = std::env::var(&config.api_key_env)
            .map_err(|_| InsightError::MissingApiKey(config.api_key_env.clone()))?;
        Ok(Self::new(
            config.base_url.clone(),
            config.model.clone(),
            api_key,
        ))
    }

    async fn generate_content(&self, body: Value) -> Result<Value, InsightError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    fn extract_text(response: &Value) -> Result<String, InsightError> {
        response["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| InsightError::MalformedResponse("no text candidate".to_string()))
    }
}

#[async_trait]
impl InsightProvider for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, InsightError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });
        let response = self.generate_content(body).await?;
        Self::extract_text(&response)
    }

    async fn generate_json(&self, prompt: &str, schema: Value) -> Result<Value, InsightError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema
            }
        });
        let response = self.generate_content(body).await?;
        let text = Self::extract_text(&response)?;
        serde_json::from_str(&text)
            .map_err(|e| InsightError::MalformedResponse(e.to_string()))
    }
}
