//! Text generation via an OpenAI-compatible chat-completions API.
//!
//! Endpoint: `/v1/chat/completions`. One non-streaming call per
//! invocation; the first completion choice's content is returned trimmed.

use super::{GenRequest, TextGen};
use crate::error::Result;
use crate::RouterError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Client for an OpenAI-compatible chat-completions API.
///
/// # Example
///
/// ```
/// use chat_router::textgen::OpenAiTextGen;
///
/// let textgen = OpenAiTextGen::new("sk-...", "gpt-4o-mini");
/// ```
#[derive(Clone)]
pub struct OpenAiTextGen {
    /// API key, sent as `Authorization: Bearer {key}`.
    api_key: String,
    /// Model identifier (e.g. `"gpt-4o-mini"`).
    model: String,
    /// Base URL of the provider. Overridable for tests.
    base_url: String,
}

impl std::fmt::Debug for OpenAiTextGen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiTextGen")
            .field(
                "api_key",
                &if self.api_key.len() > 6 {
                    format!("{}***", &self.api_key[..6])
                } else {
                    "***".to_string()
                },
            )
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl OpenAiTextGen {
    /// Create a client for the hosted API.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the base URL (used by tests to point at a stub server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns the configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the request body for `/v1/chat/completions`.
    fn build_body(&self, request: &GenRequest) -> Value {
        json!({
            "model": self.model,
            "temperature": request.temperature,
            "messages": [
                {"role": "system", "content": request.system_prompt},
                {"role": "user", "content": request.user_prompt},
            ],
        })
    }

    /// Build the reqwest request with the auth header applied.
    fn build_http_request(&self, client: &Client, body: &Value) -> reqwest::RequestBuilder {
        let url = format!(
            "{}/v1/chat/completions",
            self.base_url.trim_end_matches('/')
        );
        client
            .post(url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(body)
    }
}

#[async_trait]
impl TextGen for OpenAiTextGen {
    async fn generate(&self, client: &Client, request: &GenRequest) -> Result<String> {
        let body = self.build_body(request);
        let resp = self.build_http_request(client, &body).send().await?;

        let status = resp.status().as_u16();
        if !resp.status().is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(RouterError::Http { status, body: text });
        }

        let json_resp: Value = resp.json().await?;
        let text = json_resp
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .trim()
            .to_string();

        Ok(text)
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}
