//! Chat-completion client for the paragraph analysis call.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{build_prompt, parse_analysis, Analysis, ReasoningError};

pub const TOKEN_ENV_VAR: &str = "HF_TOKEN";
pub const ENDPOINT_ENV_VAR: &str = "ATLAS_LLM_ENDPOINT";
pub const MODEL_ENV_VAR: &str = "ATLAS_LLM_MODEL";

pub const DEFAULT_ENDPOINT: &str = "https://router.huggingface.co/v1";
pub const DEFAULT_MODEL: &str = "meta-llama/Llama-3.1-8B-Instruct";
pub const DEFAULT_MAX_TOKENS: u32 = 500;
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Connection and sampling settings for [`ReasoningClient`].
#[derive(Debug, Clone)]
pub struct ReasoningConfig {
    /// Base URL of an OpenAI-compatible API; `/chat/completions` is appended.
    pub endpoint: String,
    pub api_token: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Overall request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl ReasoningConfig {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            api_token: api_token.into(),
            model: DEFAULT_MODEL.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            timeout: None,
        }
    }

    /// Read the token from `HF_TOKEN`, with optional endpoint and model
    /// overrides from `ATLAS_LLM_ENDPOINT` and `ATLAS_LLM_MODEL`.
    pub fn from_env() -> Result<Self, ReasoningError> {
        Self::from_env_values(
            std::env::var(TOKEN_ENV_VAR).ok(),
            std::env::var(ENDPOINT_ENV_VAR).ok(),
            std::env::var(MODEL_ENV_VAR).ok(),
        )
    }

    /// Build a config from already-read environment values. A missing or
    /// blank token is an error; blank overrides are ignored.
    pub fn from_env_values(
        token: Option<String>,
        endpoint: Option<String>,
        model: Option<String>,
    ) -> Result<Self, ReasoningError> {
        let token = token
            .filter(|v| !v.trim().is_empty())
            .ok_or(ReasoningError::MissingToken(TOKEN_ENV_VAR))?;

        let mut config = Self::new(token);
        if let Some(endpoint) = endpoint.filter(|v| !v.trim().is_empty()) {
            config.endpoint = endpoint;
        }
        if let Some(model) = model.filter(|v| !v.trim().is_empty()) {
            config.model = model;
        }
        Ok(config)
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint.trim_end_matches('/'))
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

pub struct ReasoningClient {
    http: reqwest::Client,
    config: ReasoningConfig,
}

impl ReasoningClient {
    pub fn new(config: ReasoningConfig) -> Result<Self, ReasoningError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &ReasoningConfig {
        &self.config
    }

    /// Ask the model for a summary, claims, and assumptions of `paragraph`.
    pub async fn analyze(&self, paragraph: &str) -> Result<Analysis, ReasoningError> {
        let raw = self.complete(&build_prompt(paragraph)).await?;
        parse_analysis(&raw)
    }

    /// Send one user message and return the first choice's text.
    pub async fn complete(&self, prompt: &str) -> Result<String, ReasoningError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let url = self.config.completions_url();
        tracing::info!(
            url = %url,
            model = %self.config.model,
            prompt_len = prompt.len(),
            "sending chat completion request"
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "chat completion request rejected");
            return Err(ReasoningError::Status { status, body });
        }

        let reply: ChatResponse = response.json().await?;
        let content = reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(ReasoningError::EmptyResponse)?;

        tracing::debug!(content_len = content.len(), "chat completion received");
        Ok(content)
    }
}
