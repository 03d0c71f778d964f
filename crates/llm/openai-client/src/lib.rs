//! # OpenAI-compatible API client
//!
//! Thin wrapper around [async-openai] for non-streaming chat completion.
//! Provides token masking for safe logging and a simple request/response API.
//!
//! async-openai retries rate-limited requests with exponential backoff by default;
//! this client replaces that policy with one that gives up immediately, so every
//! call reaches the API at most once.

use async_openai::{config::OpenAIConfig, types::CreateChatCompletionRequestArgs, Client};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

pub use async_openai::error::{ApiError, OpenAIError};
pub use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs,
};

/// Returned (inside `anyhow::Error`) when the API answers without any usable text.
#[derive(Debug, Error)]
#[error("No content in chat completion response")]
pub struct EmptyCompletion;

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_ascii() {
        return "***".to_string();
    }
    format!("{}***{}", &token[..7], &token[len - 4..])
}

fn no_retry_backoff() -> backoff::ExponentialBackoff {
    backoff::ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build()
}

/// Chat client for OpenAI-compatible endpoints (OpenAI, Gemini's OpenAI layer, proxies).
#[derive(Clone)]
pub struct OpenAIClient {
    client: Arc<Client<OpenAIConfig>>,
    config: OpenAIConfig,
    /// API key stored only for logging (masked).
    api_key_for_logging: String,
}

impl OpenAIClient {
    /// Builds a client with a custom base URL (e.g. Gemini's OpenAI-compatible endpoint).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key.clone())
            .with_api_base(base_url.trim_end_matches('/'));
        Self::from_config(config, api_key)
    }

    fn from_config(config: OpenAIConfig, api_key: String) -> Self {
        let client = Client::with_config(config.clone()).with_backoff(no_retry_backoff());
        Self {
            client: Arc::new(client),
            config,
            api_key_for_logging: api_key,
        }
    }

    /// Replaces the HTTP client with one that aborts requests after `timeout`.
    pub fn with_http_timeout(self, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let client = Client::with_config(self.config.clone())
            .with_http_client(http)
            .with_backoff(no_retry_backoff());
        Ok(Self {
            client: Arc::new(client),
            ..self
        })
    }

    /// Sends a chat completion request and returns the first choice's text.
    ///
    /// Logs the masked API key and token usage. Errors from async-openai are returned
    /// unchanged inside `anyhow::Error` so callers can downcast to [`OpenAIError`];
    /// a response without text yields [`EmptyCompletion`].
    pub async fn chat_completion(
        &self,
        model: &str,
        messages: Vec<ChatCompletionRequestMessage>,
    ) -> anyhow::Result<String> {
        tracing::info!(
            model = %model,
            message_count = messages.len(),
            api_key = %mask_token(&self.api_key_for_logging),
            "chat_completion request"
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages(messages)
            .build()?;

        if let Ok(json) = serde_json::to_string(&request) {
            tracing::debug!(request_json = %json, "chat_completion request JSON");
        }

        let response = self.client.chat().create(request).await?;

        if let Some(ref u) = response.usage {
            tracing::info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "chat_completion usage"
            );
        }

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| EmptyCompletion.into())
    }
}
