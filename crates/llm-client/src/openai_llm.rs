//! OpenAI-compatible LlmClient: wraps openai-client and optionally prepends a system message.

use async_trait::async_trait;
use prompt::ChatMessage;
use tracing::{info, instrument};

use super::{chat_message_to_openai, LlmClient, LlmConfig, LlmError};

/// LlmClient implementation on top of openai-client.
#[derive(Clone)]
pub struct OpenAILlmClient {
    client: openai_client::OpenAIClient,
    model: String,
    system_prompt: Option<String>,
}

impl OpenAILlmClient {
    /// Builds a client from config (key, endpoint, model, optional system prompt and timeout).
    pub fn from_config(config: &dyn LlmConfig) -> anyhow::Result<Self> {
        let mut client = openai_client::OpenAIClient::with_base_url(
            config.api_key().to_string(),
            config.base_url().to_string(),
        );
        if let Some(timeout) = config.timeout() {
            client = client.with_http_timeout(timeout)?;
        }
        Ok(Self {
            client,
            model: config.model().to_string(),
            system_prompt: config.system_prompt().map(str::to_string),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    #[instrument(skip(self, messages), fields(model = %self.model))]
    async fn get_llm_response_with_messages(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<String, LlmError> {
        let mut openai_messages = Vec::with_capacity(messages.len() + 1);
        if let Some(system) = &self.system_prompt {
            openai_messages.push(chat_message_to_openai(&ChatMessage::system(system.as_str()))?);
        }
        for msg in &messages {
            openai_messages.push(chat_message_to_openai(msg)?);
        }
        let reply = self
            .client
            .chat_completion(&self.model, openai_messages)
            .await?;
        info!(reply_len = reply.len(), "LLM reply received");
        Ok(reply)
    }
}
