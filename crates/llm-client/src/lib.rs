//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait, the classified [`LlmError`] and an OpenAI-compatible
//! implementation. Transport-agnostic; used by the dialogue controller in `content-bot`.

use async_trait::async_trait;
use openai_client::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs,
};
use prompt::{ChatMessage, MessageRole};

mod config;
mod error;
mod openai_llm;

pub use config::{EnvLlmConfig, LlmConfig};
pub use error::LlmError;
pub use openai_llm::OpenAILlmClient;

/// LLM client interface: one request, one complete reply. No streaming, no retry.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the model reply text for the given messages. Implementations may prepend a system prompt.
    async fn get_llm_response_with_messages(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<String, LlmError>;
}

/// Converts a single [`ChatMessage`] into OpenAI API message format.
fn chat_message_to_openai(msg: &ChatMessage) -> anyhow::Result<ChatCompletionRequestMessage> {
    let content = msg.content.clone();
    let openai_msg: ChatCompletionRequestMessage = match msg.role {
        MessageRole::System => ChatCompletionRequestSystemMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::User => ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()?
            .into(),
    };
    Ok(openai_msg)
}
