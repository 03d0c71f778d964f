//! Outbound transport abstraction.
//!
//! [`Bot`] is transport-agnostic; `telegram::TelegramBotAdapter` implements it via teloxide
//! and tests substitute a recording mock.

use crate::core::error::{BotError, Result};
use crate::core::types::Chat;
use async_trait::async_trait;

/// How the transport should render a text message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    Plain,
    /// Telegram legacy Markdown (`*bold*`, `_italic_`).
    Markdown,
}

/// One button of an interactive message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Text shown on the button.
    pub label: String,
    /// Value delivered back in the callback when pressed.
    pub value: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Sending side of the messaging transport. Message ids are transport-specific strings.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message and returns its id.
    async fn send_text(&self, chat: &Chat, text: &str, format: TextFormat) -> Result<String>;
    /// Sends a message with buttons laid out in `rows` and returns its id.
    async fn send_choices(&self, chat: &Chat, text: &str, rows: &[Vec<Choice>]) -> Result<String>;
    /// Replaces the text of a message sent earlier; its buttons are removed.
    async fn edit_text(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()>;
    /// Acknowledges a button press, optionally with a short notice shown by the client.
    async fn answer_callback(&self, query_id: &str, notice: Option<&str>) -> Result<()>;
}

/// Parses a message id string into an i32. Used by edit_text.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| BotError::InvalidMessageId(s.to_string()))
}
