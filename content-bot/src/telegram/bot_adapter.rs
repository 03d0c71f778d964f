//! Wraps teloxide::Bot and implements [`crate::core::Bot`]. Production code sends messages via Telegram; tests can substitute another Bot impl.

use crate::core::{parse_message_id, Bot as CoreBot, BotError, Chat, Choice, Result, TextFormat};
use async_trait::async_trait;
use teloxide::payloads::{AnswerCallbackQuerySetters, SendMessageSetters};
use teloxide::prelude::*;
use teloxide::types::{
    CallbackQueryId, ChatId, InlineKeyboardButton, InlineKeyboardMarkup, MessageId, ParseMode,
};

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

fn transport_error(e: teloxide::RequestError) -> BotError {
    BotError::Transport(e.to_string())
}

fn keyboard(rows: &[Vec<Choice>]) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(rows.iter().map(|row| {
        row.iter()
            .map(|c| InlineKeyboardButton::callback(c.label.clone(), c.value.clone()))
            .collect::<Vec<_>>()
    }))
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_text(&self, chat: &Chat, text: &str, format: TextFormat) -> Result<String> {
        let request = self.bot.send_message(ChatId(chat.id), text.to_string());
        let sent = match format {
            TextFormat::Plain => request.await,
            TextFormat::Markdown => request.parse_mode(ParseMode::Markdown).await,
        }
        .map_err(transport_error)?;
        Ok(sent.id.0.to_string())
    }

    async fn send_choices(&self, chat: &Chat, text: &str, rows: &[Vec<Choice>]) -> Result<String> {
        let sent = self
            .bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(keyboard(rows))
            .await
            .map_err(transport_error)?;
        Ok(sent.id.0.to_string())
    }

    async fn edit_text(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()> {
        let id = parse_message_id(message_id)?;
        self.bot
            .edit_message_text(ChatId(chat.id), MessageId(id), text.to_string())
            .await
            .map_err(transport_error)?;
        Ok(())
    }

    async fn answer_callback(&self, query_id: &str, notice: Option<&str>) -> Result<()> {
        let request = self
            .bot
            .answer_callback_query(CallbackQueryId(query_id.to_string()));
        match notice {
            Some(text) => request.text(text.to_string()).await,
            None => request.await,
        }
        .map_err(transport_error)?;
        Ok(())
    }
}
