//! Telegram → core conversion: users and updates.

use teloxide::types::{CallbackQuery, Message, Update, UpdateKind};
use teloxide::utils::command::{BotCommands, ParseError};
use tracing::debug;

use super::commands::TelegramCommand;
use crate::core::{Chat, Command, Event, EventKind, ToCoreEvent, ToCoreUser, User};

/// Telegram user → core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
        }
    }
}

/// Telegram update → core [`Event`]. `bot_username` lets `/cmd@botname` be matched.
pub struct TelegramUpdateWrapper<'a> {
    pub update: &'a Update,
    pub bot_username: &'a str,
}

impl<'a> ToCoreEvent for TelegramUpdateWrapper<'a> {
    fn to_core(&self) -> Option<Event> {
        let id = self.update.id.0.to_string();
        match &self.update.kind {
            UpdateKind::Message(msg) => self.message_event(id, msg),
            UpdateKind::CallbackQuery(query) => callback_event(id, query),
            _ => None,
        }
    }
}

impl<'a> TelegramUpdateWrapper<'a> {
    fn message_event(&self, id: String, msg: &Message) -> Option<Event> {
        let from = msg.from.as_ref()?;
        let text = msg.text()?;
        let kind = if text.starts_with('/') {
            EventKind::Command(self.parse_command(text)?)
        } else {
            EventKind::Text(text.to_string())
        };
        Some(Event::new(
            id,
            TelegramUserWrapper(from).to_core(),
            core_chat(&msg.chat),
            kind,
        ))
    }

    /// Only the first token is parsed so `/start hello` still counts as `/start`.
    /// `None` when the command is addressed to another bot.
    fn parse_command(&self, text: &str) -> Option<Command> {
        let token = text.split_whitespace().next().unwrap_or(text);
        match TelegramCommand::parse(token, self.bot_username) {
            Ok(cmd) => Some(cmd.into()),
            Err(ParseError::WrongBotName(name)) => {
                debug!(bot_name = %name, "Command addressed to another bot");
                None
            }
            Err(_) => {
                let name = token.trim_start_matches('/');
                let name = name.split('@').next().unwrap_or(name);
                Some(Command::Unknown(name.to_string()))
            }
        }
    }
}

fn callback_event(id: String, query: &CallbackQuery) -> Option<Event> {
    let data = query.data.as_ref()?;
    let user = TelegramUserWrapper(&query.from).to_core();
    let (chat, message_id) = match query.message.as_ref() {
        Some(message) => (core_chat(message.chat()), Some(message.id().0.to_string())),
        // Without the message the private chat with the user is the only place to answer.
        None => (
            Chat {
                id: user.id,
                chat_type: "private".to_string(),
            },
            None,
        ),
    };
    Some(Event::new(
        id,
        user,
        chat,
        EventKind::Callback {
            query_id: query.id.0.clone(),
            message_id,
            data: data.clone(),
        },
    ))
}

fn core_chat(chat: &teloxide::types::Chat) -> Chat {
    let chat_type = if chat.is_private() {
        "private"
    } else if chat.is_group() {
        "group"
    } else if chat.is_supergroup() {
        "supergroup"
    } else {
        "channel"
    };
    Chat {
        id: chat.id.0,
        chat_type: chat_type.to_string(),
    }
}
