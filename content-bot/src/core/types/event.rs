//! Inbound event types: what a user did, independent of the transport.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// Bot commands understood by the dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// `/start`: enter the dialogue, discarding any previous session.
    Start,
    /// `/new`: same as start, announced as a restart.
    New,
    /// `/cancel`: leave the dialogue.
    Cancel,
    /// `/help`: list commands.
    Help,
    /// Any other `/command`; holds the command word without the slash.
    Unknown(String),
}

/// What the user did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Command(Command),
    /// A button press on an interactive message.
    Callback {
        /// Transport id used to acknowledge the press.
        query_id: String,
        /// Id of the message that carried the buttons, when the transport still has it.
        message_id: Option<String>,
        /// Value attached to the pressed button.
        data: String,
    },
    /// Plain text that is not a command.
    Text(String),
}

/// One inbound event with its sender and chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub kind: EventKind,
    pub received_at: DateTime<Utc>,
}

impl Event {
    pub fn new(id: impl Into<String>, user: User, chat: Chat, kind: EventKind) -> Self {
        Self {
            id: id.into(),
            user,
            chat,
            kind,
            received_at: Utc::now(),
        }
    }

    /// Short name of the event kind for logs.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            EventKind::Command(_) => "command",
            EventKind::Callback { .. } => "callback",
            EventKind::Text(_) => "text",
        }
    }
}
