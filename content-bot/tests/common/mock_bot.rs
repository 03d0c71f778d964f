//! Mock implementation of [`content_bot::Bot`] for integration tests.
//!
//! Records every outbound call in order so tests can assert on what the user saw without
//! hitting Telegram. Each record is also sent to an unbounded channel for tests that wait.

use async_trait::async_trait;
use content_bot::{Bot, BotError, Chat, Choice, Result, TextFormat};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq)]
pub enum BotCall {
    SendText {
        chat_id: i64,
        text: String,
        format: TextFormat,
    },
    SendChoices {
        chat_id: i64,
        text: String,
        rows: Vec<Vec<Choice>>,
    },
    EditText {
        chat_id: i64,
        message_id: String,
        text: String,
    },
    AnswerCallback {
        query_id: String,
        notice: Option<String>,
    },
}

/// Mock Bot: returns increasing message ids and records calls.
/// `failing_format` makes `send_text` with that format fail, simulating a transport rejection.
pub struct MockBot {
    calls: Mutex<Vec<BotCall>>,
    next_id: AtomicU64,
    failing_format: Mutex<Option<TextFormat>>,
    call_tx: Option<mpsc::UnboundedSender<BotCall>>,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
            failing_format: Mutex::new(None),
            call_tx: None,
        })
    }

    /// Creates a MockBot and returns the receiver of call records.
    pub fn with_receiver() -> (Arc<Self>, mpsc::UnboundedReceiver<BotCall>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let bot = Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
            failing_format: Mutex::new(None),
            call_tx: Some(tx),
        });
        (bot, rx)
    }

    pub fn fail_format(&self, format: TextFormat) {
        *self.failing_format.lock().unwrap() = Some(format);
    }

    pub fn calls(&self) -> Vec<BotCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Texts of every `send_text` call, in order.
    pub fn sent_texts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                BotCall::SendText { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn choice_messages(&self) -> Vec<Vec<Vec<Choice>>> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                BotCall::SendChoices { rows, .. } => Some(rows),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: BotCall) {
        if let Some(tx) = &self.call_tx {
            let _ = tx.send(call.clone());
        }
        self.calls.lock().unwrap().push(call);
    }

    fn next_message_id(&self) -> String {
        self.next_id.fetch_add(1, Ordering::SeqCst).to_string()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_text(&self, chat: &Chat, text: &str, format: TextFormat) -> Result<String> {
        if *self.failing_format.lock().unwrap() == Some(format) {
            return Err(BotError::Transport("can't parse entities".to_string()));
        }
        self.record(BotCall::SendText {
            chat_id: chat.id,
            text: text.to_string(),
            format,
        });
        Ok(self.next_message_id())
    }

    async fn send_choices(&self, chat: &Chat, text: &str, rows: &[Vec<Choice>]) -> Result<String> {
        self.record(BotCall::SendChoices {
            chat_id: chat.id,
            text: text.to_string(),
            rows: rows.to_vec(),
        });
        Ok(self.next_message_id())
    }

    async fn edit_text(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()> {
        self.record(BotCall::EditText {
            chat_id: chat.id,
            message_id: message_id.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn answer_callback(&self, query_id: &str, notice: Option<&str>) -> Result<()> {
        self.record(BotCall::AnswerCallback {
            query_id: query_id.to_string(),
            notice: notice.map(str::to_string),
        });
        Ok(())
    }
}
