//! # Prompt
//!
//! Builds the instruction sent to the text-generation model and the chat message
//! types used to carry it.
//!
//! ## Format
//!
//! The content-ideas prompt asks for exactly three ideas for one platform and one
//! topic. Each idea carries a hook (Ідея), a short post body (Текст) and 5–7
//! hashtags (Хештеги), and is introduced by one of [`IDEA_MARKERS`].
//!
//! ## Usage
//!
//! The dialogue controller in `content-bot` calls [`content_ideas_prompt`] once per
//! generation and wraps the result with [`ChatMessage::user`].
//!
//! ## External interactions
//!
//! - **AI models**: Output is sent to an OpenAI-compatible chat completion API.

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
}

/// A single chat message, one-to-one with one element of OpenAI `messages` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Number of ideas requested per generation.
pub const IDEA_COUNT: usize = 3;

/// Markers the model is asked to put in front of each idea, in order.
pub const IDEA_MARKERS: [&str; IDEA_COUNT] = ["1️⃣", "2️⃣", "3️⃣"];

/// Builds the content-ideas instruction for `platform` and `topic`.
///
/// Only these two values vary; the rest of the wording is fixed. `topic` is inserted
/// as-is between single quotes.
pub fn content_ideas_prompt(platform: &str, topic: &str) -> String {
    format!(
        "Створи {count} унікальні ідеї для контенту в соціальній мережі {platform} на тему '{topic}'. \
         Для кожної ідеї надай: привабливий заголовок (Ідея), короткий опис/текст для посту (Текст) \
         та добірку з 5-7 релевантних хештегів (Хештеги). \
         Відповідь надай чітко структурованою, використовуючи маркери {markers}.",
        count = IDEA_COUNT,
        markers = quoted_markers(),
    )
}

fn quoted_markers() -> String {
    IDEA_MARKERS
        .iter()
        .map(|m| format!("'{}'", m))
        .collect::<Vec<_>>()
        .join(", ")
}
