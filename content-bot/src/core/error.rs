//! Error types for the bot core.
//!
//! [`BotError`] covers the failures that may leave the dialogue controller: transport
//! sends and session store access. Generation failures never appear here; the controller
//! turns them into a user-facing apology.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    /// Sending, editing or acknowledging through the messaging transport failed.
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Session store error: {0}")]
    Store(String),

    #[error("Invalid message id: {0}")]
    InvalidMessageId(String),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
