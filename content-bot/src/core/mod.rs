//! Core types and traits: Handler, Bot, Event, HandlerResponse, error, logger.
//! Transport-agnostic.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot, Choice, TextFormat};
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Command, Event, EventKind, Handler, HandlerResponse, ToCoreEvent, ToCoreUser, User,
};
