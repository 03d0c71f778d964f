//! # Content ideas bot
//!
//! Telegram bot that walks a user through platform choice and topic, then asks an
//! OpenAI-compatible model for three content ideas. Core (Handler, Bot, Event), chain
//! (HandlerChain), dialogue (state machine + session store) and telegram (adapters, polling,
//! webhook) are wired by components and runner.

pub mod chain;
pub mod cli;
pub mod components;
pub mod config;
pub mod core;
pub mod dialogue;
pub mod handlers;
pub mod runner;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};

pub use core::{
    init_tracing, parse_message_id, Bot, BotError, Chat, Choice, Command, Event, EventKind,
    Handler, HandlerResponse, Result, TextFormat, ToCoreEvent, ToCoreUser, User,
};

pub use chain::HandlerChain;

pub use dialogue::{
    DialogueController, DialogueState, InMemorySessionStore, Platform, SessionStore, TopicOutcome,
};

pub use telegram::{TelegramBotAdapter, TelegramUpdateWrapper, TelegramUserWrapper, WebhookState};

pub use config::BotConfig;
pub use runner::run_bot;

pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use handlers::LoggingHandler;
