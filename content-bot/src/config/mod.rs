//! Bot configuration: BaseConfig (Telegram + log + HTTP) + LLM config from `llm-client`.

mod base;
mod bot_config;


pub use base::{BaseConfig, DEFAULT_LOG_FILE, DEFAULT_PORT};
pub use bot_config::BotConfig;
