//! Telegram transport: update adapters, Bot implementation, command menu, polling runner,
//! webhook server.

mod adapters;
mod bot_adapter;
mod commands;
mod runner;
mod webhook;

pub use adapters::{TelegramUpdateWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use commands::TelegramCommand;
pub use runner::{process_event, process_update, run_polling};
pub use webhook::{
    health_router, serve, webhook_router, WebhookState, HEALTH_TEXT, SECRET_HEADER, WEBHOOK_PATH,
};
