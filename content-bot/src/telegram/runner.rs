//! Polling runner: converts teloxide updates to core events and passes them to the HandlerChain.

use crate::chain::HandlerChain;
use crate::core::{Event, ToCoreEvent};
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{debug, error, info, instrument};

use super::adapters::TelegramUpdateWrapper;

/// Runs one event through the chain; failures are logged, never returned.
pub async fn process_event(chain: &HandlerChain, event: Event) {
    info!(
        user_id = event.user.id,
        chat_id = event.chat.id,
        event_id = %event.id,
        event_kind = event.kind_name(),
        "step: processing event (handler chain started)"
    );
    if let Err(e) = chain.handle(&event).await {
        error!(error = %e, user_id = event.user.id, chat_id = event.chat.id, "Handler chain failed");
    }
}

/// Converts an update and, when it is relevant, runs it through the chain.
pub async fn process_update(chain: &HandlerChain, update: &Update, bot_username: &str) {
    let wrapper = TelegramUpdateWrapper {
        update,
        bot_username,
    };
    match wrapper.to_core() {
        Some(event) => process_event(chain, event).await,
        None => debug!(update_id = update.id.0, "Ignoring update"),
    }
}

/// Long polling with teloxide's Dispatcher. Updates of one chat are handled in order, different
/// chats concurrently. Returns on Ctrl+C.
#[instrument(skip(bot, handler_chain))]
pub async fn run_polling(bot: teloxide::Bot, handler_chain: HandlerChain, bot_username: String) {
    let bot_username: Arc<str> = Arc::from(bot_username);
    let handler = dptree::entry().endpoint(
        |update: Update, chain: HandlerChain, bot_username: Arc<str>| async move {
            process_update(&chain, &update, &bot_username).await;
            respond(())
        },
    );

    info!("Starting long polling");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![handler_chain, bot_username])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
