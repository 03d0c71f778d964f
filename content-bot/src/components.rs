//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use anyhow::{Context, Result};
use llm_client::{LlmClient, OpenAILlmClient};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::core::Bot;
use crate::dialogue::{DialogueController, InMemorySessionStore, SessionStore};
use crate::handlers::LoggingHandler;
use crate::telegram::TelegramBotAdapter;

/// Core dependencies for run_bot; produced by the component factory.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    /// Bot used by the dialogue (the Telegram adapter unless overridden).
    pub bot: Arc<dyn Bot>,
    pub llm_client: Arc<dyn LlmClient>,
    pub session_store: Arc<dyn SessionStore>,
    pub controller: Arc<DialogueController>,
}

/// teloxide Bot with the configured token and optional API URL.
pub fn build_teloxide_bot(config: &BotConfig) -> Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(config.bot_token());
    match config.telegram_api_url() {
        Some(url_str) => {
            let url = reqwest::Url::parse(url_str)
                .with_context(|| format!("Invalid TELEGRAM_API_URL: {}", url_str))?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Builds BotComponents. `bot_override` / `llm_override` replace the Telegram adapter and the
/// OpenAI-compatible client (tests).
#[instrument(skip(config, bot_override, llm_override))]
pub fn build_bot_components(
    config: &BotConfig,
    bot_override: Option<Arc<dyn Bot>>,
    llm_override: Option<Arc<dyn LlmClient>>,
) -> Result<BotComponents> {
    let teloxide_bot = build_teloxide_bot(config)?;

    let bot: Arc<dyn Bot> = match bot_override {
        Some(b) => b,
        None => Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())),
    };

    let llm_client: Arc<dyn LlmClient> = match llm_override {
        Some(c) => c,
        None => {
            let llm = config.llm();
            info!(
                base_url = %llm.llm_base_url,
                model = %llm.llm_model,
                "Using OpenAI-compatible generation endpoint"
            );
            Arc::new(OpenAILlmClient::from_config(llm)?)
        }
    };

    let session_store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let controller = Arc::new(DialogueController::new(
        bot.clone(),
        llm_client.clone(),
        session_store.clone(),
    ));

    Ok(BotComponents {
        teloxide_bot,
        bot,
        llm_client,
        session_store,
        controller,
    })
}

/// Builds the handler chain (logging → dialogue controller).
pub fn build_handler_chain(components: &BotComponents) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(components.controller.clone())
}
