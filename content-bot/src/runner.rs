//! Process entry: validate config, init logging, build components, register with Telegram,
//! then serve in webhook or polling mode.

use anyhow::{Context, Result};
use std::sync::Arc;
use teloxide::payloads::SetWebhookSetters;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{error, info, instrument, warn};

use crate::chain::HandlerChain;
use crate::components::{build_bot_components, build_handler_chain, BotComponents};
use crate::config::BotConfig;
use crate::core::init_tracing;
use crate::telegram::{health_router, run_polling, serve, webhook_router, TelegramCommand, WebhookState};

/// Main entry: validate config, init logging, build components and handler chain, then run.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        webhook_mode = config.webhook_mode(),
        listen_addr = %config.base().listen_addr,
        model = %config.llm().llm_model,
        "Initializing bot"
    );

    let components = build_bot_components(&config, None, None)?;
    let handler_chain = build_handler_chain(&components);
    let bot_username = prepare_telegram(&components).await?;

    info!(username = %bot_username, "Bot started successfully");

    if config.webhook_mode() {
        run_webhook(&config, &components, handler_chain, bot_username).await
    } else {
        run_polling_with_health(&config, &components, handler_chain, bot_username).await
    }
}

/// Fetches the bot's username and registers the command menu.
async fn prepare_telegram(components: &BotComponents) -> Result<String> {
    let me = components
        .teloxide_bot
        .get_me()
        .await
        .context("Failed to reach Telegram (getMe); check the bot token")?;
    let username = me.user.username.clone().unwrap_or_default();

    if let Err(e) = components
        .teloxide_bot
        .set_my_commands(TelegramCommand::bot_commands())
        .await
    {
        warn!(error = %e, "Failed to register command menu");
    }
    Ok(username)
}

async fn run_webhook(
    config: &BotConfig,
    components: &BotComponents,
    handler_chain: HandlerChain,
    bot_username: String,
) -> Result<()> {
    let endpoint = config
        .base()
        .webhook_endpoint()
        .context("WEBHOOK_URL not set")?;
    let url = reqwest::Url::parse(&endpoint)
        .with_context(|| format!("Invalid webhook endpoint: {}", endpoint))?;
    components
        .teloxide_bot
        .set_webhook(url)
        .secret_token(config.base().webhook_secret.clone())
        .await
        .context("Failed to register webhook with Telegram")?;
    info!(endpoint = %endpoint, "Webhook registered");

    let state = WebhookState {
        chain: handler_chain,
        secret: Arc::from(config.base().webhook_secret.as_str()),
        bot_username: Arc::from(bot_username),
    };
    serve(config.base().listen_socket_addr()?, webhook_router(state)).await
}

/// Polling plus the liveness server; returns when polling stops (Ctrl+C).
async fn run_polling_with_health(
    config: &BotConfig,
    components: &BotComponents,
    handler_chain: HandlerChain,
    bot_username: String,
) -> Result<()> {
    let addr = config.base().listen_socket_addr()?;
    let health = tokio::spawn(async move {
        if let Err(e) = serve(addr, health_router()).await {
            error!(error = %e, "Health server stopped");
        }
    });

    run_polling(components.teloxide_bot.clone(), handler_chain, bot_username).await;
    health.abort();
    info!("Polling stopped");
    Ok(())
}
